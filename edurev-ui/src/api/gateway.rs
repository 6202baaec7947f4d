//! Submission Gateway
//!
//! There is no submission endpoint yet, so submissions go through a gateway
//! that waits out a fixed delay standing in for the network call.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use edurev::portal::{GatewayError, SubmissionGateway, ValidSubmission, SIMULATED_SUBMIT_DELAY_MS};

/// Accepts every submission after a delay
#[derive(Clone, Copy, Debug)]
pub struct SimulatedGateway {
    delay_ms: u32,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_SUBMIT_DELAY_MS,
        }
    }
}

#[async_trait(?Send)]
impl SubmissionGateway for SimulatedGateway {
    async fn submit(&self, submission: &ValidSubmission) -> Result<(), GatewayError> {
        web_sys::console::log_1(
            &format!(
                "Submitting '{}' achievement with {}",
                submission.achievement_type, submission.file.name
            )
            .into(),
        );
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedGateway::default().delay_ms, SIMULATED_SUBMIT_DELAY_MS);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use edurev::portal::AttachedFile;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn test_waits_out_delay_then_succeeds() {
        let gateway = SimulatedGateway { delay_ms: 200 };
        let submission = ValidSubmission {
            student_name: "Asha Kamau".to_string(),
            student_id: None,
            achievement_type: "sports".to_string(),
            description: "Regional finals".to_string(),
            file: AttachedFile::new("medal.png", "image/png", 4096),
        };

        let started = now_ms();
        let result = gateway.submit(&submission).await;

        assert!(result.is_ok());
        assert!(now_ms() - started >= 190.0);
    }
}
