//! HTTP API Client
//!
//! Functions for communicating with the EduRev REST API.

use gloo_net::http::Request;

use edurev::portal::DashboardSnapshot;

/// Local storage key for the API base URL
const API_URL_KEY: &str = "edurev_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// API base URL saved in local storage, if any
pub fn saved_api_base() -> Option<String> {
    let url = local_storage()?.get_item(API_URL_KEY).ok()??;
    normalize_base(&url)
}

/// Save the API base URL; an empty value clears it
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = match normalize_base(url) {
            Some(url) => storage.set_item(API_URL_KEY, &url),
            None => storage.remove_item(API_URL_KEY),
        };
    }
}

/// Trim whitespace and trailing slashes; blank means unset
fn normalize_base(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_string())
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

// ============ API Functions ============

/// Fetch stats and achievements
pub async fn fetch_dashboard(api_base: &str) -> Result<DashboardSnapshot, String> {
    let response = Request::get(&format!("{}/dashboard", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(" http://localhost:8090/api/v1/ "),
            Some("http://localhost:8090/api/v1".to_string())
        );
        assert_eq!(normalize_base("   "), None);
        assert_eq!(normalize_base("/"), None);
    }
}
