//! Dashboard Data Source
//!
//! The dashboard reads through [`DataSource`]: bundled fixtures by default,
//! or the EduRev API once an API URL has been saved in local storage.

use edurev::portal::{DashboardSnapshot, FixtureData, PortalData};

use crate::api;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Built-in sample data
    Fixtures,
    /// EduRev API at the given base URL
    Api(String),
}

impl DataSource {
    /// Pick the source from saved settings
    pub fn detect() -> Self {
        match api::saved_api_base() {
            Some(base) => DataSource::Api(base),
            None => DataSource::Fixtures,
        }
    }

    pub fn label(&self) -> String {
        match self {
            DataSource::Fixtures => "Sample data".to_string(),
            DataSource::Api(base) => format!("Live ({})", base),
        }
    }

    /// Load the dashboard snapshot.
    ///
    /// API failures are returned alongside the fixture snapshot so the view
    /// still renders.
    pub async fn load_dashboard(&self) -> (DashboardSnapshot, Option<String>) {
        match self {
            DataSource::Fixtures => (FixtureData.snapshot(), None),
            DataSource::Api(base) => match api::fetch_dashboard(base).await {
                Ok(snapshot) => (snapshot, None),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard: {}", e).into(),
                    );
                    (FixtureData.snapshot(), Some(e))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_label() {
        assert_eq!(DataSource::Fixtures.label(), "Sample data");
        assert_eq!(
            DataSource::Api("http://localhost:8090/api/v1".to_string()).label(),
            "Live (http://localhost:8090/api/v1)"
        );
    }
}
