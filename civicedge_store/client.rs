use std::time::Duration;

use civicedge_types::errors::{ApplicationError, StoreError};

/// One shared client for the report store, auth service, and probe; the
/// request timeout is the only cancellation applied to deliveries.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ApplicationError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ApplicationError::Store(StoreError::Http(e)))
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_trailing_slash() {
        assert_eq!(
            join_url("https://api.example.com/", "api/reports"),
            "https://api.example.com/api/reports"
        );
        assert_eq!(
            join_url("https://api.example.com", "api/reports"),
            "https://api.example.com/api/reports"
        );
    }
}
