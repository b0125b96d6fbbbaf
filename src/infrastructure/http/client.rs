//! Shared outbound HTTP client.

use reqwest::{Client, Response};
use serde_json::json;
use std::time::Duration;

use crate::config::HttpClientConfig;
use crate::error::AppError;

/// Upstream bodies are cut to this many characters before they are kept in
/// error details.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Builds the single long-lived client shared by every outbound adapter.
///
/// Per-call timeouts are set by each adapter on its requests; this client only
/// bounds connection setup and the idle pool.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] if the TLS backend cannot be initialised.
pub fn build_client(config: &HttpClientConfig) -> Result<Client, AppError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            AppError::configuration(
                "Failed to build HTTP client",
                json!({ "reason": e.without_url().to_string() }),
            )
        })
}

/// Converts a non-success response into [`AppError::Upstream`] carrying the
/// status and a truncated body.
pub(crate) async fn upstream_status_error(service: &'static str, response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();

    AppError::upstream(
        format!("{service} returned status {status}"),
        json!({ "service": service, "status": status, "body": body }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_defaults() {
        assert!(build_client(&HttpClientConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_upstream_status_error_truncates_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/boom")
            .with_status(503)
            .with_body("x".repeat(2_000))
            .create_async()
            .await;

        let response = reqwest::get(format!("{}/boom", server.url())).await.unwrap();
        let err = upstream_status_error("Example API", response).await;

        let AppError::Upstream { message, details } = err else {
            panic!("expected upstream error");
        };
        assert_eq!(message, "Example API returned status 503");
        assert_eq!(details["status"], 503);
        assert_eq!(
            details["body"].as_str().unwrap().chars().count(),
            MAX_ERROR_BODY_CHARS
        );
    }
}
