//! ScreenshotOne adapter for [`ScreenshotCapturer`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::time::Duration;

use super::client::upstream_status_error;
use crate::config::ScreenshotConfig;
use crate::domain::gateways::ScreenshotCapturer;
use crate::error::AppError;

const SERVICE: &str = "Screenshot API";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed rendering parameters: above the fold, 1280x720 at 2x, PNG, no
/// cookie banners.
const RENDER_PARAMS: [(&str, &str); 6] = [
    ("full_page", "false"),
    ("viewport_width", "1280"),
    ("viewport_height", "720"),
    ("device_scale_factor", "2"),
    ("format", "png"),
    ("block_cookie_banners", "true"),
];

pub struct ScreenshotOneClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl ScreenshotOneClient {
    pub fn new(client: Client, config: &ScreenshotConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/take", config.base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ScreenshotCapturer for ScreenshotOneClient {
    async fn capture(&self, website: &str) -> Result<Vec<u8>, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::configuration("SCREENSHOTONE_API_KEY is not set", json!({}))
        })?;

        let target = with_scheme(website);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("access_key", api_key), ("url", target.as_str())])
            .query(&RENDER_PARAMS)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        if response.status() != StatusCode::OK {
            return Err(upstream_status_error(SERVICE, response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        Ok(bytes.to_vec())
    }
}

/// Rendering needs an absolute URL; bare hosts get `https://`.
fn with_scheme(website: &str) -> String {
    let website = website.trim();
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}
