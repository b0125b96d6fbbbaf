//! Instagram Graph API adapter for [`MediaPlatform`].
//!
//! All three calls answer with JSON that may carry an
//! `{"error": {"message", "code"}}` envelope instead of the payload, with or
//! without a non-success status.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

use crate::config::InstagramConfig;
use crate::domain::entities::ContainerStatus;
use crate::domain::gateways::MediaPlatform;
use crate::error::AppError;

const SERVICE: &str = "Media API";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GraphError {
    message: String,
    #[serde(default)]
    code: i64,
}

#[derive(Debug, Deserialize)]
struct IdResponse {
    #[serde(default)]
    id: String,
    error: Option<GraphError>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    status_code: String,
    error: Option<GraphError>,
}

pub struct InstagramClient {
    client: Client,
    user_id: String,
    access_token: String,
    /// `{base_url}/{api_version}`
    api_root: String,
}

impl InstagramClient {
    pub fn new(client: Client, config: &InstagramConfig) -> Self {
        Self {
            client,
            user_id: config.user_id.clone(),
            access_token: config.access_token.clone(),
            api_root: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                config.api_version
            ),
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::from_reqwest(SERVICE, e))?;

        serde_json::from_str(&body).map_err(|e| {
            AppError::upstream(
                "Failed to parse media API response",
                json!({ "status": status, "reason": e.to_string() }),
            )
        })
    }
}

fn check_error(error: Option<GraphError>) -> Result<(), AppError> {
    match error {
        Some(e) => Err(AppError::upstream(
            format!("API error: {} (code: {})", e.message, e.code),
            json!({ "code": e.code }),
        )),
        None => Ok(()),
    }
}

#[async_trait]
impl MediaPlatform for InstagramClient {
    async fn create_container(&self, image_url: &str, caption: &str) -> Result<String, AppError> {
        let request = self
            .client
            .post(format!("{}/{}/media", self.api_root, self.user_id))
            .form(&[
                ("image_url", image_url),
                ("caption", caption),
                ("access_token", self.access_token.as_str()),
            ]);

        let response: IdResponse = self.send(request).await?;
        check_error(response.error)?;

        if response.id.is_empty() {
            return Err(AppError::upstream("No container ID returned", json!({})));
        }
        Ok(response.id)
    }

    async fn container_status(&self, container_id: &str) -> Result<ContainerStatus, AppError> {
        let request = self
            .client
            .get(format!("{}/{}", self.api_root, container_id))
            .query(&[
                ("fields", "status_code"),
                ("access_token", self.access_token.as_str()),
            ]);

        let response: StatusResponse = self.send(request).await?;
        check_error(response.error)?;

        Ok(ContainerStatus::parse(&response.status_code))
    }

    async fn publish_container(&self, container_id: &str) -> Result<String, AppError> {
        let request = self
            .client
            .post(format!("{}/{}/media_publish", self.api_root, self.user_id))
            .form(&[
                ("creation_id", container_id),
                ("access_token", self.access_token.as_str()),
            ]);

        let response: IdResponse = self.send(request).await?;
        check_error(response.error)?;

        if response.id.is_empty() {
            return Err(AppError::upstream("No media ID returned", json!({})));
        }
        Ok(response.id)
    }
}
