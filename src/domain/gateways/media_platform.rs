//! Media platform contract: container creation, status polling, publishing.

use crate::domain::entities::ContainerStatus;
use crate::error::AppError;
use async_trait::async_trait;

/// Remote media API that processes images asynchronously.
///
/// A container is created from an image URL and caption, must reach
/// `FINISHED`, and is then published. All three calls are independent
/// requests; sequencing is owned by
/// [`crate::application::services::MediaPublisher`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaPlatform: Send + Sync {
    /// Creates a media container and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport errors, API error payloads,
    /// or a response without an identifier.
    async fn create_container(&self, image_url: &str, caption: &str) -> Result<String, AppError>;

    /// Fetches the current processing status of a container.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport errors or API error payloads.
    async fn container_status(&self, container_id: &str) -> Result<ContainerStatus, AppError>;

    /// Publishes a finished container and returns the media identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport errors, API error payloads,
    /// or a response without a media identifier.
    async fn publish_container(&self, container_id: &str) -> Result<String, AppError>;
}
