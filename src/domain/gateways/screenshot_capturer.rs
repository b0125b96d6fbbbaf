//! Screenshot capturer contract.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScreenshotCapturer: Send + Sync {
    /// Renders `website` above the fold and returns the PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] carrying the upstream status and body on
    /// failure.
    async fn capture(&self, website: &str) -> Result<Vec<u8>, AppError>;
}
