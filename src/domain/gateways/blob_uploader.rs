//! Blob uploader contract.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobUploader: Send + Sync {
    /// Stores `bytes` under `key` and returns a publicly resolvable URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the object store rejects the write.
    async fn upload(&self, bytes: Vec<u8>, content_type: &str, key: &str)
    -> Result<String, AppError>;
}
