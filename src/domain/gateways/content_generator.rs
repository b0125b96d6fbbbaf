//! Content generator contract.

use crate::domain::entities::GeneratedCompany;
use crate::error::AppError;
use async_trait::async_trait;

/// Produces one company description from a prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Sends `prompt` as a single user message and parses the first choice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the API is unreachable, answers with a
    /// non-success status, returns no choices, or the content does not parse
    /// as a [`GeneratedCompany`]. Returns [`AppError::Configuration`] when no
    /// API key is configured.
    async fn generate(&self, prompt: &str) -> Result<GeneratedCompany, AppError>;
}
