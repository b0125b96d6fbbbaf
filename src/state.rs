//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CompanyService, GenerationService, MediaPublisher};

#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<CompanyService>,
    pub generation_service: Arc<GenerationService>,
    pub media_publisher: Arc<MediaPublisher>,
    /// Bearer key for protected routes; `None` rejects every protected request.
    pub api_key: Option<Arc<str>>,
}
