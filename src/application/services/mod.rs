//! Business logic services for the application layer.

pub mod company_service;
pub mod generation_service;
pub mod media_publisher;

pub use company_service::CompanyService;
pub use generation_service::{CoverImageAssets, GenerationService};
pub use media_publisher::{MediaPublisher, PollPolicy};
