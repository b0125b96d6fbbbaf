//! Application layer services implementing the pipelines.
//!
//! Services consume the domain traits (repositories and gateways) and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::company_service::CompanyService`] - Reading curated companies
//! - [`services::generation_service::GenerationService`] - Generate, screenshot, store
//! - [`services::media_publisher::MediaPublisher`] - Container create, poll, publish

pub mod prompt;
pub mod services;
