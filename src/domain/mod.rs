//! Domain layer containing business entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`gateways`] - Remote service trait definitions (LLM, renderer, blob store, media API)
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Pipelines live in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
pub mod repositories;
