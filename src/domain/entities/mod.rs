//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs use separate structs
//! (`NewCompany`) from persisted records (`Company`).
//!
//! - [`Company`] - A curated startup record
//! - [`GeneratedCompany`] - The payload produced by the content generator
//! - [`MediaPublishJob`] / [`PublishOutcome`] - Social publishing state and result

pub mod company;
pub mod media;

pub use company::{Company, GeneratedCompany, NewCompany};
pub use media::{ContainerStatus, MediaPublishJob, PublishOutcome};
