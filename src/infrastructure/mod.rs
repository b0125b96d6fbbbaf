//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Completion, screenshot and media platform clients
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`storage`] - Object store uploader

pub mod http;
pub mod persistence;
pub mod storage;
