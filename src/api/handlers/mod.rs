//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod companies;
pub mod generate;
pub mod health;
pub mod publish;

pub use companies::{latest_company_handler, list_companies_handler};
pub use generate::generate_company_handler;
pub use health::health_handler;
pub use publish::publish_latest_handler;
