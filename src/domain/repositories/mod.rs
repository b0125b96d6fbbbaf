//! Repository trait definitions for the domain layer.
//!
//! Traits define the data contract; implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated via `mockall`
//! for unit tests.

pub mod company_repository;

pub use company_repository::CompanyRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
