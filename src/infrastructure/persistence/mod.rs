//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgCompanyRepository`] - Company storage and retrieval

pub mod pg_company_repository;

pub use pg_company_repository::PgCompanyRepository;
