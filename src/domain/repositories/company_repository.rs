//! Repository trait for company records.

use crate::domain::entities::{Company, NewCompany};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence interface for curated companies.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCompanyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Inserts a company from its sparse field set and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store is unavailable or the
    /// insert returns no row.
    async fn insert(&self, new_company: NewCompany) -> Result<Company, AppError>;

    /// Returns the most recently created company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the table is empty and
    /// [`AppError::Persistence`] on store errors.
    async fn get_latest(&self) -> Result<Company, AppError>;

    /// Lists the most recent companies, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on store errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Company>, AppError>;

    /// Round-trips a trivial query to confirm the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
