//! Company read service.

use std::sync::Arc;

use crate::domain::entities::Company;
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

/// Default page size for recent company listings.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Service for reading curated companies.
pub struct CompanyService {
    repository: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    /// Returns the company of the day (most recently created).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no company exists yet.
    pub async fn get_latest(&self) -> Result<Company, AppError> {
        self.repository.get_latest().await
    }

    /// Returns up to `limit` recent companies, newest first.
    pub async fn list_recent(&self, limit: Option<i64>) -> Result<Vec<Company>, AppError> {
        self.repository
            .list_recent(limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .await
    }

    /// Probes the store; used by the health endpoint.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCompanyRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_latest_propagates_not_found() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_get_latest()
            .times(1)
            .returning(|| Err(AppError::not_found("No companies found", json!({}))));

        let service = CompanyService::new(Arc::new(repo));

        let err = service.get_latest().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_recent_uses_default_limit() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_list_recent()
            .withf(|limit| *limit == DEFAULT_LIST_LIMIT)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CompanyService::new(Arc::new(repo));

        assert!(service.list_recent(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_store_pings_without_reading_rows() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_ping().times(1).returning(|| Ok(()));
        repo.expect_list_recent().times(0);
        repo.expect_get_latest().times(0);

        let service = CompanyService::new(Arc::new(repo));

        assert!(service.check_store().await.is_ok());
    }

    #[tokio::test]
    async fn test_check_store_propagates_store_error() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_ping().times(1).returning(|| {
            Err(AppError::persistence("Database error", json!({})))
        });

        let service = CompanyService::new(Arc::new(repo));

        let err = service.check_store().await.unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
    }
}
