//! PostgreSQL implementation of company repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Company, NewCompany};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

const COMPANY_COLUMNS: &str = "id, name, slug, description, appeal, website, cover_image, \
     twitter, linkedin, facebook, instagram, published_at, created_at, updated_at";

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    slug: String,
    description: String,
    appeal: String,
    website: String,
    cover_image: String,
    twitter: Option<String>,
    linkedin: Option<String>,
    facebook: Option<String>,
    instagram: Option<String>,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            appeal: row.appeal,
            website: row.website,
            cover_image: row.cover_image,
            twitter: row.twitter,
            linkedin: row.linkedin,
            facebook: row.facebook,
            instagram: row.instagram,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for curated companies.
pub struct PgCompanyRepository {
    pool: Arc<PgPool>,
}

impl PgCompanyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn insert(&self, new_company: NewCompany) -> Result<Company, AppError> {
        let fields = new_company.fields();

        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO companies (");
        let mut columns = query.separated(", ");
        for (column, _) in &fields {
            columns.push(*column);
        }
        query.push(") VALUES (");
        let mut values = query.separated(", ");
        for (_, value) in fields {
            values.push_bind(value);
        }
        query.push(") RETURNING ");
        query.push(COMPANY_COLUMNS);

        let row = query
            .build_query_as::<CompanyRow>()
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Company::from).ok_or_else(|| {
            AppError::persistence(
                "Insert returned no company",
                json!({ "slug": new_company.slug }),
            )
        })
    }

    async fn get_latest(&self) -> Result<Company, AppError> {
        let row = sqlx::query_as::<_, CompanyRow>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at DESC LIMIT 1"
        ))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Company::from)
            .ok_or_else(|| AppError::not_found("No companies found", json!({})))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Company>, AppError> {
        let rows = sqlx::query_as::<_, CompanyRow>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
