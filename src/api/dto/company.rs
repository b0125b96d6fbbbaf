//! DTOs for company endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Company;

/// Query parameters for `GET /api/companies`.
#[derive(Debug, Deserialize, Validate)]
pub struct ListCompaniesQuery {
    /// Number of companies to return (1..=50, default 10).
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: Option<i64>,
}

/// Company as returned by the API. Absent social links are omitted.
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub appeal: String,
    pub website: String,
    pub cover_image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            slug: company.slug,
            description: company.description,
            appeal: company.appeal,
            website: company.website,
            cover_image: company.cover_image,
            twitter: company.twitter,
            linkedin: company.linkedin,
            facebook: company.facebook,
            instagram: company.instagram,
            published_at: company.published_at,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}
