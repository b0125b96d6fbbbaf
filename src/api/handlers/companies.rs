//! Handlers for reading curated companies.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::company::{CompanyResponse, ListCompaniesQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the company of the day.
///
/// # Endpoint
///
/// `GET /api/companies/latest`
///
/// # Errors
///
/// - 404 `not_found` when no company has been generated yet
/// - 500 on store failure
pub async fn latest_company_handler(
    State(state): State<AppState>,
) -> Result<Json<CompanyResponse>, AppError> {
    let company = state.company_service.get_latest().await?;
    Ok(Json(company.into()))
}

/// Lists recent companies, newest first.
///
/// # Endpoint
///
/// `GET /api/companies?limit=10`
///
/// # Errors
///
/// Returns 400 if `limit` is outside 1..=50.
pub async fn list_companies_handler(
    State(state): State<AppState>,
    Query(query): Query<ListCompaniesQuery>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    query.validate()?;

    let companies = state.company_service.list_recent(query.limit).await?;
    Ok(Json(companies.into_iter().map(Into::into).collect()))
}
