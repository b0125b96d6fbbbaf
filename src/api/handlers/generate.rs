//! Handler for running the generation pipeline.

use axum::{Json, extract::State};
use tokio_util::sync::CancellationToken;

use crate::api::dto::company::CompanyResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Generates, illustrates and stores a new company of the day.
///
/// # Endpoint
///
/// `POST /api/companies/generate` (Bearer key required)
///
/// The pipeline observes a cancellation token that fires when the client
/// disconnects and this handler is dropped.
///
/// # Errors
///
/// - 502 `bad_gateway` if the completion API fails
/// - 500 `internal_error` on persistence or configuration failure
pub async fn generate_company_handler(
    State(state): State<AppState>,
) -> Result<Json<CompanyResponse>, AppError> {
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let company = state.generation_service.generate_and_store(&cancel).await?;
    Ok(Json(company.into()))
}
