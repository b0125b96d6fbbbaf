//! Handler for posting the latest company to the media platform.

use axum::{Json, extract::State};
use tokio_util::sync::CancellationToken;

use crate::domain::entities::PublishOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::caption::build_caption;

/// Publishes the latest company's cover image with a generated caption.
///
/// # Endpoint
///
/// `POST /api/companies/latest/publish` (Bearer key required)
///
/// # Response
///
/// Always 200 once a company exists; publishing failures are reported in the
/// body:
///
/// ```json
/// { "posted": false, "error": "container not ready after 15 attempts" }
/// ```
///
/// # Errors
///
/// Returns 404 if no company exists.
pub async fn publish_latest_handler(
    State(state): State<AppState>,
) -> Result<Json<PublishOutcome>, AppError> {
    let company = state.company_service.get_latest().await?;

    let caption = build_caption(
        &company.name,
        &company.description,
        &company.appeal,
        &company.website,
    );

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let outcome = state
        .media_publisher
        .publish(&company.cover_image, &caption, &cancel)
        .await;

    Ok(Json(outcome))
}
