//! API route configuration.

use crate::api::handlers::{
    generate_company_handler, latest_company_handler, list_companies_handler,
    publish_latest_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only routes, open to everyone.
///
/// # Endpoints
///
/// - `GET /companies`        - Recent companies (`?limit=1..=50`)
/// - `GET /companies/latest` - Company of the day
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies_handler))
        .route("/companies/latest", get(latest_company_handler))
}

/// Routes that trigger paid upstream calls, protected by the API key.
///
/// # Endpoints
///
/// - `POST /companies/generate`       - Run the generation pipeline
/// - `POST /companies/latest/publish` - Post the latest company
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/companies/generate", post(generate_company_handler))
        .route("/companies/latest/publish", post(publish_latest_handler))
}
