//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                       - Database probe and capabilities (public)
//! - `GET  /api/companies[/latest]`       - Read endpoints (public)
//! - `POST /api/companies/generate`       - Generation pipeline (Bearer key)
//! - `POST /api/companies/latest/publish` - Media publishing (Bearer key)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, `GET`/`POST`/`OPTIONS`
//! - **Authentication** - Bearer API key on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application without path normalization.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::public_routes().merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so it wraps [`router`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
