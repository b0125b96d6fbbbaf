//! Cross-origin policy.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call `GET`, `POST` and `OPTIONS` with JSON bodies and a
/// bearer key.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
