//! Bearer API key authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Authenticates requests against the configured API key.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <key>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - The key does not match
/// - No API key is configured
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/companies/generate", post(generate_company_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let Some(expected) = st.api_key.as_deref() else {
        tracing::warn!("Rejected protected request: API_KEY is not configured");
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "API key authentication is not configured"}),
        ));
    };

    if !keys_match(token.as_bytes(), expected.as_bytes()) {
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Invalid API key"}),
        ));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Compares keys without short-circuiting on the first differing byte.
fn keys_match(given: &[u8], expected: &[u8]) -> bool {
    given.len() == expected.len()
        && given
            .iter()
            .zip(expected)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
