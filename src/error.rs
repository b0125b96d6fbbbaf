//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. The variants follow the failure taxonomy of
//! the generation pipeline: upstream calls, persistence, configuration and
//! cancellation, plus the usual request-level errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serialized error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A remote service was unreachable, answered with a non-success status,
    /// or returned a body that did not have the expected shape.
    #[error("{message}")]
    Upstream { message: String, details: Value },

    /// The relational store was unavailable or returned no row for an insert.
    #[error("{message}")]
    Persistence { message: String, details: Value },

    /// A capability is missing credentials.
    #[error("{message}")]
    Configuration { message: String, details: Value },

    /// The caller went away or its deadline passed.
    #[error("{message}")]
    Cancelled { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }

    pub fn configuration(message: impl Into<String>, details: Value) -> Self {
        Self::Configuration {
            message: message.into(),
            details,
        }
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
            details: json!({}),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Wraps an outbound HTTP failure.
    ///
    /// The request URL is dropped first: several upstreams take their
    /// credentials as query parameters.
    pub fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let err = err.without_url();
        Self::upstream(
            format!("Failed to reach {service}"),
            json!({ "service": service, "timeout": timed_out, "reason": err.to_string() }),
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::Upstream { .. } => (StatusCode::BAD_GATEWAY, "bad_gateway"),
            Self::Cancelled { .. } => (StatusCode::REQUEST_TIMEOUT, "request_cancelled"),
            Self::Persistence { .. } | Self::Configuration { .. } | Self::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }

    /// Converts the error into the client-facing payload.
    ///
    /// Server-side failures keep their message but drop the details, which may
    /// carry upstream bodies or driver output.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (status, code) = self.status_and_code();
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::Unauthorized { message, details }
            | Self::NotFound { message, details }
            | Self::Upstream { message, details }
            | Self::Persistence { message, details }
            | Self::Configuration { message, details }
            | Self::Cancelled { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        let details = if status.is_server_error() {
            json!({})
        } else {
            details
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let mut response = (
            status,
            Json(ErrorBody {
                error: self.to_error_info(),
            }),
        )
            .into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                axum::http::header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found", json!({})),
            other => AppError::persistence(
                "Database error",
                json!({ "reason": other.to_string() }),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({})),
        )
    }
}
