//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and the shared JSON envelope
//! `{"success": false, "message": "..."}`.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned for internal errors when detail exposure is off.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(false);

/// Controls whether 500 responses carry the raw error description.
///
/// Set once at startup from `EXPOSE_ERROR_DETAILS`.
pub fn set_expose_details(expose: bool) {
    EXPOSE_DETAILS.store(expose, Ordering::Relaxed);
}

/// Returns `true` if 500 responses carry the raw error description.
#[must_use]
pub fn expose_details() -> bool {
    EXPOSE_DETAILS.load(Ordering::Relaxed)
}

/// Structured JSON error response body.
///
/// ```json
/// { "success": false, "message": "Invalid credentials" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant        | HTTP Status               |
/// |----------------|---------------------------|
/// | `BadRequest`   | 400 Bad Request           |
/// | `Unauthorized` | 401 Unauthorized          |
/// | `Internal`     | 500 Internal Server Error |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A required field is missing or empty.
    #[error("{0}")]
    BadRequest(String),

    /// Credential mismatch.
    #[error("Invalid credentials")]
    Unauthorized,

    /// Unexpected failure while parsing or handling a request.
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message shown to the client.
    ///
    /// Internal errors are masked unless detail exposure is enabled.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) if !expose_details() => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Internal(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(detail) = &self {
            tracing::error!(%detail, "request failed");
        }
        let body = ErrorResponse {
            success: false,
            message: self.public_message(),
        };
        (status, axum::Json(body)).into_response()
    }
}
