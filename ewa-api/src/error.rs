//! Error types for ewa-api
//!
//! Client input errors map to 4xx with a descriptive body, upstream
//! dependency errors to 500. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One violated upload constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Form field the constraint applies to (`file` or `location`)
    pub field: &'static str,
    pub message: &'static str,
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required query parameters absent (400)
    #[error("Missing query parameters: {0}")]
    MissingParameters(&'static str),

    /// Malformed request, e.g. unreadable multipart body (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upload failed validation (422)
    #[error("Validation failed: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// Classification service failed (500)
    #[error("Failed to classify the image: {0}")]
    Upstream(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParameters(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            ApiError::Validation(issues) => json!({
                "error": "Validation failed",
                "issues": issues,
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
