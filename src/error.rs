//! API error taxonomy and HTTP envelope mapping.
//!
//! Three classes of failure cross the HTTP boundary: validation errors (400
//! with field-level detail), not-found (404), and storage errors (500 with a
//! generic message; the detail is logged server-side and never leaked).

use crate::store::StorageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Errors that can cross the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input. Recoverable by the caller resubmitting.
    #[error("invalid form data")]
    Validation(Vec<FieldError>),

    /// Requested record absent. Not an exceptional condition; carries the
    /// client-facing message.
    #[error("{0}")]
    NotFound(&'static str),

    /// Backend failure. `message` is the generic client-facing text.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    /// Wrap a storage failure with the endpoint's generic client message.
    pub fn storage(message: &'static str, source: StorageError) -> Self {
        Self::Storage { message, source }
    }

    /// Static error class string for metrics labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Storage { .. } => "storage",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => json!({
                "success": false,
                "message": "Invalid form data",
                "errors": errors,
            }),
            Self::NotFound(message) => json!({
                "success": false,
                "message": message,
            }),
            Self::Storage { message, source } => {
                tracing::error!(error = %source, "Storage operation failed");
                json!({
                    "success": false,
                    "message": message,
                })
            }
        };
        (status, Json(body)).into_response()
    }
}
