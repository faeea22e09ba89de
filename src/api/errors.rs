//! # API Errors
//!
//! Every failure a resource handler can produce, and its JSON rendering.
//! Nothing here escapes the transport boundary: each variant becomes a
//! status code plus one of three body shapes.
//!
//! - `{"error_code": ..., "error_message": ...}` for coded failures
//! - `{"error_message": ...}` for uniqueness conflicts
//! - `{"message": ...}` for lookups, argument parsing and internal errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::storage::StorageError;

/// Result type for resource handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Resource handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Request parsing
    // ==================
    /// A declared argument is missing or has the wrong type
    #[error("{field}: {help}")]
    Argument { field: &'static str, help: String },

    /// The request body is not a JSON object
    #[error("Failed to decode JSON object")]
    MalformedBody,

    // ==================
    // Domain rules
    // ==================
    /// A required field carries no value
    #[error("{code}: {message}")]
    Validation {
        code: &'static str,
        message: &'static str,
    },

    /// A unique column already holds the submitted value
    #[error("{0}")]
    Conflict(&'static str),

    /// No record with the requested identifier
    #[error("{0}")]
    NotFound(&'static str),

    /// An enrollment names a course or student that does not exist
    #[error("{code}: {message}")]
    Reference {
        code: &'static str,
        message: &'static str,
    },

    /// The write step was rejected and rolled back
    #[error("{code}: {message}")]
    Commit {
        code: &'static str,
        message: &'static str,
        status: StatusCode,
    },

    // ==================
    // Unexpected
    // ==================
    /// Storage failure outside any coded path
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn validation(code: &'static str, message: &'static str) -> Self {
        ApiError::Validation { code, message }
    }

    pub fn reference(code: &'static str, message: &'static str) -> Self {
        ApiError::Reference { code, message }
    }

    pub fn commit(code: &'static str, message: &'static str, status: StatusCode) -> Self {
        ApiError::Commit {
            code,
            message,
            status,
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Argument { .. } => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Reference { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Commit { status, .. } => *status,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error
    pub fn body(&self) -> Value {
        match self {
            ApiError::Argument { field, help } => {
                let mut fields = Map::new();
                fields.insert(field.to_string(), Value::String(help.clone()));
                json!({ "message": fields })
            }
            ApiError::MalformedBody => json!({ "message": self.to_string() }),
            ApiError::Validation { code, message }
            | ApiError::Reference { code, message }
            | ApiError::Commit { code, message, .. } => {
                json!({ "error_code": code, "error_message": message })
            }
            ApiError::Conflict(message) => json!({ "error_message": message }),
            ApiError::NotFound(message) => json!({ "message": message }),
            ApiError::Storage(_) => json!({ "message": "Internal Server Error" }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(err) = &self {
            tracing::error!(code = err.code(), error = %err, "storage failure");
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
