//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce the `{"mensaje": ...}` JSON error
//! bodies of the wire contract with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tareas_storage::StorageError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The referenced tarea does not exist (404).
    #[error("no se encontro la tarea")]
    TareaNotFound,

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, mensaje) = match self {
            ApiError::TareaNotFound => (
                StatusCode::NOT_FOUND,
                "No se encontro la tarea".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({ "mensaje": mensaje });

        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::TareaNotFound(_) => ApiError::TareaNotFound,
            _ => ApiError::Internal(err.to_string()),
        }
    }
}
