//! Error types for tunebase
//!
//! Missing entities render as plain-text bodies with a 404 status; database
//! failures are logged and surface as a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// HTTP handler error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested entity not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Invalid request parameter or form field (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Database operation error (500)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;
