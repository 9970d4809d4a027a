//! Error types for the cache node
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CacheError {
    /// Key could not be serialized into its canonical byte form
    #[error("Key encoding failed: {0}")]
    KeyEncoding(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Table options outside their valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A cache facade operation failed
    #[error("Operation failed: {0}")]
    Operation(String),

    /// The event loop has stopped and no longer processes events
    #[error("Event loop stopped")]
    LoopStopped,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::KeyEncoding(_)
            | CacheError::InvalidRequest(_)
            | CacheError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
            CacheError::LoopStopped => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::Operation(_) | CacheError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache node.
pub type Result<T> = std::result::Result<T, CacheError>;
