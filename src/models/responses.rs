//! Response DTOs for the cache node API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::models::CacheValue;

pub const VALUE_FOUND_MSG: &str = "Value found";
pub const VALUE_NOT_FOUND_MSG: &str = "Value not found";
pub const SUCCESS_MSG: &str = "Success";
pub const ERROR_MSG: &str = "An error has occurred";

/// Response body for successful cache operations
///
/// `value` is only present on a get that found its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheResponse {
    /// Outcome message
    pub message: String,
    /// The stored value, for gets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CacheValue>,
}

impl CacheResponse {
    /// A get that found its key
    pub fn found(value: CacheValue) -> Self {
        Self {
            message: VALUE_FOUND_MSG.to_string(),
            value: Some(value),
        }
    }

    /// A get that did not find its key
    pub fn not_found() -> Self {
        Self {
            message: VALUE_NOT_FOUND_MSG.to_string(),
            value: None,
        }
    }

    /// A completed set or delete
    pub fn success() -> Self {
        Self {
            message: SUCCESS_MSG.to_string(),
            value: None,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic failure message
    pub message: String,
    /// Error detail describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            message: ERROR_MSG.to_string(),
            error: error.into(),
        }
    }
}
