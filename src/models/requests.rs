//! Request DTOs for the cache node API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{CacheError, Result};
use crate::models::{CacheKey, CacheValue};

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body shared by `POST /get`, `POST /set` and `POST /delete`
///
/// # Fields
/// - `key`: The cache key
/// - `value`: The value to store; only read by `/set`
#[derive(Debug, Clone, Deserialize)]
pub struct CacheRequest {
    /// The cache key
    pub key: CacheKey,
    /// Optional value, required for sets
    #[serde(default)]
    pub value: Option<CacheValue>,
}

impl CacheRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        None
    }

    /// Validates the key and returns it.
    pub fn into_key(self) -> Result<CacheKey> {
        match self.validate() {
            Some(msg) => Err(CacheError::InvalidRequest(msg)),
            None => Ok(self.key),
        }
    }

    /// Validates the key, requires a non-null value, and returns both.
    pub fn into_entry(self) -> Result<(CacheKey, CacheValue)> {
        if let Some(msg) = self.validate() {
            return Err(CacheError::InvalidRequest(msg));
        }
        match self.value {
            Some(value) => Ok((self.key, value)),
            None => Err(CacheError::InvalidRequest(
                "Value is required".to_string(),
            )),
        }
    }
}
