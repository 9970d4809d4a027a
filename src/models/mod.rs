//! Request and Response models for the cache node API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CacheRequest, MAX_KEY_LENGTH};
pub use responses::{CacheResponse, ErrorResponse, HealthResponse};

/// Key type stored by the node
pub type CacheKey = String;

/// Values are arbitrary JSON, opaque to the cache
pub type CacheValue = serde_json::Value;
