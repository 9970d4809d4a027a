//! API Handlers
//!
//! HTTP request handlers that turn requests into events and relay the
//! event loop's result.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::event_loop::LoopHandle;
use crate::models::{CacheKey, CacheRequest, CacheResponse, CacheValue, HealthResponse};

/// Handle type the HTTP layer uses to reach the event loop.
pub type NodeHandle = LoopHandle<CacheKey, CacheValue>;

/// Application state shared across all handlers.
///
/// Handlers never touch the cache directly; they only hold the loop handle.
#[derive(Clone)]
pub struct AppState {
    /// Producer handle onto the event loop
    pub events: NodeHandle,
}

impl AppState {
    /// Creates a new AppState around a loop handle.
    pub fn new(events: NodeHandle) -> Self {
        Self { events }
    }
}

/// Handler for POST /get
///
/// Looks up a key. A missing key is a successful "not found" response.
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheRequest>,
) -> Result<Json<CacheResponse>> {
    let key = req.into_key()?;
    let result = state.events.get(key).await?;

    let response = match result.value {
        Some(value) => CacheResponse::found(value),
        None => CacheResponse::not_found(),
    };
    Ok(Json(response))
}

/// Handler for POST /set
///
/// Stores a value under a key.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheRequest>,
) -> Result<Json<CacheResponse>> {
    let (key, value) = req.into_entry()?;
    state.events.set(key, value).await?;

    Ok(Json(CacheResponse::success()))
}

/// Handler for POST /delete
///
/// Removes a key. Deleting a missing key succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheRequest>,
) -> Result<Json<CacheResponse>> {
    let key = req.into_key()?;
    state.events.delete(key).await?;

    Ok(Json(CacheResponse::success()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
