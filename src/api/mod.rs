//! API Module
//!
//! HTTP transport for the cache node. Every request becomes an event on the
//! event loop; handlers wait on the event's completion and shape the reply.
//!
//! # Endpoints
//! - `POST /get` - Retrieve a value by key
//! - `POST /set` - Store a key-value pair
//! - `POST /delete` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
