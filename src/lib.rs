//! Cache Node - one node of a distributed in-memory cache
//!
//! An open-addressing hash table behind a single-writer event loop, served
//! over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod models;
pub mod registry;
pub mod tasks;

pub use api::{create_router, AppState};
pub use cache::{Cache, HashTable};
pub use config::Config;
pub use error::{CacheError, Result};
pub use registry::RegistryClient;
pub use tasks::spawn_event_loop;
