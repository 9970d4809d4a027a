//! Background Tasks Module
//!
//! Contains the long-running tasks started alongside the HTTP server.
//!
//! # Tasks
//! - Event Loop: Serializes every cache operation onto one consumer

mod event_loop;

pub use event_loop::{spawn_event_loop, NodeCache};
