//! Event Loop Module
//!
//! Serializes concurrent callers into one ordered stream of cache operations.
//!
//! Producers hold a `LoopHandle` and submit `Event`s; a single `EventLoop`
//! task applies them to the cache in queue order and resolves each event's
//! `Completion` exactly once.

mod event;
mod runner;

pub use event::{Completion, Event, EventKind, EventResult, Outcome};
pub use runner::{channel, EventLoop, LoopHandle};

/// Pending events the queue holds before `send` waits
pub const DEFAULT_QUEUE_CAPACITY: usize = 50;
