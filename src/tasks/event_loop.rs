//! Event Loop Task
//!
//! Builds the node's hash table and runs its event loop on the tokio runtime.

use tokio::task::JoinHandle;
use tracing::info;

use crate::api::NodeHandle;
use crate::cache::HashTable;
use crate::config::Config;
use crate::error::Result;
use crate::event_loop;
use crate::models::{CacheKey, CacheValue};

/// The cache the node serves requests from.
pub type NodeCache = HashTable<CacheKey, CacheValue>;

/// Spawns the event loop as a background task.
///
/// The table is built from the config's table options, so an invalid
/// capacity, threshold or coefficient is reported before anything runs.
///
/// # Returns
/// The producer handle and a JoinHandle that resolves to the cache once the
/// loop has been stopped and drained.
///
/// # Example
/// ```ignore
/// let (events, loop_task) = spawn_event_loop(&config)?;
/// // Later, during shutdown:
/// events.stop();
/// let cache = loop_task.await?;
/// ```
pub fn spawn_event_loop(config: &Config) -> Result<(NodeHandle, JoinHandle<NodeCache>)> {
    let table = HashTable::with_options(config.table_options())?;
    let (handle, event_loop) = event_loop::channel(table, config.queue_capacity);

    info!(
        "Starting event loop: capacity={}, queue_capacity={}",
        config.initial_capacity, config.queue_capacity
    );
    let task = tokio::spawn(event_loop.run());

    Ok((handle, task))
}
