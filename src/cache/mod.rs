//! Cache Module
//!
//! Open-addressing hash table with linear probing, tombstone deletion and
//! threshold-triggered resize, plus the `Cache` facade the event loop drives.

mod hash;
mod slot;
mod table;


// Re-export public types
pub use hash::key_digest;
pub use slot::{Entry, Slot};
pub use table::{HashTable, TableOptions};

use crate::error::Result;

// == Public Constants ==
/// Initial number of slots when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 1024;

/// Load factor at which the table grows
pub const DEFAULT_RESIZE_THRESHOLD: f64 = 0.75;

/// Growth multiplier applied on resize
pub const DEFAULT_RESIZE_COEFFICIENT: usize = 2;

// == Cache Facade ==
/// The three operations the event loop needs from a cache.
///
/// `HashTable` is the production implementation; tests substitute doubles
/// that inject failures.
pub trait Cache {
    type Key;
    type Value;

    /// Looks up `key`. Absence is not an error.
    fn get(&self, key: &Self::Key) -> Option<Self::Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: Self::Key, value: Self::Value) -> Result<()>;

    /// Removes `key`. Removing a missing key succeeds.
    fn delete(&mut self, key: &Self::Key) -> Result<()>;
}
