//! Slot Module
//!
//! Defines the contents of a single hash table slot.

// == Entry ==
/// An occupied slot: key, value and placement metadata.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    /// The stored key
    pub key: K,
    /// The stored value
    pub value: V,
    /// 32-bit key digest, kept so resize never has to re-encode the key
    pub hash: u32,
    /// Index the key hashed to before probing, at the capacity it was placed under
    pub initial_hash_index: usize,
    /// Tombstone flag; a deleted entry keeps its slot until overwritten or resized away
    pub deleted: bool,
}

impl<K, V> Entry<K, V> {
    /// Creates a live entry placed relative to `capacity`.
    pub fn new(key: K, value: V, hash: u32, capacity: usize) -> Self {
        Self {
            key,
            value,
            hash,
            initial_hash_index: home_index(hash, capacity),
            deleted: false,
        }
    }

    /// Returns true when this entry is live and holds `key`.
    pub fn holds<Q: PartialEq<K> + ?Sized>(&self, key: &Q) -> bool {
        !self.deleted && *key == self.key
    }
}

// == Slot ==
/// One position of the slot array.
#[derive(Debug, Clone)]
pub enum Slot<K, V> {
    /// Never written since the array was allocated; terminates every probe
    Empty,
    /// Holds an entry, live or tombstoned
    Occupied(Entry<K, V>),
}

impl<K, V> Slot<K, V> {
    /// Returns true if an insert may write here (empty or tombstone).
    pub fn is_open(&self) -> bool {
        match self {
            Slot::Empty => true,
            Slot::Occupied(entry) => entry.deleted,
        }
    }

    /// Returns the entry if the slot is occupied and not deleted.
    pub fn live(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Occupied(entry) if !entry.deleted => Some(entry),
            _ => None,
        }
    }
}

/// Starting slot for a digest at the given capacity.
pub fn home_index(hash: u32, capacity: usize) -> usize {
    hash as usize % capacity
}
