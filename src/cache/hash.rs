//! Key Hashing
//!
//! Keys are serialized to a canonical byte form and run through SHA-256.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{CacheError, Result};

/// Returns the 32-bit hash of `key` used to pick its starting slot.
///
/// The key is encoded with `serde_json`, digested with SHA-256, and the first
/// four digest bytes are read big-endian. Structurally equal keys always
/// produce the same digest.
pub fn key_digest<K: Serialize + ?Sized>(key: &K) -> Result<u32> {
    let encoded = canonical_bytes(key)?;

    let digest = Sha256::digest(&encoded);
    let mut prefix = [0u8; 4];
    prefix.copy_from_slice(&digest[..4]);

    Ok(u32::from_be_bytes(prefix))
}

/// Encodes `key` through `serde_json::Value`, whose maps are sorted by key,
/// so map-typed keys encode the same whatever their iteration order.
fn canonical_bytes<K: Serialize + ?Sized>(key: &K) -> Result<Vec<u8>> {
    let value = serde_json::to_value(key).map_err(|e| CacheError::KeyEncoding(e.to_string()))?;
    serde_json::to_vec(&value).map_err(|e| CacheError::KeyEncoding(e.to_string()))
}
