//! Hash Table Module
//!
//! Open-addressing hash table with linear probing, tombstone deletion and
//! load-factor-triggered resize.
//!
//! # Capacity exhaustion
//! An insert that probes every slot without finding an empty slot or a
//! tombstone panics. With a resize threshold of at most 1.0 and a resize
//! coefficient of at least 2 this cannot happen, so reaching it means the
//! table was misconfigured. It is deliberately not a `CacheError`.

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::hash::key_digest;
use crate::cache::slot::{home_index, Entry, Slot};
use crate::cache::{Cache, DEFAULT_CAPACITY, DEFAULT_RESIZE_COEFFICIENT, DEFAULT_RESIZE_THRESHOLD};
use crate::error::{CacheError, Result};

// == Table Options ==
/// Construction parameters for a `HashTable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Initial number of slots
    pub capacity: usize,
    /// Load factor (`size / capacity`) at which the next insert grows the table
    pub resize_threshold: f64,
    /// Multiplier applied to capacity on growth
    pub resize_coefficient: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            resize_threshold: DEFAULT_RESIZE_THRESHOLD,
            resize_coefficient: DEFAULT_RESIZE_COEFFICIENT,
        }
    }
}

impl TableOptions {
    /// Checks that the options describe a usable table.
    ///
    /// A coefficient of 1 is accepted but disables growth; such a table
    /// panics once every slot holds a live entry.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if !(self.resize_threshold > 0.0 && self.resize_threshold <= 1.0) {
            return Err(CacheError::InvalidConfig(format!(
                "resize threshold must be in (0, 1], got {}",
                self.resize_threshold
            )));
        }
        if self.resize_coefficient == 0 {
            return Err(CacheError::InvalidConfig(
                "resize coefficient must be at least 1".to_string(),
            ));
        }
        if self.capacity.checked_mul(self.resize_coefficient).is_none() {
            return Err(CacheError::InvalidConfig(format!(
                "capacity {} times resize coefficient {} overflows",
                self.capacity, self.resize_coefficient
            )));
        }
        if self.resize_coefficient == 1 {
            warn!("resize coefficient of 1 disables table growth");
        }
        Ok(())
    }
}

// == Probe Outcome ==
/// Result of walking a key's probe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// A live slot holding the key
    Found(usize),
    /// Key absent; first open slot (tombstone or empty) on its probe path
    Vacant(usize),
    /// Key absent and every slot holds a live entry
    Full,
}

/// Offset of the `i`-th probe from the start index.
///
/// `p(i) = i` visits every slot exactly once per cycle.
fn probe_step(i: usize) -> usize {
    i
}

fn probe_sequence(start: usize, capacity: usize) -> impl Iterator<Item = usize> {
    (0..capacity).map(move |i| (start + probe_step(i)) % capacity)
}

// == Slot Array ==
/// Everything guarded by the table lock.
#[derive(Debug)]
struct Slots<K, V> {
    slots: Vec<Slot<K, V>>,
    /// Number of live (non-deleted) entries
    size: usize,
}

impl<K, V> Slots<K, V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            size: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Walks the probe sequence for `key`.
    ///
    /// Tombstones never end the walk; only an empty slot or a full cycle
    /// proves the key is absent.
    fn locate<Q>(&self, key: &Q, hash: u32) -> Probe
    where
        Q: PartialEq<K> + ?Sized,
    {
        let capacity = self.capacity();
        let mut first_tombstone = None;

        for index in probe_sequence(home_index(hash, capacity), capacity) {
            match &self.slots[index] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Slot::Occupied(entry) if entry.holds(key) => return Probe::Found(index),
                Slot::Occupied(entry) if entry.deleted => {
                    first_tombstone.get_or_insert(index);
                }
                Slot::Occupied(_) => {}
            }
        }

        match first_tombstone {
            Some(index) => Probe::Vacant(index),
            None => Probe::Full,
        }
    }

    /// Moves every live entry into a fresh array of `new_capacity` slots.
    ///
    /// Placement restarts from each entry's digest at the new capacity;
    /// tombstones are dropped.
    fn rehash(&mut self, new_capacity: usize) {
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        let mut size = 0;

        for slot in old {
            let Slot::Occupied(mut entry) = slot else {
                continue;
            };
            if entry.deleted {
                continue;
            }

            let start = home_index(entry.hash, new_capacity);
            let index = probe_sequence(start, new_capacity)
                .find(|&i| matches!(self.slots[i], Slot::Empty))
                .unwrap_or_else(|| exhausted(new_capacity));

            entry.initial_hash_index = start;
            self.slots[index] = Slot::Occupied(entry);
            size += 1;
        }

        self.size = size;
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

fn exhausted(capacity: usize) -> ! {
    panic!(
        "hash table capacity exhausted: probed all {} slots without finding an open one",
        capacity
    )
}

fn overflowed(capacity: usize, coefficient: usize) -> ! {
    panic!(
        "hash table capacity overflow: cannot grow {} slots by a factor of {}",
        capacity, coefficient
    )
}

// == Hash Table ==
/// Open-addressing hash table keyed by the SHA-256 digest of each key's
/// serialized form.
///
/// The slot array, size and capacity sit behind one read/write lock: probes
/// for reads share it, inserts (including any resize) and removals take it
/// exclusively.
#[derive(Debug)]
pub struct HashTable<K, V> {
    inner: RwLock<Slots<K, V>>,
    resize_threshold: f64,
    resize_coefficient: usize,
}

impl<K, V> HashTable<K, V>
where
    K: Serialize + Eq,
{
    // == Constructors ==
    /// Creates a table with the default capacity, threshold and coefficient.
    pub fn new() -> Self {
        let options = TableOptions::default();
        Self::build(options)
    }

    /// Creates a table from validated options.
    pub fn with_options(options: TableOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(options))
    }

    fn build(options: TableOptions) -> Self {
        Self {
            inner: RwLock::new(Slots::with_capacity(options.capacity)),
            resize_threshold: options.resize_threshold,
            resize_coefficient: options.resize_coefficient,
        }
    }

    // == Insert ==
    /// Stores `value` under `key`.
    ///
    /// Grows the table first if the load factor has reached the threshold.
    /// An existing live entry for `key` is overwritten in place; otherwise
    /// the entry goes into the first tombstone or empty slot on the key's
    /// probe path.
    ///
    /// # Panics
    /// If no slot is open after a full probe cycle (see module docs), or if
    /// growing would overflow `usize`.
    pub fn insert(&self, key: K, value: V) -> Result<()> {
        let hash = key_digest(&key)?;
        let mut inner = self.inner.write();

        if inner.load() >= self.resize_threshold {
            let old_capacity = inner.capacity();
            let new_capacity = old_capacity
                .checked_mul(self.resize_coefficient)
                .unwrap_or_else(|| overflowed(old_capacity, self.resize_coefficient));
            inner.rehash(new_capacity);
            debug!(
                "Resized table from {} to {} slots ({} live entries)",
                old_capacity, new_capacity, inner.size
            );
        }

        match inner.locate(&key, hash) {
            Probe::Found(index) => {
                if let Slot::Occupied(entry) = &mut inner.slots[index] {
                    entry.value = value;
                    entry.deleted = false;
                }
            }
            Probe::Vacant(index) => {
                let capacity = inner.capacity();
                inner.slots[index] = Slot::Occupied(Entry::new(key, value, hash, capacity));
                inner.size += 1;
            }
            Probe::Full => exhausted(inner.capacity()),
        }

        Ok(())
    }

    // == Read ==
    /// Returns a copy of the value stored under `key`, if any.
    pub fn read<Q>(&self, key: &Q) -> Result<Option<V>>
    where
        Q: Serialize + PartialEq<K> + ?Sized,
        V: Clone,
    {
        let hash = key_digest(key)?;
        let inner = self.inner.read();

        let value = match inner.locate(key, hash) {
            Probe::Found(index) => inner.slots[index].live().map(|entry| entry.value.clone()),
            Probe::Vacant(_) | Probe::Full => None,
        };

        Ok(value)
    }

    // == Remove ==
    /// Tombstones the entry for `key`. Removing a missing key is a no-op.
    pub fn remove<Q>(&self, key: &Q) -> Result<()>
    where
        Q: Serialize + PartialEq<K> + ?Sized,
    {
        let hash = key_digest(key)?;
        let mut inner = self.inner.write();

        if let Probe::Found(index) = inner.locate(key, hash) {
            if let Slot::Occupied(entry) = &mut inner.slots[index] {
                entry.deleted = true;
            }
            inner.size -= 1;
        }

        Ok(())
    }

    // == Contains ==
    /// Returns true if a live entry exists for `key`.
    #[cfg(test)]
    pub(crate) fn contains<Q>(&self, key: &Q) -> Result<bool>
    where
        Q: Serialize + PartialEq<K> + ?Sized,
    {
        let hash = key_digest(key)?;
        let inner = self.inner.read();
        Ok(matches!(inner.locate(key, hash), Probe::Found(_)))
    }
}

impl<K, V> HashTable<K, V> {
    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.inner.read().size
    }

    /// Returns true if the table holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of slots.
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Returns copies of the live entries in slot order.
    #[cfg(test)]
    pub(crate) fn live_entries(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.inner
            .read()
            .slots
            .iter()
            .filter_map(|slot| slot.live().cloned())
            .collect()
    }

    /// Returns the number of tombstoned slots awaiting the next resize.
    #[cfg(test)]
    pub(crate) fn tombstones(&self) -> usize {
        self.inner
            .read()
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(entry) if entry.deleted))
            .count()
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Serialize + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

// == Cache Facade ==
impl<K, V> Cache for HashTable<K, V>
where
    K: Serialize + Eq,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn get(&self, key: &K) -> Option<V> {
        match self.read(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("Lookup failed, treating key as absent: {}", err);
                None
            }
        }
    }

    fn set(&mut self, key: K, value: V) -> Result<()> {
        self.insert(key, value)
    }

    fn delete(&mut self, key: &K) -> Result<()> {
        self.remove(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn table_with(capacity: usize, resize_threshold: f64, resize_coefficient: usize) -> HashTable<String, String> {
        HashTable::with_options(TableOptions {
            capacity,
            resize_threshold,
            resize_coefficient,
        })
        .unwrap()
    }

    /// Finds `count` distinct keys that all hash to the same slot at `capacity`.
    fn colliding_keys(capacity: usize, count: usize) -> Vec<String> {
        let mut by_index: HashMap<usize, Vec<String>> = HashMap::new();
        for n in 0.. {
            let key = format!("key-{}", n);
            let index = home_index(key_digest(&key).unwrap(), capacity);
            let bucket = by_index.entry(index).or_default();
            bucket.push(key);
            if bucket.len() == count {
                return bucket.clone();
            }
        }
        unreachable!()
    }

    /// Finds `count` distinct keys whose home slot is `index` at `capacity`.
    fn keys_homed_at(capacity: usize, index: usize, count: usize) -> Vec<String> {
        (0..)
            .map(|n| format!("wrap-{}", n))
            .filter(|key| home_index(key_digest(key).unwrap(), capacity) == index)
            .take(count)
            .collect()
    }

    /// Asserts every live entry's recorded home index matches its digest.
    fn assert_home_indices(table: &HashTable<String, String>) {
        let inner = table.inner.read();
        let capacity = inner.capacity();
        for slot in &inner.slots {
            if let Some(entry) = slot.live() {
                let expected = home_index(key_digest(&entry.key).unwrap(), capacity);
                assert_eq!(entry.initial_hash_index, expected, "key {}", entry.key);
            }
        }
    }

    #[test]
    fn test_table_new() {
        let table: HashTable<String, String> = HashTable::new();
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 1024);
    }

    #[test]
    fn test_table_insert_and_read() {
        let table: HashTable<String, String> = HashTable::new();

        table.insert("key1".to_string(), "value1".to_string()).unwrap();
        let value = table.read("key1").unwrap();

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_read_nonexistent() {
        let table: HashTable<String, String> = HashTable::new();
        assert_eq!(table.read("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_table_overwrite() {
        let table: HashTable<String, String> = HashTable::new();

        table.insert("key1".to_string(), "value1".to_string()).unwrap();
        table.insert("key1".to_string(), "value2".to_string()).unwrap();

        assert_eq!(table.read("key1").unwrap().as_deref(), Some("value2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_remove() {
        let table: HashTable<String, String> = HashTable::new();

        table.insert("key1".to_string(), "value1".to_string()).unwrap();
        table.remove("key1").unwrap();

        assert!(table.is_empty());
        assert_eq!(table.read("key1").unwrap(), None);
        assert_eq!(table.tombstones(), 1);
    }

    #[test]
    fn test_table_remove_nonexistent_is_noop() {
        let table: HashTable<String, String> = HashTable::new();
        table.insert("key1".to_string(), "value1".to_string()).unwrap();

        table.remove("nonexistent").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.read("key1").unwrap().as_deref(), Some("value1"));
    }

    #[test]
    fn test_table_remove_twice() {
        let table: HashTable<String, String> = HashTable::new();
        table.insert("key1".to_string(), "value1".to_string()).unwrap();

        table.remove("key1").unwrap();
        table.remove("key1").unwrap();

        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_colliding_keys_probe_linearly() {
        let table = table_with(8, 0.75, 2);
        let keys = colliding_keys(8, 3);

        for key in &keys {
            table.insert(key.clone(), format!("v-{}", key)).unwrap();
        }

        let start = home_index(key_digest(&keys[0]).unwrap(), 8);
        let inner = table.inner.read();
        for (i, key) in keys.iter().enumerate() {
            let entry = inner.slots[(start + i) % 8].live().unwrap();
            assert_eq!(&entry.key, key);
            assert_eq!(entry.initial_hash_index, start);
        }
    }

    #[test]
    fn test_read_skips_tombstone() {
        let table = table_with(8, 0.75, 2);
        let keys = colliding_keys(8, 2);

        table.insert(keys[0].clone(), "first".to_string()).unwrap();
        table.insert(keys[1].clone(), "second".to_string()).unwrap();
        table.remove(&keys[0]).unwrap();

        // keys[1] sits behind the tombstone left by keys[0]
        assert_eq!(table.read(&keys[1]).unwrap().as_deref(), Some("second"));
        assert_eq!(table.read(&keys[0]).unwrap(), None);
    }

    #[test]
    fn test_insert_reuses_tombstone() {
        let table = table_with(8, 0.75, 2);
        let keys = colliding_keys(8, 2);

        table.insert(keys[0].clone(), "first".to_string()).unwrap();
        table.remove(&keys[0]).unwrap();
        table.insert(keys[1].clone(), "second".to_string()).unwrap();

        assert_eq!(table.read(&keys[1]).unwrap().as_deref(), Some("second"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.tombstones(), 0);
    }

    #[test]
    fn test_reinsert_behind_tombstone_does_not_duplicate() {
        let table = table_with(8, 0.75, 2);
        let keys = colliding_keys(8, 2);

        table.insert(keys[0].clone(), "first".to_string()).unwrap();
        table.insert(keys[1].clone(), "second".to_string()).unwrap();
        table.remove(&keys[0]).unwrap();

        // keys[1] already lives past the tombstone; overwrite it there
        table.insert(keys[1].clone(), "updated".to_string()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.read(&keys[1]).unwrap().as_deref(), Some("updated"));

        table.remove(&keys[1]).unwrap();
        assert_eq!(table.read(&keys[1]).unwrap(), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_probe_wraps_around() {
        let table = table_with(8, 1.0, 2);
        let keys = keys_homed_at(8, 7, 3);

        for key in &keys {
            table.insert(key.clone(), key.clone()).unwrap();
        }

        let inner = table.inner.read();
        assert_eq!(inner.slots[7].live().unwrap().key, keys[0]);
        assert_eq!(inner.slots[0].live().unwrap().key, keys[1]);
        assert_eq!(inner.slots[1].live().unwrap().key, keys[2]);
        drop(inner);

        for key in &keys {
            assert_eq!(table.read(key).unwrap().as_deref(), Some(key.as_str()));
        }
    }

    #[test]
    fn test_read_through_full_cycle_of_tombstones() {
        let table = table_with(4, 1.0, 2);
        let keys = colliding_keys(4, 4);

        for key in &keys {
            table.insert(key.clone(), key.clone()).unwrap();
        }
        for key in &keys {
            table.remove(key).unwrap();
        }

        // No empty slot remains; the lookup must stop after one cycle
        assert_eq!(table.read("missing").unwrap(), None);
        assert_eq!(table.capacity(), 4);
    }

    #[test]
    fn test_concrete_resize_scenario() {
        let table = table_with(4, 0.75, 2);

        for n in 0..4 {
            table.insert(format!("k{}", n), format!("v{}", n)).unwrap();
            if n < 3 {
                assert_eq!(table.capacity(), 4, "no growth before the fourth insert");
            }
        }

        assert_eq!(table.len(), 4);
        assert_eq!(table.capacity(), 8);
        for n in 0..4 {
            let value = table.read(&format!("k{}", n)).unwrap();
            assert_eq!(value, Some(format!("v{}", n)));
        }
        assert_home_indices(&table);
    }

    #[test]
    fn test_resize_preserves_entries() {
        let table = table_with(4, 0.75, 2);

        for n in 0..500 {
            table.insert(format!("key{}", n), format!("value{}", n)).unwrap();
        }

        assert_eq!(table.len(), 500);
        assert!(table.capacity() >= 500);
        for n in 0..500 {
            let value = table.read(&format!("key{}", n)).unwrap();
            assert_eq!(value, Some(format!("value{}", n)));
        }
        assert_home_indices(&table);
    }

    #[test]
    fn test_resize_drops_tombstones() {
        let table = table_with(4, 0.75, 2);

        table.insert("a".to_string(), "1".to_string()).unwrap();
        table.insert("b".to_string(), "2".to_string()).unwrap();
        table.insert("c".to_string(), "3".to_string()).unwrap();
        table.remove("b").unwrap();
        assert_eq!(table.tombstones(), 1);

        // size 2 of 4, below threshold
        table.insert("d".to_string(), "4".to_string()).unwrap();
        assert_eq!(table.capacity(), 4);

        // size 3 of 4 reaches the threshold
        table.insert("e".to_string(), "5".to_string()).unwrap();
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.len(), 4);
        assert_eq!(table.read("b").unwrap(), None);
        for key in ["a", "c", "d", "e"] {
            assert!(table.contains(key).unwrap(), "missing {}", key);
        }
    }

    #[test]
    fn test_resize_with_larger_coefficient() {
        let table = table_with(2, 0.5, 3);

        table.insert("a".to_string(), "1".to_string()).unwrap();
        table.insert("b".to_string(), "2".to_string()).unwrap();

        assert_eq!(table.capacity(), 6);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_invalid_options() {
        let zero_capacity = TableOptions {
            capacity: 0,
            ..TableOptions::default()
        };
        assert!(matches!(
            HashTable::<String, String>::with_options(zero_capacity),
            Err(CacheError::InvalidConfig(_))
        ));

        for threshold in [0.0, -0.5, 1.5, f64::NAN] {
            let options = TableOptions {
                resize_threshold: threshold,
                ..TableOptions::default()
            };
            assert!(options.validate().is_err(), "threshold {}", threshold);
        }

        let zero_coefficient = TableOptions {
            resize_coefficient: 0,
            ..TableOptions::default()
        };
        assert!(zero_coefficient.validate().is_err());
    }

    #[test]
    fn test_coefficient_one_is_accepted() {
        let options = TableOptions {
            capacity: 2,
            resize_threshold: 1.0,
            resize_coefficient: 1,
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "capacity exhausted")]
    fn test_exhausted_capacity_panics() {
        // Growth disabled: the third distinct key has nowhere to go
        let table = table_with(2, 1.0, 1);

        table.insert("a".to_string(), "1".to_string()).unwrap();
        table.insert("b".to_string(), "2".to_string()).unwrap();
        let _ = table.insert("c".to_string(), "3".to_string());
    }

    #[test]
    fn test_map_key_found_regardless_of_build_order() {
        let table: HashTable<HashMap<String, u8>, String> = HashTable::new();
        let forward: HashMap<String, u8> = (0..8u8).map(|i| (format!("f{}", i), i)).collect();
        let reverse: HashMap<String, u8> =
            (0..8u8).rev().map(|i| (format!("f{}", i), i)).collect();
        assert_eq!(forward, reverse);

        table.insert(forward, "stored".to_string()).unwrap();

        assert_eq!(table.read(&reverse).unwrap(), Some("stored".to_string()));
        table.insert(reverse.clone(), "replaced".to_string()).unwrap();
        assert_eq!(table.len(), 1);
        table.remove(&reverse).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_overflowing_growth_is_rejected() {
        let result = HashTable::<String, String>::with_options(TableOptions {
            capacity: 4,
            resize_threshold: 0.75,
            resize_coefficient: usize::MAX / 2,
        });
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_unencodable_key_is_an_error() {
        let table: HashTable<HashMap<Vec<u8>, u8>, String> = HashTable::new();
        let mut key = HashMap::new();
        key.insert(vec![1u8], 1u8);

        assert!(matches!(
            table.insert(key.clone(), "v".to_string()),
            Err(CacheError::KeyEncoding(_))
        ));
        assert!(matches!(table.read(&key), Err(CacheError::KeyEncoding(_))));
        assert!(matches!(table.remove(&key), Err(CacheError::KeyEncoding(_))));
        assert!(table.is_empty());
    }

    #[test]
    fn test_cache_facade() {
        let mut table: HashTable<String, i64> = HashTable::new();

        table.set("answer".to_string(), 42).unwrap();
        assert_eq!(Cache::get(&table, &"answer".to_string()), Some(42));

        table.delete(&"answer".to_string()).unwrap();
        assert_eq!(Cache::get(&table, &"answer".to_string()), None);
    }

    #[test]
    fn test_concurrent_readers_during_inserts() {
        let table = Arc::new(table_with(4, 0.75, 2));
        table.insert("stable".to_string(), "value".to_string()).unwrap();

        std::thread::scope(|scope| {
            let writer = Arc::clone(&table);
            scope.spawn(move || {
                for n in 0..200 {
                    writer.insert(format!("key{}", n), n.to_string()).unwrap();
                }
            });

            for _ in 0..4 {
                let reader = Arc::clone(&table);
                scope.spawn(move || {
                    for _ in 0..200 {
                        let value = reader.read("stable").unwrap();
                        assert_eq!(value.as_deref(), Some("value"));
                    }
                });
            }
        });

        assert_eq!(table.len(), 201);
    }
}
