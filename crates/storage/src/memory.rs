use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::traits::RecordStore;

/// In-process [`RecordStore`] backed by a `BTreeMap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore<K, V> {
    records: BTreeMap<K, V>,
}

impl<K, V> MemoryStore<K, V> {
    pub fn new() -> Self {
        MemoryStore {
            records: BTreeMap::new(),
        }
    }
}

impl<K, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecordStore<K, V> for MemoryStore<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn get(&self, key: &K) -> Option<V> {
        self.records.get(key).cloned()
    }

    fn put(&mut self, key: K, record: V) -> Option<V> {
        self.records.insert(key, record)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.records.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.records
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Monotonic id allocator for auto-numbered registries.
///
/// Starts at 0; the first id handed out is 1. The counter is advanced before
/// the id is returned, so two allocations can never yield the same id and an
/// id is never reused, even if the caller discards it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCounter(u64);

impl RecordCounter {
    pub fn new() -> Self {
        RecordCounter(0)
    }

    /// Advance the counter and return the new value.
    pub fn next_id(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// The most recently allocated id (0 if none).
    pub fn current(&self) -> u64 {
        self.0
    }
}
