//! Cache Store Module
//!
//! Unlocked key-value storage. Callers share it behind a single mutex.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Maps keys to entries with replace-on-write semantics.
///
/// The store has no eviction logic of its own; stale entries only leave
/// through [`CacheStore::reap`].
#[derive(Debug, Default)]
pub(crate) struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores `val` under `key`, discarding any previous entry and its timestamp.
    pub fn add(&mut self, key: String, val: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(val));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Lookups never refresh the entry's creation time.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.val.clone())
    }

    // == Reap ==
    /// Removes every entry created more than `interval` before `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant, interval: Duration) -> usize {
        // A clock younger than one interval cannot hold stale entries
        let Some(cutoff) = now.checked_sub(interval) else {
            return 0;
        };

        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(cutoff));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, stale ones included.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
