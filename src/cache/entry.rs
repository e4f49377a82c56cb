//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload together with the instant it was inserted.
///
/// Entries are never mutated. Re-inserting a key builds a fresh entry, which
/// restarts its staleness clock.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// The stored bytes, opaque to the cache
    pub val: Vec<u8>,
    /// Insertion instant (monotonic)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(val: Vec<u8>) -> Self {
        Self {
            val,
            created_at: Instant::now(),
        }
    }

    // == Staleness ==
    /// Returns true if the entry was created strictly before `cutoff`.
    pub fn is_older_than(&self, cutoff: Instant) -> bool {
        self.created_at < cutoff
    }
}
