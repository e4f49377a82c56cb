//! Cache Module
//!
//! Provides in-memory byte caching with periodic expiration of stale entries.

mod entry;
mod handle;
mod store;


// Re-export public types
pub use handle::Cache;

pub(crate) use entry::CacheEntry;
pub(crate) use store::CacheStore;
