//! pokecache - An in-memory, time-bounded byte cache
//!
//! Stores opaque payloads under string keys and discards them once they are
//! older than a configured interval, using one background reaper per cache.

pub mod cache;
pub mod config;
pub mod error;
mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{CacheError, Result};
