//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing a cache.
///
/// Once built, a cache never fails: `add` and `get` are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The reap interval must be a positive duration
    #[error("Invalid reap interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),

    /// The reaper needs a tokio runtime to be scheduled on
    #[error("No tokio runtime available to run the reaper")]
    NoRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
