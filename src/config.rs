//! Configuration Module
//!
//! Handles loading the cache configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Environment variable holding the reap interval in milliseconds.
pub const REAP_INTERVAL_ENV: &str = "POKECACHE_REAP_INTERVAL_MS";

/// Reap interval used when nothing is configured.
pub const DEFAULT_REAP_INTERVAL: Duration = Duration::from_secs(5);

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sweep period of the reaper, and the age past which entries are stale
    pub reap_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKECACHE_REAP_INTERVAL_MS` - Reap interval in milliseconds (default: 5000)
    pub fn from_env() -> Self {
        Self {
            reap_interval: env::var(REAP_INTERVAL_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REAP_INTERVAL),
        }
    }

    /// Rejects configurations the reaper cannot be scheduled with.
    pub fn validate(&self) -> Result<()> {
        if self.reap_interval.is_zero() {
            return Err(CacheError::InvalidInterval(self.reap_interval));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reap_interval: DEFAULT_REAP_INTERVAL,
        }
    }
}
