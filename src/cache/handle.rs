//! Cache Handle Module
//!
//! The public cache: a locked store plus the reaper bound to it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Cache ==
/// A time-bounded byte cache.
///
/// Every operation goes through one mutex guarding the whole map, shared with
/// a background reaper that wakes once per `interval` and drops entries older
/// than `interval`. An entry is always readable for at least `interval` after
/// insertion and is gone within `2 * interval`.
///
/// `Cache` is `Send + Sync`; share it across tasks or threads with an `Arc`.
/// Dropping it stops the reaper.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio runtime.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] if `interval` is zero, or so large
    ///   that the first sweep cannot be scheduled on the clock (it is
    ///   rejected, never clamped)
    /// - [`CacheError::NoRuntime`] if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }
        let first_wake = Instant::now()
            .checked_add(interval)
            .ok_or(CacheError::InvalidInterval(interval))?;
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reaper(&runtime, Arc::downgrade(&store), first_wake, interval);
        info!("Cache created with reap interval of {:?}", interval);

        Ok(Self {
            store,
            interval,
            reaper,
        })
    }

    /// Creates a cache from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.reap_interval)
    }

    // == Add ==
    /// Stores `val` under `key`, replacing any previous entry and restarting
    /// its age from now.
    pub fn add(&self, key: impl Into<String>, val: impl Into<Vec<u8>>) {
        self.lock().add(key.into(), val.into());
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` if it was never
    /// added or has already been reaped.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key)
    }

    // == Interval ==
    /// Returns the configured reap interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Every critical section leaves the map consistent, so a poisoned lock
    // is still safe to use.
    fn lock(&self) -> MutexGuard<'_, CacheStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cache_requires_runtime() {
        let result = Cache::new(Duration::from_millis(100));
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_cache_rejects_zero_interval() {
        let result = Cache::new(Duration::ZERO);
        assert!(matches!(result, Err(CacheError::InvalidInterval(_))));
    }

    #[tokio::test]
    async fn test_cache_rejects_unschedulable_interval() {
        let result = Cache::new(Duration::MAX);
        assert_eq!(result.unwrap_err(), CacheError::InvalidInterval(Duration::MAX));
    }

    #[tokio::test]
    async fn test_cache_from_config() {
        let config = Config {
            reap_interval: Duration::from_millis(250),
        };

        let cache = Cache::from_config(&config).unwrap();
        assert_eq!(cache.interval(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_cache_from_invalid_config() {
        let config = Config {
            reap_interval: Duration::ZERO,
        };
        assert!(Cache::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_cache_add_and_get() {
        let cache = Cache::new(Duration::from_secs(5)).unwrap();

        cache.add("a", vec![1, 2, 3]);

        assert_eq!(cache.get("a"), Some(vec![1, 2, 3]));
        assert_eq!(cache.get("b"), None);
    }

    #[tokio::test]
    async fn test_cache_accepts_borrowed_inputs() {
        let cache = Cache::new(Duration::from_secs(5)).unwrap();

        cache.add(String::from("owned"), &b"bytes"[..]);
        cache.add("", "text");

        assert_eq!(cache.get("owned"), Some(b"bytes".to_vec()));
        assert_eq!(cache.get(""), Some(b"text".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_drop_releases_store() {
        let cache = Cache::new(Duration::from_millis(100)).unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;

        // The running reaper never keeps the store alive on its own
        assert_eq!(Arc::strong_count(&cache.store), 1);

        let store = Arc::downgrade(&cache.store);
        drop(cache);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(store.upgrade().is_none(), "Store should be released with the cache");
    }

    #[tokio::test]
    async fn test_cache_survives_poisoned_lock() {
        let cache = Arc::new(Cache::new(Duration::from_secs(5)).unwrap());
        cache.add("key", b"value".to_vec());

        let poisoner = Arc::clone(&cache);
        let _ = thread::spawn(move || {
            let _guard = poisoner.store.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        assert_eq!(cache.get("key"), Some(b"value".to_vec()));
        cache.add("key", b"other".to_vec());
        assert_eq!(cache.get("key"), Some(b"other".to_vec()));
    }
}
