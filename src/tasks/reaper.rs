//! Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::{Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reaper for one cache onto `runtime`.
///
/// The first sweep happens at `first_wake`, then once per `interval`. Each sweep locks the store and removes entries created more
/// than `interval` before the wake. An entry can therefore live for almost
/// `2 * interval` before a sweep catches it.
///
/// The task only holds a weak reference to the store and returns on the
/// first wake after the store has been dropped.
///
/// # Arguments
/// * `runtime` - Runtime the task is scheduled on
/// * `store` - Weak reference to the shared cache store
/// * `first_wake` - Instant of the first sweep
/// * `interval` - Wake period and staleness threshold (must be non-zero)
///
/// # Returns
/// A JoinHandle for the spawned task, which the owning cache aborts on drop.
pub(crate) fn spawn_reaper(
    runtime: &Handle,
    store: Weak<Mutex<CacheStore>>,
    first_wake: Instant,
    interval: Duration,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        let mut ticker = time::interval_at(first_wake, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(store) = store.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };

            let removed = {
                let mut guard = store.lock().unwrap_or_else(PoisonError::into_inner);
                guard.reap(Instant::now(), interval)
            };

            if removed > 0 {
                info!("Cache sweep: removed {} stale entries", removed);
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }
    })
}
