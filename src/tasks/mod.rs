//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes stale cache entries once per reap interval

mod reaper;

pub(crate) use reaper::spawn_reaper;
