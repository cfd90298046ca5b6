//! Cache Statistics Module
//!
//! Tracks hit/miss/reap counters without taking the store lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Lock-free counters shared by every handle to one cache instance.
///
/// Kept outside the store lock so lookups can record hits and misses
/// while holding only the read side.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups that returned a fresh value
    hits: AtomicU64,
    /// Lookups that found nothing, or only a stale entry
    misses: AtomicU64,
    /// Entries removed by reap cycles over the instance's lifetime
    reaped: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Reaped ==
    /// Adds the number of entries removed by one reap cycle.
    pub fn record_reaped(&self, count: u64) {
        self.reaped.fetch_add(count, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            reaped: self.reaped.load(Ordering::Relaxed),
        }
    }
}

// == Stats Snapshot ==
/// Plain copy of the counters, suitable for logging or serialization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Number of successful cache lookups
    pub hits: u64,
    /// Number of failed cache lookups (key absent or expired)
    pub misses: u64,
    /// Total entries removed by the reaper
    pub reaped: u64,
}

impl StatsSnapshot {
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
