//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its insertion timestamp.
///
/// The payload is opaque to the cache; it is copied in on insert and
/// copied out on lookup, so callers never hold references into the store.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw bytes stored under the key
    pub value: Vec<u8>,
    /// Monotonic timestamp taken at insertion time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry timestamped at the moment of the call.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale under the given TTL.
    ///
    /// Boundary condition: an entry is fresh while `elapsed <= ttl` and
    /// stale strictly after, so a lookup at exactly the TTL still hits.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    // == Age ==
    /// Age of the entry at the time of the call.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
