//! Cache Module
//!
//! Thread-safe in-memory byte cache with TTL expiration and background reaping.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::ExpiringCache;
