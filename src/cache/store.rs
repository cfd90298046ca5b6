//! Expiring Cache Module
//!
//! Thread-safe key/value byte store where every entry expires a fixed
//! duration after insertion. A background reaper owned by the cache
//! removes stale entries so the table does not grow unbounded with
//! dead keys.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper;

// == Expiring Cache ==
/// Cloneable handle to a shared TTL cache.
///
/// All clones observe the same store. The instance owns a background
/// reaper started at construction; there is no teardown path, the task
/// runs until the runtime stops.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    /// Key-value storage
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
    /// Hit/miss/reap counters
    stats: Arc<CacheStats>,
    /// Expiry window, immutable for the instance's lifetime
    ttl: Duration,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// The reaper ticks once per `ttl`, so an entry can physically
    /// outlive its expiry by up to one extra interval; [`get`] never
    /// serves it past `ttl` regardless.
    ///
    /// # Errors
    /// Returns [`PokedexError::InvalidTtl`] when `ttl` is zero: a cache
    /// that reaps every tick or retains nothing is a configuration
    /// mistake, not a degenerate mode worth supporting.
    ///
    /// [`get`]: ExpiringCache::get
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(PokedexError::InvalidTtl);
        }

        let cache = Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(CacheStats::new()),
            ttl,
        };
        spawn_reaper(cache.clone(), ttl);
        Ok(cache)
    }

    /// Builds a cache with no background reaper, so tests control
    /// exactly when reaping happens.
    #[cfg(test)]
    pub(crate) fn without_reaper(ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(CacheStats::new()),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// An overwrite replaces both the value and the creation timestamp,
    /// restarting the entry's expiry clock. Empty keys and empty values
    /// are ordinary inputs; this operation cannot fail.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.insert(key.into(), CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the fresh value stored under `key`.
    ///
    /// Yields `None` both for keys that were never added and for
    /// entries older than the TTL that the reaper has not removed yet;
    /// callers cannot distinguish the two, and must not need to.
    ///
    /// Takes the shared side of the lock, so concurrent lookups do not
    /// serialize against each other, only against mutations.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        match store.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed. The scan runs under the
    /// exclusive lock, so entries inserted while it is in progress are
    /// not visited by the same scan.
    pub async fn reap(&self) -> usize {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired(self.ttl));
        let removed = before - store.len();
        self.stats.record_reaped(removed as u64);
        removed
    }

    // == Length ==
    /// Current physical entry count, stale-but-unreaped entries included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == TTL ==
    /// The expiry window this instance was constructed with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Point-in-time hit/miss/reap counters for this instance.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_zero_ttl_rejected() {
        let result = ExpiringCache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidTtl)));
    }

    #[tokio::test]
    async fn test_add_then_get_roundtrip() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));

        cache.add("https://example/pokemon/pikachu", b"payload".to_vec()).await;

        assert_eq!(
            cache.get("https://example/pokemon/pikachu").await,
            Some(b"payload".to_vec())
        );
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_absent_key_misses() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));
        assert_eq!(cache.get("never-added").await, None);
    }

    #[tokio::test]
    async fn test_empty_key_and_empty_value_are_ordinary() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));

        cache.add("", Vec::new()).await;

        assert_eq!(cache.get("").await, Some(Vec::new()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_overwrite_returns_latest_value() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));

        cache.add("key", b"first".to_vec()).await;
        cache.add("key", b"second".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"second".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_overwrite_resets_expiry_clock() {
        let cache = ExpiringCache::without_reaper(Duration::from_millis(100));

        cache.add("key", b"first".to_vec()).await;
        sleep(Duration::from_millis(60)).await;
        cache.add("key", b"second".to_vec()).await;
        sleep(Duration::from_millis(60)).await;

        // 120ms after the first add, but only 60ms after the overwrite.
        assert_eq!(cache.get("key").await, Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_expired_entry_hidden_before_reap() {
        let cache = ExpiringCache::without_reaper(Duration::from_millis(50));

        cache.add("key", b"payload".to_vec()).await;
        sleep(Duration::from_millis(120)).await;

        // Logically expired: invisible to get, still physically present.
        assert_eq!(cache.get("key").await, None);
        assert_eq!(cache.len().await, 1);

        assert_eq!(cache.reap().await, 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_reap_keeps_fresh_entries() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));

        cache.add("fresh", b"payload".to_vec()).await;

        assert_eq!(cache.reap().await, 0);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_reaper_bounds_memory() {
        let cache = ExpiringCache::new(Duration::from_millis(100)).unwrap();

        for i in 0u8..5 {
            cache.add(format!("key-{i}"), vec![i]).await;
        }
        assert_eq!(cache.len().await, 5);

        // TTL plus one full reap cycle, with slack for timer jitter.
        sleep(Duration::from_millis(350)).await;
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_concrete_expiry_scenario() {
        let cache = ExpiringCache::new(Duration::from_millis(100)).unwrap();

        cache.add("u1", vec![0x01, 0x02]).await;

        sleep(Duration::from_millis(10)).await;
        assert_eq!(cache.get("u1").await, Some(vec![0x01, 0x02]));

        sleep(Duration::from_millis(140)).await;
        assert_eq!(cache.get("u1").await, None);
    }

    #[tokio::test]
    async fn test_stats_track_hits_and_misses() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));

        cache.add("key", b"payload".to_vec()).await;
        cache.get("key").await;
        cache.get("absent").await;

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));
        let clone = cache.clone();

        cache.add("key", b"payload".to_vec()).await;

        assert_eq!(clone.get("key").await, Some(b"payload".to_vec()));
        assert_eq!(clone.ttl(), Duration::from_secs(60));
    }
}
