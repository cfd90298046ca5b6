//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ExpiringCache;

/// Spawns the background reap loop for a cache instance.
///
/// The task sleeps for `interval` between scans and removes every entry
/// older than the cache's TTL. [`ExpiringCache::new`] calls this with
/// `interval` equal to the TTL, which means an entry inserted right
/// after a scan can sit in the table for almost two intervals; lookups
/// already hide it once the TTL has elapsed.
///
/// There is deliberately no cancellation path: one cache lives for the
/// life of the process and the task ends with the runtime. The returned
/// handle is only used by tests.
pub fn spawn_reaper(cache: ExpiringCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("starting cache reaper, interval {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.reap().await;
            if removed > 0 {
                info!("reaper removed {} expired entries", removed);
            } else {
                debug!("reaper found no expired entries");
            }
        }
    })
}
