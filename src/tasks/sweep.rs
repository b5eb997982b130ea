//! Maintenance Sweep Task
//!
//! Periodically deletes records that have outlived their namespace's default
//! TTL. Reads never depend on it; it only bounds disk usage.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheStore, TtlPolicy};

/// Spawns a background task that sweeps expired records every
/// `interval_secs` seconds.
///
/// Directory scans run on the blocking pool. The returned handle is aborted
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_sweep_task(cache.clone(), TtlPolicy::default(), 3600);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_sweep_task(
    cache: Arc<CacheStore>,
    policy: TtlPolicy,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let store = Arc::clone(&cache);
            match tokio::task::spawn_blocking(move || store.sweep_expired(&policy)).await {
                Ok(0) => debug!("Cache sweep: no expired records found"),
                Ok(removed) => info!("Cache sweep: removed {} expired records", removed),
                Err(e) => warn!("Cache sweep failed: {}", e),
            }
        }
    })
}
