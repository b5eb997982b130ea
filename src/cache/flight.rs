//! Single-Flight Module
//!
//! Per-key async locks so that concurrent misses on the same key wait for one
//! fetch instead of each calling the provider.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::cache::Namespace;

type FlightKey = (Namespace, String);

// == Flight Group ==
/// Registry of in-flight fetches keyed by namespace and cache key.
#[derive(Debug, Default)]
pub struct FlightGroup {
    inflight: Mutex<HashMap<FlightKey, Arc<AsyncMutex<()>>>>,
}

impl FlightGroup {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Acquire ==
    /// Waits until no other holder is fetching `key` in `namespace`, then
    /// holds the key until the returned guard is dropped.
    pub async fn acquire(&self, namespace: Namespace, key: &str) -> FlightGuard<'_> {
        let flight_key = (namespace, key.to_string());
        let lock = {
            let mut map = self.lock_map();
            Arc::clone(
                map.entry(flight_key.clone())
                    .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
            )
        };

        let guard = lock.lock_owned().await;
        FlightGuard {
            group: self,
            key: flight_key,
            _guard: guard,
        }
    }

    /// Number of keys with a holder or waiters.
    pub fn in_flight(&self) -> usize {
        self.lock_map().len()
    }

    fn lock_map(&self) -> std::sync::MutexGuard<'_, HashMap<FlightKey, Arc<AsyncMutex<()>>>> {
        // A panic while holding the map lock leaves the map itself intact
        self.inflight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// == Flight Guard ==
/// Exclusive hold on one key. Dropping it lets the next waiter proceed.
#[derive(Debug)]
pub struct FlightGuard<'a> {
    group: &'a FlightGroup,
    key: FlightKey,
    _guard: OwnedMutexGuard<()>,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let mut map = self.group.lock_map();
        // The map and this guard hold the only references when nobody waits
        let idle = map
            .get(&self.key)
            .map(|lock| Arc::strong_count(lock) <= 2)
            .unwrap_or(false);
        if idle {
            map.remove(&self.key);
        }
    }
}
