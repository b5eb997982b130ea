//! Read-Through Helper
//!
//! Check the cache, fall back to the provider on a miss, write successful
//! results back. Failed fetches are never cached.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{derive_key, CacheStore, FlightGroup, Namespace};
use crate::providers::ProviderResult;

// == Read Through ==
/// Read-through access to a shared [`CacheStore`].
///
/// With coalescing enabled, concurrent misses on one key run a single fetch:
/// later callers wait for the first and then read its result from the store.
/// Without it, each miss fetches independently and the last write wins.
#[derive(Debug)]
pub struct ReadThrough {
    cache: Arc<CacheStore>,
    flights: Option<FlightGroup>,
}

impl ReadThrough {
    pub fn new(cache: Arc<CacheStore>, coalesce_misses: bool) -> Self {
        Self {
            cache,
            flights: coalesce_misses.then(FlightGroup::new),
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn shared_cache(&self) -> Arc<CacheStore> {
        Arc::clone(&self.cache)
    }

    // == Fetch ==
    /// Returns the cached value for `parts`, or runs `fetch` and caches its
    /// successful result under the same parts.
    pub async fn fetch<T, F, Fut>(
        &self,
        namespace: Namespace,
        parts: &[&str],
        ttl_hours: Option<u64>,
        fetch: F,
    ) -> ProviderResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ProviderResult<T>>,
    {
        if let Some(hit) = self.cache.get(namespace, parts, ttl_hours) {
            return Ok(hit);
        }

        let _flight = match &self.flights {
            Some(flights) => {
                let guard = flights.acquire(namespace, &derive_key(parts)).await;
                // Another caller may have filled the key while we waited
                if let Some(hit) = self.cache.get(namespace, parts, ttl_hours) {
                    debug!("Coalesced miss in {} served from cache", namespace);
                    return Ok(hit);
                }
                Some(guard)
            }
            None => None,
        };

        let value = fetch().await?;
        self.cache.set(namespace, &value, parts);
        Ok(value)
    }
}
