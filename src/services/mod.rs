//! Services Module
//!
//! The boundary operations: each one reads through the cache in front of an
//! external provider.

mod artists;
mod catalog;
mod read_through;
mod songs;

#[cfg(test)]
pub(crate) mod fakes;

use std::sync::Arc;

use crate::cache::{CacheStore, TtlPolicy};
use crate::providers::{CatalogProvider, LyricsProvider, TranslationProvider, Unconfigured};

pub use read_through::ReadThrough;
pub use songs::SongRef;

// == Record Keys ==
/// Stand-in for an absent catalog argument inside a record key.
pub const ABSENT_PART: &str = "None";

/// Joins call-site fields with `_` into the single key part the cache
/// directory has always been keyed by, so existing records stay readable.
pub fn record_part(fields: &[&str]) -> String {
    fields.join("_")
}

// == Providers ==
/// The external clients the service calls on a miss.
#[derive(Clone)]
pub struct Providers {
    pub lyrics: Arc<dyn LyricsProvider>,
    pub translation: Arc<dyn TranslationProvider>,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl Providers {
    /// Providers that fail every call.
    ///
    /// The server starts with these; cached records are still served, and
    /// every miss surfaces as an upstream failure.
    pub fn unconfigured() -> Self {
        Self {
            lyrics: Arc::new(Unconfigured),
            translation: Arc::new(Unconfigured),
            catalog: Arc::new(Unconfigured),
        }
    }
}

// == Song Service ==
/// Lyrics, translations and catalog lookups behind the shared cache.
pub struct SongService {
    read_through: ReadThrough,
    providers: Providers,
    ttl: TtlPolicy,
}

impl SongService {
    // == Constructor ==
    /// Creates the service over a shared store.
    ///
    /// # Arguments
    /// * `cache` - Store shared with the stats and clear endpoints
    /// * `providers` - External clients called on a miss
    /// * `ttl` - Read-time TTL per namespace
    /// * `coalesce_misses` - Run one fetch per key for concurrent misses
    pub fn new(
        cache: Arc<CacheStore>,
        providers: Providers,
        ttl: TtlPolicy,
        coalesce_misses: bool,
    ) -> Self {
        Self {
            read_through: ReadThrough::new(cache, coalesce_misses),
            providers,
            ttl,
        }
    }

    pub fn cache(&self) -> &CacheStore {
        self.read_through.cache()
    }

    /// Owned handle to the store, for background tasks.
    pub fn shared_cache(&self) -> Arc<CacheStore> {
        self.read_through.shared_cache()
    }

    pub fn ttl_policy(&self) -> &TtlPolicy {
        &self.ttl
    }
}
