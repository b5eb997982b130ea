//! Cache Module
//!
//! Persistent, namespaced file cache with read-time TTL expiry.

mod entry;
mod flight;
mod key;
mod namespace;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::{now_local, CacheEntry};
pub use flight::{FlightGroup, FlightGuard};
pub use key::derive_key;
pub use namespace::{ClearScope, Namespace};
pub use policy::TtlPolicy;
pub use stats::{CacheStats, NamespaceStats};
pub use store::CacheStore;

// == Public Constants ==
/// Separator placed between key parts before hashing
pub const KEY_SEPARATOR: char = '|';

/// Root directory used when none is configured
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// File extension of record files
pub const RECORD_EXTENSION: &str = "json";

/// Default TTL for lyrics, translations and words (30 days)
pub const DEFAULT_TTL_HOURS: u64 = 720;

/// Default TTL for catalog data (7 days)
pub const DEFAULT_CATALOG_TTL_HOURS: u64 = 168;
