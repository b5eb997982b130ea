//! Configuration Module
//!
//! Loads server and cache settings from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::{TtlPolicy, DEFAULT_CACHE_DIR, DEFAULT_CATALOG_TTL_HOURS, DEFAULT_TTL_HOURS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the file cache
    pub cache_dir: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between maintenance sweeps; 0 disables the sweep
    pub sweep_interval: u64,
    /// Run a single provider call per key when misses overlap
    pub coalesce_misses: bool,
    /// Read-time TTL per namespace
    pub ttl: TtlPolicy,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DIR` - Cache root directory (default: cache)
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 to disable (default: 0)
    /// - `COALESCE_MISSES` - Coalesce concurrent misses (default: true)
    /// - `LYRICS_TTL_HOURS`, `TRANSLATIONS_TTL_HOURS`, `WORDS_TTL_HOURS` (default: 720)
    /// - `CATALOG_TTL_HOURS` (default: 168)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_dir: env::var_os("CACHE_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            server_port: env_or("PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
            coalesce_misses: env_or("COALESCE_MISSES", defaults.coalesce_misses),
            ttl: TtlPolicy {
                lyrics_hours: env_or("LYRICS_TTL_HOURS", DEFAULT_TTL_HOURS),
                translations_hours: env_or("TRANSLATIONS_TTL_HOURS", DEFAULT_TTL_HOURS),
                words_hours: env_or("WORDS_TTL_HOURS", DEFAULT_TTL_HOURS),
                catalog_hours: env_or("CATALOG_TTL_HOURS", DEFAULT_CATALOG_TTL_HOURS),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            server_port: 5000,
            sweep_interval: 0,
            coalesce_misses: true,
            ttl: TtlPolicy::default(),
        }
    }
}
