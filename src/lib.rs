//! Lyrics Cache - a persistent, namespaced file cache for lyrics services
//!
//! Lyrics, translations, word translations and catalog data are stored as
//! timestamped JSON records and read through in front of external providers.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheStore, ClearScope, Namespace, TtlPolicy};
pub use config::Config;
pub use services::{Providers, SongService};
pub use tasks::spawn_sweep_task;
