//! Cache Store Module
//!
//! File-backed store: one directory per namespace, one JSON record per key.
//! Every operation is a short synchronous sequence of filesystem calls and is
//! safe to call concurrently; I/O and parse failures degrade to a miss or a
//! dropped write and are logged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::{
    derive_key, now_local, CacheEntry, CacheStats, ClearScope, Namespace, NamespaceStats,
    TtlPolicy, RECORD_EXTENSION,
};
use crate::error::StoreError;

// == Cache Store ==
/// Namespaced persistent key to entry mapping.
#[derive(Debug)]
pub struct CacheStore {
    /// Root directory holding one subdirectory per namespace
    root: PathBuf,
    /// Disambiguates temporary files written by this process
    write_seq: AtomicU64,
}

impl CacheStore {
    // == Constructor ==
    /// Opens a store rooted at `root`, creating the root and every namespace
    /// directory if they do not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        for namespace in Namespace::ALL {
            fs::create_dir_all(root.join(namespace.as_str()))?;
        }
        debug!("Cache store opened at {}", root.display());

        Ok(Self {
            root,
            write_seq: AtomicU64::new(0),
        })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the records of `namespace`.
    pub fn namespace_dir(&self, namespace: Namespace) -> PathBuf {
        self.root.join(namespace.as_str())
    }

    /// Location of the record for `parts` in `namespace`.
    pub fn record_path(&self, namespace: Namespace, parts: &[&str]) -> PathBuf {
        self.key_path(namespace, &derive_key(parts))
    }

    fn key_path(&self, namespace: Namespace, key: &str) -> PathBuf {
        self.namespace_dir(namespace)
            .join(format!("{}.{}", key, RECORD_EXTENSION))
    }

    // == Get ==
    /// Looks up the payload stored under `parts`.
    ///
    /// Returns `None` when the record is absent, older than `ttl_hours`, or
    /// cannot be decoded into `T`. Expired and undecodable records are
    /// deleted on the way out. `ttl_hours = None` ignores the record's age.
    pub fn get<T: DeserializeOwned>(
        &self,
        namespace: Namespace,
        parts: &[&str],
        ttl_hours: Option<u64>,
    ) -> Option<T> {
        let path = self.record_path(namespace, parts);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Cache miss in {}: {}", namespace, path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read cache record {}: {}", path.display(), e);
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    "Removing malformed cache record {}: {}",
                    path.display(),
                    StoreError::from(e)
                );
                remove_record(&path);
                return None;
            }
        };

        if entry.is_expired(ttl_hours) {
            debug!("Removing expired cache record {}", path.display());
            remove_record(&path);
            return None;
        }

        debug!("Cache hit in {}: {}", namespace, path.display());
        Some(entry.data)
    }

    /// Untyped variant of [`get`](Self::get).
    pub fn get_value(
        &self,
        namespace: Namespace,
        parts: &[&str],
        ttl_hours: Option<u64>,
    ) -> Option<Value> {
        self.get(namespace, parts, ttl_hours)
    }

    // == Set ==
    /// Stores `payload` under `parts`, replacing any existing record.
    ///
    /// Failures are logged and swallowed; callers must not rely on the
    /// record existing afterwards.
    pub fn set<T: Serialize + ?Sized>(&self, namespace: Namespace, payload: &T, parts: &[&str]) {
        let key = derive_key(parts);
        if let Err(e) = self.write_entry(namespace, &key, &CacheEntry::new(payload)) {
            warn!("Failed to write cache record {}/{}: {}", namespace, key, e);
        }
    }

    /// Writes a complete entry for `key`.
    ///
    /// The record is written to a dot-prefixed temporary file first and then
    /// renamed into place, so readers see either the old or the new record.
    pub(crate) fn write_entry<T: Serialize>(
        &self,
        namespace: Namespace,
        key: &str,
        entry: &CacheEntry<T>,
    ) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entry)?;

        let dir = self.namespace_dir(namespace);
        fs::create_dir_all(&dir)?;

        let target = self.key_path(namespace, key);
        let tmp = dir.join(format!(
            ".{}.tmp.{}.{}",
            key,
            process::id(),
            self.write_seq.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = fs::write(&tmp, &bytes).and_then(|_| fs::rename(&tmp, &target)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!("Cached {} bytes in {}: {}", bytes.len(), namespace, target.display());
        Ok(())
    }

    // == Clear ==
    /// Deletes every record in `scope`. Returns the number of records removed.
    pub fn clear(&self, scope: ClearScope) -> usize {
        let mut removed = 0;

        for namespace in scope.namespaces() {
            for path in self.record_files(namespace) {
                match fs::remove_file(&path) {
                    Ok(()) => removed += 1,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => warn!("Failed to remove cache record {}: {}", path.display(), e),
                }
            }
        }

        info!("Cleared {} cache records ({})", removed, scope);
        removed
    }

    // == Stats ==
    /// Counts records and their total size per namespace.
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::new();

        for namespace in Namespace::ALL {
            let mut ns_stats = NamespaceStats::default();
            for path in self.record_files(namespace) {
                // Records removed since the listing are skipped
                if let Ok(meta) = fs::metadata(&path) {
                    ns_stats.record(meta.len());
                }
            }
            stats.insert(namespace, ns_stats);
        }

        stats
    }

    // == Sweep Expired ==
    /// Removes every record older than its namespace's TTL in `policy`, along
    /// with records that no longer parse.
    ///
    /// Returns the number of records removed. Reads are unaffected: `get`
    /// keeps applying whatever TTL its caller passes.
    pub fn sweep_expired(&self, policy: &TtlPolicy) -> usize {
        let now = now_local();
        let mut removed = 0;

        for namespace in Namespace::ALL {
            let ttl = policy.ttl_hours(namespace);
            for path in self.record_files(namespace) {
                let stale = match fs::read(&path) {
                    Ok(bytes) => match serde_json::from_slice::<CacheEntry<IgnoredAny>>(&bytes) {
                        Ok(entry) => entry.is_expired_at(ttl, now),
                        Err(e) => {
                            warn!("Sweeping malformed cache record {}: {}", path.display(), e);
                            true
                        }
                    },
                    Err(_) => false,
                };

                if stale && remove_record(&path) {
                    removed += 1;
                }
            }
        }

        removed
    }

    // == Record Listing ==
    /// Record files currently in `namespace`, skipping temporary files.
    fn record_files(&self, namespace: Namespace) -> Vec<PathBuf> {
        let dir = self.namespace_dir(namespace);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to list cache directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.path())
            .filter(|path| is_record_file(path))
            .collect()
    }
}

fn is_record_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(true);
    !hidden && path.extension().and_then(|ext| ext.to_str()) == Some(RECORD_EXTENSION)
}

/// Deletes a record, tolerating a concurrent deletion. Returns true if this
/// call removed it.
fn remove_record(path: &Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            warn!("Failed to remove cache record {}: {}", path.display(), e);
            false
        }
    }
}
