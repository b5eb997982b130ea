//! Cache Statistics Module
//!
//! Record counts and on-disk sizes per namespace, measured at call time.

use serde::Serialize;

use crate::cache::Namespace;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// == Namespace Stats ==
/// Usage of a single namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceStats {
    /// Number of records
    pub count: usize,
    /// Total bytes of all records
    pub size_bytes: u64,
}

impl NamespaceStats {
    /// Adds one record of `size` bytes.
    pub fn record(&mut self, size: u64) {
        self.count += 1;
        self.size_bytes += size;
    }

    /// Size in MiB rounded to two decimals, for display.
    pub fn size_mb(&self) -> f64 {
        (self.size_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
    }
}

// == Cache Stats ==
/// Usage of every namespace.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    namespaces: Vec<(Namespace, NamespaceStats)>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates stats with every namespace at zero.
    pub fn new() -> Self {
        Self {
            namespaces: Namespace::ALL
                .iter()
                .map(|ns| (*ns, NamespaceStats::default()))
                .collect(),
        }
    }

    /// Replaces the figures for one namespace.
    pub fn insert(&mut self, namespace: Namespace, stats: NamespaceStats) {
        match self.namespaces.iter_mut().find(|(ns, _)| *ns == namespace) {
            Some((_, slot)) => *slot = stats,
            None => self.namespaces.push((namespace, stats)),
        }
    }

    /// Figures for one namespace.
    pub fn get(&self, namespace: Namespace) -> NamespaceStats {
        self.namespaces
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, stats)| *stats)
            .unwrap_or_default()
    }

    /// Iterates namespaces in their fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Namespace, NamespaceStats)> + '_ {
        self.namespaces.iter().copied()
    }

    /// Sum across all namespaces.
    pub fn total(&self) -> NamespaceStats {
        self.namespaces
            .iter()
            .fold(NamespaceStats::default(), |acc, (_, s)| NamespaceStats {
                count: acc.count + s.count,
                size_bytes: acc.size_bytes + s.size_bytes,
            })
    }
}
