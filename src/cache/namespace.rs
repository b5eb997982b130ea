//! Namespace Module
//!
//! The fixed partitions of the cache key space, one directory each.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// == Namespace ==
/// A fixed partition of the cache, one per resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Lyrics,
    Translations,
    Words,
    Catalog,
}

impl Namespace {
    /// Every namespace, in directory-creation order.
    pub const ALL: [Namespace; 4] = [
        Namespace::Lyrics,
        Namespace::Translations,
        Namespace::Words,
        Namespace::Catalog,
    ];

    /// Subdirectory name under the store root.
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Lyrics => "lyrics",
            Namespace::Translations => "translations",
            Namespace::Words => "words",
            Namespace::Catalog => "catalog",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = String;

    /// Accepts the directory names plus the singular labels older clients send.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lyrics" => Ok(Namespace::Lyrics),
            "translations" | "translation" => Ok(Namespace::Translations),
            "words" | "word" => Ok(Namespace::Words),
            "catalog" | "spotify" => Ok(Namespace::Catalog),
            other => Err(format!("Unknown cache namespace: {}", other)),
        }
    }
}

// == Clear Scope ==
/// Target of a clear operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    All,
    Only(Namespace),
}

impl ClearScope {
    /// Namespaces covered by this scope.
    pub fn namespaces(self) -> Vec<Namespace> {
        match self {
            ClearScope::All => Namespace::ALL.to_vec(),
            ClearScope::Only(ns) => vec![ns],
        }
    }
}

impl fmt::Display for ClearScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearScope::All => f.write_str("all"),
            ClearScope::Only(ns) => ns.fmt(f),
        }
    }
}

impl FromStr for ClearScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(ClearScope::All)
        } else {
            s.parse().map(ClearScope::Only)
        }
    }
}
