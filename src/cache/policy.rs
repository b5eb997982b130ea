//! TTL Policy Module
//!
//! Caller-side default TTLs per namespace. The store never enforces these on
//! its own; they are passed at read time and used by the optional sweep.

use crate::cache::{Namespace, DEFAULT_CATALOG_TTL_HOURS, DEFAULT_TTL_HOURS};

// == TTL Policy ==
/// Default read-time TTL, in hours, for each namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    pub lyrics_hours: u64,
    pub translations_hours: u64,
    pub words_hours: u64,
    pub catalog_hours: u64,
}

impl TtlPolicy {
    /// TTL to apply when reading `namespace`.
    pub fn ttl_hours(&self, namespace: Namespace) -> Option<u64> {
        Some(match namespace {
            Namespace::Lyrics => self.lyrics_hours,
            Namespace::Translations => self.translations_hours,
            Namespace::Words => self.words_hours,
            Namespace::Catalog => self.catalog_hours,
        })
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            lyrics_hours: DEFAULT_TTL_HOURS,
            translations_hours: DEFAULT_TTL_HOURS,
            words_hours: DEFAULT_TTL_HOURS,
            catalog_hours: DEFAULT_CATALOG_TTL_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_hours(Namespace::Lyrics), Some(720));
        assert_eq!(policy.ttl_hours(Namespace::Translations), Some(720));
        assert_eq!(policy.ttl_hours(Namespace::Words), Some(720));
        assert_eq!(policy.ttl_hours(Namespace::Catalog), Some(168));
    }
}
