//! Cache Entry Module
//!
//! The persisted envelope around an opaque payload, and its read-time TTL check.

use chrono::{DateTime, Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// A persisted record: the time of the last write plus the caller's payload.
///
/// The payload is never interpreted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Local wall-clock time of the most recent `set`
    #[serde(with = "local_timestamp")]
    pub timestamp: NaiveDateTime,
    /// The opaque payload
    pub data: T,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Wraps a payload with the current local time.
    pub fn new(data: T) -> Self {
        Self {
            timestamp: now_local(),
            data,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was written, relative to `now`.
    pub fn age_at(&self, now: NaiveDateTime) -> Duration {
        now - self.timestamp
    }

    // == Is Expired ==
    /// Checks the entry against a read-time TTL in hours.
    ///
    /// An entry is expired once its age strictly exceeds the TTL. `None`
    /// never expires.
    pub fn is_expired_at(&self, ttl_hours: Option<u64>, now: NaiveDateTime) -> bool {
        let Some(hours) = ttl_hours else {
            return false;
        };
        match i64::try_from(hours).ok().and_then(Duration::try_hours) {
            Some(ttl) => self.age_at(now) > ttl,
            None => false,
        }
    }

    /// Same as [`is_expired_at`](Self::is_expired_at) against the current time.
    pub fn is_expired(&self, ttl_hours: Option<u64>) -> bool {
        self.is_expired_at(ttl_hours, now_local())
    }
}

// == Utility Functions ==
/// Current local time without offset, as recorded in entry files.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// On-disk timestamp format: ISO-8601 local time, microsecond precision.
mod local_timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    // `%.f` also accepts a missing fraction
    const READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<NaiveDateTime, String> {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, READ_FORMAT) {
            return Ok(naive);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Local).naive_local())
            .map_err(|e| format!("invalid timestamp '{}': {}", raw, e))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(raw: &str) -> NaiveDateTime {
        local_timestamp::parse(raw).unwrap()
    }

    #[test]
    fn test_entry_no_ttl_never_expires() {
        let mut entry = CacheEntry::new(json!({"a": 1}));
        entry.timestamp = now_local() - Duration::days(3650);
        assert!(!entry.is_expired(None));
    }

    #[test]
    fn test_entry_expired_after_ttl() {
        let mut entry = CacheEntry::new(json!("x"));
        entry.timestamp = now_local() - Duration::days(31);
        assert!(entry.is_expired(Some(720)));
        assert!(!entry.is_expired(Some(24 * 40)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let written = at("2024-03-01T10:00:00.000000");
        let entry = CacheEntry {
            timestamp: written,
            data: (),
        };

        // Exactly at the TTL is still fresh; one microsecond later it is not
        assert!(!entry.is_expired_at(Some(1), at("2024-03-01T11:00:00.000000")));
        assert!(entry.is_expired_at(Some(1), at("2024-03-01T11:00:00.000001")));
    }

    #[test]
    fn test_huge_ttl_never_expires() {
        let entry = CacheEntry {
            timestamp: at("2000-01-01T00:00:00"),
            data: (),
        };
        assert!(!entry.is_expired(Some(u64::MAX)));
    }

    #[test]
    fn test_timestamp_written_with_microseconds() {
        let entry = CacheEntry {
            timestamp: at("2024-03-01T10:00:00"),
            data: json!(null),
        };
        let text = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            text,
            r#"{"timestamp":"2024-03-01T10:00:00.000000","data":null}"#
        );
    }

    #[test]
    fn test_timestamp_accepts_existing_formats() {
        assert_eq!(
            at("2024-03-01T10:00:00.123456").format("%H:%M:%S%.6f").to_string(),
            "10:00:00.123456"
        );
        assert_eq!(at("2024-03-01T10:00:00"), at("2024-03-01T10:00:00.000000"));
        assert!(local_timestamp::parse("2024-03-01T10:00:00+00:00").is_ok());
        assert!(local_timestamp::parse("yesterday").is_err());
    }
}
