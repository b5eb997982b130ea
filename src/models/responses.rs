//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::{CacheStats, ClearScope, NamespaceStats};
use crate::models::{Album, ArtistSummary, SongSummary};

/// Response body for POST /api/translate
#[derive(Debug, Clone, Serialize)]
pub struct TranslateSongResponse {
    pub title: String,
    pub artist: String,
    pub original_lyrics: String,
    pub translated_lyrics: String,
    pub target_language: String,
}

/// Response body for GET /api/search-artists
#[derive(Debug, Clone, Serialize)]
pub struct ArtistsResponse {
    pub artists: Vec<ArtistSummary>,
}

/// Response body for GET /api/artist-albums
#[derive(Debug, Clone, Serialize)]
pub struct AlbumsResponse {
    pub albums: Vec<Album>,
}

/// Response body for GET /api/album-songs
#[derive(Debug, Clone, Serialize)]
pub struct SongsResponse {
    pub songs: Vec<SongSummary>,
}

/// Usage of one namespace in GET /api/cache/stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamespaceStatsResponse {
    /// Number of records
    pub count: usize,
    /// Total record size in MiB, two decimals
    pub size_mb: f64,
}

impl From<NamespaceStats> for NamespaceStatsResponse {
    fn from(stats: NamespaceStats) -> Self {
        Self {
            count: stats.count,
            size_mb: stats.size_mb(),
        }
    }
}

/// Response body for GET /api/cache/stats, keyed by namespace name
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct StatsResponse(pub BTreeMap<&'static str, NamespaceStatsResponse>);

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self(
            stats
                .iter()
                .map(|(ns, s)| (ns.as_str(), NamespaceStatsResponse::from(s)))
                .collect(),
        )
    }
}

/// Response body for POST /api/cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
    /// Number of records deleted
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(scope: ClearScope, removed: usize) -> Self {
        Self {
            success: true,
            message: format!("Cache cleared: {}", scope),
            removed,
        }
    }
}

/// Response body for GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status ("ok")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Namespace;
    use serde_json::json;

    #[test]
    fn test_stats_response_shape() {
        let mut stats = CacheStats::new();
        stats.insert(
            Namespace::Lyrics,
            NamespaceStats {
                count: 2,
                size_bytes: 3 * 1024 * 1024 / 2,
            },
        );

        let value = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(value["lyrics"], json!({"count": 2, "size_mb": 1.5}));
        assert_eq!(value["catalog"], json!({"count": 0, "size_mb": 0.0}));
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_clear_response_message() {
        let resp = ClearResponse::new(ClearScope::All, 3);
        assert_eq!(resp.message, "Cache cleared: all");

        let resp = ClearResponse::new(ClearScope::Only(Namespace::Words), 0);
        assert_eq!(resp.message, "Cache cleared: words");
        assert!(resp.success);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert!(json.contains("\"ok\""));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
