//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming request bodies and query strings.

use serde::Deserialize;

use crate::cache::ClearScope;

fn default_target_language() -> String {
    "English".to_string()
}

/// Non-empty, trimmed value of an optional text field.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Request body for POST /api/translate
///
/// # Fields
/// - `song_id`: Lyrics-source song id (preferred)
/// - `song_name`: Song title, used when no id is given
/// - `artist_name`: Optional artist to narrow the search
/// - `target_language`: Defaults to English; `original_only` skips translation
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateSongRequest {
    #[serde(default)]
    pub song_id: Option<u64>,
    #[serde(default)]
    pub song_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl TranslateSongRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.song_id.is_none() && present(&self.song_name).is_none() {
            return Some("song_id or song_name is required".to_string());
        }
        None
    }

    pub fn song_name(&self) -> Option<&str> {
        present(&self.song_name)
    }

    pub fn artist_name(&self) -> Option<&str> {
        present(&self.artist_name)
    }
}

/// Request body for POST /api/translate-word
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateWordRequest {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

impl TranslateWordRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if self.word.is_none() || self.context.is_none() {
            return Some("word and context are required".to_string());
        }
        None
    }
}

/// Query string for GET /api/search-artists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistSearchQuery {
    /// Partial artist name; may be empty
    #[serde(default)]
    pub q: Option<String>,
}

impl ArtistSearchQuery {
    pub fn query(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Query string for GET /api/artist-albums
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistAlbumsQuery {
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
}

impl ArtistAlbumsQuery {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if self.artist_id().is_none() && self.artist_name().is_none() {
            return Some("artist_id or artist_name is required".to_string());
        }
        None
    }

    pub fn artist_id(&self) -> Option<&str> {
        present(&self.artist_id)
    }

    pub fn artist_name(&self) -> Option<&str> {
        present(&self.artist_name)
    }
}

/// Query string for GET /api/album-songs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumSongsQuery {
    pub artist_id: Option<String>,
    pub album_id: Option<String>,
    pub artist_name: Option<String>,
}

impl AlbumSongsQuery {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if self.artist_id().is_none() && self.artist_name().is_none() {
            return Some("artist_id or artist_name is required".to_string());
        }
        None
    }

    pub fn artist_id(&self) -> Option<&str> {
        present(&self.artist_id)
    }

    pub fn album_id(&self) -> Option<&str> {
        present(&self.album_id)
    }

    pub fn artist_name(&self) -> Option<&str> {
        present(&self.artist_name)
    }
}

/// Request body for POST /api/cache/clear
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearRequest {
    /// Namespace to clear; absent, null or "all" clears everything
    #[serde(default)]
    pub cache_type: Option<String>,
}

impl ClearRequest {
    /// Parses a raw request body. Only an empty body means "no filter";
    /// anything else must be a well-formed request object.
    pub fn from_body(body: &[u8]) -> Result<Self, String> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| format!("Invalid clear request: {}", e))
    }

    /// Resolves the clear target, rejecting unknown namespaces.
    pub fn scope(&self) -> Result<ClearScope, String> {
        match self.cache_type.as_deref() {
            None => Ok(ClearScope::All),
            Some(name) => name.parse(),
        }
    }
}
