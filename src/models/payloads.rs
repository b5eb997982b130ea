//! Cached payload shapes
//!
//! What each namespace stores. The store itself treats these as opaque JSON.

use serde::{Deserialize, Serialize};

/// Lyrics of one song (`lyrics` namespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lyrics {
    pub title: String,
    pub artist: String,
    pub lyrics: String,
}

/// Full-text translation of a song (`translations` namespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricsTranslation {
    pub translated: String,
    pub source_language: String,
}

/// Translation of a single word in context (`words` namespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTranslation {
    pub word: String,
    pub translation: String,
    pub context: String,
}

/// Artist hit from the lyrics source's search, used for autocomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Artist as known to the music catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogArtist {
    pub id: String,
    pub name: String,
}

/// Album listing entry (`catalog` namespace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Album {
    /// Synthetic entry listing every song by the artist.
    pub fn all_songs() -> Self {
        Self::synthetic("all", "All Songs", "all", 0)
    }

    /// Synthetic entry grouping singles and EPs.
    pub fn singles(total_tracks: u32) -> Self {
        Self::synthetic("singles", "Singles & EPs", "compilation", total_tracks)
    }

    fn synthetic(id: &str, name: &str, kind: &str, total_tracks: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: Some(kind.to_string()),
            release_date: None,
            total_tracks,
            image_url: None,
        }
    }
}

/// Track of a catalog album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub track_number: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<String>,
}

/// Song known to the lyrics source (`catalog` namespace song lists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSummary {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_synthetic_albums_serialize_type_field() {
        let all = serde_json::to_value(Album::all_songs()).unwrap();
        assert_eq!(
            all,
            json!({"id": "all", "name": "All Songs", "type": "all", "total_tracks": 0})
        );

        let singles = serde_json::to_value(Album::singles(7)).unwrap();
        assert_eq!(singles["type"], "compilation");
        assert_eq!(singles["total_tracks"], 7);
    }

    #[test]
    fn test_album_accepts_sparse_records() {
        let album: Album = serde_json::from_value(json!({"id": "x", "name": "X"})).unwrap();
        assert_eq!(album.total_tracks, 0);
        assert!(album.kind.is_none());
    }
}
