//! Provider Module
//!
//! Interfaces of the external services the cache fronts: the lyrics source,
//! the translation model and the music catalog. Clients are supplied by the
//! deployment; this crate only consumes them.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Album, ArtistSummary, CatalogArtist, Lyrics, LyricsTranslation, SongSummary, Track,
};

// == Provider Error ==
/// Failure reported by an external provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider has no match for the request
    #[error("{0}")]
    NotFound(String),

    /// No client is configured for this provider
    #[error("{0} provider is not configured")]
    Unavailable(&'static str),

    /// The call failed
    #[error("{0}")]
    Failed(String),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

// == Lyrics Provider ==
/// Source of song metadata and lyrics text.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Resolves a song id to its title and primary artist.
    async fn resolve_song(&self, song_id: u64) -> ProviderResult<SongSummary>;

    /// Fetches lyrics for a song, optionally narrowed by artist.
    async fn fetch_lyrics(&self, song_name: &str, artist_name: Option<&str>)
        -> ProviderResult<Lyrics>;

    /// Primary artists of the songs matching a free-text search, in result
    /// order. May contain duplicates.
    async fn search_artists(&self, query: &str) -> ProviderResult<Vec<ArtistSummary>>;
}

// == Translation Provider ==
/// Translation model.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates full lyrics line by line.
    async fn translate_lyrics(
        &self,
        lyrics: &str,
        target_language: &str,
    ) -> ProviderResult<LyricsTranslation>;

    /// Translates one word or short phrase as used in `context`.
    async fn translate_word(
        &self,
        word: &str,
        context: &str,
        target_language: &str,
    ) -> ProviderResult<String>;
}

// == Catalog Provider ==
/// Music catalog (artists, albums, tracks) plus song lookup on the lyrics
/// source for matching catalog tracks.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Name of the artist with the given lyrics-source id.
    async fn artist_name(&self, artist_id: &str) -> ProviderResult<String>;

    /// Best catalog match for an artist name.
    async fn search_artist(&self, name: &str) -> ProviderResult<Option<CatalogArtist>>;

    /// Albums of a catalog artist.
    async fn artist_albums(&self, catalog_artist_id: &str) -> ProviderResult<Vec<Album>>;

    /// Tracks of a catalog album.
    async fn album_tracks(&self, album_id: &str) -> ProviderResult<Vec<Track>>;

    /// Popular songs of an artist on the lyrics source.
    async fn artist_songs(&self, artist_id: &str) -> ProviderResult<Vec<SongSummary>>;

    /// Lyrics-source song matching a catalog track.
    async fn match_track(
        &self,
        track_name: &str,
        artist_name: &str,
    ) -> ProviderResult<Option<SongSummary>>;
}

// == Unconfigured ==
/// Stand-in for every provider when no client is wired; each call fails with
/// [`ProviderError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

#[async_trait]
impl LyricsProvider for Unconfigured {
    async fn resolve_song(&self, _song_id: u64) -> ProviderResult<SongSummary> {
        Err(ProviderError::Unavailable("lyrics"))
    }

    async fn fetch_lyrics(
        &self,
        _song_name: &str,
        _artist_name: Option<&str>,
    ) -> ProviderResult<Lyrics> {
        Err(ProviderError::Unavailable("lyrics"))
    }

    async fn search_artists(&self, _query: &str) -> ProviderResult<Vec<ArtistSummary>> {
        Err(ProviderError::Unavailable("lyrics"))
    }
}

#[async_trait]
impl TranslationProvider for Unconfigured {
    async fn translate_lyrics(
        &self,
        _lyrics: &str,
        _target_language: &str,
    ) -> ProviderResult<LyricsTranslation> {
        Err(ProviderError::Unavailable("translation"))
    }

    async fn translate_word(
        &self,
        _word: &str,
        _context: &str,
        _target_language: &str,
    ) -> ProviderResult<String> {
        Err(ProviderError::Unavailable("translation"))
    }
}

#[async_trait]
impl CatalogProvider for Unconfigured {
    async fn artist_name(&self, _artist_id: &str) -> ProviderResult<String> {
        Err(ProviderError::Unavailable("catalog"))
    }

    async fn search_artist(&self, _name: &str) -> ProviderResult<Option<CatalogArtist>> {
        Err(ProviderError::Unavailable("catalog"))
    }

    async fn artist_albums(&self, _catalog_artist_id: &str) -> ProviderResult<Vec<Album>> {
        Err(ProviderError::Unavailable("catalog"))
    }

    async fn album_tracks(&self, _album_id: &str) -> ProviderResult<Vec<Track>> {
        Err(ProviderError::Unavailable("catalog"))
    }

    async fn artist_songs(&self, _artist_id: &str) -> ProviderResult<Vec<SongSummary>> {
        Err(ProviderError::Unavailable("catalog"))
    }

    async fn match_track(
        &self,
        _track_name: &str,
        _artist_name: &str,
    ) -> ProviderResult<Option<SongSummary>> {
        Err(ProviderError::Unavailable("catalog"))
    }
}
