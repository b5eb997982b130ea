//! In-memory providers for service tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use crate::cache::{CacheStore, TtlPolicy};
use crate::models::{Album, ArtistSummary, CatalogArtist, Lyrics, LyricsTranslation, SongSummary, Track};
use crate::providers::{
    CatalogProvider, LyricsProvider, ProviderError, ProviderResult, TranslationProvider,
};
use crate::services::{Providers, SongService};

/// Canned lyrics, translation and catalog data with per-method call counts.
#[derive(Debug, Clone, Default)]
pub struct FakeProviders {
    calls: Arc<Mutex<HashMap<&'static str, usize>>>,
}

impl FakeProviders {
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    fn hit(&self, method: &'static str) {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
    }
}

pub fn fake_service(fakes: &FakeProviders) -> (TempDir, SongService) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(CacheStore::new(dir.path()).unwrap());
    let providers = Providers {
        lyrics: Arc::new(fakes.clone()),
        translation: Arc::new(fakes.clone()),
        catalog: Arc::new(fakes.clone()),
    };
    (dir, SongService::new(store, providers, TtlPolicy::default(), true))
}

fn song(id: u64, title: &str) -> SongSummary {
    SongSummary {
        id,
        title: title.to_string(),
        artist: "John Lennon".to_string(),
        track_number: None,
    }
}

fn album(id: &str, name: &str, total_tracks: u32) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        kind: Some("album".to_string()),
        release_date: None,
        total_tracks,
        image_url: None,
    }
}

fn track(name: &str, track_number: u32) -> Track {
    Track {
        name: name.to_string(),
        track_number,
        duration_ms: 180_000,
        artists: vec!["John Lennon".to_string()],
    }
}

#[async_trait]
impl LyricsProvider for FakeProviders {
    async fn resolve_song(&self, song_id: u64) -> ProviderResult<SongSummary> {
        self.hit("resolve_song");
        match song_id {
            42 => Ok(song(42, "Imagine")),
            _ => Err(ProviderError::NotFound(format!("song {}", song_id))),
        }
    }

    async fn fetch_lyrics(
        &self,
        song_name: &str,
        _artist_name: Option<&str>,
    ) -> ProviderResult<Lyrics> {
        self.hit("fetch_lyrics");
        match song_name {
            "Imagine" => Ok(Lyrics {
                title: "Imagine".to_string(),
                artist: "John Lennon".to_string(),
                lyrics: "Imagine there's no heaven".to_string(),
            }),
            other => Err(ProviderError::NotFound(format!("No results for {}", other))),
        }
    }

    async fn search_artists(&self, query: &str) -> ProviderResult<Vec<ArtistSummary>> {
        self.hit("search_artists");
        let artist = |id, name: &str| ArtistSummary {
            id,
            name: name.to_string(),
            image_url: None,
        };
        match query {
            "offline" => Err(ProviderError::Failed("search unavailable".to_string())),
            _ => Ok(vec![
                artist(1, "John Lennon"),
                artist(2, "Plastic Ono Band"),
                artist(1, "John Lennon"),
                artist(3, "Yoko Ono"),
            ]),
        }
    }
}

#[async_trait]
impl TranslationProvider for FakeProviders {
    async fn translate_lyrics(
        &self,
        lyrics: &str,
        target_language: &str,
    ) -> ProviderResult<LyricsTranslation> {
        self.hit("translate_lyrics");
        if target_language == "Klingon" {
            return Err(ProviderError::Failed("unsupported language".to_string()));
        }
        Ok(LyricsTranslation {
            translated: format!("[{}] {}", target_language, lyrics),
            source_language: "auto-detected".to_string(),
        })
    }

    async fn translate_word(
        &self,
        word: &str,
        _context: &str,
        _target_language: &str,
    ) -> ProviderResult<String> {
        self.hit("translate_word");
        match word {
            "palabra" => Ok(" \"word\".".to_string()),
            other => Ok(format!("{}-translated", other)),
        }
    }
}

#[async_trait]
impl CatalogProvider for FakeProviders {
    async fn artist_name(&self, artist_id: &str) -> ProviderResult<String> {
        self.hit("artist_name");
        match artist_id {
            "7" => Ok("John Lennon".to_string()),
            other => Err(ProviderError::NotFound(format!("artist {}", other))),
        }
    }

    async fn search_artist(&self, name: &str) -> ProviderResult<Option<CatalogArtist>> {
        self.hit("search_artist");
        match name {
            "John Lennon" => Ok(Some(CatalogArtist {
                id: "sp-lennon".to_string(),
                name: name.to_string(),
            })),
            "Broken" => Err(ProviderError::Failed("catalog down".to_string())),
            _ => Ok(None),
        }
    }

    async fn artist_albums(&self, catalog_artist_id: &str) -> ProviderResult<Vec<Album>> {
        self.hit("artist_albums");
        match catalog_artist_id {
            "sp-lennon" => Ok(vec![
                album("alb-imagine", "Imagine", 10),
                album("sgl-a", "Single A", 1),
                album("alb-mind", "Mind Games", 12),
                album("ep-b", "EP B", 4),
            ]),
            _ => Ok(Vec::new()),
        }
    }

    async fn album_tracks(&self, album_id: &str) -> ProviderResult<Vec<Track>> {
        self.hit("album_tracks");
        match album_id {
            "alb-imagine" => Ok(vec![
                track("Jealous Guy", 2),
                track("Imagine", 1),
                track("Unreleased Demo", 3),
            ]),
            "sgl-a" => Ok(vec![track("Imagine", 1)]),
            "ep-b" => Ok(vec![track("Oh Yoko!", 1), track("Imagine", 2)]),
            other => Err(ProviderError::Failed(format!("album {} unavailable", other))),
        }
    }

    async fn artist_songs(&self, artist_id: &str) -> ProviderResult<Vec<SongSummary>> {
        self.hit("artist_songs");
        match artist_id {
            "7" => Ok(vec![song(1, "Imagine"), song(2, "Jealous Guy")]),
            _ => Ok(Vec::new()),
        }
    }

    async fn match_track(
        &self,
        track_name: &str,
        _artist_name: &str,
    ) -> ProviderResult<Option<SongSummary>> {
        self.hit("match_track");
        Ok(match track_name {
            "Imagine" => Some(song(1, "Imagine")),
            "Jealous Guy" => Some(song(2, "Jealous Guy")),
            "Oh Yoko!" => Some(song(3, "Oh Yoko!")),
            _ => None,
        })
    }
}
