//! API Handlers
//!
//! HTTP request handlers for each endpoint. Lookups go through
//! [`SongService`]; the cache endpoints talk to the store directly.

use std::io;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    AlbumSongsQuery, AlbumsResponse, ArtistAlbumsQuery, ArtistSearchQuery, ArtistsResponse,
    ClearRequest, ClearResponse, HealthResponse, SongsResponse, StatsResponse,
    TranslateSongRequest, TranslateSongResponse, TranslateWordRequest, WordTranslation,
};
use crate::services::{Providers, SongRef, SongService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lookup service; also owns the shared cache store
    pub songs: Arc<SongService>,
}

impl AppState {
    /// Creates a new AppState around a service.
    pub fn new(songs: SongService) -> Self {
        Self {
            songs: Arc::new(songs),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens (and creates if needed) the cache directory at `config.cache_dir`.
    pub fn from_config(config: &Config, providers: Providers) -> io::Result<Self> {
        let cache = Arc::new(CacheStore::new(&config.cache_dir)?);
        Ok(Self::new(SongService::new(
            cache,
            providers,
            config.ttl,
            config.coalesce_misses,
        )))
    }

    pub fn cache(&self) -> &CacheStore {
        self.songs.cache()
    }
}

/// Handler for POST /api/translate
///
/// Lyrics of a song by id or name, translated into the target language.
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(req): Json<TranslateSongRequest>,
) -> Result<Json<TranslateSongResponse>> {
    let song = match (req.song_id, req.song_name()) {
        (Some(id), _) => SongRef::Id(id),
        (None, Some(name)) => SongRef::Name(name),
        (None, None) => {
            return Err(AppError::InvalidRequest(
                req.validate().unwrap_or_default(),
            ))
        }
    };

    let response = state
        .songs
        .translate_song(song, req.artist_name(), &req.target_language)
        .await?;

    Ok(Json(response))
}

/// Handler for POST /api/translate-word
pub async fn translate_word_handler(
    State(state): State<AppState>,
    Json(req): Json<TranslateWordRequest>,
) -> Result<Json<WordTranslation>> {
    let (Some(word), Some(context)) = (req.word.as_deref(), req.context.as_deref()) else {
        return Err(AppError::InvalidRequest(
            req.validate().unwrap_or_default(),
        ));
    };

    let translation = state
        .songs
        .translate_word(word, context, &req.target_language)
        .await?;

    Ok(Json(translation))
}

/// Handler for GET /api/search-artists
///
/// Artist autocomplete; an empty `q` returns a default popular artist.
pub async fn search_artists_handler(
    State(state): State<AppState>,
    Query(query): Query<ArtistSearchQuery>,
) -> Result<Json<ArtistsResponse>> {
    let artists = state.songs.search_artists(query.query()).await?;
    Ok(Json(ArtistsResponse { artists }))
}

/// Handler for GET /api/artist-albums
///
/// Never fails once the query is valid; unknown artists get the "All Songs"
/// entry only.
pub async fn artist_albums_handler(
    State(state): State<AppState>,
    Query(query): Query<ArtistAlbumsQuery>,
) -> Result<Json<AlbumsResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let albums = state
        .songs
        .artist_albums(query.artist_id(), query.artist_name())
        .await;

    Ok(Json(AlbumsResponse { albums }))
}

/// Handler for GET /api/album-songs
pub async fn album_songs_handler(
    State(state): State<AppState>,
    Query(query): Query<AlbumSongsQuery>,
) -> Result<Json<SongsResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let songs = state
        .songs
        .album_songs(query.artist_id(), query.album_id(), query.artist_name())
        .await?;

    Ok(Json(SongsResponse { songs }))
}

/// Handler for GET /api/cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache().stats()))
}

/// Handler for POST /api/cache/clear
///
/// An empty body clears every namespace. A body that is not a valid clear
/// request is rejected before anything is deleted.
pub async fn clear_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ClearResponse>> {
    let req = ClearRequest::from_body(&body).map_err(AppError::InvalidRequest)?;
    let scope = req.scope().map_err(AppError::InvalidRequest)?;

    let removed = state.cache().clear(scope);
    Ok(Json(ClearResponse::new(scope, removed)))
}

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
