//! API Routes
//!
//! Configures the Axum router with every endpoint under `/api`.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    album_songs_handler, artist_albums_handler, clear_handler, health_handler,
    search_artists_handler, stats_handler, translate_handler, translate_word_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/translate", post(translate_handler))
        .route("/translate-word", post(translate_word_handler))
        .route("/search-artists", get(search_artists_handler))
        .route("/artist-albums", get(artist_albums_handler))
        .route("/album-songs", get(album_songs_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/clear", post(clear_handler))
        .route("/health", get(health_handler));

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
