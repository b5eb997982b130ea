//! API Module
//!
//! HTTP handlers and routing for the lyrics cache REST API.
//!
//! # Endpoints
//! - `POST /api/translate` - Lyrics of a song with their translation
//! - `POST /api/translate-word` - Translate one word in context
//! - `GET /api/search-artists` - Artist autocomplete
//! - `GET /api/artist-albums` - Albums of an artist
//! - `GET /api/album-songs` - Songs of an album
//! - `GET /api/cache/stats` - Per-namespace record counts and sizes
//! - `POST /api/cache/clear` - Clear one namespace or all of them
//! - `GET /api/health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
