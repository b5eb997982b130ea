//! Request, response and payload models
//!
//! DTOs for HTTP bodies plus the payload shapes stored in each namespace.

pub mod payloads;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use payloads::{
    Album, ArtistSummary, CatalogArtist, Lyrics, LyricsTranslation, SongSummary, Track,
    WordTranslation,
};
pub use requests::{
    AlbumSongsQuery, ArtistAlbumsQuery, ArtistSearchQuery, ClearRequest, TranslateSongRequest,
    TranslateWordRequest,
};
pub use responses::{
    AlbumsResponse, ArtistsResponse, ClearResponse, ErrorResponse, HealthResponse,
    NamespaceStatsResponse, SongsResponse, StatsResponse, TranslateSongResponse,
};
