//! Artist autocomplete. Results are not cached.

use std::collections::HashSet;

use crate::error::Result;
use crate::models::ArtistSummary;
use crate::services::SongService;

/// Search used when the caller has typed nothing yet.
pub const DEFAULT_ARTIST_QUERY: &str = "Drake";

/// Most artists returned by one search.
pub const MAX_ARTIST_RESULTS: usize = 30;

impl SongService {
    // == Search Artists ==
    /// Distinct artists matching a partial name.
    ///
    /// Queries of two or more characters keep only artists whose name
    /// contains the query (case-insensitive), unless none do.
    pub async fn search_artists(&self, query: &str) -> Result<Vec<ArtistSummary>> {
        let query = match query.trim() {
            "" => DEFAULT_ARTIST_QUERY,
            q => q,
        };

        let hits = self.providers.lyrics.search_artists(query).await?;

        let mut seen = HashSet::new();
        let artists: Vec<ArtistSummary> = hits
            .into_iter()
            .filter(|artist| seen.insert(artist.id))
            .collect();

        if query.chars().count() >= 2 {
            let needle = query.to_lowercase();
            let matching: Vec<ArtistSummary> = artists
                .iter()
                .filter(|artist| artist.name.to_lowercase().contains(&needle))
                .take(MAX_ARTIST_RESULTS)
                .cloned()
                .collect();
            if !matching.is_empty() {
                return Ok(matching);
            }
        }

        Ok(artists.into_iter().take(MAX_ARTIST_RESULTS).collect())
    }
}
