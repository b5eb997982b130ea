//! Artist albums and album song lists.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::cache::Namespace;
use crate::error::Result;
use crate::models::{Album, SongSummary, Track};
use crate::providers::ProviderError;
use crate::services::{record_part, SongService, ABSENT_PART};

/// Albums with more tracks than this are listed individually; the rest are
/// grouped under "Singles & EPs".
pub const MIN_ALBUM_TRACKS: u32 = 5;

impl SongService {
    // == Artist Albums ==
    /// Album list for an artist, led by the synthetic "All Songs" entry.
    ///
    /// Cached in `catalog` under `albums_{artist_id}_{artist_name}`. The
    /// grouped singles are cached alongside under `singles_...` so that
    /// [`album_songs`](Self::album_songs) can expand them. Provider failures
    /// and unknown artists yield the uncached fallback list.
    pub async fn artist_albums(
        &self,
        artist_id: Option<&str>,
        artist_name: Option<&str>,
    ) -> Vec<Album> {
        let id_part = artist_id.unwrap_or(ABSENT_PART);
        let name_part = artist_name.unwrap_or(ABSENT_PART);
        let singles_key = record_part(&["singles", id_part, name_part]);
        let singles_key = singles_key.as_str();
        let catalog = &self.providers.catalog;
        let cache = self.cache();

        let result = self
            .read_through
            .fetch(
                Namespace::Catalog,
                &[record_part(&["albums", id_part, name_part]).as_str()],
                self.ttl.ttl_hours(Namespace::Catalog),
                || async move {
                    let name = match (artist_name, artist_id) {
                        (Some(name), _) => name.to_string(),
                        (None, Some(id)) => catalog.artist_name(id).await?,
                        (None, None) => {
                            return Err(ProviderError::NotFound("artist".to_string()))
                        }
                    };

                    let artist = catalog
                        .search_artist(&name)
                        .await?
                        .ok_or_else(|| ProviderError::NotFound(format!("artist {}", name)))?;

                    let (albums, singles) = group_albums(catalog.artist_albums(&artist.id).await?);
                    if !singles.is_empty() {
                        cache.set(Namespace::Catalog, &singles, &[singles_key]);
                    }
                    Ok(albums)
                },
            )
            .await;

        result.unwrap_or_else(|e| {
            warn!("Album lookup for '{}/{}' failed: {}", id_part, name_part, e);
            vec![Album::all_songs()]
        })
    }

    // == Album Songs ==
    /// Songs of one album, of the grouped singles, or of the whole artist.
    ///
    /// Cached in `catalog` under `songs_{artist}_{album_id}`, where the artist
    /// is the id when given and the name otherwise.
    /// `album_id` `"singles"` expands the singles cached by
    /// [`artist_albums`](Self::artist_albums), falling back to `"all"` when
    /// they are not cached; `"all"` or no album lists the artist's songs.
    pub async fn album_songs(
        &self,
        artist_id: Option<&str>,
        album_id: Option<&str>,
        artist_name: Option<&str>,
    ) -> Result<Vec<SongSummary>> {
        let artist_part = artist_id.or(artist_name).unwrap_or(ABSENT_PART);
        let songs_key = record_part(&["songs", artist_part, album_id.unwrap_or(ABSENT_PART)]);
        let singles_key = record_part(&[
            "singles",
            artist_id.unwrap_or(ABSENT_PART),
            artist_name.unwrap_or(ABSENT_PART),
        ]);
        let singles_key = singles_key.as_str();
        let name_part = artist_name.unwrap_or("");
        let catalog = &self.providers.catalog;
        let ttl = self.ttl.ttl_hours(Namespace::Catalog);

        let songs = self
            .read_through
            .fetch(
                Namespace::Catalog,
                &[songs_key.as_str()],
                ttl,
                || async move {
                    let mut album = album_id.unwrap_or("all");

                    if album == "singles" {
                        let singles: Option<Vec<Album>> =
                            self.cache().get(Namespace::Catalog, &[singles_key], ttl);
                        match singles {
                            Some(singles) => {
                                return Ok(self.singles_songs(&singles, name_part).await)
                            }
                            None => album = "all",
                        }
                    }

                    if album == "all" {
                        let id = artist_id.ok_or_else(|| {
                            ProviderError::NotFound("artist id is required to list songs".into())
                        })?;
                        return catalog.artist_songs(id).await;
                    }

                    let tracks = catalog.album_tracks(album).await?;
                    let mut matched = self.match_tracks(&tracks, name_part, true).await;
                    matched.sort_by_key(|song| song.track_number.unwrap_or(u32::MAX));
                    Ok(matched)
                },
            )
            .await?;

        Ok(songs)
    }

    /// Songs from every single and EP, deduplicated by id. Albums whose tracks
    /// cannot be listed are skipped.
    async fn singles_songs(&self, singles: &[Album], artist_name: &str) -> Vec<SongSummary> {
        let mut seen = HashSet::new();
        let mut songs = Vec::new();

        for single in singles {
            let tracks = match self.providers.catalog.album_tracks(&single.id).await {
                Ok(tracks) => tracks,
                Err(e) => {
                    debug!("Skipping tracks of '{}': {}", single.name, e);
                    continue;
                }
            };
            for song in self.match_tracks(&tracks, artist_name, false).await {
                if seen.insert(song.id) {
                    songs.push(song);
                }
            }
        }

        songs
    }

    /// Matches catalog tracks to lyrics-source songs, dropping unmatched ones.
    async fn match_tracks(
        &self,
        tracks: &[Track],
        artist_name: &str,
        keep_track_numbers: bool,
    ) -> Vec<SongSummary> {
        let mut matched = Vec::with_capacity(tracks.len());

        for track in tracks {
            let track_artist = track
                .artists
                .first()
                .map(String::as_str)
                .unwrap_or(artist_name);

            match self
                .providers
                .catalog
                .match_track(&track.name, track_artist)
                .await
            {
                Ok(Some(mut song)) => {
                    song.track_number = keep_track_numbers.then_some(track.track_number);
                    matched.push(song);
                }
                Ok(None) => debug!("No song matches track '{}'", track.name),
                Err(e) => debug!("Matching track '{}' failed: {}", track.name, e),
            }
        }

        matched
    }
}

/// Splits catalog albums into the listed albums (synthetic entries first) and
/// the small releases grouped as singles.
fn group_albums(all: Vec<Album>) -> (Vec<Album>, Vec<Album>) {
    let (full, singles): (Vec<Album>, Vec<Album>) = all
        .into_iter()
        .partition(|album| album.total_tracks > MIN_ALBUM_TRACKS);

    let mut albums = Vec::with_capacity(full.len() + 2);
    albums.push(Album::all_songs());
    if !singles.is_empty() {
        albums.push(Album::singles(singles.iter().map(|a| a.total_tracks).sum()));
    }
    albums.extend(full);

    (albums, singles)
}
