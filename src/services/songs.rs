//! Song lyrics and translations.

use tracing::{info, warn};

use crate::cache::Namespace;
use crate::error::{AppError, Result};
use crate::models::{Lyrics, LyricsTranslation, TranslateSongResponse, WordTranslation};
use crate::providers::ProviderError;
use crate::services::{record_part, SongService};

/// Target language that skips translation and echoes the original text.
pub const ORIGINAL_ONLY: &str = "original_only";

// == Song Ref ==
/// How the caller identifies a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongRef<'a> {
    /// Id on the lyrics source
    Id(u64),
    /// Free-text title
    Name(&'a str),
}

impl SongRef<'_> {
    fn cache_part(&self) -> String {
        match self {
            SongRef::Id(id) => id.to_string(),
            SongRef::Name(name) => name.to_string(),
        }
    }
}

impl SongService {
    // == Translate Song ==
    /// Lyrics of a song plus their translation into `target_language`.
    ///
    /// Lyrics are cached in `lyrics` under `{song}_{artist}`; translations in
    /// `translations` under `{song}_{artist}_{target_language}`. A missing
    /// artist is left empty.
    pub async fn translate_song(
        &self,
        song: SongRef<'_>,
        artist_name: Option<&str>,
        target_language: &str,
    ) -> Result<TranslateSongResponse> {
        let song_part = song.cache_part();
        let artist_part = artist_name.unwrap_or("");
        let translation_key = record_part(&[song_part.as_str(), artist_part, target_language]);

        let lyrics = self.lyrics_for(song, artist_name, &song_part).await?;

        if target_language == ORIGINAL_ONLY {
            return Ok(TranslateSongResponse {
                title: lyrics.title,
                artist: lyrics.artist,
                translated_lyrics: lyrics.lyrics.clone(),
                original_lyrics: lyrics.lyrics,
                target_language: "Original".to_string(),
            });
        }

        let translator = &self.providers.translation;
        let text = lyrics.lyrics.as_str();
        let translation: LyricsTranslation = self
            .read_through
            .fetch(
                Namespace::Translations,
                &[translation_key.as_str()],
                self.ttl.ttl_hours(Namespace::Translations),
                || async move { translator.translate_lyrics(text, target_language).await },
            )
            .await
            .map_err(|e| {
                warn!("Translation of '{}' failed: {}", song_part, e);
                AppError::Upstream("Translation failed".to_string())
            })?;

        Ok(TranslateSongResponse {
            title: lyrics.title,
            artist: lyrics.artist,
            original_lyrics: lyrics.lyrics,
            translated_lyrics: translation.translated,
            target_language: target_language.to_string(),
        })
    }

    async fn lyrics_for(
        &self,
        song: SongRef<'_>,
        artist_name: Option<&str>,
        song_part: &str,
    ) -> Result<Lyrics> {
        let provider = &self.providers.lyrics;
        let lyrics_key = record_part(&[song_part, artist_name.unwrap_or("")]);

        self.read_through
            .fetch(
                Namespace::Lyrics,
                &[lyrics_key.as_str()],
                self.ttl.ttl_hours(Namespace::Lyrics),
                || async move {
                    match song {
                        SongRef::Id(id) => {
                            let resolved = provider.resolve_song(id).await?;
                            info!("Resolved song {} to '{}'", id, resolved.title);
                            provider
                                .fetch_lyrics(&resolved.title, Some(resolved.artist.as_str()))
                                .await
                        }
                        SongRef::Name(name) => provider.fetch_lyrics(name, artist_name).await,
                    }
                },
            )
            .await
            .map_err(|e| match e {
                ProviderError::NotFound(_) => {
                    AppError::NotFound("Song not found or lyrics unavailable".to_string())
                }
                other => {
                    warn!("Fetching lyrics for '{}' failed: {}", song_part, other);
                    AppError::Upstream("Failed to fetch song".to_string())
                }
            })
    }

    // == Translate Word ==
    /// Translation of one word or phrase as used in `context`.
    ///
    /// Cached in `words` under `{word}_{context}_{target_language}`.
    pub async fn translate_word(
        &self,
        word: &str,
        context: &str,
        target_language: &str,
    ) -> Result<WordTranslation> {
        let translator = &self.providers.translation;
        let word_key = record_part(&[word, context, target_language]);

        self.read_through
            .fetch(
                Namespace::Words,
                &[word_key.as_str()],
                self.ttl.ttl_hours(Namespace::Words),
                || async move {
                    let raw = translator
                        .translate_word(word, context, target_language)
                        .await?;
                    Ok::<_, ProviderError>(WordTranslation {
                        word: word.to_string(),
                        translation: clean_word_translation(&raw),
                        context: context.to_string(),
                    })
                },
            )
            .await
            .map_err(|e| {
                warn!("Translation of word '{}' failed: {}", word, e);
                AppError::Upstream("Translation failed".to_string())
            })
    }
}

/// Strips whitespace, then quotes and trailing punctuation the model tends
/// to wrap single-word answers in.
fn clean_word_translation(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '.' | ','))
        .to_string()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{fake_service, FakeProviders};

    #[test]
    fn test_clean_word_translation() {
        assert_eq!(clean_word_translation("  \"word\".\n"), "word");
        assert_eq!(clean_word_translation("'big house',"), "big house");
        assert_eq!(clean_word_translation("it's"), "it's");
    }

    #[tokio::test]
    async fn test_translate_song_caches_lyrics_and_translation() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        for _ in 0..2 {
            let resp = service
                .translate_song(SongRef::Name("Imagine"), Some("John Lennon"), "Spanish")
                .await
                .unwrap();
            assert_eq!(resp.title, "Imagine");
            assert_eq!(resp.translated_lyrics, "[Spanish] Imagine there's no heaven");
            assert_eq!(resp.target_language, "Spanish");
        }

        assert_eq!(fakes.calls("fetch_lyrics"), 1);
        assert_eq!(fakes.calls("translate_lyrics"), 1);

        let stats = service.cache().stats();
        assert_eq!(stats.get(Namespace::Lyrics).count, 1);
        assert_eq!(stats.get(Namespace::Translations).count, 1);
    }

    #[tokio::test]
    async fn test_record_files_keep_existing_names() {
        let fakes = FakeProviders::default();
        let (dir, service) = fake_service(&fakes);

        service
            .translate_song(SongRef::Name("Imagine"), Some("John Lennon"), "Spanish")
            .await
            .unwrap();
        service
            .translate_word("palabra", "Esta es una palabra", "English")
            .await
            .unwrap();

        // md5("Imagine_John Lennon") and friends
        for (ns, file) in [
            ("lyrics", "27de6982393b42574d122941b4ac4912.json"),
            ("translations", "5e88226d079dd9082c5820b4a262536e.json"),
            ("words", "c7cb29beaf62a50094231b0edc3bed89.json"),
        ] {
            assert!(dir.path().join(ns).join(file).exists(), "{}/{}", ns, file);
        }
    }

    #[tokio::test]
    async fn test_translate_song_per_language_entries() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        for lang in ["Spanish", "French"] {
            service
                .translate_song(SongRef::Name("Imagine"), None, lang)
                .await
                .unwrap();
        }

        assert_eq!(fakes.calls("fetch_lyrics"), 1);
        assert_eq!(fakes.calls("translate_lyrics"), 2);
    }

    #[tokio::test]
    async fn test_translate_song_by_id_resolves_first() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        let resp = service
            .translate_song(SongRef::Id(42), None, "English")
            .await
            .unwrap();
        assert_eq!(resp.artist, "John Lennon");
        assert_eq!(fakes.calls("resolve_song"), 1);

        // Cached under the id
        assert!(service
            .cache()
            .record_path(Namespace::Lyrics, &["42_"])
            .exists());
    }

    #[tokio::test]
    async fn test_original_only_skips_translation() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        let resp = service
            .translate_song(SongRef::Name("Imagine"), None, ORIGINAL_ONLY)
            .await
            .unwrap();

        assert_eq!(resp.target_language, "Original");
        assert_eq!(resp.original_lyrics, resp.translated_lyrics);
        assert_eq!(fakes.calls("translate_lyrics"), 0);
    }

    #[tokio::test]
    async fn test_unknown_song_is_not_found_and_not_cached() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        let err = service
            .translate_song(SongRef::Name("Unknown Song"), None, "English")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(service.cache().stats().total().count, 0);
    }

    #[tokio::test]
    async fn test_translation_failure_keeps_lyrics_cached() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        let err = service
            .translate_song(SongRef::Name("Imagine"), None, "Klingon")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
        let stats = service.cache().stats();
        assert_eq!(stats.get(Namespace::Lyrics).count, 1);
        assert_eq!(stats.get(Namespace::Translations).count, 0);
    }

    #[tokio::test]
    async fn test_translate_word_is_cleaned_and_cached() {
        let fakes = FakeProviders::default();
        let (_dir, service) = fake_service(&fakes);

        let first = service
            .translate_word("palabra", "Esta es una palabra", "English")
            .await
            .unwrap();
        let second = service
            .translate_word("palabra", "Esta es una palabra", "English")
            .await
            .unwrap();

        assert_eq!(first.translation, "word");
        assert_eq!(first, second);
        assert_eq!(fakes.calls("translate_word"), 1);
    }
}
