use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    spotify::SpotifyApi,
    types::{AudioFeatureScores, PlaylistContext, RawTrack, TrackRecord},
    utils::{self, ARTIST_IMAGE_PLACEHOLDER, COVER_PLACEHOLDER},
};

/// Per-run memo of artist images and audio features.
#[derive(Debug, Default)]
struct LookupCache {
    artist_images: HashMap<String, String>,
    features: HashMap<String, AudioFeatureScores>,
}

/// Turns raw Spotify track payloads into [`TrackRecord`]s.
///
/// Every record needs two extra lookups: the first artist's profile (for its
/// image) and the track's audio features. With the cache enabled each artist
/// and each track is looked up at most once per normalizer; the records
/// produced are identical either way.
pub struct TrackNormalizer<'a, A: SpotifyApi + ?Sized> {
    api: &'a A,
    cache: Option<LookupCache>,
}

impl<'a, A: SpotifyApi + ?Sized> TrackNormalizer<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            cache: Some(LookupCache::default()),
        }
    }

    /// A normalizer that repeats both lookups for every track.
    pub fn without_cache(api: &'a A) -> Self {
        Self { api, cache: None }
    }

    pub fn api(&self) -> &'a A {
        self.api
    }

    /// Normalizes one track, attaching `playlist` when given.
    ///
    /// # Errors
    ///
    /// - [`Error::Payload`] when the track lists no artist
    /// - [`Error::MissingAudioFeatures`] when Spotify has no features for it
    /// - any error from the two lookups
    pub async fn normalize(
        &mut self,
        raw: &RawTrack,
        playlist: Option<&PlaylistContext>,
    ) -> Result<TrackRecord> {
        let artist = raw.artists.first().ok_or_else(|| {
            Error::Payload(format!("track '{}' has no artists", raw.uri))
        })?;
        let artist_id = utils::bare_id(&artist.uri).to_string();
        let artist_image = self.artist_image(&artist_id).await?;

        let track_id = utils::bare_id(&raw.uri).to_string();
        let features = self.features(&track_id).await?;

        Ok(TrackRecord {
            artist_name: artist.name.clone(),
            artist_id,
            artist_image,
            track_name: raw.name.clone(),
            popularity: raw.popularity,
            release_date: raw.album.release_date.clone(),
            album_cover: utils::first_image_or(&raw.album.images, COVER_PLACEHOLDER),
            album_name: raw.album.name.clone(),
            track_id,
            features,
            playlist: playlist.cloned(),
        })
    }

    async fn artist_image(&mut self, artist_id: &str) -> Result<String> {
        if let Some(image) = self
            .cache
            .as_ref()
            .and_then(|cache| cache.artist_images.get(artist_id))
        {
            return Ok(image.clone());
        }

        let profile = self.api.artist(artist_id).await?;
        let image = utils::first_image_or(&profile.images, ARTIST_IMAGE_PLACEHOLDER);

        if let Some(cache) = self.cache.as_mut() {
            cache
                .artist_images
                .insert(artist_id.to_string(), image.clone());
        }
        Ok(image)
    }

    async fn features(&mut self, track_id: &str) -> Result<AudioFeatureScores> {
        if let Some(features) = self
            .cache
            .as_ref()
            .and_then(|cache| cache.features.get(track_id))
        {
            return Ok(*features);
        }

        let features = self
            .api
            .audio_features(track_id)
            .await?
            .ok_or_else(|| Error::MissingAudioFeatures(track_id.to_string()))?;

        if let Some(cache) = self.cache.as_mut() {
            cache.features.insert(track_id.to_string(), features);
        }
        Ok(features)
    }
}
