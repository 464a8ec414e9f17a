use crate::{
    error::Result,
    types::{AudioFeatureScores, AudioFeaturesResponse, RawTrack, RecommendationsResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves the audio-feature scores of a single track.
    ///
    /// Uses the multi-id endpoint, which answers unknown or unanalysed tracks
    /// with a `null` entry instead of a 404, so absence can be told apart from
    /// a failed request.
    pub async fn get_audio_features(&self, track_id: &str) -> Result<Option<AudioFeatureScores>> {
        let response: AudioFeaturesResponse = self
            .get_json("/audio-features", &[("ids", track_id.to_string())])
            .await?;

        Ok(response.audio_features.into_iter().next().flatten())
    }

    /// Requests up to `limit` recommendations anchored on the given seed
    /// tracks. Spotify accepts at most five seeds per request.
    pub async fn get_recommendations(
        &self,
        seed_tracks: &[String],
        limit: u32,
    ) -> Result<Vec<RawTrack>> {
        let response: RecommendationsResponse = self
            .get_json(
                "/recommendations",
                &[
                    ("seed_tracks", seed_tracks.join(",")),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(response.tracks)
    }
}
