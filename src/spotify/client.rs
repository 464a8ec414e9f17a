use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    config,
    error::Result,
    management::TokenManager,
    types::{
        AddTrackToPlaylistResponse, ArtistProfile, AudioFeatureScores, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, Paging, PlaylistTrackItem, RawTrack,
        SimplifiedPlaylist,
    },
};

use super::SpotifyApi;

/// Authenticated Spotify Web API client.
///
/// Holds one connection pool for the whole run. The token manager sits behind
/// a mutex so a refresh triggered by one request is seen by the next.
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager) -> Self {
        Self::with_base_url(tokens, config::spotify_apiurl())
    }

    pub fn with_base_url(tokens: TokenManager, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens: Mutex::new(tokens),
        }
    }

    /// Builds a client from the cached token written by `sporlrec auth`.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when the client id is missing and
    /// with an authentication error when there is no cached token.
    pub async fn from_cache() -> Result<Self> {
        config::ensure_spotify()?;
        let tokens = TokenManager::load().await?;
        Ok(Self::new(tokens))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn bearer(&self) -> Result<String> {
        self.tokens.lock().await.get_valid_token().await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn current_user_playlists(&self, limit: u32) -> Result<Paging<SimplifiedPlaylist>> {
        self.get_current_user_playlists(limit).await
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Paging<PlaylistTrackItem>> {
        self.get_playlist_tracks(playlist_id).await
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        self.get_artist(artist_id).await
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatureScores>> {
        self.get_audio_features(track_id).await
    }

    async fn recommendations(&self, seed_tracks: &[String], limit: u32) -> Result<Vec<RawTrack>> {
        self.get_recommendations(seed_tracks, limit).await
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        self.get_current_user().await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse> {
        self.post_create_playlist(user_id, request).await
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse> {
        self.post_playlist_tracks(playlist_id, uris).await
    }
}
