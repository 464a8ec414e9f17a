//! # Spotify Integration Module
//!
//! This module is the integration layer between sporlrec and the Spotify Web
//! API. Everything above it (the pipeline, the CLI) talks to Spotify through
//! the [`SpotifyApi`] trait, which names exactly the operations the
//! recommendation pipeline consumes. [`SpotifyClient`] implements it over
//! HTTP; tests substitute an in-memory fake.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Pipeline (normalize, fetch, recommend, materialize)
//!     ↓
//! SpotifyApi trait
//!     ├── SpotifyClient (reqwest + TokenManager)
//!     └── test doubles
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, code exchange and token refresh
//! - [`client`] - [`SpotifyClient`], request plumbing and the trait impl
//! - [`artists`] - Artist profiles
//! - [`playlists`] - Listing, creating and filling playlists, current user
//! - [`tracks`] - Audio features and recommendations
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user profile
//! - `GET /me/playlists` - Current user's playlists (first page)
//! - `GET /playlists/{playlist_id}/tracks` - Playlist items (first page)
//! - `GET /artists/{id}` - Artist profile with images
//! - `GET /audio-features?ids={id}` - Audio-feature scores
//! - `GET /recommendations` - Tracks similar to a set of seed tracks
//! - `POST /users/{user_id}/playlists` - Create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add track URIs to a playlist
//!
//! ## Error Handling
//!
//! Every response goes through `error_for_status`; failures surface as
//! [`crate::error::Error::Http`] without retry, so a single failed call ends
//! the run.

pub mod artists;
pub mod auth;
pub mod client;
pub mod playlists;
pub mod tracks;

use async_trait::async_trait;

pub use client::SpotifyClient;

use crate::{
    error::Result,
    types::{
        AddTrackToPlaylistResponse, ArtistProfile, AudioFeatureScores, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, Paging, PlaylistTrackItem, RawTrack,
        SimplifiedPlaylist,
    },
};

/// Operations of the Spotify Web API used by the pipeline. Implementations
/// are expected to be pre-authenticated.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// First page of the current user's playlists.
    async fn current_user_playlists(&self, limit: u32) -> Result<Paging<SimplifiedPlaylist>>;

    /// First page of a playlist's items, in playlist order.
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Paging<PlaylistTrackItem>>;

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile>;

    /// `None` when Spotify has no analysis for the track.
    async fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatureScores>>;

    /// Up to `limit` tracks similar to the given bare seed ids.
    async fn recommendations(&self, seed_tracks: &[String], limit: u32) -> Result<Vec<RawTrack>>;

    async fn current_user(&self) -> Result<CurrentUser>;

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse>;

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse>;
}
