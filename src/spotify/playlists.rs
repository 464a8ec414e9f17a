use crate::{
    error::Result,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, CurrentUser, Paging, PlaylistTrackItem, SimplifiedPlaylist,
    },
};

use super::SpotifyClient;

impl SpotifyClient {
    /// First page of the current user's playlists. Spotify caps `limit` at 50.
    pub async fn get_current_user_playlists(
        &self,
        limit: u32,
    ) -> Result<Paging<SimplifiedPlaylist>> {
        self.get_json("/me/playlists", &[("limit", limit.to_string())])
            .await
    }

    /// First page of a playlist's items (Spotify's default page size, 100).
    pub async fn get_playlist_tracks(&self, playlist_id: &str) -> Result<Paging<PlaylistTrackItem>> {
        self.get_json(
            &format!("/playlists/{}/tracks", playlist_id),
            &[("additional_types", "track".to_string())],
        )
        .await
    }

    pub async fn get_current_user(&self) -> Result<CurrentUser> {
        self.get_json("/me", &[]).await
    }

    pub async fn post_create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse> {
        self.post_json(&format!("/users/{}/playlists", user_id), request)
            .await
    }

    /// Adds up to 100 track URIs, in order, to the playlist.
    pub async fn post_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse> {
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };
        self.post_json(&format!("/playlists/{}/tracks", playlist_id), &body)
            .await
    }
}
