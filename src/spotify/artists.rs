use crate::{error::Result, types::ArtistProfile};

use super::SpotifyClient;

impl SpotifyClient {
    /// Fetches an artist profile. Accepts a bare id; the pipeline strips URI
    /// prefixes before calling.
    pub async fn get_artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        self.get_json(&format!("/artists/{}", artist_id), &[]).await
    }
}
