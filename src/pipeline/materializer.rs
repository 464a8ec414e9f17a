use crate::{
    error::Result,
    spotify::SpotifyApi,
    types::{CreatePlaylistRequest, TrackRecord},
    utils,
};

pub const RECOMMENDATION_PLAYLIST_NAME: &str = "Recommended from sporlrec";
pub const RECOMMENDATION_PLAYLIST_DESCRIPTION: &str =
    "The recommended tracks based on all the playlist you deem as relevant";

/// Web API limit for URIs in a single add-items request.
const MAX_URIS_PER_REQUEST: usize = 100;

/// Creates a public, non-collaborative playlist for the current user and
/// fills it with `recommendations` in order. Repeated tracks are added as
/// separate entries. Returns the id of the new playlist.
pub async fn materialize<A: SpotifyApi + ?Sized>(
    api: &A,
    recommendations: &[TrackRecord],
) -> Result<String> {
    let user = api.current_user().await?;

    let request = CreatePlaylistRequest {
        name: RECOMMENDATION_PLAYLIST_NAME.to_string(),
        description: RECOMMENDATION_PLAYLIST_DESCRIPTION.to_string(),
        public: true,
        collaborative: false,
    };
    let playlist = api.create_playlist(&user.id, &request).await?;

    let uris: Vec<String> = recommendations
        .iter()
        .map(|track| utils::track_uri(&track.track_id))
        .collect();

    for chunk in uris.chunks(MAX_URIS_PER_REQUEST) {
        api.add_tracks_to_playlist(&playlist.id, chunk).await?;
    }

    Ok(playlist.id)
}
