use crate::{
    error::{Error, Result},
    spotify::SpotifyApi,
    types::{PlaylistContext, PlaylistSummary, SimplifiedPlaylist, TrackRecord},
    utils::{self, COVER_PLACEHOLDER},
};

use super::TrackNormalizer;

/// Reduces a listed playlist to what the pipeline needs to judge relevance
/// and label its tracks.
pub fn summarize(playlist: &SimplifiedPlaylist) -> PlaylistSummary {
    PlaylistSummary {
        id: playlist.id.clone(),
        name: playlist.name.clone(),
        image: utils::first_image_or(&playlist.images, COVER_PLACEHOLDER),
        track_count: playlist.tracks.as_ref().map_or(0, |tracks| tracks.total),
    }
}

/// Fetches the first page of a playlist and normalizes every item in
/// playlist order, attaching `context` to each record.
///
/// An empty playlist yields an empty vector. An item whose track is `null`
/// (removed from the catalogue) is a payload error.
pub async fn fetch_tracks<A: SpotifyApi + ?Sized>(
    normalizer: &mut TrackNormalizer<'_, A>,
    playlist_id: &str,
    context: Option<&PlaylistContext>,
) -> Result<Vec<TrackRecord>> {
    let page = normalizer.api().playlist_tracks(playlist_id).await?;

    let mut records = Vec::with_capacity(page.items.len());
    for (position, item) in page.items.iter().enumerate() {
        let raw = item.track.as_ref().ok_or_else(|| {
            Error::Payload(format!(
                "playlist '{}' item {} has no track",
                playlist_id, position
            ))
        })?;
        records.push(normalizer.normalize(raw, context).await?);
    }

    Ok(records)
}
