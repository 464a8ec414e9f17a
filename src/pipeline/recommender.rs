use crate::{
    error::Result,
    spotify::SpotifyApi,
    types::{PlaylistContext, TrackRecord},
};

use super::TrackNormalizer;

/// How many of a playlist's most popular tracks are considered for seeding.
pub const TOP_TRACKS: usize = 20;
/// Seeds per recommendation request.
pub const SEED_BATCH_SIZE: usize = 5;
/// Requests per playlist. Three batches of five cover ranks 1–15 only; ranks
/// 16–20 of the top twenty are never used as seeds.
pub const SEED_BATCHES: usize = 3;
/// Tracks requested per recommendation call.
pub const RECOMMENDATIONS_PER_BATCH: u32 = 5;

/// The `n` most popular tracks, highest first. Ties keep input order.
pub fn top_by_popularity(tracks: &[TrackRecord], n: usize) -> Vec<&TrackRecord> {
    let mut ranked: Vec<&TrackRecord> = tracks.iter().collect();
    ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    ranked.truncate(n);
    ranked
}

/// Bare seed ids for each recommendation request, in request order.
///
/// Only full batches are requested, so a playlist with fewer than
/// [`SEED_BATCH_SIZE`] tracks produces no request at all.
pub fn seed_batches(tracks: &[TrackRecord]) -> Vec<Vec<String>> {
    top_by_popularity(tracks, TOP_TRACKS)
        .chunks(SEED_BATCH_SIZE)
        .take(SEED_BATCHES)
        .filter(|batch| batch.len() == SEED_BATCH_SIZE)
        .map(|batch| batch.iter().map(|track| track.track_id.clone()).collect())
        .collect()
}

/// Requests recommendations seeded by `tracks` and returns them normalized,
/// in batch order, each labelled with `context`.
pub async fn recommend<A: SpotifyApi + ?Sized>(
    normalizer: &mut TrackNormalizer<'_, A>,
    tracks: &[TrackRecord],
    context: Option<&PlaylistContext>,
) -> Result<Vec<TrackRecord>> {
    let mut recommendations = Vec::new();
    recommend_into(normalizer, tracks, context, &mut recommendations).await?;
    Ok(recommendations)
}

/// Like [`recommend`], appending to a caller-owned accumulator. Returns the
/// number of records appended.
///
/// On error, records from batches that completed before the failure stay in
/// `acc`.
pub async fn recommend_into<A: SpotifyApi + ?Sized>(
    normalizer: &mut TrackNormalizer<'_, A>,
    tracks: &[TrackRecord],
    context: Option<&PlaylistContext>,
    acc: &mut Vec<TrackRecord>,
) -> Result<usize> {
    let before = acc.len();

    for seeds in seed_batches(tracks) {
        let recommended = normalizer
            .api()
            .recommendations(&seeds, RECOMMENDATIONS_PER_BATCH)
            .await?;

        for raw in &recommended {
            acc.push(normalizer.normalize(raw, context).await?);
        }
    }

    Ok(acc.len() - before)
}
