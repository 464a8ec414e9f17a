use std::collections::HashSet;

use crate::{
    error::Result,
    spotify::SpotifyApi,
    types::{PlaylistSummary, TrackRecord},
};

use super::{TrackNormalizer, fetcher, materializer, recommender};

/// Page size of the single playlist listing request.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

/// Progress notifications emitted while a run advances.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// The playlist listing came back. `total` is what Spotify reports for
    /// the whole library; only `listed` playlists are visited.
    PlaylistsListed { listed: usize, total: Option<u64> },
    PlaylistSkipped(PlaylistSummary),
    PlaylistStarted(PlaylistSummary),
    TracksFetched { playlist: String, count: usize },
    RecommendationsAdded { playlist: String, count: usize },
    PlaylistCreated { id: String },
}

/// Everything one run accumulated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// Tracks of all relevant playlists, in listing then playlist order.
    pub tracks: Vec<TrackRecord>,
    /// Recommendations for all relevant playlists, in listing then batch order.
    pub recommendations: Vec<TrackRecord>,
    /// Id of the materialized playlist, when one was requested.
    pub created_playlist: Option<String>,
}

/// One run of the playlist-to-recommendation pipeline.
///
/// A `Pipeline` is consumed by [`Pipeline::run`], so lookup caches and the
/// accumulated lists never outlive a single run.
pub struct Pipeline<'a, A: SpotifyApi + ?Sized> {
    normalizer: TrackNormalizer<'a, A>,
    relevant: HashSet<String>,
}

impl<'a, A: SpotifyApi + ?Sized> Pipeline<'a, A> {
    /// `relevant` names are matched exactly and case-sensitively against
    /// playlist names.
    pub fn new<I, S>(api: &'a A, relevant: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            normalizer: TrackNormalizer::new(api),
            relevant: relevant.into_iter().map(Into::into).collect(),
        }
    }

    /// Disables lookup memoization for this run.
    pub fn without_cache(mut self) -> Self {
        self.normalizer = TrackNormalizer::without_cache(self.normalizer.api());
        self
    }

    pub fn is_relevant(&self, playlist_name: &str) -> bool {
        self.relevant.contains(playlist_name)
    }

    pub async fn run(self, create_playlist: bool) -> Result<PipelineOutput> {
        self.run_with(create_playlist, |_| {}).await
    }

    /// Runs the pipeline, reporting progress to `on_event`.
    ///
    /// Relevant playlists are processed in listing order: fetch and normalize
    /// their tracks, request recommendations seeded by them, then append the
    /// tracks to the global list. Irrelevant playlists cost no request. When
    /// `create_playlist` is set, one playlist holding every recommendation is
    /// created after all playlists are processed.
    pub async fn run_with<F>(mut self, create_playlist: bool, mut on_event: F) -> Result<PipelineOutput>
    where
        F: FnMut(PipelineEvent),
    {
        let api = self.normalizer.api();
        let mut output = PipelineOutput::default();

        let listing = api.current_user_playlists(PLAYLIST_PAGE_LIMIT).await?;
        on_event(PipelineEvent::PlaylistsListed {
            listed: listing.items.len(),
            total: listing.total,
        });

        for playlist in &listing.items {
            let summary = fetcher::summarize(playlist);
            if !self.is_relevant(&summary.name) {
                on_event(PipelineEvent::PlaylistSkipped(summary));
                continue;
            }

            on_event(PipelineEvent::PlaylistStarted(summary.clone()));
            let context = summary.context();

            let tracks =
                fetcher::fetch_tracks(&mut self.normalizer, &summary.id, Some(&context)).await?;
            on_event(PipelineEvent::TracksFetched {
                playlist: summary.name.clone(),
                count: tracks.len(),
            });

            let added = recommender::recommend_into(
                &mut self.normalizer,
                &tracks,
                Some(&context),
                &mut output.recommendations,
            )
            .await?;
            on_event(PipelineEvent::RecommendationsAdded {
                playlist: summary.name.clone(),
                count: added,
            });

            output.tracks.extend(tracks);
        }

        if create_playlist {
            let id = materializer::materialize(api, &output.recommendations).await?;
            on_event(PipelineEvent::PlaylistCreated { id: id.clone() });
            output.created_playlist = Some(id);
        }

        Ok(output)
    }
}
