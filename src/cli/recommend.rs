use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, export, info,
    pipeline::{Pipeline, PipelineEvent, PipelineOutput},
    spotify::SpotifyClient,
    success,
    types::RecommendationTableRow,
    utils, warning,
};

pub struct RecommendOptions {
    pub playlists: Vec<String>,
    pub playlists_file: Option<PathBuf>,
    pub create_playlist: bool,
    pub output_dir: PathBuf,
    pub bucket: Option<String>,
    pub no_cache: bool,
}

/// Runs the recommendation pipeline over the relevant playlists, prints the
/// recommendations, exports both lists and uploads them when a bucket is
/// given.
pub async fn recommend(opts: RecommendOptions) {
    let from_file = match &opts.playlists_file {
        Some(path) => match async_fs::read_to_string(path).await {
            Ok(content) => utils::parse_playlist_names(&content),
            Err(e) => error!("Cannot read {}: {}", path.display(), e),
        },
        None => Vec::new(),
    };

    let relevant = utils::merge_playlist_names(opts.playlists, from_file);
    if relevant.is_empty() {
        error!("No relevant playlists given. Use --playlist or --playlists-file.");
    }

    let client = match SpotifyClient::from_cache().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let mut pipeline = Pipeline::new(&client, relevant.iter().cloned());
    if opts.no_cache {
        pipeline = pipeline.without_cache();
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message("Fetching playlists...");

    let mut matched = Vec::new();
    let result = pipeline
        .run_with(opts.create_playlist, |event| match event {
            PipelineEvent::PlaylistsListed { listed, total } => {
                pb.println(format!(
                    "Found {} playlists, visiting {}",
                    total.unwrap_or(listed as u64),
                    listed
                ));
            }
            PipelineEvent::PlaylistSkipped(_) => {}
            PipelineEvent::PlaylistStarted(summary) => {
                pb.set_message(format!("Fetching playlist {}...", summary.name));
                matched.push(summary.name);
            }
            PipelineEvent::TracksFetched { playlist, count } => {
                pb.set_message(format!(
                    "Requesting recommendations for {} ({} tracks)...",
                    playlist, count
                ));
            }
            PipelineEvent::RecommendationsAdded { playlist, count } => {
                pb.println(format!("{}: {} recommendations", playlist, count));
                pb.set_message("Fetching playlists...");
            }
            PipelineEvent::PlaylistCreated { id } => {
                pb.println(format!("Created playlist {}", id));
            }
        })
        .await;
    pb.finish_and_clear();

    let output: PipelineOutput = match result {
        Ok(output) => output,
        Err(e) => error!("Pipeline failed. Err: {}", e),
    };

    for name in relevant.iter().filter(|name| !matched.contains(name)) {
        warning!("No playlist named '{}' found", name);
    }

    if !output.recommendations.is_empty() {
        let rows: Vec<RecommendationTableRow> = output
            .recommendations
            .iter()
            .map(|track| RecommendationTableRow {
                playlist: track
                    .playlist
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                artist: track.artist_name.clone(),
                track: track.track_name.clone(),
                popularity: track.popularity,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    success!(
        "{} tracks and {} recommendations from {} playlists",
        output.tracks.len(),
        output.recommendations.len(),
        matched.len()
    );

    if let Some(id) = &output.created_playlist {
        success!("Recommendations saved to playlist {}", id);
    }

    let paths = match export::export(&opts.output_dir, &output.tracks, &output.recommendations)
        .await
    {
        Ok(paths) => paths,
        Err(e) => error!("{}", e),
    };
    for path in &paths {
        info!("Wrote {}", path.display());
    }

    if let Some(bucket) = opts.bucket {
        for path in &paths {
            match export::upload_file(path, &bucket).await {
                Ok(object) => success!("Uploaded {} to gs://{}", object, bucket),
                Err(e) => error!("{}", e),
            }
        }
    }
}
