use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    pipeline::{fetcher, orchestrator::PLAYLIST_PAGE_LIMIT},
    spotify::{SpotifyApi, SpotifyClient},
    types::PlaylistTableRow,
    utils, warning,
};

/// Lists the first page of the user's playlists, marking the ones that
/// would be processed with the given relevant names.
pub async fn list_playlists(relevant: Vec<String>) {
    let client = match SpotifyClient::from_cache().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let listing = match client.current_user_playlists(PLAYLIST_PAGE_LIMIT).await {
        Ok(listing) => listing,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot fetch playlists. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    let relevant = utils::merge_playlist_names(relevant, Vec::new());
    let rows: Vec<PlaylistTableRow> = listing
        .items
        .iter()
        .map(fetcher::summarize)
        .map(|summary| PlaylistTableRow {
            relevant: if relevant.contains(&summary.name) {
                "yes".to_string()
            } else {
                String::new()
            },
            name: summary.name,
            tracks: summary.track_count,
        })
        .collect();

    println!("{}", Table::new(rows));

    let total = listing.total.unwrap_or(listing.items.len() as u64);
    info!("Showing {} of {} playlists", listing.items.len(), total);
    if listing.next.is_some() {
        warning!(
            "Only the first {} playlists are visited by sporlrec recommend",
            PLAYLIST_PAGE_LIMIT
        );
    }
}
