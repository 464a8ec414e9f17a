//! CSV export of pipeline results and upload to Google Cloud Storage.
//!
//! Each list becomes one file with a header row; the columns are the flattened
//! fields of [`TrackRecord`]. Records without playlist context leave the two
//! playlist columns empty.

use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::Serialize;

use crate::{
    config,
    error::{Error, Result},
    types::TrackRecord,
};

pub const TRACKS_FILE: &str = "playlist_data.csv";
pub const RECOMMENDATIONS_FILE: &str = "playlist_recommend.csv";

#[derive(Debug, Serialize)]
struct TrackRow<'a> {
    artist_name: &'a str,
    artist_id: &'a str,
    artist_image: &'a str,
    track_name: &'a str,
    popularity: u32,
    release_date: &'a str,
    album_cover: &'a str,
    album_name: &'a str,
    track_id: &'a str,
    playlist_name: Option<&'a str>,
    playlist_image: Option<&'a str>,
    danceability: f64,
    energy: f64,
    loudness: f64,
    speechiness: f64,
    acousticness: f64,
    instrumentalness: f64,
    liveness: f64,
    valence: f64,
    tempo: f64,
    mode: i32,
}

impl<'a> From<&'a TrackRecord> for TrackRow<'a> {
    fn from(record: &'a TrackRecord) -> Self {
        let features = &record.features;
        TrackRow {
            artist_name: &record.artist_name,
            artist_id: &record.artist_id,
            artist_image: &record.artist_image,
            track_name: &record.track_name,
            popularity: record.popularity,
            release_date: &record.release_date,
            album_cover: &record.album_cover,
            album_name: &record.album_name,
            track_id: &record.track_id,
            playlist_name: record.playlist.as_ref().map(|p| p.name.as_str()),
            playlist_image: record.playlist.as_ref().map(|p| p.image.as_str()),
            danceability: features.danceability,
            energy: features.energy,
            loudness: features.loudness,
            speechiness: features.speechiness,
            acousticness: features.acousticness,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            valence: features.valence,
            tempo: features.tempo,
            mode: features.mode,
        }
    }
}

const HEADER: [&str; 21] = [
    "artist_name",
    "artist_id",
    "artist_image",
    "track_name",
    "popularity",
    "release_date",
    "album_cover",
    "album_name",
    "track_id",
    "playlist_name",
    "playlist_image",
    "danceability",
    "energy",
    "loudness",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
    "mode",
];

/// Renders records as CSV. The header is written even for an empty list.
pub fn to_csv(records: &[TrackRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(TrackRow::from(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))
}

/// Writes one CSV file to `path`, creating parent directories as needed.
pub async fn write_csv(path: &Path, records: &[TrackRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            async_fs::create_dir_all(parent).await?;
        }
    }

    let bytes = to_csv(records)?;
    async_fs::write(path, bytes).await?;
    Ok(())
}

/// Writes the track list and the recommendation list into `dir` and returns
/// the two paths, tracks first.
pub async fn export(
    dir: &Path,
    tracks: &[TrackRecord],
    recommendations: &[TrackRecord],
) -> Result<Vec<PathBuf>> {
    let tracks_path = dir.join(TRACKS_FILE);
    let recommendations_path = dir.join(RECOMMENDATIONS_FILE);

    write_csv(&tracks_path, tracks).await?;
    write_csv(&recommendations_path, recommendations).await?;

    Ok(vec![tracks_path, recommendations_path])
}

/// Uploads a file to `bucket`, using its file name as the object name.
///
/// Authenticates with `GCS_ACCESS_TOKEN` and bills `GCS_PROJECT` when set.
/// Returns the object name.
pub async fn upload_file(path: &Path, bucket: &str) -> Result<String> {
    let token = config::gcs_access_token()?;
    let object = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::Export(format!("Invalid file name: {}", path.display())))?
        .to_string();

    let bytes = async_fs::read(path).await?;

    let url = format!(
        "{base}/b/{bucket}/o",
        base = config::gcs_upload_url(),
        bucket = bucket
    );

    let mut request = Client::new()
        .post(&url)
        .query(&[("uploadType", "media"), ("name", object.as_str())])
        .bearer_auth(token)
        .header(reqwest::header::CONTENT_TYPE, "text/csv")
        .body(bytes);

    if let Some(project) = config::gcs_project() {
        request = request.header("x-goog-user-project", project);
    }

    request
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| Error::Export(format!("Upload of {} failed: {}", object, e)))?;

    Ok(object)
}
