//! Typed errors for sporlrec.
//!
//! Nothing in the pipeline recovers from an error: every variant travels up to
//! the CLI, which reports it and stops the run.

use thiserror::Error;

/// Errors that can occur while talking to Spotify, running the pipeline or
/// exporting its results.
#[derive(Debug, Error)]
pub enum Error {
    /// Network, authorization, rate-limit or any other non-2xx response.
    #[error("Spotify API error: {0}")]
    Http(#[from] reqwest::Error),

    /// An upstream payload lacks a field the pipeline relies on.
    #[error("Malformed payload: {0}")]
    Payload(String),

    /// Spotify returned no audio features for the track.
    #[error("No audio features available for track '{0}'")]
    MissingAudioFeatures(String),

    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable token, or the token exchange failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Writing or uploading the exported files failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Export(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Export(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Payload(format!("Serialization error: {}", e))
    }
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
