//! Configuration management for sporlrec.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings and the
//! cloud storage settings used by the export step.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, or in the working directory
//! 3. Application defaults (where applicable)
//!
//! Only the Spotify client id has no default. Commands that talk to Spotify
//! call [`ensure_spotify`] before the first request so a missing value stops
//! the run before any API call is attempted.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SCOPE: &str = "user-library-read playlist-read-private playlist-modify-public playlist-modify-private playlist-read-collaborative";
const DEFAULT_GCS_UPLOAD_URL: &str = "https://storage.googleapis.com/upload/storage/v1";

/// Loads environment variables from a `.env` file.
///
/// Looks for `sporlrec/.env` in the platform-specific local data directory
/// first, creating the directory if needed:
/// - Linux: `~/.local/share/sporlrec/.env`
/// - macOS: `~/Library/Application Support/sporlrec/.env`
/// - Windows: `%LOCALAPPDATA%/sporlrec/.env`
///
/// When that file does not exist a `.env` in the current working directory is
/// loaded instead, if present. Values already set in the process environment
/// always win.
///
/// # Errors
///
/// Returns [`Error::Config`] if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Config(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| {
            Error::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        return Ok(());
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(e.to_string())),
    }
}

/// Fails fast when a setting needed to talk to Spotify is missing.
pub fn ensure_spotify() -> Result<()> {
    spotify_client_id().map(|_| ())
}

/// Path of the `.env` file inside the local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlrec/.env");
    path
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} must be set", key))),
    }
}

fn with_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the server address for the local OAuth callback server.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8080`.
pub fn server_addr() -> String {
    with_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform. The PKCE flow needs no client secret.
///
/// # Errors
///
/// Returns [`Error::Config`] if the variable is unset or empty.
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Must match the redirect URI registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> String {
    with_default("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the scopes requested during authorization. Reading private and
/// collaborative playlists and writing public ones are the minimum the
/// pipeline needs.
pub fn spotify_scope() -> String {
    with_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    with_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    with_default("SPOTIFY_API_URL", DEFAULT_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    with_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the OAuth access token used to upload exports to Google Cloud
/// Storage, e.g. the output of `gcloud auth print-access-token`.
///
/// # Errors
///
/// Returns [`Error::Config`] if `GCS_ACCESS_TOKEN` is unset.
pub fn gcs_access_token() -> Result<String> {
    required("GCS_ACCESS_TOKEN")
}

/// Returns the project billed for uploads, if one is configured.
pub fn gcs_project() -> Option<String> {
    env::var("GCS_PROJECT")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn gcs_upload_url() -> String {
    with_default("GCS_UPLOAD_URL", DEFAULT_GCS_UPLOAD_URL)
}
