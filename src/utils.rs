use std::collections::BTreeSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Image;

pub const TRACK_URI_PREFIX: &str = "spotify:track:";
pub const ARTIST_IMAGE_PLACEHOLDER: &str =
    "https://upload.wikimedia.org/wikipedia/commons/8/89/Portrait_Placeholder.png?20170328184010";
pub const COVER_PLACEHOLDER: &str = "https://iili.io/HlHy9Yx.png";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Strips any `scheme:kind:` prefix, keeping what follows the last `:`.
pub fn bare_id(uri: &str) -> &str {
    uri.rsplit(':').next().unwrap_or(uri)
}

pub fn track_uri(track_id: &str) -> String {
    format!("{}{}", TRACK_URI_PREFIX, track_id)
}

pub fn first_image_or(images: &[Image], placeholder: &str) -> String {
    images
        .first()
        .map(|image| image.url.clone())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Parses a playlists file: one name per line, kept verbatim including any
/// surrounding spaces. Blank lines and lines starting with `#` are ignored.
pub fn parse_playlist_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Merges names given on the command line with names read from a file,
/// dropping duplicates. Matching stays exact, so `Jazz` and `jazz` are kept
/// apart.
pub fn merge_playlist_names(
    from_args: Vec<String>,
    from_file: Vec<String>,
) -> BTreeSet<String> {
    from_args.into_iter().chain(from_file).collect()
}
