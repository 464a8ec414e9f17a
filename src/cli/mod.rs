//! # CLI Module
//!
//! User-facing commands of sporlrec. Each command wires configuration, the
//! Spotify client and the pipeline together, reports progress with spinners
//! and the `info!`/`success!`/`warning!` macros, and turns any error into an
//! `error!` exit.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authorization with PKCE
//! - [`list_playlists`] - Table of the user's playlists, marking relevant ones
//! - [`recommend`] - Run the pipeline, export CSVs, optionally create a
//!   playlist and upload the exports
//!
//! ## Usage
//!
//! ```bash
//! sporlrec auth
//! sporlrec playlists -p "Jazz Rap"
//! sporlrec recommend -p "Jazz Rap" -p "phonk" --create-playlist
//! sporlrec recommend --playlists-file relevant.txt --bucket my-bucket
//! ```

mod auth;
mod playlists;
mod recommend;

pub use auth::auth;
pub use playlists::list_playlists;
pub use recommend::{RecommendOptions, recommend};
