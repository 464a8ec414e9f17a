//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that exists only
//! while `sporlrec auth` waits for Spotify to redirect back.
//!
//! - [`callback`] - Receives the authorization code and exchanges it, together
//!   with the PKCE verifier held in shared state, for an access token.
//! - [`health`] - Reports status and version, handy for checking that the
//!   callback server is reachable on the configured address.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use sporlrec::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
