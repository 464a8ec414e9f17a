//! # Recommendation Pipeline
//!
//! Turns a user's playlist collection into a set of recommended tracks.
//!
//! ```text
//! Pipeline::run
//!   └── per relevant playlist
//!         ├── fetcher::fetch_tracks ──► TrackNormalizer (per track)
//!         └── recommender::recommend_into
//!               ├── top 20 by popularity, 3 seed batches of 5
//!               └── TrackNormalizer (per recommended track)
//!   └── materializer::materialize (optional, once)
//! ```
//!
//! All steps run sequentially and the first failed request aborts the run.

pub mod fetcher;
pub mod materializer;
pub mod normalizer;
pub mod orchestrator;
pub mod recommender;

pub use fetcher::fetch_tracks;
pub use materializer::materialize;
pub use normalizer::TrackNormalizer;
pub use orchestrator::{Pipeline, PipelineEvent, PipelineOutput};
pub use recommender::{recommend, recommend_into};
