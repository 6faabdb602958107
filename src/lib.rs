//! Crickelo - Elo ratings for cricket match archives
//!
//! This crate replays a match archive in chronological order through a
//! classic Elo model and exports the rating snapshot, per-team history,
//! and head-to-head win rates as dashboard-ready JSON.

pub mod config;
pub mod error;
pub mod export;
pub mod head_to_head;
pub mod ingest;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{CrickeloError, Result};
pub use types::*;

// Re-export key components
pub use rating::engine::EloEngine;
pub use rating::elo::EloTuning;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
