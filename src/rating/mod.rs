//! Rating system built on the classic two-player Elo algorithm
//!
//! This module provides the Elo update rule, tuning parameters, and the
//! incremental engine that replays a match archive into team ratings, via
//! integration with the skillratings crate.

pub mod elo;
pub mod engine;

// Re-export commonly used types
pub use elo::{expected_score, rate_match, EloTuning};
pub use engine::EloEngine;
