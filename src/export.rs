//! Dashboard artifact export
//!
//! Shapes engine state into the JSON documents the dashboard reads and
//! writes them to the output directory. Chart payloads round ratings to one
//! decimal; the current-rating snapshot keeps full precision so a later run
//! can be checked against it.

use crate::error::{CrickeloError, Result};
use crate::head_to_head::WinRateMatrix;
use crate::rating::engine::EloEngine;
use crate::types::{RatingUpdate, TeamId};
use crate::utils::round_dp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Per-team chart series: one entry per match played, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRatingSeries {
    pub dates: Vec<String>,
    pub ratings: Vec<f64>,
}

/// Snapshot of current ratings, keyed by team and sorted for stable output.
pub fn current_ratings(engine: &EloEngine) -> BTreeMap<TeamId, f64> {
    engine
        .ratings()
        .iter()
        .map(|(team, rating)| (team.clone(), *rating))
        .collect()
}

/// Group the rating history into per-team chart series.
///
/// Each match contributes one point to both teams' series, carrying the
/// post-match rating rounded to one decimal.
pub fn rating_series(history: &[RatingUpdate]) -> BTreeMap<TeamId, TeamRatingSeries> {
    let mut series: BTreeMap<TeamId, TeamRatingSeries> = BTreeMap::new();

    for update in history {
        let date = update.date.to_string();
        let points = [
            (&update.team1, update.team1_post),
            (&update.team2, update.team2_post),
        ];
        for (team, rating) in points {
            let entry = series.entry(team.clone()).or_default();
            entry.dates.push(date.clone());
            entry.ratings.push(round_dp(rating, 1));
        }
    }

    series
}

/// Write all dashboard artifacts into `output_dir`, creating it if needed.
pub fn write_artifacts(
    engine: &EloEngine,
    matrix: &WinRateMatrix,
    output_dir: &Path,
    pretty: bool,
) -> Result<()> {
    std::fs::create_dir_all(output_dir).map_err(|e| CrickeloError::Export {
        path: output_dir.display().to_string(),
        message: e.to_string(),
    })?;

    write_json(&output_dir.join("current_elo.json"), &current_ratings(engine), pretty)?;
    write_json(
        &output_dir.join("elo_history.json"),
        &rating_series(engine.history()),
        pretty,
    )?;
    write_json(&output_dir.join("rating_history.json"), engine.history(), pretty)?;
    write_json(&output_dir.join("h2h_matrix.json"), matrix, pretty)?;

    info!("Wrote 4 artifacts to {}", output_dir.display());
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let payload = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .map_err(|e| CrickeloError::Export {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    std::fs::write(path, &payload).map_err(|e| CrickeloError::Export {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!("Wrote {} ({} bytes)", path.display(), payload.len());
    Ok(())
}
