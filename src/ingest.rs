//! Match archive ingestion
//!
//! This module reads the match archive CSV into [`MatchRecord`]s. Archives
//! carry many more columns than the rating pipeline needs (venue, toss,
//! innings totals); deserialization picks rows apart by header name and
//! ignores everything it does not recognize.

use crate::error::{CrickeloError, Result};
use crate::types::MatchRecord;
use crate::utils::{parse_match_date, parse_season};
use serde::Deserialize;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// One row of the archive as it appears on disk.
///
/// Everything except the date is optional: archives from different eras
/// disagree on which columns they fill in, and a blank winner cell is how
/// no-results are recorded.
#[derive(Debug, Deserialize)]
struct RawMatchRow {
    match_id: Option<String>,
    date: String,
    season: Option<String>,
    team1: Option<String>,
    team2: Option<String>,
    match_won_by: Option<String>,
}

/// Load the match archive at `path`.
pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let file = std::fs::File::open(path).map_err(|e| CrickeloError::Ingest {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let matches = read_matches(file)?;
    info!("Loaded {} matches from {}", matches.len(), path.display());
    Ok(matches)
}

/// Read match rows from any CSV source.
///
/// Rows missing either team are skipped with a warning, matching how the
/// archive records abandoned fixtures. A row with an unparseable date is a
/// hard error carrying the line number.
pub fn read_matches<R: io::Read>(reader: R) -> Result<Vec<MatchRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut matches = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.records() {
        let record = result.map_err(|e| CrickeloError::MalformedRow {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: RawMatchRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| CrickeloError::MalformedRow {
                    line,
                    message: e.to_string(),
                })?;

        let team1 = non_empty(row.team1);
        let team2 = non_empty(row.team2);
        let (Some(team1), Some(team2)) = (team1, team2) else {
            debug!("Skipping row at line {}: missing team", line);
            skipped += 1;
            continue;
        };

        let date = parse_match_date(&row.date).map_err(|e| CrickeloError::MalformedRow {
            line,
            message: format!("invalid date {:?}: {}", row.date, e),
        })?;

        matches.push(MatchRecord {
            match_id: non_empty(row.match_id),
            date,
            season: row.season.as_deref().and_then(parse_season),
            team1,
            team2,
            winner: non_empty(row.match_won_by),
        });
    }

    if skipped > 0 {
        warn!("Skipped {} rows with missing teams", skipped);
    }

    Ok(matches)
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
