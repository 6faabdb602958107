//! End-to-end tests for the crickelo pipeline
//!
//! These tests validate the whole archive-to-artifacts flow working
//! together: CSV ingestion, chronological Elo replay, head-to-head
//! aggregation, and JSON artifact export.

// Modules for organizing tests
mod fixtures;

use crickelo::config::AppConfig;
use crickelo::export::{self, TeamRatingSeries};
use crickelo::head_to_head::win_rate_matrix;
use crickelo::ingest::{load_matches, read_matches};
use crickelo::rating::engine::EloEngine;
use crickelo::types::RatingUpdate;
use std::collections::BTreeMap;

use fixtures::{sample_matches, scratch_dir, write_sample_archive, SAMPLE_ARCHIVE_CSV};

#[test]
fn test_archive_parses_into_expected_records() {
    let parsed = read_matches(SAMPLE_ARCHIVE_CSV.as_bytes()).unwrap();

    // The abandoned Deccan Chargers fixture has no opponent and is dropped;
    // everything else survives with timestamps truncated to dates.
    assert_eq!(parsed, sample_matches());
}

#[test]
fn test_replay_produces_expected_table() {
    let mut engine = EloEngine::default();
    let history = engine.process_matches(&sample_matches());

    assert_eq!(history.len(), 5);
    assert_eq!(engine.team_count(), 4);

    // Equal-rating wins and draws move by exactly k/2 or not at all.
    assert_eq!(engine.rating("Kolkata Knight Riders"), 1515.0);
    assert_eq!(engine.rating("Mumbai Indians"), 1500.0);

    // Chennai beat Bangalore while 45 points ahead, so the step shrinks.
    assert!((engine.rating("Chennai Super Kings") - 1528.068).abs() < 1e-3);
    assert!((engine.rating("Royal Challengers Bangalore") - 1456.932).abs() < 1e-3);
    assert!((history[4].win_prob_team1 - 0.5644).abs() < 1e-3);

    // The washed-out fixture is a draw between equally rated sides.
    assert_eq!(history[3].winner, None);
    assert_eq!(history[3].team1_delta(), 0.0);

    let board = engine.leaderboard();
    let order: Vec<&str> = board.iter().map(|(team, _)| team.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "Chennai Super Kings",
            "Kolkata Knight Riders",
            "Mumbai Indians",
            "Royal Challengers Bangalore",
        ]
    );
}

#[test]
fn test_full_pipeline_writes_artifacts() {
    let dir = scratch_dir("pipeline");
    let archive = write_sample_archive(&dir);
    let output_dir = dir.join("dashboard");

    // Run the same steps the binary runs.
    let matches = load_matches(&archive).unwrap();
    let mut engine = EloEngine::default();
    engine.process_matches(&matches);
    let matrix = win_rate_matrix(&matches);
    export::write_artifacts(&engine, &matrix, &output_dir, false).unwrap();

    // Current ratings keep full precision.
    let raw = std::fs::read_to_string(output_dir.join("current_elo.json")).unwrap();
    let current: BTreeMap<String, f64> = serde_json::from_str(&raw).unwrap();
    assert_eq!(current.len(), 4);
    assert!((current["Chennai Super Kings"] - 1528.068).abs() < 1e-3);
    assert_eq!(current["Mumbai Indians"], 1500.0);

    // Chart series carry one rounded point per match played.
    let raw = std::fs::read_to_string(output_dir.join("elo_history.json")).unwrap();
    let series: BTreeMap<String, TeamRatingSeries> = serde_json::from_str(&raw).unwrap();
    let csk = &series["Chennai Super Kings"];
    assert_eq!(csk.dates, vec!["2008-04-19", "2008-04-22", "2008-04-23"]);
    assert_eq!(csk.ratings, vec![1515.0, 1515.0, 1528.1]);

    // The full history table round-trips losslessly.
    let raw = std::fs::read_to_string(output_dir.join("rating_history.json")).unwrap();
    let table: Vec<RatingUpdate> = serde_json::from_str(&raw).unwrap();
    assert_eq!(table, engine.history());

    // Head-to-head rates, with the washout still in the denominator.
    let raw = std::fs::read_to_string(output_dir.join("h2h_matrix.json")).unwrap();
    let h2h: BTreeMap<String, BTreeMap<String, f64>> = serde_json::from_str(&raw).unwrap();
    assert_eq!(h2h["Chennai Super Kings"]["Mumbai Indians"], 1.0);
    assert_eq!(h2h["Mumbai Indians"]["Chennai Super Kings"], 0.0);
    assert_eq!(h2h["Mumbai Indians"]["Kolkata Knight Riders"], 0.5);
    assert_eq!(h2h["Chennai Super Kings"]["Kolkata Knight Riders"], 0.0);
    assert_eq!(h2h["Kolkata Knight Riders"]["Chennai Super Kings"], 0.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_config_k_factor_drives_the_engine() {
    let config = AppConfig::from_toml_str(
        r#"
        [rating]
        k_factor = 40.0
        "#,
    )
    .unwrap();

    let mut engine = EloEngine::new(config.rating.tuning());
    engine.process_matches(&sample_matches()[..1]);

    // First win between fresh teams moves exactly k/2 points.
    assert_eq!(engine.rating("Kolkata Knight Riders"), 1520.0);
    assert_eq!(engine.rating("Royal Challengers Bangalore"), 1480.0);
}
