//! Test fixtures and builders for pipeline testing

use chrono::NaiveDate;
use crickelo::types::MatchRecord;
use std::path::{Path, PathBuf};

/// A small archive slice: five playable fixtures from the opening week of
/// the 2008 season plus one abandoned fixture with no second team, which
/// ingestion is expected to drop.
pub const SAMPLE_ARCHIVE_CSV: &str = "\
match_id,date,season,city,venue,team1,team2,toss_winner,toss_decision,match_won_by
335982,2008-04-18,2007/08,Bangalore,M Chinnaswamy Stadium,Royal Challengers Bangalore,Kolkata Knight Riders,Royal Challengers Bangalore,field,Kolkata Knight Riders
335983,2008-04-19 00:00:00,2007/08,Chennai,MA Chidambaram Stadium,Chennai Super Kings,Mumbai Indians,Mumbai Indians,field,Chennai Super Kings
335984,2008-04-20,2007/08,Mumbai,Wankhede Stadium,Mumbai Indians,Royal Challengers Bangalore,Mumbai Indians,bat,Mumbai Indians
335985,2008-04-22,2007/08,Kolkata,Eden Gardens,Kolkata Knight Riders,Chennai Super Kings,Kolkata Knight Riders,bat,
335986,2008-04-23,2007/08,Chennai,MA Chidambaram Stadium,Chennai Super Kings,Royal Challengers Bangalore,Royal Challengers Bangalore,field,Chennai Super Kings
335987,2008-04-24,2007/08,Hyderabad,Rajiv Gandhi Stadium,Deccan Chargers,,Deccan Chargers,bat,Deccan Chargers
";

pub fn day(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// Build one 2007/08-season match record.
pub fn archive_match(
    id: &str,
    date: &str,
    team1: &str,
    team2: &str,
    winner: Option<&str>,
) -> MatchRecord {
    MatchRecord {
        match_id: Some(id.to_string()),
        date: day(date),
        season: Some(2007),
        team1: team1.to_string(),
        team2: team2.to_string(),
        winner: winner.map(str::to_string),
    }
}

/// The records ingestion should produce from [`SAMPLE_ARCHIVE_CSV`].
pub fn sample_matches() -> Vec<MatchRecord> {
    vec![
        archive_match(
            "335982",
            "2008-04-18",
            "Royal Challengers Bangalore",
            "Kolkata Knight Riders",
            Some("Kolkata Knight Riders"),
        ),
        archive_match(
            "335983",
            "2008-04-19",
            "Chennai Super Kings",
            "Mumbai Indians",
            Some("Chennai Super Kings"),
        ),
        archive_match(
            "335984",
            "2008-04-20",
            "Mumbai Indians",
            "Royal Challengers Bangalore",
            Some("Mumbai Indians"),
        ),
        archive_match(
            "335985",
            "2008-04-22",
            "Kolkata Knight Riders",
            "Chennai Super Kings",
            None,
        ),
        archive_match(
            "335986",
            "2008-04-23",
            "Chennai Super Kings",
            "Royal Challengers Bangalore",
            Some("Chennai Super Kings"),
        ),
    ]
}

/// Fresh scratch directory under the system temp dir, cleared of any
/// leftovers from a previous run.
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("crickelo-{}-{}", label, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write the sample archive CSV into `dir` and return its path.
pub fn write_sample_archive(dir: &Path) -> PathBuf {
    let path = dir.join("matches.csv");
    std::fs::write(&path, SAMPLE_ARCHIVE_CSV).unwrap();
    path
}
