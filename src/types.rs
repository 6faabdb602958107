//! Common types used throughout the analytics pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque team identity, exactly as it appears in the match archive.
/// No canonicalization happens here.
pub type TeamId = String;

/// A single match result from the archive.
///
/// `winner` is the declared winner's name, or `None` for a tie / no result.
/// A winner naming neither team is carried through verbatim; the rating
/// engine treats it as a draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: Option<String>,
    pub date: NaiveDate,
    pub season: Option<u16>,
    pub team1: TeamId,
    pub team2: TeamId,
    pub winner: Option<TeamId>,
}

impl MatchRecord {
    /// Check whether the given team took part in this match.
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// Check whether the given team is the declared winner.
    pub fn won_by(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }

    /// Get the opponent of the given team, if it played in this match.
    pub fn opponent(&self, team: &str) -> Option<&str> {
        if self.team1 == team {
            Some(&self.team2)
        } else if self.team2 == team {
            Some(&self.team1)
        } else {
            None
        }
    }
}

/// One rating-history row, emitted per processed match in processing order.
///
/// Pre-match ratings and the pre-match win probability are captured before
/// the update mutates the engine; post-match ratings after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub match_id: Option<String>,
    pub date: NaiveDate,
    pub season: Option<u16>,
    pub team1: TeamId,
    pub team2: TeamId,
    pub team1_pre: f64,
    pub team2_pre: f64,
    pub team1_post: f64,
    pub team2_post: f64,
    pub winner: Option<TeamId>,
    pub win_prob_team1: f64,
}

impl RatingUpdate {
    /// Rating change for team1 (team2's change is the exact negation).
    pub fn team1_delta(&self) -> f64 {
        self.team1_post - self.team1_pre
    }
}
