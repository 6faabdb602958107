//! Incremental Elo rating engine
//!
//! Maintains the team → rating mapping and the append-only rating history.
//! Matches are applied strictly one at a time in chronological order: each
//! update depends on the state left behind by every earlier match, so there
//! is deliberately no parallel path through this code.

use crate::rating::elo::{expected_score, rate_match, EloTuning};
use crate::types::{MatchRecord, RatingUpdate, TeamId};
use skillratings::Outcomes;
use std::collections::HashMap;

/// Time-evolving skill estimates for teams, derived from pairwise results.
///
/// The rating mapping is private state of one engine instance. Teams are
/// bootstrapped to `base_rating` the first time they appear in an update;
/// nothing is ever removed.
#[derive(Debug, Clone)]
pub struct EloEngine {
    tuning: EloTuning,
    ratings: HashMap<TeamId, f64>,
    history: Vec<RatingUpdate>,
}

impl Default for EloEngine {
    fn default() -> Self {
        Self::new(EloTuning::default())
    }
}

impl EloEngine {
    /// Create an engine with no observed teams.
    pub fn new(tuning: EloTuning) -> Self {
        Self {
            tuning,
            ratings: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// The tuning this engine was constructed with.
    pub fn tuning(&self) -> &EloTuning {
        &self.tuning
    }

    /// Current rating for a team, or the base rating if it has never played.
    ///
    /// Pure read: an unseen team is not inserted into the mapping.
    pub fn rating(&self, team: &str) -> f64 {
        self.ratings
            .get(team)
            .copied()
            .unwrap_or(self.tuning.base_rating)
    }

    /// Win probability for `team_a` against `team_b` at current ratings.
    pub fn win_probability(&self, team_a: &str, team_b: &str) -> f64 {
        expected_score(self.rating(team_a), self.rating(team_b))
    }

    /// Apply one match result and return the new `(team_a, team_b)` ratings.
    ///
    /// `winner` is the declared winner's identity; `None` or a value naming
    /// neither team counts as a draw. That catch-all mirrors the archive,
    /// where no-results and ties leave the winner column blank or carry a
    /// marker string; it is not an error path.
    pub fn update(&mut self, team_a: &str, team_b: &str, winner: Option<&str>) -> (f64, f64) {
        let rating_a = self.rating(team_a);
        let rating_b = self.rating(team_b);

        let outcome = match winner {
            Some(w) if w == team_a => Outcomes::WIN,
            Some(w) if w == team_b => Outcomes::LOSS,
            _ => Outcomes::DRAW,
        };

        let (new_a, new_b) = rate_match(rating_a, rating_b, outcome, &self.tuning);

        self.ratings.insert(team_a.to_owned(), new_a);
        self.ratings.insert(team_b.to_owned(), new_b);

        (new_a, new_b)
    }

    /// Process a batch of matches in chronological order.
    ///
    /// The input is stable-sorted by date ascending, so matches on the same
    /// day keep their original relative order. One [`RatingUpdate`] is
    /// recorded per match, carrying the pre-match ratings and win
    /// probability captured before the update and the post-match ratings
    /// after it. The records are appended to [`EloEngine::history`] and the
    /// batch is returned in processing order.
    pub fn process_matches(&mut self, matches: &[MatchRecord]) -> Vec<RatingUpdate> {
        let mut ordered: Vec<&MatchRecord> = matches.iter().collect();
        ordered.sort_by(|a, b| a.date.cmp(&b.date));

        let mut batch = Vec::with_capacity(ordered.len());
        for record in ordered {
            let team1_pre = self.rating(&record.team1);
            let team2_pre = self.rating(&record.team2);
            let win_prob_team1 = expected_score(team1_pre, team2_pre);

            let (team1_post, team2_post) =
                self.update(&record.team1, &record.team2, record.winner.as_deref());

            let update = RatingUpdate {
                match_id: record.match_id.clone(),
                date: record.date,
                season: record.season,
                team1: record.team1.clone(),
                team2: record.team2.clone(),
                team1_pre,
                team2_pre,
                team1_post,
                team2_post,
                winner: record.winner.clone(),
                win_prob_team1,
            };
            self.history.push(update.clone());
            batch.push(update);
        }

        batch
    }

    /// All rating-history records produced so far, in processing order.
    pub fn history(&self) -> &[RatingUpdate] {
        &self.history
    }

    /// The current rating mapping (observed teams only).
    pub fn ratings(&self) -> &HashMap<TeamId, f64> {
        &self.ratings
    }

    /// Number of teams observed so far.
    pub fn team_count(&self) -> usize {
        self.ratings.len()
    }

    /// Teams sorted by rating, best first. Ties break on team name so the
    /// ordering is deterministic.
    pub fn leaderboard(&self) -> Vec<(TeamId, f64)> {
        let mut board: Vec<(TeamId, f64)> = self
            .ratings
            .iter()
            .map(|(team, rating)| (team.clone(), *rating))
            .collect();

        board.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        board
    }
}
