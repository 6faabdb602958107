//! Head-to-head win rates
//!
//! Builds the pairwise win-rate matrix the dashboard uses as a baseline
//! predictor. Rates are historical frequencies, not model output.

use crate::types::{MatchRecord, TeamId};
use crate::utils::round_dp;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Row-major pairwise win rates, keyed `[team][opponent]`.
pub type WinRateMatrix = BTreeMap<TeamId, BTreeMap<TeamId, f64>>;

#[derive(Debug, Default)]
struct PairStats {
    meetings: u32,
    first_wins: u32,
    second_wins: u32,
}

/// Pairwise win rates over the whole archive.
///
/// `matrix[a][b]` is the share of meetings between `a` and `b` that `a`
/// won, rounded to two decimals. Draws and no-results stay in the
/// denominator, so `matrix[a][b] + matrix[b][a]` can fall short of 1. Pairs
/// that never met get 0.5; the diagonal is omitted.
pub fn win_rate_matrix(matches: &[MatchRecord]) -> WinRateMatrix {
    let mut teams: BTreeSet<&str> = BTreeSet::new();
    let mut stats: HashMap<(&str, &str), PairStats> = HashMap::new();

    for record in matches {
        teams.insert(record.team1.as_str());
        teams.insert(record.team2.as_str());

        let (first, second) = ordered_pair(&record.team1, &record.team2);
        let entry = stats.entry((first, second)).or_default();
        entry.meetings += 1;
        match record.winner.as_deref() {
            Some(winner) if winner == first => entry.first_wins += 1,
            Some(winner) if winner == second => entry.second_wins += 1,
            _ => {}
        }
    }

    let mut matrix = BTreeMap::new();
    for &team in &teams {
        let mut row = BTreeMap::new();
        for &opponent in &teams {
            if team == opponent {
                continue;
            }

            let (first, second) = ordered_pair(team, opponent);
            let rate = match stats.get(&(first, second)) {
                Some(pair) if pair.meetings > 0 => {
                    let wins = if team == first {
                        pair.first_wins
                    } else {
                        pair.second_wins
                    };
                    wins as f64 / pair.meetings as f64
                }
                _ => 0.5,
            };
            row.insert(opponent.to_string(), round_dp(rate, 2));
        }
        matrix.insert(team.to_string(), row);
    }

    matrix
}

fn ordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
