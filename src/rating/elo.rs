//! Elo rating math
//!
//! This module wraps the classic two-player Elo algorithm from the
//! skillratings crate: the logistic expected-score model on the fixed
//! 400-point scale, and the K-factor update rule.

use crate::error::CrickeloError;
use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, EloConfig, EloRating};
use skillratings::Outcomes;

/// Extended configuration for the Elo rating system.
/// This wraps the skillratings EloConfig with additional parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EloTuning {
    /// Core Elo parameter (the K-factor)
    pub elo_config: EloConfig,
    /// Rating assigned to a team the first time it is seen
    pub base_rating: f64,
    /// Reserved additive adjustment to the favored side's effective rating.
    /// Stored and validated, but only applied when a caller explicitly
    /// routes ratings through [`EloTuning::home_adjusted`].
    pub home_advantage: f64,
}

impl Default for EloTuning {
    fn default() -> Self {
        Self {
            elo_config: EloConfig { k: 30.0 },
            base_rating: 1500.0,
            home_advantage: 0.0,
        }
    }
}

impl EloTuning {
    /// Create tuning with an explicit K-factor.
    pub fn with_k_factor(k: f64) -> Self {
        Self {
            elo_config: EloConfig { k },
            ..Self::default()
        }
    }

    /// Create stable tuning (small adjustments, slow to react to upsets).
    pub fn stable() -> Self {
        Self::with_k_factor(15.0)
    }

    /// Create reactive tuning (large adjustments, tracks recent form closely).
    pub fn reactive() -> Self {
        Self::with_k_factor(45.0)
    }

    /// The K-factor controlling the magnitude of each rating adjustment.
    pub fn k_factor(&self) -> f64 {
        self.elo_config.k
    }

    /// Apply the reserved home advantage to a rating.
    ///
    /// Callers that model home edge feed the adjusted rating into
    /// [`expected_score`]; the engine never does this on its own.
    pub fn home_adjusted(&self, rating: f64) -> f64 {
        rating + self.home_advantage
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.elo_config.k.is_finite() || self.elo_config.k <= 0.0 {
            return Err(CrickeloError::Configuration {
                message: "K-factor must be positive".to_string(),
            }
            .into());
        }

        if !self.base_rating.is_finite() {
            return Err(CrickeloError::Configuration {
                message: "Base rating must be finite".to_string(),
            }
            .into());
        }

        if !self.home_advantage.is_finite() || self.home_advantage < 0.0 {
            return Err(CrickeloError::Configuration {
                message: "Home advantage must be non-negative".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Logistic win probability for the side rated `rating_a` against `rating_b`.
///
/// Fixed 400-point scale: a 400-point gap corresponds to 10:1 odds. Pure
/// function of the two ratings, strictly inside (0, 1), and symmetric in the
/// sense that `expected_score(a, b) + expected_score(b, a) == 1`.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    let (expected_a, _expected_b) = skillratings::elo::expected_score(
        &EloRating { rating: rating_a },
        &EloRating { rating: rating_b },
    );
    expected_a
}

/// Apply one Elo update to a pair of pre-match ratings.
///
/// `outcome` is seen from the first side's perspective. The returned deltas
/// are exact negations of each other (zero-sum update).
pub fn rate_match(rating_a: f64, rating_b: f64, outcome: Outcomes, tuning: &EloTuning) -> (f64, f64) {
    let (new_a, new_b) = elo(
        &EloRating { rating: rating_a },
        &EloRating { rating: rating_b },
        &outcome,
        &tuning.elo_config,
    );
    (new_a.rating, new_b.rating)
}
