//! Rating system configuration

use crate::rating::elo::EloTuning;
use serde::{Deserialize, Serialize};
use skillratings::elo::EloConfig;

/// Tunable Elo parameters as they appear in config files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// K-factor controlling how far one result moves a rating
    pub k_factor: f64,
    /// Rating assigned to a team on first appearance
    pub base_rating: f64,
    /// Reserved home-side bonus in rating points
    pub home_advantage: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: 30.0,
            base_rating: 1500.0,
            home_advantage: 0.0,
        }
    }
}

impl RatingSettings {
    /// Convert to the tuning struct the engine consumes.
    pub fn tuning(&self) -> EloTuning {
        EloTuning {
            elo_config: EloConfig { k: self.k_factor },
            base_rating: self.base_rating,
            home_advantage: self.home_advantage,
        }
    }
}
