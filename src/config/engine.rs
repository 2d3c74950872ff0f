//! Engine configuration
//!
//! Elo constants for the pairwise update, including the provisional
//! multiplier that lets low-game items converge faster.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Tunable constants for the pairwise Elo update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rating assigned to items with no recorded comparisons
    pub base_rating: f64,
    /// K-factor applied to fully-seasoned items
    pub base_k: f64,
    /// Multiplier on the K-factor for an item at zero games played
    pub provisional_multiplier: f64,
    /// Number of games over which the provisional boost decays by a factor e
    pub provisional_decay_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_rating: 1200.0,
            base_k: 32.0,
            provisional_multiplier: 2.5,
            provisional_decay_scale: 12.0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(rating) = env::var("DUEL_RANK_BASE_RATING") {
            config.base_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid DUEL_RANK_BASE_RATING value: {}", rating))?;
        }
        if let Ok(k) = env::var("DUEL_RANK_BASE_K") {
            config.base_k = k
                .parse()
                .map_err(|_| anyhow!("Invalid DUEL_RANK_BASE_K value: {}", k))?;
        }
        if let Ok(multiplier) = env::var("DUEL_RANK_PROVISIONAL_MULTIPLIER") {
            config.provisional_multiplier = multiplier.parse().map_err(|_| {
                anyhow!(
                    "Invalid DUEL_RANK_PROVISIONAL_MULTIPLIER value: {}",
                    multiplier
                )
            })?;
        }
        if let Ok(scale) = env::var("DUEL_RANK_PROVISIONAL_DECAY_SCALE") {
            config.provisional_decay_scale = scale.parse().map_err(|_| {
                anyhow!("Invalid DUEL_RANK_PROVISIONAL_DECAY_SCALE value: {}", scale)
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.base_rating.is_finite() {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "Base rating must be finite".to_string(),
            }
            .into());
        }

        if self.base_k <= 0.0 {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "Base K-factor must be positive".to_string(),
            }
            .into());
        }

        if self.provisional_multiplier < 1.0 {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "Provisional multiplier must be at least 1".to_string(),
            }
            .into());
        }

        if self.provisional_decay_scale <= 0.0 {
            return Err(crate::error::RatingError::ConfigurationError {
                message: "Provisional decay scale must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
