//! Pairwise Elo update engine
//!
//! Converts a single (winner, loser) judgment into a new rating map using the
//! standard logistic expected score and a per-item provisional K-factor that
//! decays smoothly with games played.

use crate::config::EngineConfig;
use crate::error::RatingError;
use crate::types::{Item, RatingEntry, RatingMap};
use crate::utils;
use skillratings::elo::{expected_score, EloRating};
use tracing::debug;

/// Elo engine for two-item comparisons
///
/// Operates on an in-memory rating map handed in by the caller and returns a
/// new map; no state is retained across calls. Updated ratings are rounded
/// half-away-from-zero to whole numbers for storage.
#[derive(Debug, Clone)]
pub struct EloEngine {
    config: EngineConfig,
}

impl EloEngine {
    /// Create a new engine with validated configuration
    pub fn new(config: EngineConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Default entry for an item with no recorded comparisons
    pub fn default_entry(&self) -> RatingEntry {
        RatingEntry::new(self.config.base_rating)
    }

    /// Per-item K-factor given games played before the current match
    ///
    /// `base_k * (1 + (multiplier - 1) * e^(-games / scale))`: a brand-new
    /// item moves `multiplier` times faster than a fully-seasoned one, and
    /// the boost decays smoothly rather than stepping off.
    pub fn k_factor(&self, games: u32) -> f64 {
        let boost = (self.config.provisional_multiplier - 1.0)
            * (-(f64::from(games)) / self.config.provisional_decay_scale).exp();
        self.config.base_k * (1.0 + boost)
    }

    /// Apply one comparison result and return the updated map
    ///
    /// Entries for items not involved in the match pass through unchanged.
    /// Fails with [`RatingError::IdenticalOpponents`] when both sides refer
    /// to the same item, since recording a self-match would corrupt the
    /// win/loss accounting.
    pub fn apply_result(
        &self,
        map: &RatingMap,
        winner: &Item,
        loser: &Item,
    ) -> crate::error::Result<RatingMap> {
        if winner.id == loser.id {
            return Err(RatingError::IdenticalOpponents {
                id: winner.id.clone(),
            }
            .into());
        }

        let winner_entry = map
            .get(&winner.id)
            .cloned()
            .unwrap_or_else(|| self.default_entry());
        let loser_entry = map
            .get(&loser.id)
            .cloned()
            .unwrap_or_else(|| self.default_entry());

        let (expected_winner, expected_loser) = expected_score(
            &EloRating {
                rating: winner_entry.rating,
            },
            &EloRating {
                rating: loser_entry.rating,
            },
        );

        // K is evaluated on games played before this match is recorded
        let winner_k = self.k_factor(winner_entry.games());
        let loser_k = self.k_factor(loser_entry.games());

        let winner_rating = winner_entry.rating + winner_k * (1.0 - expected_winner);
        let loser_rating = loser_entry.rating + loser_k * (0.0 - expected_loser);

        debug!(
            "Recorded {} over {} ({} -> {}, {} -> {})",
            winner.id,
            loser.id,
            winner_entry.rating,
            winner_rating.round(),
            loser_entry.rating,
            loser_rating.round()
        );

        let now = utils::timestamp_millis();
        let mut next = map.clone();
        next.insert(
            winner.id.clone(),
            RatingEntry {
                rating: winner_rating.round(),
                wins: winner_entry.wins + 1,
                losses: winner_entry.losses,
                last_updated: now,
            },
        );
        next.insert(
            loser.id.clone(),
            RatingEntry {
                rating: loser_rating.round(),
                wins: loser_entry.wins,
                losses: loser_entry.losses + 1,
                last_updated: now,
            },
        );

        Ok(next)
    }
}

impl Default for EloEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}
