//! Duel Rank - pairwise-comparison preference ranking
//!
//! This crate turns a stream of winner/loser judgments over a topic's items
//! into a continuously-updated Elo-style ranking, with per-topic persistence
//! and tie-aware place numbering.

pub mod config;
pub mod error;
pub mod rating;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::{EngineConfig, StorageConfig};
pub use rating::{
    comparisons_recorded, rank, EloEngine, FileRatingStore, InMemoryRatingStore, RatingStore,
};
pub use session::PreferenceSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
