//! Pairwise Elo rating system
//!
//! This module provides the rating update engine, per-topic storage
//! interfaces, and the ranking projection derived from a rating map.

pub mod engine;
pub mod ranking;
pub mod storage;

// Re-export commonly used types
pub use engine::EloEngine;
pub use ranking::{comparisons_recorded, rank};
pub use storage::{FileRatingStore, InMemoryRatingStore, RatingStore, RecordingRatingStore};
