//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("winner and loser must be distinct items, got '{id}' on both sides")]
    IdenticalOpponents { id: String },

    #[error("failed to read ratings for topic '{topic_key}': {message}")]
    StorageReadFailure { topic_key: String, message: String },

    #[error("failed to write ratings for topic '{topic_key}': {message}")]
    StorageWriteFailure { topic_key: String, message: String },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}
