//! Utility functions for the rating engine

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Current time as epoch milliseconds, the unit used in persisted entries
pub fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Reduce an arbitrary topic key to a safe file stem
///
/// Topic keys arrive as caller-chosen strings (historically relative paths
/// like `topics/animals.json`), so anything outside `[A-Za-z0-9._-]` is
/// replaced before the key touches the filesystem.
pub fn sanitize_topic_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
