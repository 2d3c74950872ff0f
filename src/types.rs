//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for comparable items, supplied by the caller
pub type ItemId = String;

/// Stable key scoping a rating map to one topic (the original UI used the
/// topic's file name here)
pub type TopicKey = String;

/// A comparable item within a topic
///
/// The engine only consumes the identity and the display name (for tie-break
/// ordering); any further display fields stay with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Per-item rating state within one topic
///
/// Serialized field names form the durable per-topic document contract:
/// `{rating, wins, losses, lastUpdated}` with `lastUpdated` in epoch millis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    /// Unbounded real rating, stored rounded to a whole number
    pub rating: f64,
    pub wins: u32,
    pub losses: u32,
    pub last_updated: i64,
}

impl RatingEntry {
    /// Create a fresh entry for an item with no recorded comparisons
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            wins: 0,
            losses: 0,
            last_updated: crate::utils::timestamp_millis(),
        }
    }

    /// Total comparisons recorded for this item
    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Mapping from item id to rating state, scoped to one topic
pub type RatingMap = HashMap<ItemId, RatingEntry>;

/// One row of a computed ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub item: Item,
    pub rating: f64,
    pub wins: u32,
    pub losses: u32,
    /// Competition-style placement: ties on rating share a place, the next
    /// distinct rating resumes at (strictly-higher-rated count) + 1
    pub place: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_games() {
        let entry = RatingEntry::new(1200.0);
        assert_eq!(entry.rating, 1200.0);
        assert_eq!(entry.games(), 0);
        assert!(entry.last_updated > 0);
    }

    #[test]
    fn test_games_sums_wins_and_losses() {
        let entry = RatingEntry {
            rating: 1300.0,
            wins: 7,
            losses: 3,
            last_updated: 0,
        };
        assert_eq!(entry.games(), 10);
    }

    #[test]
    fn test_entry_serializes_with_camel_case_timestamp() {
        let entry = RatingEntry {
            rating: 1240.0,
            wins: 1,
            losses: 0,
            last_updated: 1_700_000_000_000,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["rating"], 1240.0);
        assert_eq!(json["wins"], 1);
        assert_eq!(json["losses"], 0);
        assert_eq!(json["lastUpdated"], 1_700_000_000_000_i64);
    }

    #[test]
    fn test_rating_map_round_trips_as_plain_object() {
        let mut map = RatingMap::new();
        map.insert("cat".to_string(), RatingEntry::new(1200.0));

        let json = serde_json::to_string(&map).unwrap();
        let parsed: RatingMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
