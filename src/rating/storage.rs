//! Rating storage interface and implementations
//!
//! This module defines the interface for persisting per-topic rating maps,
//! with a file-backed implementation and an in-memory one for tests and
//! ephemeral sessions. Storage failures degrade to best-effort in-memory
//! operation instead of surfacing as fatal errors.

use crate::config::StorageConfig;
use crate::error::RatingError;
use crate::types::RatingMap;
use crate::utils::sanitize_topic_key;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::warn;

/// Trait for per-topic rating persistence
///
/// Every call is scoped by a topic key; distinct keys never share or leak
/// rating data. `load` and `save` never fail outward: unreadable data is
/// treated as absent and rejected writes leave the caller running on its
/// in-memory state.
pub trait RatingStore: Send + Sync {
    /// Load the persisted map for a topic, or an empty map if none exists
    /// or the payload cannot be parsed
    fn load(&self, topic_key: &str) -> RatingMap;

    /// Durably replace the whole map for a topic
    fn save(&self, topic_key: &str, map: &RatingMap);

    /// Wipe all recorded ratings for a topic
    fn reset(&self, topic_key: &str) {
        self.save(topic_key, &RatingMap::new());
    }
}

/// File-backed rating storage: one JSON document per topic key
#[derive(Debug)]
pub struct FileRatingStore {
    root_dir: PathBuf,
}

impl FileRatingStore {
    /// Create a store persisting under the configured directory
    pub fn new(config: StorageConfig) -> Self {
        Self {
            root_dir: config.root_dir,
        }
    }

    /// Create a store persisting under an explicit directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Document path for a topic key
    pub fn topic_path(&self, topic_key: &str) -> PathBuf {
        self.root_dir
            .join(format!("{}.json", sanitize_topic_key(topic_key)))
    }

    /// Fallible load, exposing the underlying cause
    pub fn try_load(&self, topic_key: &str) -> crate::error::Result<RatingMap> {
        let path = self.topic_path(topic_key);
        if !path.exists() {
            return Ok(RatingMap::new());
        }

        let raw = fs::read_to_string(&path).map_err(|e| RatingError::StorageReadFailure {
            topic_key: topic_key.to_string(),
            message: e.to_string(),
        })?;

        let map = serde_json::from_str(&raw).map_err(|e| RatingError::StorageReadFailure {
            topic_key: topic_key.to_string(),
            message: e.to_string(),
        })?;

        Ok(map)
    }

    /// Fallible save, exposing the underlying cause
    pub fn try_save(&self, topic_key: &str, map: &RatingMap) -> crate::error::Result<()> {
        fs::create_dir_all(&self.root_dir).map_err(|e| RatingError::StorageWriteFailure {
            topic_key: topic_key.to_string(),
            message: e.to_string(),
        })?;

        let payload =
            serde_json::to_string(map).map_err(|e| RatingError::StorageWriteFailure {
                topic_key: topic_key.to_string(),
                message: e.to_string(),
            })?;

        fs::write(self.topic_path(topic_key), payload).map_err(|e| {
            RatingError::StorageWriteFailure {
                topic_key: topic_key.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl RatingStore for FileRatingStore {
    fn load(&self, topic_key: &str) -> RatingMap {
        match self.try_load(topic_key) {
            Ok(map) => map,
            Err(e) => {
                warn!("Unable to read ratings, starting empty: {}", e);
                RatingMap::new()
            }
        }
    }

    fn save(&self, topic_key: &str, map: &RatingMap) {
        if let Err(e) = self.try_save(topic_key, map) {
            warn!("Unable to persist ratings, continuing in memory: {}", e);
        }
    }
}

/// In-memory rating storage, keyed by topic
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    topics: RwLock<HashMap<String, RatingMap>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatingStore for InMemoryRatingStore {
    fn load(&self, topic_key: &str) -> RatingMap {
        self.topics
            .read()
            .map(|topics| topics.get(topic_key).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn save(&self, topic_key: &str, map: &RatingMap) {
        if let Ok(mut topics) = self.topics.write() {
            topics.insert(topic_key.to_string(), map.clone());
        }
    }
}

/// Recording rating store for testing
///
/// Behaves like [`InMemoryRatingStore`] while keeping a log of every save.
#[derive(Debug, Default)]
pub struct RecordingRatingStore {
    topics: RwLock<HashMap<String, RatingMap>>,
    save_calls: RwLock<Vec<(String, RatingMap)>>,
}

impl RecordingRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all save calls made (for testing)
    pub fn save_calls(&self) -> Vec<(String, RatingMap)> {
        self.save_calls
            .read()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Preset a topic's map without recording a save call
    pub fn preset(&self, topic_key: &str, map: RatingMap) {
        if let Ok(mut topics) = self.topics.write() {
            topics.insert(topic_key.to_string(), map);
        }
    }
}

impl RatingStore for RecordingRatingStore {
    fn load(&self, topic_key: &str) -> RatingMap {
        self.topics
            .read()
            .map(|topics| topics.get(topic_key).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn save(&self, topic_key: &str, map: &RatingMap) {
        if let Ok(mut calls) = self.save_calls.write() {
            calls.push((topic_key.to_string(), map.clone()));
        }

        if let Ok(mut topics) = self.topics.write() {
            topics.insert(topic_key.to_string(), map.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RatingEntry;
    use tempfile::tempdir;

    fn sample_map(id: &str, rating: f64) -> RatingMap {
        let mut map = RatingMap::new();
        map.insert(
            id.to_string(),
            RatingEntry {
                rating,
                wins: 2,
                losses: 1,
                last_updated: 1_700_000_000_000,
            },
        );
        map
    }

    #[test]
    fn test_load_missing_topic_returns_empty() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());

        assert!(store.load("never-saved").is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());
        let map = sample_map("cat", 1240.0);

        store.save("animals", &map);

        assert_eq!(store.load("animals"), map);
    }

    #[test]
    fn test_save_replaces_prior_document() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());

        store.save("animals", &sample_map("cat", 1240.0));
        store.save("animals", &sample_map("dog", 1190.0));

        let loaded = store.load("animals");
        assert!(loaded.contains_key("dog"));
        assert!(!loaded.contains_key("cat"));
    }

    #[test]
    fn test_topics_are_partitioned() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());

        store.save("animals", &sample_map("cat", 1240.0));
        store.save("films", &sample_map("heat", 1310.0));

        assert!(store.load("animals").contains_key("cat"));
        assert!(!store.load("animals").contains_key("heat"));
        assert!(store.load("films").contains_key("heat"));
    }

    #[test]
    fn test_path_like_topic_keys_stay_inside_root() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());

        store.save("topics/animals.json", &sample_map("cat", 1240.0));

        let path = store.topic_path("topics/animals.json");
        assert_eq!(path.parent().unwrap(), dir.path());
        assert!(store.load("topics/animals.json").contains_key("cat"));
    }

    #[test]
    fn test_corrupt_payload_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());

        store.save("animals", &sample_map("cat", 1240.0));
        fs::write(store.topic_path("animals"), "{not json").unwrap();

        assert!(store.load("animals").is_empty());
        assert!(store.try_load("animals").is_err());
    }

    #[test]
    fn test_reset_leaves_empty_document() {
        let dir = tempdir().unwrap();
        let store = FileRatingStore::with_root(dir.path());

        store.save("animals", &sample_map("cat", 1240.0));
        store.reset("animals");

        assert!(store.load("animals").is_empty());
        // The document itself is replaced, not deleted
        assert_eq!(
            fs::read_to_string(store.topic_path("animals")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_unwritable_root_degrades_without_panicking() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, "not a directory").unwrap();

        let store = FileRatingStore::with_root(&blocker);
        let map = sample_map("cat", 1240.0);

        // create_dir_all fails on a path occupied by a file
        assert!(store.try_save("animals", &map).is_err());
        store.save("animals", &map);
        assert!(store.load("animals").is_empty());
    }

    #[test]
    fn test_in_memory_store_round_trips_and_partitions() {
        let store = InMemoryRatingStore::new();

        store.save("animals", &sample_map("cat", 1240.0));
        store.save("films", &sample_map("heat", 1310.0));

        assert!(store.load("animals").contains_key("cat"));
        assert!(store.load("films").contains_key("heat"));
        assert!(store.load("unknown").is_empty());

        store.reset("animals");
        assert!(store.load("animals").is_empty());
    }

    #[test]
    fn test_recording_store_logs_saves() {
        let store = RecordingRatingStore::new();
        store.preset("animals", sample_map("cat", 1240.0));

        store.save("animals", &sample_map("cat", 1256.0));

        let calls = store.save_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "animals");
        assert_eq!(calls[0].1["cat"].rating, 1256.0);
    }
}
