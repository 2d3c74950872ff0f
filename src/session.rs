//! Caller-side comparison session
//!
//! Owns the in-memory rating map for the active topic and serializes the
//! read-modify-write sequence around each recorded comparison: apply the
//! result, persist the new map, then expose the recomputed ranking.

use crate::rating::engine::EloEngine;
use crate::rating::ranking::{comparisons_recorded, rank};
use crate::rating::storage::RatingStore;
use crate::types::{Item, RankedEntry, RatingMap, TopicKey};

/// A single user's comparison session over one topic at a time
///
/// A comparison counts as recorded once the updated map has been handed to
/// the store; the session keeps serving the in-memory state even when
/// persistence degrades.
#[derive(Debug)]
pub struct PreferenceSession<S: RatingStore> {
    store: S,
    engine: EloEngine,
    topic_key: TopicKey,
    ratings: RatingMap,
}

impl<S: RatingStore> PreferenceSession<S> {
    /// Open a session on a topic, loading any persisted ratings
    pub fn open(store: S, engine: EloEngine, topic_key: impl Into<TopicKey>) -> Self {
        let topic_key = topic_key.into();
        let ratings = store.load(&topic_key);
        Self {
            store,
            engine,
            topic_key,
            ratings,
        }
    }

    pub fn topic_key(&self) -> &str {
        &self.topic_key
    }

    /// Current in-memory rating map
    pub fn ratings(&self) -> &RatingMap {
        &self.ratings
    }

    /// Switch to another topic, dropping this topic's in-memory state and
    /// loading the other topic's persisted map
    pub fn switch_topic(&mut self, topic_key: impl Into<TopicKey>) {
        self.topic_key = topic_key.into();
        self.ratings = self.store.load(&self.topic_key);
    }

    /// Record one comparison and persist the updated map
    pub fn record_result(&mut self, winner: &Item, loser: &Item) -> crate::error::Result<()> {
        let updated = self.engine.apply_result(&self.ratings, winner, loser)?;
        self.store.save(&self.topic_key, &updated);
        self.ratings = updated;
        Ok(())
    }

    /// Current ranking over the topic's items
    pub fn rankings(&self, items: &[Item]) -> Vec<RankedEntry> {
        rank(&self.ratings, items, self.engine.config().base_rating)
    }

    /// The current front-runner, if any items exist
    pub fn top_pick(&self, items: &[Item]) -> Option<RankedEntry> {
        self.rankings(items).into_iter().next()
    }

    /// Number of comparisons recorded in this topic
    pub fn comparisons_recorded(&self) -> u64 {
        comparisons_recorded(&self.ratings)
    }

    /// Wipe this topic's ratings, in memory and in storage
    pub fn reset(&mut self) {
        self.ratings.clear();
        self.store.reset(&self.topic_key);
    }
}
