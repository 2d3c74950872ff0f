//! Ranking projection over a rating map
//!
//! Derives a display order from the current rating map without mutating it.

use crate::types::{Item, RankedEntry, RatingMap};
use std::cmp::Ordering;

/// Rank every item in `items` by its current rating state
///
/// Items with no recorded comparisons rank with `default_rating` and zero
/// wins/losses. Order is rating descending, then wins descending, then name
/// ascending (lexicographic). Places use competition numbering over the
/// rating alone: items tied on rating share a place equal to one plus the
/// count of strictly-higher-rated items, so [1600, 1600, 1550, 1500] places
/// as [1, 1, 3, 4].
pub fn rank(map: &RatingMap, items: &[Item], default_rating: f64) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = items
        .iter()
        .map(|item| {
            let (rating, wins, losses) = match map.get(&item.id) {
                Some(entry) => (entry.rating, entry.wins, entry.losses),
                None => (default_rating, 0, 0),
            };
            RankedEntry {
                item: item.clone(),
                rating,
                wins,
                losses,
                place: 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.wins.cmp(&a.wins))
            .then_with(|| a.item.name.cmp(&b.item.name))
    });

    let mut place = 1;
    for idx in 0..entries.len() {
        if idx > 0 && entries[idx].rating < entries[idx - 1].rating {
            place = idx + 1;
        }
        entries[idx].place = place;
    }

    entries
}

/// Number of comparisons recorded in a map
///
/// Each comparison records exactly one win, so summing wins counts every
/// duel once.
pub fn comparisons_recorded(map: &RatingMap) -> u64 {
    map.values().map(|entry| u64::from(entry.wins)).sum()
}
