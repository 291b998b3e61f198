//! Memoization of searched subtrees keyed by canonical position.

use crate::Score;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::instrument;

/// How a stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    /// The score is the exact value.
    Exact,
    /// The true value is at least the score (the search failed high).
    Lower,
    /// The true value is at most the score (the search failed low).
    Upper,
}

impl Bound {
    /// Classifies a fail-hard result against the window it was searched in.
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Self {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

/// A cached search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TableEntry<M> {
    /// Score from the perspective of the player to move.
    score: Score,
    /// Remaining depth the subtree was searched to.
    depth: u32,
    /// Whether `score` is exact or a bound.
    bound: Bound,
    /// Best move found, if any move raised alpha.
    best_move: Option<M>,
}

/// Transposition table shared by every node of one search.
///
/// Entries are never evicted; the table grows with the number of distinct
/// positions visited.
#[derive(Debug, Clone)]
pub struct TranspositionTable<K, M> {
    entries: HashMap<K, TableEntry<M>>,
}

impl<K, M> TranspositionTable<K, M>
where
    K: Eq + Hash + std::fmt::Debug,
    M: Copy,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the entry for `key` if it was searched at least
    /// `required_depth` plies deep.
    pub fn lookup(&self, key: &K, required_depth: u32) -> Option<&TableEntry<M>> {
        self.entries
            .get(key)
            .filter(|entry| entry.depth >= required_depth)
    }

    /// Returns the stored best move for `key`, whatever its depth.
    pub fn best_move(&self, key: &K) -> Option<M> {
        self.entries.get(key).and_then(|entry| entry.best_move)
    }

    /// Records a search result.
    ///
    /// An existing entry is replaced only by one searched at least as deep.
    /// Returns whether the entry was written.
    pub fn store(
        &mut self,
        key: K,
        depth: u32,
        score: Score,
        bound: Bound,
        best_move: Option<M>,
    ) -> bool {
        let entry = TableEntry {
            score,
            depth,
            bound,
            best_move,
        };
        match self.entries.get_mut(&key) {
            Some(existing) if existing.depth > depth => false,
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.entries.insert(key, entry);
                true
            }
        }
    }

    /// Removes every entry.
    #[instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, M> Default for TranspositionTable<K, M>
where
    K: Eq + Hash + std::fmt::Debug,
    M: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
