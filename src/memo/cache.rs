//! Subproblem cache keyed by `(index, remaining capacity)`.

use std::collections::HashMap;

/// Lazily populated map from `(index, capacity)` to the best value of
/// that subproblem.
///
/// Keys compare by exact structural equality of both integers. Each key
/// is written at most once. A cache belongs to one top-level solve and is
/// dropped with it.
#[derive(Debug)]
pub struct MemoCache<V> {
    entries: HashMap<(usize, i64), V>,
    hits: u64,
}

impl<V: Copy> MemoCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }

    /// Looks up a subproblem, counting a hit when present.
    pub fn get(&mut self, index: usize, capacity: i64) -> Option<V> {
        let found = self.entries.get(&(index, capacity)).copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    /// Records the value of a subproblem solved for the first time.
    pub fn insert(&mut self, index: usize, capacity: i64, value: V) {
        let previous = self.entries.insert((index, capacity), value);
        debug_assert!(
            previous.is_none(),
            "subproblem ({index}, {capacity}) solved twice"
        );
    }

    /// Number of distinct subproblems stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl<V: Copy> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
