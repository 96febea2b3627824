//! Search statistics: the node-visit accumulator.
//!
//! Counters live in a value owned by the caller and passed into the search,
//! so repeated or concurrent searches never share counts.

use serde::{Deserialize, Serialize};

/// Statistics collected during one or more searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes_visited: u64,

    /// Positions scored by `evaluate_leaf`.
    pub leaves_evaluated: u64,

    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.leaves_evaluated += other.leaves_evaluated;
        self.cutoffs += other.cutoffs;
        self.max_ply = self.max_ply.max(other.max_ply);
        self.time_us += other.time_us;
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
