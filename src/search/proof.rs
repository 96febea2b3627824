//! Side-by-side comparison of pruned and unpruned search.
//!
//! Runs the same search twice with separate accumulators and reports
//! whether the results agree and how much work pruning saved.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::{Board, Mark};

use super::config::SearchConfig;
use super::minimax::{search, SearchResult};
use super::stats::SearchStats;

/// Results of one position searched with and without pruning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruningComparison {
    /// Plain minimax.
    pub unpruned: SearchResult,
    /// Counters for plain minimax.
    pub unpruned_stats: SearchStats,
    /// Alpha-beta.
    pub pruned: SearchResult,
    /// Counters for alpha-beta.
    pub pruned_stats: SearchStats,
}

impl PruningComparison {
    /// True when both searches chose the same score and action.
    #[must_use]
    pub fn results_agree(&self) -> bool {
        self.unpruned == self.pruned
    }

    /// True when pruning visited strictly fewer nodes.
    #[must_use]
    pub fn pruning_saved_work(&self) -> bool {
        self.pruned_stats.nodes_visited < self.unpruned_stats.nodes_visited
    }

    /// Fraction of unpruned nodes that pruning skipped, in `[0, 1]`.
    #[must_use]
    pub fn savings(&self) -> f64 {
        let full = self.unpruned_stats.nodes_visited;
        if full == 0 {
            return 0.0;
        }
        full.saturating_sub(self.pruned_stats.nodes_visited) as f64 / full as f64
    }
}

/// Search `board` for `perspective` twice, without and then with pruning.
#[instrument(skip(board), fields(position = %board.notation()))]
pub fn compare_pruning(board: &Board, perspective: Mark, depth_limit: Option<u32>) -> PruningComparison {
    let config = SearchConfig {
        depth_limit,
        use_pruning: false,
    };

    let mut unpruned_stats = SearchStats::new();
    let unpruned = search(board, perspective, &config, &mut unpruned_stats);

    let mut pruned_stats = SearchStats::new();
    let pruned = search(board, perspective, &config.with_pruning(true), &mut pruned_stats);

    let comparison = PruningComparison {
        unpruned,
        unpruned_stats,
        pruned,
        pruned_stats,
    };
    info!(
        unpruned_nodes = unpruned_stats.nodes_visited,
        pruned_nodes = pruned_stats.nodes_visited,
        agree = comparison.results_agree(),
        "pruning comparison"
    );
    comparison
}
