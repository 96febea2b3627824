//! Minimax search with optional alpha-beta pruning.
//!
//! The recursion evaluates from a fixed perspective: leaf scores are
//! relative to `perspective`, the root maximizes, and each ply flips
//! between maximizing and minimizing. Children are visited in
//! `legal_actions` order and ties keep the first action that reached the
//! best score, so pruned and unpruned searches return the same move.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Action, Board, Mark};
use crate::rules::{evaluate_leaf, is_terminal, legal_actions, Score, MAX_PLIES};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score and chosen action of a search.
///
/// `action` is `None` for terminal positions and for a depth limit of 0,
/// where the root itself is scored as a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value from the searching perspective.
    pub score: Score,
    /// Best action, first in enumeration order among equals.
    pub action: Option<Action>,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            action: None,
        }
    }
}

/// Per-call search context. Holds no state beyond the borrowed accumulator.
struct Searcher<'a> {
    perspective: Mark,
    use_pruning: bool,
    stats: &'a mut SearchStats,
}

impl Searcher<'_> {
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        ply: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || is_terminal(board) {
            self.stats.leaves_evaluated += 1;
            return SearchResult::leaf(evaluate_leaf(board, self.perspective));
        }

        let mut best = SearchResult::leaf(if maximizing { Score::MIN } else { Score::MAX });

        for action in legal_actions(board) {
            let Ok(child) = board.apply(action) else {
                continue;
            };
            let score = self
                .minimax(&child, depth - 1, ply + 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        action: Some(action),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        action: Some(action),
                    };
                }
                beta = beta.min(best.score);
            }

            if self.use_pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Plies to search from the root, never more than the longest possible game.
fn root_depth(config: &SearchConfig) -> u32 {
    config.depth_limit.map_or(MAX_PLIES, |depth| depth.min(MAX_PLIES))
}

/// Search `board` for `perspective`, adding counts to `stats`.
///
/// `stats` is not reset, so one accumulator can span several searches.
pub fn search(
    board: &Board,
    perspective: Mark,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> SearchResult {
    let start = Instant::now();
    let mut searcher = Searcher {
        perspective,
        use_pruning: config.use_pruning,
        stats,
    };
    let result = searcher.minimax(board, root_depth(config), 0, Score::MIN, Score::MAX, true);
    searcher.stats.time_us += start.elapsed().as_micros() as u64;
    result
}

/// Best move for `perspective` on `board`.
///
/// `depth_limit` of `None` searches to terminal positions. Returns the leaf
/// score and no action for a terminal board or a depth limit of 0, and an
/// action otherwise.
///
/// ```
/// use rust_ttt::core::{Action, Board, Mark};
/// use rust_ttt::search::best_move;
///
/// // X completes the left column.
/// let board: Board = "X_O/XO_/___".parse().unwrap();
/// let result = best_move(&board, Mark::X, None, true);
/// assert_eq!(result.score, 1);
/// assert_eq!(result.action, Some(Action::new(2, 0)));
/// ```
#[instrument(skip(board), fields(position = %board.notation()))]
pub fn best_move(
    board: &Board,
    perspective: Mark,
    depth_limit: Option<u32>,
    use_pruning: bool,
) -> SearchResult {
    let config = SearchConfig {
        depth_limit,
        use_pruning,
    };
    let mut stats = SearchStats::new();
    let result = search(board, perspective, &config, &mut stats);
    debug!(
        score = result.score,
        action = ?result.action,
        nodes = stats.nodes_visited,
        "search complete"
    );
    result
}

/// Evaluate root moves in parallel.
///
/// Each root move gets its own full window and its own `SearchStats`;
/// results are combined in enumeration order, so the outcome matches the
/// sequential search. Node counts differ from a sequential pruned search
/// because bounds are not shared between root moves.
#[instrument(skip(board, config), fields(position = %board.notation()))]
pub fn search_parallel(
    board: &Board,
    perspective: Mark,
    config: &SearchConfig,
) -> (SearchResult, SearchStats) {
    let start = Instant::now();
    let depth = root_depth(config);

    let mut stats = SearchStats {
        nodes_visited: 1,
        ..SearchStats::default()
    };

    if depth == 0 || is_terminal(board) {
        stats.leaves_evaluated = 1;
        return (SearchResult::leaf(evaluate_leaf(board, perspective)), stats);
    }

    let actions = legal_actions(board);
    let branches: Vec<(Action, Score, SearchStats)> = actions
        .as_slice()
        .par_iter()
        .filter_map(|&action| {
            let child = board.apply(action).ok()?;
            let mut branch_stats = SearchStats::new();
            let mut searcher = Searcher {
                perspective,
                use_pruning: config.use_pruning,
                stats: &mut branch_stats,
            };
            let score = searcher
                .minimax(&child, depth - 1, 1, Score::MIN, Score::MAX, false)
                .score;
            Some((action, score, branch_stats))
        })
        .collect();

    let mut best = SearchResult::leaf(Score::MIN);
    for (action, score, branch_stats) in &branches {
        stats.merge(branch_stats);
        if *score > best.score {
            best = SearchResult {
                score: *score,
                action: Some(*action),
            };
        }
    }

    stats.time_us = start.elapsed().as_micros() as u64;
    debug!(
        score = best.score,
        action = ?best.action,
        branches = branches.len(),
        nodes = stats.nodes_visited,
        "parallel search complete"
    );
    (best, stats)
}

/// Reusable search context owning its configuration and statistics.
///
/// Each call to `search` resets the statistics, so `stats()` always
/// describes the most recent search.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Run a search for `perspective` on `board`.
    #[instrument(skip(self, board), fields(position = %board.notation()))]
    pub fn search(&mut self, board: &Board, perspective: Mark) -> SearchResult {
        self.stats.reset();
        let result = search(board, perspective, &self.config, &mut self.stats);
        debug!(
            score = result.score,
            action = ?result.action,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );
        result
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DRAW, LOSS, WIN};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_action() {
        let won = board("XXX/OO_/___");
        assert_eq!(best_move(&won, Mark::X, None, true), SearchResult::leaf(WIN));
        assert_eq!(best_move(&won, Mark::O, None, false), SearchResult::leaf(LOSS));

        let drawn = board("XOX/XOO/OXX");
        assert_eq!(best_move(&drawn, Mark::X, None, true), SearchResult::leaf(DRAW));
    }

    #[test]
    fn test_takes_immediate_win() {
        // X wins down column 0; O threatens the same cell.
        let b = board("X_O/XO_/___");
        for use_pruning in [true, false] {
            let result = best_move(&b, Mark::X, Some(1), use_pruning);
            assert_eq!(result.score, WIN);
            assert_eq!(result.action, Some(Action::new(2, 0)));
        }
    }

    #[test]
    fn test_blocks_threat() {
        // X threatens (2, 2); every other O move loses.
        let b = board("___/_O_/XX_");
        let result = best_move(&b, Mark::O, None, true);
        assert_eq!(result.action, Some(Action::new(2, 2)));
        assert_eq!(result.score, DRAW);
    }

    #[test]
    fn test_depth_zero_scores_root_as_leaf() {
        let b = board("XO_/_X_/___");
        let config = SearchConfig::default().with_depth_limit(0);
        for use_pruning in [true, false] {
            let mut stats = SearchStats::new();
            let result = search(&b, Mark::O, &config.with_pruning(use_pruning), &mut stats);

            assert_eq!(result, SearchResult::leaf(DRAW));
            assert_eq!(stats.nodes_visited, 1);
            assert_eq!(stats.leaves_evaluated, 1);
        }

        let (parallel, stats) = search_parallel(&b, Mark::O, &config);
        assert_eq!(parallel, SearchResult::leaf(DRAW));
        assert_eq!(stats.nodes_visited, 1);
    }

    #[test]
    fn test_depth_one_returns_move() {
        let result = best_move(&Board::empty(), Mark::X, Some(1), true);
        assert_eq!(result.action, Some(Action::new(0, 0)));
        assert_eq!(result.score, DRAW);
    }

    #[test]
    fn test_depth_above_game_length_is_capped() {
        let mut search = MinimaxSearch::new(SearchConfig::default().with_depth_limit(50));
        let result = search.search(&Board::empty(), Mark::X);
        assert_eq!(result, best_move(&Board::empty(), Mark::X, None, true));
        assert!(search.stats().max_ply <= MAX_PLIES);
    }

    #[test]
    fn test_ties_keep_first_action() {
        // Every opening draws under perfect play; (0, 0) comes first.
        let result = best_move(&Board::empty(), Mark::X, None, true);
        assert_eq!(result, SearchResult { score: DRAW, action: Some(Action::new(0, 0)) });
    }

    #[test]
    fn test_stats_accumulate_across_searches() {
        let b = board("XO_/_X_/___");
        let config = SearchConfig::default().with_depth_limit(3);
        let mut stats = SearchStats::new();

        search(&b, Mark::O, &config, &mut stats);
        let first = stats.nodes_visited;
        search(&b, Mark::O, &config, &mut stats);

        assert!(first > 0);
        assert_eq!(stats.nodes_visited, first * 2);
    }

    #[test]
    fn test_minimax_search_resets_stats() {
        let b = board("XO_/_X_/___");
        let mut search = MinimaxSearch::new(SearchConfig::default().with_pruning(false));

        search.search(&b, Mark::O);
        let first = *search.stats();
        search.search(&b, Mark::O);

        assert_eq!(search.stats().nodes_visited, first.nodes_visited);
        assert_eq!(search.stats().cutoffs, 0);
        assert!(search.stats().max_ply <= 6);
    }

    #[test]
    fn test_pruning_counts_cutoffs() {
        let b = board("XO_/_X_/___");
        let mut search = MinimaxSearch::new(SearchConfig::default().with_depth_limit(6));
        search.search(&b, Mark::O);
        assert!(search.stats().cutoffs > 0);
    }

    #[test]
    fn test_depth_limit_bounds_ply() {
        let mut search = MinimaxSearch::new(SearchConfig::default().with_depth_limit(2));
        search.search(&Board::empty(), Mark::X);
        assert_eq!(search.stats().max_ply, 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let b = board("XO_/_X_/___");
        let config = SearchConfig::default().with_depth_limit(6);

        let (parallel, stats) = search_parallel(&b, Mark::O, &config);
        let sequential = best_move(&b, Mark::O, Some(6), false);

        assert_eq!(parallel, sequential);
        assert!(stats.nodes_visited > 1);
    }

    #[test]
    fn test_parallel_terminal() {
        let (result, stats) = search_parallel(&board("XXX/OO_/___"), Mark::O, &SearchConfig::default());
        assert_eq!(result, SearchResult::leaf(LOSS));
        assert_eq!(stats.nodes_visited, 1);
    }
}
