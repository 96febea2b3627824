//! Minimax game-tree search for rust-ttt.
//!
//! ## Overview
//!
//! - **Fixed perspective**: leaf scores are +1 / 0 / −1 for one chosen mark;
//!   the root maximizes and plies alternate.
//! - **Optional alpha-beta**: skips siblings that cannot change the result.
//!   Pruned and unpruned searches return the same score and action.
//! - **Deterministic**: children are visited in row-major order and ties
//!   keep the first best action.
//! - **Explicit counters**: node visits go into a caller-owned
//!   `SearchStats`, never a global.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Mark};
//! use rust_ttt::search::{best_move, MinimaxSearch, SearchConfig};
//!
//! let board = Board::empty();
//!
//! // Single call
//! let result = best_move(&board, Mark::X, None, true);
//! assert_eq!(result.score, 0);
//!
//! // With statistics
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_depth_limit(4));
//! let result = search.search(&board, Mark::X);
//! assert!(result.action.is_some());
//! assert!(search.stats().nodes_visited > 1);
//! ```

pub mod config;
pub mod minimax;
pub mod proof;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{best_move, search, search_parallel, MinimaxSearch, SearchResult};
pub use proof::{compare_pruning, PruningComparison};
pub use stats::SearchStats;
