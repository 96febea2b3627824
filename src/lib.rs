//! # rust-ttt
//!
//! A tic-tac-toe game-search engine: minimax with optional alpha-beta
//! pruning, and the driver needed to play full games with it.
//!
//! ## Design Principles
//!
//! 1. **Value Boards**: `Board` is `Copy`. `apply` returns a new board and
//!    never touches the old one.
//!
//! 2. **Derived Turn Order**: the mover is computed from mark counts on
//!    every call. There is no turn counter to fall out of sync.
//!
//! 3. **Deterministic Search**: legal actions come in row-major order and
//!    ties keep the first best action, so results are reproducible and
//!    identical with or without pruning.
//!
//! 4. **No Globals**: node counts go into a caller-owned `SearchStats`.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, the board, actions, errors, RNG
//! - `rules`: Legal actions, winner/terminal detection, leaf scoring
//! - `search`: Minimax and alpha-beta, statistics, pruning comparison
//! - `game`: Sessions and move policies for playing complete games

pub mod core;
pub mod rules;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    apply, empty_board, mover,
    Action, ActionList, ActionRecord, Board, Cell, GameRng, Mark, MarkMap,
    BoardParseError, InvalidMoveError,
};

pub use crate::rules::{
    evaluate_leaf, is_terminal, legal_actions, outcome, winner, winning_line,
    Line, LineKind, Outcome, Score,
};

pub use crate::search::{
    best_move, compare_pruning, search_parallel,
    MinimaxSearch, PruningComparison, SearchConfig, SearchResult, SearchStats,
};

pub use crate::game::{
    play_series, GameRecord, GameSession, MatchConfig, MinimaxPolicy, MovePolicy, RandomPolicy,
    SeriesSummary, SessionError,
};
