//! Rule engine: pure functions over boards.
//!
//! - Legal actions in a fixed row-major order
//! - Winner and terminal detection
//! - Leaf scoring from a fixed perspective
//!
//! Nothing here holds state; every answer is recomputed from the board.

pub mod engine;
pub mod lines;
pub mod space;

pub use engine::{
    evaluate_leaf, is_terminal, legal_actions, outcome, winner, Outcome, Score, DRAW, LOSS,
    MAX_PLIES, WIN,
};
pub use lines::{winning_line, Line, LineKind, LINES};
pub use space::reachable_boards;
