//! Pure rule functions layered on the board.
//!
//! - What actions are legal, in a fixed order
//! - Who has won, and whether the game is over
//! - How a leaf position scores from one mark's point of view

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionList, Board, Mark, CELL_COUNT};

use super::lines::winning_line;

/// Search score. Leaves score `LOSS`, `DRAW` or `WIN`.
pub type Score = i32;

/// Leaf score when the perspective mark has won.
pub const WIN: Score = 1;

/// Leaf score for a draw or an unfinished position.
pub const DRAW: Score = 0;

/// Leaf score when the perspective mark has lost.
pub const LOSS: Score = -1;

/// Status of a board. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Win(Mark),
    /// Full board, no line.
    Draw,
    /// Moves remain and nobody has won.
    InProgress,
}

impl Outcome {
    /// True unless the game is still in progress.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

/// Empty cells of `board`, row-major: (0,0), (0,1), ..., (2,2).
///
/// Search tie-breaking depends on this order.
#[must_use]
pub fn legal_actions(board: &Board) -> ActionList {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .filter_map(|(i, _)| Action::from_index(i))
        .collect()
}

/// The mark holding a complete row, column or diagonal.
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// True when someone has won or no empty cell remains.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Status of `board`.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Win(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Score `board` from `perspective`: `WIN`, `LOSS`, or `DRAW`.
///
/// Non-terminal boards score `DRAW`; they only reach here through a depth
/// cutoff.
#[must_use]
pub fn evaluate_leaf(board: &Board, perspective: Mark) -> Score {
    match winner(board) {
        Some(mark) if mark == perspective => WIN,
        Some(_) => LOSS,
        None => DRAW,
    }
}

/// Upper bound on plies in any game.
pub const MAX_PLIES: u32 = CELL_COUNT as u32;
