//! Core value types: marks, actions, the board, errors, RNG.
//!
//! Everything here is a plain value. The board is `Copy`, and nothing in
//! this module keeps state between calls.

pub mod player;
pub mod action;
pub mod board;
pub mod error;
pub mod rng;

pub use player::{Mark, MarkMap};
pub use action::{Action, ActionList, ActionRecord};
pub use board::{apply, empty_board, mover, Board, Cell, BOARD_SIZE, CELL_COUNT};
pub use error::{BoardParseError, InvalidMoveError};
pub use rng::GameRng;
