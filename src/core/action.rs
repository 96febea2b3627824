//! Action representation: a (row, column) coordinate on the board.
//!
//! An `Action` is only a coordinate. Whether it is legal depends on the
//! board it is applied to, so construction is unchecked and validity is
//! enforced by `Board::apply`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::BOARD_SIZE;
use super::player::Mark;

/// A move: place the mover's mark at `(row, col)`.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::Action;
///
/// let centre = Action::new(1, 1);
/// assert!(centre.in_bounds());
/// assert_eq!(centre.index(), Some(4));
/// assert!(!Action::new(3, 0).in_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, 0 at the top.
    pub row: u8,
    /// Column, 0 at the left.
    pub col: u8,
}

/// Legal actions for one board. Never more than nine.
pub type ActionList = SmallVec<[Action; 9]>;

impl Action {
    /// Create an action. Not validated.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Action addressing a row-major cell index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE * BOARD_SIZE)
            .then(|| Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8))
    }

    /// True when both coordinates are in `[0, 3)`.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major cell index, or `None` when out of range.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| self.row as usize * BOARD_SIZE + self.col as usize)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A played move with metadata for history tracking.
///
/// Used for:
/// - Game transcripts in the driver
/// - Replay/debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The mark that was placed.
    pub mark: Mark,

    /// Where it was placed.
    pub action: Action,

    /// Zero-based ply number.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(mark: Mark, action: Action, ply: u32) -> Self {
        Self { mark, action, ply }
    }
}
