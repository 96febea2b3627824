//! The board: a 3×3 grid value type.
//!
//! `Board` is `Copy`. Every move produces a new value through `apply`, so a
//! board held by one caller can never be changed by another, and the board
//! before a move stays a valid snapshot after it.
//!
//! Turn order is not stored. `mover` derives it from the mark counts on
//! every call: X moves when the counts are equal, O when X is one ahead.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::error::{BoardParseError, InvalidMoveError};
use super::player::Mark;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Holds an X.
    X,
    /// Holds an O.
    O,
}

impl Cell {
    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// True for `Cell::Empty`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        self.mark().map_or('_', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// A 3×3 tic-tac-toe position.
///
/// Cells are stored row-major. Boards built through `Board::empty`,
/// `Board::apply` or parsing always satisfy `count(X) - count(O) ∈ {0, 1}`.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Action, Board, Cell, Mark};
///
/// let before = Board::empty();
/// let after = before.apply(Action::new(1, 1)).unwrap();
///
/// assert_eq!(after.get(Action::new(1, 1)), Some(Cell::X));
/// assert_eq!(before.get(Action::new(1, 1)), Some(Cell::Empty));
/// assert_eq!(after.mover(), Mark::O);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from rows, checking the mark-count invariant.
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardParseError> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }

        let board = Self { cells };
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x < o || x - o > 1 {
            return Err(BoardParseError::Unbalanced { x, o });
        }
        Ok(board)
    }

    /// The cell addressed by `action`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        let target = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// The mark that moves next.
    #[must_use]
    pub fn mover(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// A new board with the mover's mark placed at `action`.
    ///
    /// `self` is left untouched.
    pub fn apply(&self, action: Action) -> Result<Self, InvalidMoveError> {
        let Action { row, col } = action;
        let index = action
            .index()
            .ok_or(InvalidMoveError::OutOfRange { row, col })?;

        if !self.cells[index].is_empty() {
            return Err(InvalidMoveError::Occupied { row, col });
        }

        let mut next = *self;
        next.cells[index] = Cell::from(self.mover());
        Ok(next)
    }

    /// Compact one-line form, e.g. `XO_/_X_/___`. Parses back with `FromStr`.
    #[must_use]
    pub fn notation(&self) -> String {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.mark().map_or(" ".to_string(), |m| m.to_string()))
                .collect();
            write!(f, " {} ", line.join(" | "))?;
            if r + 1 < BOARD_SIZE {
                write!(f, "\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parse rows separated by `/` or newlines. Each row must be exactly
    /// three characters wide: `X`/`O` are marks, and `_`, `.`, `-` and space
    /// are empty cells, so spaces count toward the width. Only `\r` is
    /// stripped from row ends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .split(['/', '\n'])
            .map(|row| row.trim_end_matches('\r'))
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount { found: rows.len() });
        }

        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row: r,
                    found: symbols.len(),
                });
            }
            for (c, &symbol) in symbols.iter().enumerate() {
                grid[r][c] = match symbol {
                    '_' | '.' | '-' | ' ' => Cell::Empty,
                    other => Mark::from_symbol(other)
                        .map(Cell::from)
                        .ok_or(BoardParseError::UnknownSymbol { symbol: other })?,
                };
            }
        }

        Board::from_rows(grid)
    }
}

/// A board with every cell empty.
#[must_use]
pub const fn empty_board() -> Board {
    Board::empty()
}

/// A new board with the mover's mark placed at `action`.
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidMoveError> {
    board.apply(action)
}

/// The mark that moves next on `board`.
#[must_use]
pub fn mover(board: &Board) -> Mark {
    board.mover()
}
