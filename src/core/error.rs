//! Error types for the board model.

use derive_more::{Display, Error};

/// An action that cannot be applied to a board.
///
/// Signals a caller defect: the action should have come from
/// `legal_actions`, or been checked before reaching `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// A coordinate is outside `[0, 3)`.
    #[display("invalid move: ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// The cell already holds a mark.
    #[display("invalid move: ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
}

/// Text that does not describe a reachable board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Expected three rows separated by `/`.
    #[display("expected 3 rows, found {found}")]
    RowCount {
        /// Rows found.
        found: usize,
    },

    /// A row did not have three cells.
    #[display("row {row} has {found} cells, expected 3")]
    RowLength {
        /// Zero-based row.
        row: usize,
        /// Cells found.
        found: usize,
    },

    /// A cell symbol was not `X`, `O`, `_`, `.` or space.
    #[display("unknown cell symbol '{symbol}'")]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
    },

    /// Mark counts cannot arise from alternating play with X first.
    #[display("unreachable board: {x} X marks and {o} O marks")]
    Unbalanced {
        /// X count.
        x: usize,
        /// O count.
        o: usize,
    },
}
