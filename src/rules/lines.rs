//! The eight winning lines and completed-line detection.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Mark};

/// Which kind of line three cells form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A row, by index.
    Row(u8),
    /// A column, by index.
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Three cells that win the game when one mark holds all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Shape of the line.
    pub kind: LineKind,
    /// The cells, in row-major order.
    pub cells: [Action; 3],
}

const fn row(r: u8) -> Line {
    Line {
        kind: LineKind::Row(r),
        cells: [Action::new(r, 0), Action::new(r, 1), Action::new(r, 2)],
    }
}

const fn column(c: u8) -> Line {
    Line {
        kind: LineKind::Column(c),
        cells: [Action::new(0, c), Action::new(1, c), Action::new(2, c)],
    }
}

/// All lines, scanned rows first, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    row(0),
    row(1),
    row(2),
    column(0),
    column(1),
    column(2),
    Line {
        kind: LineKind::Diagonal,
        cells: [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    },
    Line {
        kind: LineKind::AntiDiagonal,
        cells: [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
    },
];

impl Line {
    /// The mark holding all three cells, if any.
    #[must_use]
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.cells;
        let first = board.get(a)?;
        if board.get(b)? == first && board.get(c)? == first {
            first.mark()
        } else {
            None
        }
    }

    /// True when `action` is one of this line's cells.
    #[must_use]
    pub fn contains(&self, action: Action) -> bool {
        self.cells.contains(&action)
    }
}

/// The first completed line on `board` and the mark that holds it.
///
/// Used by front ends to highlight the win.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, *line)))
}
