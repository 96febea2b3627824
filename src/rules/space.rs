//! Enumeration of the game's state space.

use rustc_hash::FxHashSet;

use crate::core::Board;

use super::engine::{is_terminal, legal_actions};

/// Every board reachable from the empty board by legal play, stopping at
/// terminal boards. Includes the empty board itself.
///
/// There are 5,478 of them.
#[must_use]
pub fn reachable_boards() -> FxHashSet<Board> {
    let mut seen = FxHashSet::default();
    let mut stack = vec![Board::empty()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            if let Ok(next) = board.apply(action) {
                stack.push(next);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn test_reachable_count() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_reachable_boards_are_balanced() {
        for board in reachable_boards() {
            let diff = board.count(Mark::X) as i32 - board.count(Mark::O) as i32;
            assert!(diff == 0 || diff == 1, "unbalanced board {}", board.notation());
        }
    }
}
