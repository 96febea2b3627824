//! Move policies: who picks the next action.
//!
//! - `MovePolicy`: the trait the driver calls for every move
//! - `RandomPolicy`: uniform over legal actions
//! - `MinimaxPolicy`: best move for the side to move

use crate::core::{Action, Board, GameRng};
use crate::rules::legal_actions;
use crate::search::{MinimaxSearch, SearchConfig, SearchStats};

/// Chooses actions for one side.
///
/// Policies never apply moves themselves; the session validates and
/// applies whatever they return.
pub trait MovePolicy {
    /// Pick an action for the mover on `board`.
    ///
    /// Returns `None` when the policy has nothing to play (e.g. input closed).
    fn choose_action(&mut self, board: &Board, rng: &mut GameRng) -> Option<Action>;

    /// Whether the policy is a computer player.
    ///
    /// Only automated policies are subject to the random opening override.
    fn is_automated(&self) -> bool {
        true
    }

    /// Short label for logs and reports.
    fn name(&self) -> &str;
}

/// Uniformly random legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_action(&mut self, board: &Board, rng: &mut GameRng) -> Option<Action> {
        random_action(board, rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// A uniformly random legal action, or `None` on a full board.
pub(crate) fn random_action(board: &Board, rng: &mut GameRng) -> Option<Action> {
    let actions = legal_actions(board);
    rng.choose(&actions).copied()
}

/// Minimax from the perspective of whichever mark is to move.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    search: MinimaxSearch,
}

impl MinimaxPolicy {
    /// Create a policy searching with `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_action(&mut self, board: &Board, _rng: &mut GameRng) -> Option<Action> {
        self.search.search(board, board.mover()).action
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    #[test]
    fn test_random_policy_is_legal_and_seeded() {
        let board: Board = "XO_/_X_/___".parse().unwrap();
        let legal = legal_actions(&board);

        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);
        for _ in 0..20 {
            let a = RandomPolicy.choose_action(&board, &mut rng1).unwrap();
            let b = RandomPolicy.choose_action(&board, &mut rng2).unwrap();
            assert_eq!(a, b);
            assert!(legal.contains(&a));
        }
    }

    #[test]
    fn test_random_policy_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(RandomPolicy.choose_action(&board, &mut GameRng::new(1)), None);
    }

    #[test]
    fn test_minimax_policy_plays_for_mover() {
        // O to move must block at (2, 2).
        let board: Board = "___/_O_/XX_".parse().unwrap();
        assert_eq!(board.mover(), Mark::O);

        let mut policy = MinimaxPolicy::new(SearchConfig::default());
        let action = policy.choose_action(&board, &mut GameRng::new(0));

        assert_eq!(action, Some(Action::new(2, 2)));
        assert!(policy.last_stats().nodes_visited > 0);
        assert!(policy.is_automated());
    }
}
