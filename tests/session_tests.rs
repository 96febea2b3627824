//! Game driver integration tests.

use rust_ttt::core::{Action, Board, GameRng, Mark, MarkMap};
use rust_ttt::game::{
    play_series, GameSession, MatchConfig, MinimaxPolicy, MovePolicy, RandomPolicy, SessionError,
};
use rust_ttt::rules::Outcome;
use rust_ttt::search::SearchConfig;

fn players(x: Box<dyn MovePolicy>, o: Box<dyn MovePolicy>) -> MarkMap<Box<dyn MovePolicy>> {
    let mut slots = [Some(x), Some(o)];
    MarkMap::new(|mark| slots[mark.index()].take().unwrap())
}

/// Always answers with the same cell.
struct Stubborn(Action);

impl MovePolicy for Stubborn {
    fn choose_action(&mut self, _board: &Board, _rng: &mut GameRng) -> Option<Action> {
        Some(self.0)
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = MatchConfig::default().with_seed(5).with_opening_random_moves(3);
    let play = || {
        let mut p = players(Box::new(RandomPolicy), Box::new(MinimaxPolicy::new(config.search)));
        GameSession::new(config).play_out(&mut p, |_, _| {}).unwrap()
    };

    assert_eq!(play(), play());
}

#[test]
fn test_history_replays_to_final_board() {
    let config = MatchConfig::default().with_seed(17);
    let mut p = players(Box::new(RandomPolicy), Box::new(RandomPolicy));
    let record = GameSession::new(config).play_out(&mut p, |_, _| {}).unwrap();

    let mut board = Board::empty();
    for (ply, entry) in record.history.iter().enumerate() {
        assert_eq!(entry.ply as usize, ply);
        assert_eq!(entry.mark, board.mover());
        board = board.apply(entry.action).unwrap();
    }
    assert_eq!(board, record.board);
    assert!(record.outcome.is_over());
}

#[test]
fn test_illegal_policy_move_is_rejected() {
    let config = MatchConfig::default().with_opening_random_moves(0);
    let mut session = GameSession::new(config);
    let mut p = players(
        Box::new(Stubborn(Action::new(1, 1))),
        Box::new(Stubborn(Action::new(1, 1))),
    );

    let err = session.play_out(&mut p, |_, _| {}).unwrap_err();
    assert!(matches!(err, SessionError::InvalidMove(_)));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.to_move(), Mark::O);
}

#[test]
fn test_depth_limited_players_finish() {
    let search = SearchConfig::default().with_depth_limit(1);
    let config = MatchConfig::default().with_search(search).with_opening_random_moves(0);
    let mut p = players(
        Box::new(MinimaxPolicy::new(search)),
        Box::new(MinimaxPolicy::new(search)),
    );

    let record = GameSession::new(config).play_out(&mut p, |_, _| {}).unwrap();
    assert!(record.outcome.is_over());
}

#[test]
fn test_minimax_beats_or_draws_random_series() {
    let config = MatchConfig::default().with_seed(99).with_opening_random_moves(0);
    let mut p = players(Box::new(MinimaxPolicy::new(config.search)), Box::new(RandomPolicy));

    let summary = play_series(config, 10, &mut p).unwrap();

    assert_eq!(summary.games(), 10);
    assert_eq!(summary.wins[Mark::O], 0);
}

#[test]
fn test_step_after_game_over() {
    let mut session = GameSession::new(MatchConfig::default());
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.play(Action::new(r, c)).unwrap();
    }
    assert_eq!(session.outcome(), Outcome::Win(Mark::X));

    let mut policy = RandomPolicy;
    assert_eq!(session.step(&mut policy), Err(SessionError::GameOver));
}

#[test]
fn test_game_record_serialization() {
    let config = MatchConfig::default().with_seed(4);
    let mut p = players(Box::new(RandomPolicy), Box::new(RandomPolicy));
    let record = GameSession::new(config).play_out(&mut p, |_, _| {}).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let deserialized: rust_ttt::game::GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, deserialized);
}
