//! Game sessions: the driving loop around the stateless engine.
//!
//! A `GameSession` owns the current board, the move history, and the RNG
//! used for the random opening. It asks a `MovePolicy` for each move,
//! validates it through `Board::apply`, and reports every new position to
//! an observer. There are no timers; callers step the session explicitly
//! or run it to completion with `play_out`.

use derive_more::{Display, Error};
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Action, ActionRecord, Board, GameRng, InvalidMoveError, Mark, MarkMap};
use crate::rules::{outcome, Outcome};
use crate::search::SearchConfig;

use super::policy::{random_action, MovePolicy};

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// How many of the game's first computer moves are chosen uniformly at
    /// random instead of by the computer's policy.
    pub opening_random_moves: u32,

    /// Seed for the session RNG.
    pub seed: u64,

    /// Search settings for computer players.
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            opening_random_moves: 1,
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Create a new config with a different opening override length.
    pub fn with_opening_random_moves(mut self, moves: u32) -> Self {
        self.opening_random_moves = moves;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// Errors from driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The action could not be applied.
    #[display("{_0}")]
    InvalidMove(#[error(source)] InvalidMoveError),

    /// The game has already ended.
    #[display("game is already over")]
    GameOver,

    /// The policy returned no action.
    #[display("{mark} had no action to play")]
    NoAction {
        /// Side that failed to move.
        mark: Mark,
    },
}

impl From<InvalidMoveError> for SessionError {
    fn from(err: InvalidMoveError) -> Self {
        SessionError::InvalidMove(err)
    }
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Every move in order.
    pub history: Vector<ActionRecord>,
    /// Final position.
    pub board: Board,
    /// How it ended.
    pub outcome: Outcome,
}

/// Results of several games between the same policies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Games won by each mark.
    pub wins: MarkMap<u32>,
    /// Drawn games.
    pub draws: u32,
}

impl SeriesSummary {
    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins.iter().map(|(_, w)| w).sum::<u32>() + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) => self.wins[mark] += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: MatchConfig,
    board: Board,
    history: Vector<ActionRecord>,
    automated_moves: u32,
    rng: GameRng,
}

impl GameSession {
    /// Start a new game from the empty board.
    pub fn new(config: MatchConfig) -> Self {
        Self::with_rng(config, GameRng::new(config.seed))
    }

    /// Start a new game drawing randomness from `rng`.
    pub fn with_rng(config: MatchConfig, rng: GameRng) -> Self {
        Self {
            config,
            board: Board::empty(),
            history: Vector::new(),
            automated_moves: 0,
            rng,
        }
    }

    /// Current position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.board.mover()
    }

    /// Current status.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Moves played so far. Cloning is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Apply `action` for the side to move, wherever it came from.
    #[instrument(skip(self), fields(mark = %self.board.mover()))]
    pub fn play(&mut self, action: Action) -> Result<Outcome, SessionError> {
        if self.outcome().is_over() {
            return Err(SessionError::GameOver);
        }

        let mark = self.board.mover();
        let next = self.board.apply(action)?;
        let record = ActionRecord::new(mark, action, self.history.len() as u32);

        self.history.push_back(record);
        self.board = next;

        let result = self.outcome();
        debug!(ply = record.ply, position = %next.notation(), outcome = %result, "move applied");
        Ok(result)
    }

    /// Ask `policy` for the next action, applying the random opening
    /// override to the game's first automated moves.
    pub fn choose(&mut self, policy: &mut dyn MovePolicy) -> Result<Action, SessionError> {
        if self.outcome().is_over() {
            return Err(SessionError::GameOver);
        }

        let mark = self.to_move();
        let action = if policy.is_automated() {
            let opening = self.automated_moves < self.config.opening_random_moves;
            self.automated_moves += 1;
            if opening {
                debug!(%mark, "random opening move");
                random_action(&self.board, &mut self.rng)
            } else {
                policy.choose_action(&self.board, &mut self.rng)
            }
        } else {
            policy.choose_action(&self.board, &mut self.rng)
        };

        action.ok_or(SessionError::NoAction { mark })
    }

    /// Let `policy` make one move.
    pub fn step(&mut self, policy: &mut dyn MovePolicy) -> Result<ActionRecord, SessionError> {
        let mark = self.to_move();
        let action = self.choose(policy)?;
        self.play(action)?;
        Ok(ActionRecord::new(mark, action, self.history.len() as u32 - 1))
    }

    /// Play until the game ends, calling `observer` after every move.
    #[instrument(skip_all)]
    pub fn play_out(
        &mut self,
        players: &mut MarkMap<Box<dyn MovePolicy>>,
        mut observer: impl FnMut(&Board, Outcome),
    ) -> Result<GameRecord, SessionError> {
        while !self.outcome().is_over() {
            let mark = self.to_move();
            self.step(players[mark].as_mut())?;
            observer(&self.board, self.outcome());
        }

        let record = GameRecord {
            history: self.history.clone(),
            board: self.board,
            outcome: self.outcome(),
        };
        info!(
            outcome = %record.outcome,
            moves = record.history.len(),
            x = players[Mark::X].name(),
            o = players[Mark::O].name(),
            "game over"
        );
        Ok(record)
    }
}

/// Play `games` games between the same policies, each with its own RNG
/// stream forked from `config.seed`.
pub fn play_series(
    config: MatchConfig,
    games: u32,
    players: &mut MarkMap<Box<dyn MovePolicy>>,
) -> Result<SeriesSummary, SessionError> {
    let mut rng = GameRng::new(config.seed);
    let mut summary = SeriesSummary::default();

    for _ in 0..games {
        let mut session = GameSession::with_rng(config, rng.fork());
        let record = session.play_out(players, |_, _| {})?;
        summary.record(record.outcome);
    }

    Ok(summary)
}
