//! Game driver: sessions and move policies.
//!
//! The engine (`core`, `rules`, `search`) is stateless. This module holds
//! the state a front end needs to run a game: the current board, history,
//! and which policy plays each mark.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Mark, MarkMap};
//! use rust_ttt::game::{GameSession, MatchConfig, MinimaxPolicy, MovePolicy};
//! use rust_ttt::rules::Outcome;
//!
//! let config = MatchConfig::default();
//! let mut players: MarkMap<Box<dyn MovePolicy>> =
//!     MarkMap::new(|_| Box::new(MinimaxPolicy::new(config.search)) as Box<dyn MovePolicy>);
//!
//! let mut session = GameSession::new(config);
//! let record = session
//!     .play_out(&mut players, |board, _outcome| println!("{}\n", board))
//!     .unwrap();
//!
//! assert_eq!(record.outcome, Outcome::Draw);
//! ```

pub mod policy;
pub mod session;

pub use policy::{MinimaxPolicy, MovePolicy, RandomPolicy};
pub use session::{play_series, GameRecord, GameSession, MatchConfig, SeriesSummary, SessionError};
