//! Command-line interface for the `ttt` binary.

use clap::{Parser, Subcommand, ValueEnum};
use rust_ttt::core::{Board, Mark};

/// Tic-tac-toe with a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Tic-tac-toe driven by minimax with alpha-beta pruning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Who plays the game
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// A human at the terminal against the computer
    Human,
    /// Computer against computer
    Computer,
}

/// Search flags shared by several commands
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct SearchArgs {
    /// Maximum plies to look ahead (default: search to the end of the game)
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Disable alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Human vs computer, or computer vs computer
        #[arg(short, long, value_enum, default_value_t = Mode::Human)]
        mode: Mode,

        /// Mark the human plays (human mode only)
        #[arg(long, default_value = "X")]
        human_mark: Mark,

        /// Number of the game's first computer moves chosen at random
        #[arg(long, default_value = "1")]
        opening_random_moves: u32,

        /// Seed for random opening moves
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Games to play (computer mode only); more than one prints a summary
        #[arg(long, default_value = "1")]
        games: u32,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the best move for a position
    Best {
        /// Position, rows separated by '/', e.g. "XO_/_X_/___"
        #[arg(short, long)]
        board: Board,

        /// Mark to search for (default: the side to move)
        #[arg(short, long)]
        perspective: Option<Mark>,

        /// Evaluate root moves in parallel
        #[arg(long)]
        parallel: bool,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Compare node counts with and without alpha-beta pruning
    Prove {
        /// Position, rows separated by '/'
        #[arg(short, long, default_value = "XO_/_X_/___")]
        board: Board,

        /// Maximum plies to look ahead
        #[arg(short, long, default_value = "6")]
        depth: u32,
    },
}
