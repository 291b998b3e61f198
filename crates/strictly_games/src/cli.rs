//! Command-line interface for strictly_games.

use crate::config::FirstPlayer;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Games - Tic-tac-toe against a negamax engine
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against a negamax search engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Mark given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// X
    X,
    /// O
    O,
}

impl From<MarkArg> for strictly_tictactoe::Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Self::X,
            MarkArg::O => Self::O,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine (you are O)
    Play {
        /// Who moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,

        /// Search depth in plies (overrides the config file)
        #[arg(short, long)]
        depth: Option<u32>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable the transposition table
        #[arg(long)]
        no_table: bool,

        /// Keep the transposition table between moves
        #[arg(long)]
        retain_table: bool,

        /// Write the finished game as JSON to this path
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Mark that moves first
        #[arg(long, value_enum, default_value = "x")]
        first: MarkArg,

        /// Search depth in plies
        #[arg(short, long, default_value_t = strictly_negamax::DEFAULT_DEPTH)]
        depth: u32,

        /// Write the finished game as JSON to this path
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Board as 9 cells of X, O or '.', row-major
        #[arg(long)]
        board: String,

        /// Mark to move
        #[arg(long, value_enum)]
        to_move: MarkArg,

        /// Search depth in plies
        #[arg(short, long, default_value_t = strictly_negamax::DEFAULT_DEPTH)]
        depth: u32,
    },
}
