//! Strictly Games - tic-tac-toe front-end for the negamax engine.
//!
//! Seats two [`Player`]s at a game, validates their moves and reports the
//! result. Players can be humans typing move numbers, the search engine, or
//! a fixed script.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
pub mod players;
pub mod session;

pub use config::{ConfigError, FirstPlayer, GameConfig, Overrides};
pub use orchestrator::{GameRecord, Orchestrator, Outcome, SelectorError, Turn};
pub use players::Player;
