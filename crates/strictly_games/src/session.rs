//! Interactive game sessions.

use crate::config::{FirstPlayer, GameConfig};
use crate::orchestrator::{Orchestrator, Outcome, SelectorError};
use crate::players::{NegamaxPlayer, Player};
use anyhow::Result;
use std::fmt::Display;
use std::io::Write;
use strictly_negamax::GameState;
use strictly_tictactoe::{Player as Mark, TicTacToe};
use tracing::{info, instrument};

/// Mark played by the human in an interactive game.
pub const HUMAN_MARK: Mark = Mark::O;

/// Mark played by the engine in an interactive game.
pub const ENGINE_MARK: Mark = Mark::X;

/// Sets up a human-versus-engine game.
///
/// The human plays O and the engine plays X; `config` decides who opens.
#[instrument(skip(human))]
pub fn human_vs_engine(
    config: &GameConfig,
    human: Box<dyn Player<TicTacToe>>,
) -> Orchestrator<TicTacToe> {
    let engine: Box<dyn Player<TicTacToe>> =
        Box::new(NegamaxPlayer::new("Computer", *config.search()));
    match config.first() {
        FirstPlayer::Human => {
            info!("Human opens");
            Orchestrator::new(TicTacToe::new(HUMAN_MARK), human, engine)
        }
        FirstPlayer::Ai => {
            info!("Computer opens");
            Orchestrator::new(TicTacToe::new(ENGINE_MARK), engine, human)
        }
    }
}

/// Runs a game to completion, reporting each move to `out`.
///
/// Illegal moves are reported and the same player is asked again. Any
/// other failure ends the session.
///
/// # Errors
/// Returns the first error that is not an illegal move, or a write error.
pub fn run<G>(orchestrator: &mut Orchestrator<G>, out: &mut impl Write) -> Result<Outcome>
where
    G: GameState + Display,
{
    while !orchestrator.is_over() {
        match orchestrator.step() {
            Ok(turn) => writeln!(out, "{} plays {}", turn.player(), turn.mv())?,
            Err(SelectorError::IllegalMove { mv, .. }) => {
                writeln!(out, "Square {mv} is not available, try again.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let outcome = orchestrator
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("Game ended without an outcome"))?;
    writeln!(out, "\n{}\n", orchestrator.state())?;
    writeln!(out, "{outcome}")?;
    Ok(outcome)
}
