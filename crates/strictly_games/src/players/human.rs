//! Human player reading move numbers from a line-based input.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Position, TicTacToe};
use tracing::{debug, instrument};

/// Human player typing move numbers 1-9.
///
/// Input that is not a valid move number is reported and the prompt is
/// repeated. Whether the square is free is left to the orchestrator.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player<TicTacToe> for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn next_move(&mut self, state: &TicTacToe) -> Result<Position> {
        loop {
            writeln!(self.output, "\n{}\n", state.board().numbered())?;
            write!(self.output, "{}, choose a square (1-9): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match line.parse::<Position>() {
                Ok(pos) => {
                    debug!(%pos, "Human entered move");
                    return Ok(pos);
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
