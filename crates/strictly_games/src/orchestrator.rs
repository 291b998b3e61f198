//! Game orchestration between players.

use crate::players::Player;
use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use strictly_negamax::{GameState, MoveError};
use tracing::{debug, info, instrument, warn};

/// Errors raised while selecting and applying moves.
#[derive(Debug, Display)]
pub enum SelectorError {
    /// The game is already over.
    #[display("Game is over")]
    GameOver,

    /// The player chose a move that is not legal in the current state.
    #[display("{player} chose illegal move {mv}")]
    IllegalMove {
        /// Name of the player.
        player: String,
        /// The rejected move.
        mv: String,
    },

    /// The player could not produce a move.
    #[display("{player} failed to move: {source}")]
    PlayerFailed {
        /// Name of the player.
        player: String,
        /// Underlying failure.
        source: anyhow::Error,
    },

    /// The game rejected a move that was listed as legal.
    #[display("{_0}")]
    Move(MoveError),
}

impl std::error::Error for SelectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PlayerFailed { source, .. } => Some(source.as_ref()),
            Self::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SelectorError {
    fn from(e: MoveError) -> Self {
        Self::Move(e)
    }
}

/// A move made by one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Turn<M> {
    /// Name of the player who moved.
    player: String,
    /// The move played.
    mv: M,
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
pub enum Outcome {
    /// The named player completed a line.
    #[display("{_0} wins!")]
    Winner(String),
    /// No winner.
    #[display("It's a draw!")]
    Draw,
}

/// Summary of a played game, suitable for export.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord<M> {
    /// Seat names in turn order, first mover first.
    players: [String; 2],
    /// Every move played.
    moves: Vec<Turn<M>>,
    /// Final result.
    outcome: Outcome,
}

/// Orchestrates gameplay between two players.
///
/// Seats alternate starting with the first player; the game itself tracks
/// whose mark is placed.
pub struct Orchestrator<G: GameState> {
    state: G,
    players: [Box<dyn Player<G>>; 2],
    current: usize,
    moves: Vec<Turn<G::Move>>,
}

impl<G: GameState> Orchestrator<G> {
    /// Creates an orchestrator; `first` moves first from `state`.
    pub fn new(state: G, first: Box<dyn Player<G>>, second: Box<dyn Player<G>>) -> Self {
        Self {
            state,
            players: [first, second],
            current: 0,
            moves: Vec::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &G {
        &self.state
    }

    /// Returns the moves played so far.
    pub fn moves(&self) -> &[Turn<G::Move>] {
        &self.moves
    }

    /// Name of the player whose turn it is.
    pub fn current_player(&self) -> &str {
        self.players[self.current].name()
    }

    /// Whether the game has finished.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Asks the current player for a move and applies it.
    ///
    /// On error the state is unchanged and the same player is still to move.
    ///
    /// # Errors
    /// - [`SelectorError::GameOver`] if the game has already finished.
    /// - [`SelectorError::PlayerFailed`] if the player produced no move.
    /// - [`SelectorError::IllegalMove`] if the move is not legal.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn step(&mut self) -> Result<Turn<G::Move>, SelectorError> {
        if self.state.is_terminal() {
            return Err(SelectorError::GameOver);
        }

        let player = &mut self.players[self.current];
        let name = player.name().to_string();
        debug!("Waiting for move");
        let mv = player
            .next_move(&self.state)
            .map_err(|source| SelectorError::PlayerFailed {
                player: name.clone(),
                source,
            })?;

        if !self.state.legal_moves().contains(&mv) {
            warn!(%mv, "Rejected illegal move");
            return Err(SelectorError::IllegalMove {
                player: name,
                mv: mv.to_string(),
            });
        }

        self.state.apply_move(mv)?;
        info!(%mv, "Move made");

        let turn = Turn { player: name, mv };
        self.moves.push(turn.clone());
        self.current = 1 - self.current;
        Ok(turn)
    }

    /// Plays until the game ends.
    ///
    /// # Errors
    /// Returns the first error from [`step`](Self::step).
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<Outcome, SelectorError> {
        info!("Starting game");
        while !self.state.is_terminal() {
            self.step()?;
        }
        let outcome = self.outcome().ok_or(SelectorError::GameOver)?;
        info!(%outcome, "Game finished");
        Ok(outcome)
    }

    /// Result of the game, or `None` while it is still going.
    ///
    /// A lost position for the player to move means the last mover won.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.state.is_terminal() {
            return None;
        }
        if self.state.is_lost_for_mover() {
            let last = self.moves.last().map_or_else(
                || self.players[1 - self.current].name().to_string(),
                |turn| turn.player.clone(),
            );
            Some(Outcome::Winner(last))
        } else {
            Some(Outcome::Draw)
        }
    }

    /// Exports the game so far, or `None` while it is still going.
    pub fn record(&self) -> Option<GameRecord<G::Move>> {
        let outcome = self.outcome()?;
        Some(GameRecord {
            players: [
                self.players[0].name().to_string(),
                self.players[1].name().to_string(),
            ],
            moves: self.moves.clone(),
            outcome,
        })
    }
}
