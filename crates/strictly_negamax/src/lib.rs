//! Strictly Negamax - adversarial search for two-player games
//!
//! A depth-bounded negamax search with alpha-beta pruning and a
//! transposition table, written against an abstract [`GameState`] contract.
//!
//! # Example
//!
//! ```ignore
//! use strictly_negamax::{Negamax, SearchConfig};
//!
//! let mut engine = Negamax::new(SearchConfig::new(6));
//! let result = engine.choose_move(&mut state, 6)?;
//! state.apply_move(*result.best_move())?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod negamax;
mod transposition;

pub use config::{DEFAULT_DEPTH, SearchConfig};
pub use error::{MoveError, SearchError};
pub use game::{GameState, LOSS_SCORE, Score};
pub use negamax::{INF, Negamax, SearchResult, SearchStats};
pub use transposition::{Bound, TableEntry, TranspositionTable};
