//! Search configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Depth used by the interactive game.
pub const DEFAULT_DEPTH: u32 = 6;

/// Tuning knobs for [`Negamax`](crate::Negamax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the current position.
    #[serde(default = "default_depth")]
    depth: u32,

    /// Cache subtree results by canonical position.
    #[serde(default = "default_true")]
    transposition_table: bool,

    /// Keep cached results between calls instead of clearing per search.
    #[serde(default)]
    retain_table: bool,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_true() -> bool {
    true
}

impl SearchConfig {
    /// Creates a configuration searching `depth` plies with a per-search
    /// transposition table.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            transposition_table: true,
            retain_table: false,
        }
    }

    /// Returns a copy with the transposition table switched on or off.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.transposition_table = enabled;
        self
    }

    /// Returns a copy that keeps the table across searches.
    pub fn with_retain_table(mut self, retain: bool) -> Self {
        self.retain_table = retain;
        self
    }

    /// Returns a copy searching `depth` plies.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
