//! Depth-bounded negamax with alpha-beta pruning and memoization.

use crate::transposition::{Bound, TranspositionTable};
use crate::{GameState, Score, SearchConfig, SearchError};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Score outside the range of any evaluation.
pub const INF: Score = 1_000_000;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Nodes entered, leaves included.
    nodes: u64,
    /// Nodes answered from the transposition table.
    table_hits: u64,
    /// Move loops stopped by an alpha-beta cut.
    cutoffs: u64,
}

/// Outcome of [`Negamax::choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchResult<M> {
    /// First move, in legal-move order, achieving the best score.
    best_move: M,
    /// Score of `best_move` for the player to move at the root.
    score: Score,
    /// Depth the search was run at.
    depth: u32,
    /// Search counters.
    stats: SearchStats,
}

/// Negamax search engine.
///
/// The engine owns its transposition table. By default the table is cleared
/// at the start of every search; see [`SearchConfig`]. A retained table only
/// answers a node from an entry searched to exactly the node's remaining
/// depth, so earlier searches from other roots or depths cannot change a
/// result.
pub struct Negamax<G: GameState> {
    config: SearchConfig,
    table: TranspositionTable<G::Key, G::Move>,
}

impl<G: GameState> Negamax<G> {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            table: TranspositionTable::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the transposition table.
    pub fn table(&self) -> &TranspositionTable<G::Key, G::Move> {
        &self.table
    }

    /// Searches with the configured depth.
    pub fn search(&mut self, state: &mut G) -> Result<SearchResult<G::Move>, SearchError> {
        let depth = *self.config.depth();
        self.choose_move(state, depth)
    }

    /// Returns the best move for the player to move, searching `depth` plies.
    ///
    /// The state is explored through apply/undo pairs and is returned in the
    /// position it was passed in.
    ///
    /// # Errors
    /// - [`SearchError::TerminalPosition`] if `state` is terminal.
    /// - [`SearchError::ZeroDepth`] if `depth` is zero.
    /// - [`SearchError::Move`] if the game rejects one of its own legal moves.
    #[instrument(skip(self, state))]
    pub fn choose_move(
        &mut self,
        state: &mut G,
        depth: u32,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        if depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if state.is_terminal() {
            return Err(SearchError::TerminalPosition);
        }
        if !*self.config.retain_table() {
            self.table.clear();
        }

        let mut stats = SearchStats::default();
        stats.nodes += 1;
        let mut alpha = -INF;
        let mut best: Option<(G::Move, Score)> = None;

        // Root moves stay in contract order so ties go to the first move.
        for mv in state.legal_moves() {
            state.apply_move(mv)?;
            let child = self.negamax(state, depth - 1, -INF, -alpha, &mut stats);
            state.undo_move(mv)?;
            let score = -child?;

            debug!(%mv, score, "Root move evaluated");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        let (best_move, score) = best.ok_or(SearchError::TerminalPosition)?;
        if *self.config.transposition_table() {
            self.table
                .store(state.canonical_key(), depth, score, Bound::Exact, Some(best_move));
        }

        debug!(
            %best_move,
            score,
            nodes = stats.nodes,
            table_hits = stats.table_hits,
            cutoffs = stats.cutoffs,
            table_size = self.table.len(),
            "Search complete"
        );
        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats,
        })
    }

    fn negamax(
        &mut self,
        state: &mut G,
        depth: u32,
        mut alpha: Score,
        beta: Score,
        stats: &mut SearchStats,
    ) -> Result<Score, SearchError> {
        stats.nodes += 1;
        if depth == 0 || state.is_terminal() {
            return Ok(state.heuristic_score());
        }

        let use_table = *self.config.transposition_table();
        let retained = *self.config.retain_table();
        let key = state.canonical_key();
        let mut moves = state.legal_moves();

        if use_table {
            // Deeper entries left by another search would see past this
            // search's horizon.
            if let Some(entry) = self
                .table
                .lookup(&key, depth)
                .filter(|entry| !retained || *entry.depth() == depth)
            {
                let score = *entry.score();
                let usable = match entry.bound() {
                    Bound::Exact => true,
                    Bound::Lower => score >= beta,
                    Bound::Upper => score <= alpha,
                };
                if usable {
                    stats.table_hits += 1;
                    return Ok(score);
                }
            }
            if let Some(hint) = self.table.best_move(&key)
                && let Some(pos) = moves.iter().position(|mv| *mv == hint)
            {
                moves[..=pos].rotate_right(1);
            }
        }

        let alpha_orig = alpha;
        let mut best_score = alpha;
        let mut best_move = None;

        for mv in moves {
            state.apply_move(mv)?;
            let child = self.negamax(state, depth - 1, -beta, -alpha, stats);
            state.undo_move(mv)?;
            let score = -child?;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }

        if use_table {
            let bound = Bound::classify(best_score, alpha_orig, beta);
            self.table.store(key, depth, best_score, bound, best_move);
        }
        Ok(best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveError;

    /// Subtraction game: take 1 or 2 stones; whoever takes the last stone
    /// wins, so the player facing an empty pile has lost.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Pile {
        stones: u32,
        taken: Vec<u32>,
    }

    impl Pile {
        fn new(stones: u32) -> Self {
            Self {
                stones,
                taken: Vec::new(),
            }
        }
    }

    impl GameState for Pile {
        type Move = u32;
        type Key = (u32, usize);

        fn legal_moves(&self) -> Vec<u32> {
            (1..=2).filter(|n| *n <= self.stones).collect()
        }

        fn apply_move(&mut self, mv: u32) -> Result<(), MoveError> {
            if !self.legal_moves().contains(&mv) {
                return Err(MoveError::illegal(mv));
            }
            self.stones -= mv;
            self.taken.push(mv);
            Ok(())
        }

        fn undo_move(&mut self, mv: u32) -> Result<(), MoveError> {
            match self.taken.last() {
                None => Err(MoveError::NothingToUndo),
                Some(last) if *last != mv => Err(MoveError::UndoMismatch {
                    requested: mv.to_string(),
                    last: last.to_string(),
                }),
                Some(_) => {
                    self.taken.pop();
                    self.stones += mv;
                    Ok(())
                }
            }
        }

        fn is_lost_for_mover(&self) -> bool {
            self.stones == 0
        }

        fn canonical_key(&self) -> (u32, usize) {
            (self.stones, self.taken.len())
        }
    }

    #[test]
    fn test_takes_winning_move() {
        // From 4, taking 1 leaves a multiple of 3.
        let mut pile = Pile::new(4);
        let mut engine = Negamax::new(SearchConfig::new(10));
        let result = engine.choose_move(&mut pile, 10).unwrap();
        assert_eq!(*result.best_move(), 1);
        assert_eq!(*result.score(), 100);
    }

    #[test]
    fn test_losing_position_scores_loss() {
        let mut pile = Pile::new(6);
        let mut engine = Negamax::new(SearchConfig::new(10));
        let result = engine.choose_move(&mut pile, 10).unwrap();
        // Every move loses; the first one is reported.
        assert_eq!(*result.best_move(), 1);
        assert_eq!(*result.score(), -100);
    }

    #[test]
    fn test_horizon_returns_zero() {
        let mut pile = Pile::new(10);
        let mut engine = Negamax::new(SearchConfig::new(1));
        let result = engine.choose_move(&mut pile, 1).unwrap();
        assert_eq!(*result.score(), 0);
        assert_eq!(*result.best_move(), 1);
    }

    #[test]
    fn test_state_restored_after_search() {
        let mut pile = Pile::new(7);
        let before = pile.clone();
        let mut engine = Negamax::new(SearchConfig::default());
        engine.choose_move(&mut pile, 7).unwrap();
        assert_eq!(pile, before);
    }

    #[test]
    fn test_terminal_position_rejected() {
        let mut pile = Pile::new(0);
        let mut engine = Negamax::new(SearchConfig::default());
        assert_eq!(
            engine.choose_move(&mut pile, 3),
            Err(SearchError::TerminalPosition)
        );
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut pile = Pile::new(3);
        let mut engine = Negamax::new(SearchConfig::default());
        assert_eq!(engine.choose_move(&mut pile, 0), Err(SearchError::ZeroDepth));
    }

    #[test]
    fn test_table_does_not_change_result() {
        for stones in 1..=15 {
            for depth in 1..=8 {
                let mut with_table = Negamax::new(SearchConfig::new(depth));
                let mut without_table =
                    Negamax::new(SearchConfig::new(depth).with_transposition_table(false));
                let a = with_table.choose_move(&mut Pile::new(stones), depth).unwrap();
                let b = without_table
                    .choose_move(&mut Pile::new(stones), depth)
                    .unwrap();
                assert_eq!(a.best_move(), b.best_move(), "stones={stones} depth={depth}");
                assert_eq!(a.score(), b.score(), "stones={stones} depth={depth}");
                assert!(without_table.table().is_empty());
            }
        }
    }

    #[test]
    fn test_table_cleared_between_searches() {
        let mut engine = Negamax::new(SearchConfig::new(6));
        engine.choose_move(&mut Pile::new(9), 6).unwrap();
        let after_first = engine.table().len();
        engine.choose_move(&mut Pile::new(2), 6).unwrap();
        assert!(engine.table().len() < after_first);
    }

    #[test]
    fn test_retained_table_grows() {
        let mut engine = Negamax::new(SearchConfig::new(6).with_retain_table(true));
        engine.choose_move(&mut Pile::new(9), 6).unwrap();
        let after_first = engine.table().len();
        engine.choose_move(&mut Pile::new(2), 6).unwrap();
        assert!(engine.table().len() >= after_first);
    }

    #[test]
    fn test_retained_table_ignores_deeper_entries() {
        let mut engine = Negamax::new(SearchConfig::new(8).with_retain_table(true));
        for depth in [8, 2, 5, 1, 8, 3] {
            for stones in (1..=12).rev() {
                let a = engine.choose_move(&mut Pile::new(stones), depth).unwrap();
                let b = Negamax::new(SearchConfig::new(depth).with_transposition_table(false))
                    .choose_move(&mut Pile::new(stones), depth)
                    .unwrap();
                assert_eq!(
                    (a.best_move(), a.score()),
                    (b.best_move(), b.score()),
                    "stones={stones} depth={depth}"
                );
            }
        }
    }
}
