//! Minimax Chess Engine
//!
//! Fixed-depth minimax move selection with alpha-beta pruning and material
//! evaluation. The engine consumes any rules backend through the
//! [`game_core::Rules`] trait and holds no state across searches beyond
//! statistics.

mod eval;
mod search;

use game_core::{Engine, Evaluator, Rules, SearchResult};

pub use eval::MaterialEvaluator;
pub use search::{alpha_beta, pick_best_move};

/// Move-selecting engine: minimax with alpha-beta pruning over an injected
/// evaluator.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine<E = MaterialEvaluator> {
    eval: E,
    /// Positions visited by the most recent search
    nodes: u64,
}

impl MinimaxEngine<MaterialEvaluator> {
    /// Engine with the default material evaluator.
    pub fn new() -> Self {
        Self::with_evaluator(MaterialEvaluator::default())
    }

    /// Engine with a custom piece-weight table.
    pub fn with_values(values: game_core::PieceValueTable) -> Self {
        Self::with_evaluator(MaterialEvaluator::new(values))
    }
}

impl<E> MinimaxEngine<E> {
    pub fn with_evaluator(eval: E) -> Self {
        Self { eval, nodes: 0 }
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks a move for the side to move, or `None` if the position is
    /// terminal. The position is restored before this returns.
    pub fn best_move<P: Rules>(&mut self, pos: &mut P, depth: u8) -> Option<P::Move>
    where
        E: Evaluator<P>,
    {
        let mut nodes = 0;
        let picked = search::pick_best_move(pos, depth, &self.eval, &mut nodes);
        self.nodes = nodes;
        picked.map(|(mv, _)| mv)
    }
}

impl<P: Rules, E: Evaluator<P>> Engine<P> for MinimaxEngine<E> {
    fn search(&mut self, pos: &mut P, depth: u8) -> SearchResult<P::Move> {
        let mut nodes = 0;
        let picked = search::pick_best_move(pos, depth, &self.eval, &mut nodes);
        self.nodes = nodes;
        SearchResult {
            best_move: picked.map(|(mv, _)| mv),
            score: picked.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
