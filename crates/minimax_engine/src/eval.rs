//! Material-based position evaluation

use game_core::{Evaluator, PieceValueTable, Rules, Score, Side};

/// Material evaluator with an injected piece-weight table.
///
/// Sums the weight of every piece on the board, positive for the maximizing
/// side and negative for its opponent. No positional, mobility, or
/// king-safety terms. Defined for any legal position, terminal ones
/// included: checkmate and stalemate still yield a plain material score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator {
    values: PieceValueTable,
}

impl MaterialEvaluator {
    pub fn new(values: PieceValueTable) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &PieceValueTable {
        &self.values
    }
}

impl<P: Rules> Evaluator<P> for MaterialEvaluator {
    fn evaluate(&self, pos: &P, maximizer: Side) -> Score {
        let mut score = 0;
        for (_, piece) in pos.pieces() {
            let v = self.values.value(piece.kind);
            score += if piece.side == maximizer { v } else { -v };
        }
        score
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
