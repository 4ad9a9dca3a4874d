//! Shared foundation for the minimax chess engine.
//!
//! This crate holds everything the engine and rules backends agree on:
//! the core value types, the [`Rules`] trait through which a rules backend
//! is consumed, the [`Evaluator`] and [`Engine`] seams, and the piece-value
//! configuration. It performs no I/O and implements no chess rules itself.

pub mod config;
pub mod rules;
pub mod types;

pub use config::PieceValueTable;
pub use rules::Rules;
pub use types::{Piece, PieceKind, Score, Side, SCORE_INF};

/// Result of a search operation
#[derive(Debug, Clone, Copy)]
pub struct SearchResult<M> {
    /// The best move found (None if no legal moves)
    pub best_move: Option<M>,
    /// Evaluation score for the side that moved at the root
    pub score: Score,
    /// Search depth requested
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

/// Static position evaluation, scored for an explicit maximizing side.
///
/// Implementations must be pure: no mutation, no I/O, deterministic for a
/// given position and perspective. Substituting an implementation must not
/// require touching the search.
pub trait Evaluator<P: Rules> {
    fn evaluate(&self, pos: &P, maximizer: Side) -> Score;
}

/// Trait implemented by move-selecting engines.
pub trait Engine<P: Rules> {
    /// Search the position to the given depth and pick a move for the side
    /// to move. The position is borrowed mutably for apply/undo traversal
    /// and is restored before this returns.
    fn search(&mut self, pos: &mut P, depth: u8) -> SearchResult<P::Move>;

    /// Engine name for display.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
