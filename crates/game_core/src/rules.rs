//! The rules-engine collaborator interface.
//!
//! The search core never generates moves, checks legality, or detects
//! end-of-game itself; it consumes those facts from a rules backend through
//! this trait. Backends own the board representation; the core only borrows
//! it, temporarily mutates it through `apply`/`undo`, and holds no state of
//! its own once a search returns.

use crate::types::{Piece, Side};

/// A game position with rules attached.
///
/// Exactly one `Rules` value is shared across a whole recursive search; the
/// current stack frame is its only writer at any instant.
pub trait Rules {
    /// Opaque move value produced and consumed by the backend.
    type Move: Copy;

    /// Side that moves next.
    fn side_to_move(&self) -> Side;

    /// Legal moves in the backend's (deterministic) enumeration order.
    /// Empty exactly when the position is terminal.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// True on checkmate, stalemate, and any drawing condition the backend
    /// recognizes.
    fn is_game_over(&self) -> bool;

    /// Plays `mv` in place. Must be reversible by `undo`.
    fn apply(&mut self, mv: Self::Move);

    /// Reverses exactly the most recent `apply`, restoring every observable
    /// field. Calling it without a matching `apply` is a caller bug.
    fn undo(&mut self);

    /// Occupied squares (backend's square index) with their pieces.
    fn pieces(&self) -> Vec<(u8, Piece)>;
}
