//! Standard-chess rules backend.
//!
//! Wraps the `chess` crate, the canonical source of legal move generation,
//! check/checkmate/stalemate detection, and FEN parsing, behind the
//! [`game_core::Rules`] trait so the search core stays rules-agnostic.
//!
//! The wrapped board is copy-on-make, so `apply` snapshots the current
//! board onto an undo stack and `undo` pops it back. That restores every
//! observable field of the position, which is what the search's
//! apply→recurse→undo discipline relies on.

use std::str::FromStr;

use chess::{Board, ChessMove, File, MoveGen, Rank, Square, ALL_SQUARES};
use game_core::{Piece, PieceKind, Rules, Side};

pub use chess::BoardStatus;
pub use chess::ChessMove as StandardMove;

/// A standard chess position with full rules attached.
#[derive(Debug, Clone)]
pub struct StandardBoard {
    board: Board,
    history: Vec<Board>,
}

impl StandardBoard {
    /// The standard initial position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            history: Vec::new(),
        }
    }

    /// Builds a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let board =
            Board::from_str(fen).map_err(|e| format!("Invalid FEN '{}': {}", fen, e))?;
        Ok(Self {
            board,
            history: Vec::new(),
        })
    }

    /// Parses a move in coordinate notation (`e2e4`, `a7a8q`) and checks it
    /// is legal in the current position.
    pub fn parse_move(&self, text: &str) -> Option<ChessMove> {
        let text = text.trim();
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return None;
        }
        let from = square_from_coord(&text[0..2])?;
        let to = square_from_coord(&text[2..4])?;
        let promotion = match text.as_bytes().get(4) {
            None => None,
            Some(b'q') => Some(chess::Piece::Queen),
            Some(b'r') => Some(chess::Piece::Rook),
            Some(b'b') => Some(chess::Piece::Bishop),
            Some(b'n') => Some(chess::Piece::Knight),
            Some(_) => return None,
        };
        let mv = ChessMove::new(from, to, promotion);
        if self.board.legal(mv) {
            Some(mv)
        } else {
            None
        }
    }

    /// Plays a move permanently: no snapshot is kept, so it cannot be
    /// undone. For game moves, as opposed to search traversal.
    pub fn play(&mut self, mv: ChessMove) {
        self.board = self.board.make_move_new(mv);
    }

    /// Outcome code for the caller: ongoing, stalemate, or checkmate of the
    /// side to move. The search core never consumes this.
    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    /// Zobrist hash of the current position, covering every observable
    /// field. Useful for checking the restoration contract.
    pub fn position_hash(&self) -> u64 {
        self.board.get_hash()
    }
}

fn square_from_coord(coord: &str) -> Option<Square> {
    let bytes = coord.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let (file, rank) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::make_square(
        Rank::from_index((rank - b'1') as usize),
        File::from_index((file - b'a') as usize),
    ))
}

fn side_of(color: chess::Color) -> Side {
    match color {
        chess::Color::White => Side::White,
        chess::Color::Black => Side::Black,
    }
}

fn kind_of(piece: chess::Piece) -> PieceKind {
    match piece {
        chess::Piece::Pawn => PieceKind::Pawn,
        chess::Piece::Knight => PieceKind::Knight,
        chess::Piece::Bishop => PieceKind::Bishop,
        chess::Piece::Rook => PieceKind::Rook,
        chess::Piece::Queen => PieceKind::Queen,
        chess::Piece::King => PieceKind::King,
    }
}

impl Rules for StandardBoard {
    type Move = ChessMove;

    fn side_to_move(&self) -> Side {
        side_of(self.board.side_to_move())
    }

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing
    }

    fn apply(&mut self, mv: ChessMove) {
        self.history.push(self.board);
        self.board = self.board.make_move_new(mv);
    }

    fn undo(&mut self) {
        debug_assert!(!self.history.is_empty(), "undo without a matching apply");
        if let Some(prev) = self.history.pop() {
            self.board = prev;
        }
    }

    fn pieces(&self) -> Vec<(u8, Piece)> {
        let mut out = Vec::with_capacity(32);
        for sq in ALL_SQUARES {
            if let (Some(piece), Some(color)) = (self.board.piece_on(sq), self.board.color_on(sq))
            {
                out.push((
                    sq.to_index() as u8,
                    Piece::new(side_of(color), kind_of(piece)),
                ));
            }
        }
        out
    }
}
