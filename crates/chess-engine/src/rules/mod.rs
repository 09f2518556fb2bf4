//! Rule set abstraction for layout variants.
//!
//! Every variant plays by the same piece rules; they differ in the board
//! they start from. The [`RuleSet`] trait puts that choice behind one seam
//! so the [`Game`](crate::Game) controller does not care which variant it
//! runs.

mod shuffled;
mod standard;

pub use shuffled::ShuffledHeavy;
pub use standard::StandardChess;

use crate::movegen::{self, Destinations};
use crate::Board;
use chess_core::{Color, Move, Piece, Position};

/// Trait for implementing chess variants.
///
/// Only [`initial_board`](RuleSet::initial_board) is required. The rule
/// methods default to the engine's free functions in [`movegen`].
///
/// # Example
///
/// ```
/// use chess_engine::{RuleSet, StandardChess};
/// use chess_core::{Color, Piece, PieceKind, Position};
///
/// let board = StandardChess.initial_board();
/// let from = Position::new(6, 4).unwrap();
/// let pawn = Piece::new(PieceKind::Pawn, Color::White);
/// assert_eq!(StandardChess.valid_moves(&board, from, pawn).len(), 2);
/// ```
pub trait RuleSet {
    /// Returns a fresh starting board for this variant.
    fn initial_board(&self) -> Board;

    /// Returns true if the move obeys the piece's movement rules.
    fn is_legal(&self, board: &Board, m: Move) -> bool {
        movegen::is_legal_move(board, m.from, m.to, m.piece)
    }

    /// Returns the safe destinations for `piece` standing on `from`.
    fn valid_moves(&self, board: &Board, from: Position, piece: Piece) -> Destinations {
        movegen::valid_moves(board, from, piece)
    }

    /// Returns true if `color`'s king is in check.
    fn is_check(&self, board: &Board, color: Color) -> bool {
        movegen::is_king_in_check(board, color)
    }

    /// Returns every safe move available to `color`.
    ///
    /// Variants that override [`valid_moves`](RuleSet::valid_moves) should
    /// override this as well.
    fn generate_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        movegen::generate_moves(board, color)
    }

    /// Plays the move on a copy of the board if it is legal and safe.
    ///
    /// Returns `None` when the move breaks the piece rules or would leave
    /// the mover's king in check.
    fn try_make_move(&self, board: &Board, m: Move) -> Option<Board> {
        if !self.is_legal(board, m) {
            return None;
        }
        let after = board.after_move(m);
        if self.is_check(&after, m.piece.color) {
            return None;
        }
        Some(after)
    }
}

impl<R: RuleSet + ?Sized> RuleSet for Box<R> {
    fn initial_board(&self) -> Board {
        (**self).initial_board()
    }

    fn is_legal(&self, board: &Board, m: Move) -> bool {
        (**self).is_legal(board, m)
    }

    fn valid_moves(&self, board: &Board, from: Position, piece: Piece) -> Destinations {
        (**self).valid_moves(board, from, piece)
    }

    fn is_check(&self, board: &Board, color: Color) -> bool {
        (**self).is_check(board, color)
    }

    fn generate_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        (**self).generate_moves(board, color)
    }

    fn try_make_move(&self, board: &Board, m: Move) -> Option<Board> {
        (**self).try_make_move(board, m)
    }
}
