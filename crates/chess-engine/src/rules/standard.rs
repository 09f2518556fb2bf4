//! Standard layout.

use super::RuleSet;
use crate::Board;

/// Chess from the usual starting layout.
///
/// Piece movement follows the engine's rules:
/// - Standard movement and captures for all six piece kinds
/// - Pawn single and double steps, diagonal captures
/// - No move may leave the mover's king in check
///
/// Castling, en passant and promotion are not played.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_board(&self) -> Board {
        Board::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Move, Piece, PieceKind, Placement, Position};

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn initial_board() {
        let board = StandardChess.initial_board();
        assert_eq!(board.to_placement(), Placement::STANDARD);
    }

    #[test]
    fn try_make_move_accepts_legal_move() {
        let board = StandardChess.initial_board();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let after = StandardChess
            .try_make_move(&board, Move::new(pos(6, 4), pos(4, 4), pawn))
            .unwrap();
        assert_eq!(after.piece_at(pos(4, 4)), Some(pawn));
        assert!(after.is_empty(pos(6, 4)));
    }

    #[test]
    fn try_make_move_rejects_illegal_move() {
        let board = StandardChess.initial_board();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let m = Move::new(pos(6, 4), pos(3, 4), pawn);
        assert!(!StandardChess.is_legal(&board, m));
        assert_eq!(StandardChess.try_make_move(&board, m), None);
    }

    #[test]
    fn try_make_move_rejects_self_check() {
        let board = Board::from_placement("4r2k/8/8/8/8/8/4N3/4K3").unwrap();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let m = Move::new(pos(6, 4), pos(4, 5), knight);
        assert!(StandardChess.is_legal(&board, m));
        assert_eq!(StandardChess.try_make_move(&board, m), None);
    }

    #[test]
    fn boxed_rules_delegate() {
        let rules: Box<dyn RuleSet> = Box::new(StandardChess);
        let board = rules.initial_board();
        assert!(!rules.is_check(&board, Color::White));
        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(rules.valid_moves(&board, pos(7, 6), knight).len(), 2);
    }
}
