//! King location and check detection.

use super::is_legal_move;
use crate::Board;
use chess_core::{Color, PieceKind, Position};

/// Returns the square of `color`'s king, scanning in row-major order.
pub fn find_king(board: &Board, color: Color) -> Option<Position> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// Returns true if any piece of `by_color` could legally move onto `target`.
pub fn is_square_attacked(board: &Board, target: Position, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, piece)| is_legal_move(board, from, target, piece))
}

/// Returns true if `color`'s king could be captured on the current board.
///
/// A board with no king of that color reports no check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match find_king(board, color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn kings() -> Board {
        Board::empty()
            .with_piece(pos(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(pos(0, 0), Piece::new(PieceKind::King, Color::Black))
    }

    #[test]
    fn find_king_standard() {
        let board = Board::standard();
        assert_eq!(find_king(&board, Color::White), Some(pos(7, 4)));
        assert_eq!(find_king(&board, Color::Black), Some(pos(0, 4)));
    }

    #[test]
    fn standard_position_has_no_check() {
        let board = Board::standard();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::empty().with_piece(pos(0, 4), Piece::new(PieceKind::Queen, Color::Black));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn rook_on_open_row_gives_check() {
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let board = kings().with_piece(pos(7, 0), rook);
        assert!(is_king_in_check(&board, Color::White));

        let mut cleared = board;
        cleared.remove(pos(7, 0));
        assert!(!is_king_in_check(&cleared, Color::White));
    }

    #[test]
    fn blocked_rook_gives_no_check() {
        let board = kings()
            .with_piece(pos(7, 0), Piece::new(PieceKind::Rook, Color::Black))
            .with_piece(pos(7, 2), Piece::new(PieceKind::Bishop, Color::White));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn own_pieces_do_not_give_check() {
        let board = kings().with_piece(pos(7, 0), Piece::new(PieceKind::Rook, Color::White));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_threatens_only_diagonally() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let ahead = kings().with_piece(pos(6, 4), pawn);
        assert!(!is_king_in_check(&ahead, Color::White));

        let diagonal = kings().with_piece(pos(6, 3), pawn);
        assert!(is_king_in_check(&diagonal, Color::White));
    }

    #[test]
    fn knight_check_ignores_blockers() {
        let board = Board::standard().with_piece(pos(5, 3), Piece::new(PieceKind::Knight, Color::Black));
        assert!(is_king_in_check(&board, Color::White));
    }

    #[test]
    fn square_attacked_by_color() {
        let board = Board::standard();
        // The b-knight can jump there and the c-pawn can step there.
        assert!(is_square_attacked(&board, pos(5, 2), Color::White));
        // Nothing of black's reaches row 5 on the opening board.
        assert!(!is_square_attacked(&board, pos(5, 2), Color::Black));
    }
}
