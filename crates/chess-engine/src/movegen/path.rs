//! Path obstruction for sliding pieces.

use crate::Board;
use chess_core::Position;

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The walk steps by the sign of each delta, so the two squares must share a
/// row, a column or a diagonal. Adjacent squares have nothing between them
/// and are always clear. Alignment is the caller's job; for unaligned
/// squares the walk runs off the grid and the path is reported blocked.
pub fn is_path_clear(board: &Board, from: Position, to: Position) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(pos) = current {
        if pos == to {
            return true;
        }
        if !board.is_empty(pos) {
            return false;
        }
        current = pos.offset(step_row, step_col);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece, PieceKind};

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn blocker() -> Piece {
        Piece::new(PieceKind::Pawn, Color::Black)
    }

    #[test]
    fn empty_board_is_clear() {
        let board = Board::empty();
        assert!(is_path_clear(&board, pos(0, 0), pos(7, 7)));
        assert!(is_path_clear(&board, pos(7, 0), pos(0, 0)));
        assert!(is_path_clear(&board, pos(3, 7), pos(3, 0)));
    }

    #[test]
    fn adjacent_squares_are_clear() {
        let board = Board::standard();
        assert!(is_path_clear(&board, pos(7, 0), pos(6, 0)));
        assert!(is_path_clear(&board, pos(7, 2), pos(6, 3)));
    }

    #[test]
    fn endpoints_are_not_obstructions() {
        let board = Board::empty()
            .with_piece(pos(2, 2), blocker())
            .with_piece(pos(5, 5), blocker());
        assert!(is_path_clear(&board, pos(2, 2), pos(5, 5)));
    }

    #[test]
    fn intervening_piece_blocks() {
        let board = Board::empty().with_piece(pos(4, 4), blocker());
        assert!(!is_path_clear(&board, pos(4, 0), pos(4, 7)));
        assert!(!is_path_clear(&board, pos(0, 4), pos(7, 4)));
        assert!(!is_path_clear(&board, pos(1, 1), pos(6, 6)));
        assert!(!is_path_clear(&board, pos(6, 2), pos(2, 6)));
        // Stopping short of the blocker is fine.
        assert!(is_path_clear(&board, pos(4, 0), pos(4, 3)));
    }

    #[test]
    fn standard_rook_is_boxed_in() {
        let board = Board::standard();
        assert!(!is_path_clear(&board, pos(7, 0), pos(4, 0)));
    }

    #[test]
    fn unaligned_squares_report_blocked() {
        let board = Board::empty();
        assert!(!is_path_clear(&board, pos(0, 0), pos(1, 2)));
    }
}
