//! Per-piece move legality, without regard to check.

use super::is_path_clear;
use crate::Board;
use chess_core::{Color, Move, Piece, PieceKind, Position};

/// Returns true if `piece` may move from `from` to `to` on `board`.
///
/// Only geometry, captures and obstruction are considered; whether the move
/// exposes the mover's king is decided by [`is_safe_move`](super::is_safe_move).
/// The board is not consulted for what stands on `from`: the caller names
/// the mover.
///
/// A move onto a piece of the mover's color is always illegal, as is a move
/// that stays on its square.
pub fn is_legal_move(board: &Board, from: Position, to: Position, piece: Piece) -> bool {
    let m = Move::new(from, to, piece);
    if m.is_null() {
        return false;
    }

    let target = board.piece_at(to);
    if target.is_some_and(|t| t.color == piece.color) {
        return false;
    }

    let (d_row, d_col) = m.delta();
    let shape = match piece.kind {
        PieceKind::Pawn => is_pawn_move(board, from, d_row, d_col, piece.color, target.is_some()),
        PieceKind::Knight => matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)),
        PieceKind::Bishop => is_diagonal(d_row, d_col),
        PieceKind::Rook => is_straight(d_row, d_col),
        PieceKind::Queen => is_straight(d_row, d_col) || is_diagonal(d_row, d_col),
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
    };

    shape && (!piece.kind.is_slider() || is_path_clear(board, from, to))
}

#[inline]
fn is_straight(d_row: i8, d_col: i8) -> bool {
    (d_row == 0) != (d_col == 0)
}

#[inline]
fn is_diagonal(d_row: i8, d_col: i8) -> bool {
    d_row != 0 && d_row.abs() == d_col.abs()
}

fn is_pawn_move(
    board: &Board,
    from: Position,
    d_row: i8,
    d_col: i8,
    color: Color,
    capture: bool,
) -> bool {
    let forward = color.pawn_direction();

    if d_col == 0 && !capture {
        if d_row == forward {
            return true;
        }
        if d_row == 2 * forward && from.row() == color.pawn_start_row() {
            return from
                .offset(forward, 0)
                .is_some_and(|between| board.is_empty(between));
        }
        return false;
    }

    // Diagonal steps only capture.
    d_col.abs() == 1 && d_row == forward && capture
}
