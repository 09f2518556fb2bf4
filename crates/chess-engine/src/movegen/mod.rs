//! Move legality and enumeration.
//!
//! Legality is split in two layers. [`is_legal_move`] answers whether a
//! piece's geometry, captures and path allow a move. [`is_safe_move`] adds
//! the requirement that the move does not leave the mover's own king in
//! check, simulated on a copy of the board.

mod check;
mod legality;
mod path;

use crate::Board;
use chess_core::{Color, Move, Piece, Position};

pub use check::{find_king, is_king_in_check, is_square_attacked};
pub use legality::is_legal_move;
pub use path::is_path_clear;

/// The destinations reachable by one piece.
///
/// No piece can reach more than the other 63 squares, so a fixed-size array
/// holds every possible result without heap allocation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Destinations {
    squares: [Position; Self::MAX_DESTINATIONS],
    len: usize,
}

impl Destinations {
    /// Upper bound on the number of destinations from one square.
    pub const MAX_DESTINATIONS: usize = 64;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Destinations {
            squares: [Position::ORIGIN; Self::MAX_DESTINATIONS],
            len: 0,
        }
    }

    /// Adds a destination to the list.
    #[inline]
    pub fn push(&mut self, pos: Position) {
        debug_assert!(self.len < Self::MAX_DESTINATIONS);
        self.squares[self.len] = pos;
        self.len += 1;
    }

    /// Returns the number of destinations.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the destinations.
    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.squares[..self.len]
    }

    /// Returns true if `pos` is in the list.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.as_slice().contains(&pos)
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Destinations {
    type Output = Position;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for Destinations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns true if the move is legal and leaves the mover's king out of check.
pub fn is_safe_move(board: &Board, from: Position, to: Position, piece: Piece) -> bool {
    if !is_legal_move(board, from, to, piece) {
        return false;
    }
    let after = board.after_move(Move::new(from, to, piece));
    !is_king_in_check(&after, piece.color)
}

/// Returns every square `piece` on `from` can safely move to.
///
/// Candidates are tried in row-major order and kept in that order.
pub fn valid_moves(board: &Board, from: Position, piece: Piece) -> Destinations {
    let mut destinations = Destinations::new();
    for to in Position::all() {
        if is_safe_move(board, from, to, piece) {
            destinations.push(to);
        }
    }
    destinations
}

/// Returns every safe move available to `color`.
///
/// Sources are scanned in row-major order, and each source's destinations
/// follow the order of [`valid_moves`].
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, piece)| {
            valid_moves(board, from, piece)
                .as_slice()
                .iter()
                .map(|&to| Move::new(from, to, piece))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn destinations_push_and_iterate() {
        let mut list = Destinations::new();
        assert!(list.is_empty());

        list.push(pos(5, 4));
        list.push(pos(4, 4));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], pos(5, 4));
        assert_eq!(list[1], pos(4, 4));
        assert!(list.contains(pos(4, 4)));
        assert!(!list.contains(pos(3, 4)));
        assert_eq!((&list).into_iter().count(), 2);
    }

    #[test]
    fn destinations_default_is_empty() {
        assert!(Destinations::default().is_empty());
        assert_eq!(Destinations::default(), Destinations::new());
    }

    #[test]
    fn destinations_debug() {
        let mut list = Destinations::new();
        list.push(pos(1, 2));
        assert_eq!(format!("{:?}", list), "[Position(1,2)]");
    }

    #[test]
    fn pawn_destinations_from_start() {
        let board = Board::standard();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let moves = valid_moves(&board, pos(6, 4), pawn);
        assert_eq!(moves.as_slice(), &[pos(4, 4), pos(5, 4)]);
    }

    #[test]
    fn knight_destinations_from_start() {
        let board = Board::standard();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        let moves = valid_moves(&board, pos(0, 6), knight);
        assert_eq!(moves.as_slice(), &[pos(2, 5), pos(2, 7)]);
    }

    #[test]
    fn boxed_in_pieces_have_no_destinations() {
        let board = Board::standard();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(valid_moves(&board, pos(7, 0), rook).is_empty());
        let king = Piece::new(PieceKind::King, Color::White);
        assert!(valid_moves(&board, pos(7, 4), king).is_empty());
    }

    #[test]
    fn king_cannot_step_into_check() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/r3K3").unwrap();
        let king = Piece::new(PieceKind::King, Color::White);
        let moves = valid_moves(&board, pos(7, 4), king);
        // Row 7 is covered by the rook; only the row-6 squares are safe.
        assert_eq!(moves.as_slice(), &[pos(6, 3), pos(6, 4), pos(6, 5)]);
    }

    #[test]
    fn opening_move_count() {
        let board = Board::standard();
        // 16 pawn moves and 4 knight moves.
        assert_eq!(generate_moves(&board, Color::White).len(), 20);
        assert_eq!(generate_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn safe_move_rejects_self_check() {
        // The e-file bishop shields its king from the rook.
        let board = Board::from_placement("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        assert!(is_legal_move(&board, pos(6, 4), pos(5, 5), bishop));
        assert!(!is_safe_move(&board, pos(6, 4), pos(5, 5), bishop));
    }
}
