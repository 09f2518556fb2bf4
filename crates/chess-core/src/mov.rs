//! Move representation.

use crate::{Piece, Position};
use serde::Serialize;
use std::fmt;

/// A candidate transition of `piece` from one square to another.
///
/// Moves are evaluated against a board and then dropped; nothing stores
/// them. The mover is carried explicitly because legality is decided for
/// the piece the caller names, not for whatever sits on `from`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Position, to: Position, piece: Piece) -> Self {
        Move { from, to, piece }
    }

    /// Returns the row and column deltas from source to destination.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }

    /// Returns true if the move does not leave its square.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}->{})", self.piece.to_char(), self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)
    }
}
