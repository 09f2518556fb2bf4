//! Board coordinates.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a `row,col` coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid position '{0}': expected 'row,col'")]
    Malformed(String),

    #[error("position ({row},{col}) is off the board")]
    OffBoard { row: i64, col: i64 },
}

/// A square coordinate on the 8x8 grid.
///
/// Row 0 is black's home rank and row 7 is white's. Both components are
/// always in `0..8`; there is no way to build an off-grid position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if either component is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Creates a position from its row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Position {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position shifted by the given deltas, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let (Some(row), Some(col)) = (
            (self.row as i8).checked_add(d_row),
            (self.col as i8).checked_add(d_col),
        ) else {
            return None;
        };
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Iterates over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position { row, col }))
    }

    /// The top-left corner.
    pub const ORIGIN: Position = Position { row: 0, col: 0 };
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PositionError::Malformed(s.to_string());
        let (row, col) = s.trim().split_once(',').ok_or_else(malformed)?;
        let row: i64 = row.trim().parse().map_err(|_| malformed())?;
        let col: i64 = col.trim().parse().map_err(|_| malformed())?;

        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(PositionError::OffBoard { row, col });
        }
        Ok(Position {
            row: row as u8,
            col: col as u8,
        })
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({},{})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
