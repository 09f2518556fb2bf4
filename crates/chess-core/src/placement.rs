//! Board diagrams in piece-placement form.
//!
//! A diagram lists the eight rows separated by `/`, starting with row 0
//! (black's home rank). Pieces are letters (`PNBRQK` for white,
//! `pnbrqk` for black) and runs of empty squares are digits `1`-`8`.
//! This is the placement field of FEN, without the game-state fields.

use crate::Piece;
use std::fmt;
use thiserror::Error;

/// The contents of every square, indexed `[row][col]`.
pub type Grid = [[Option<Piece>; 8]; 8];

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidChar { ch: char, row: usize },

    #[error("row {row} has {squares} squares, expected 8")]
    RowWidth { row: usize, squares: u32 },
}

/// A parsed board diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement(Grid);

impl Placement {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a diagram.
    pub fn parse(diagram: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = diagram.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::RowCount(rows.len()));
        }

        let mut grid: Grid = [[None; 8]; 8];
        for (row, text) in rows.iter().enumerate() {
            let mut squares = 0u32;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += run;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if squares < 8 {
                        grid[row][squares as usize] = Some(piece);
                    }
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidChar { ch, row });
                }
            }
            if squares != 8 {
                return Err(PlacementError::RowWidth { row, squares });
            }
        }

        Ok(Placement(grid))
    }

    /// Wraps an existing grid.
    pub const fn from_grid(grid: Grid) -> Self {
        Placement(grid)
    }

    /// Consumes the placement, returning its grid.
    pub const fn into_grid(self) -> Grid {
        self.0
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.0.iter().enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            let mut empty = 0;
            for square in squares {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}
