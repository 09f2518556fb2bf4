//! Core types for grid chess.
//!
//! This crate provides the fundamental types used across the rule engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Position`] for `(row, col)` board coordinates
//! - [`Move`] for candidate transitions
//! - [`Placement`] for reading and writing board diagrams

mod color;
mod mov;
mod piece;
mod placement;
mod position;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use placement::{Grid, Placement, PlacementError};
pub use position::{Position, PositionError};
