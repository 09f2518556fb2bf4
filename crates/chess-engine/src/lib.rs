//! Chess rule engine over an 8x8 grid.
//!
//! This crate provides:
//! - [`Board`] - the grid of optional pieces, copied rather than mutated
//! - Move legality, path obstruction and check detection in [`movegen`]
//! - [`valid_moves`] - the safe destinations of one piece
//! - [`RuleSet`] - trait for layout variants
//! - [`Game`] - turn, check and selection state behind a click interface
//!
//! # Architecture
//!
//! Every rule function is pure: it takes `&Board` and answers a question.
//! Whether a move is *safe* is decided by playing it on a copy and asking
//! whether the mover's king is then in check. Castling, en passant,
//! promotion and game-over detection are not part of the rules.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Piece, PieceKind, Position};
//! use chess_engine::{is_king_in_check, valid_moves, Board, Game};
//!
//! // Using the rule functions directly (stateless)
//! let board = Board::standard();
//! let from = Position::new(7, 1).unwrap();
//! let knight = Piece::new(PieceKind::Knight, Color::White);
//! println!("Knight destinations: {:?}", valid_moves(&board, from, knight));
//! assert!(!is_king_in_check(&board, Color::White));
//!
//! // Using Game for turn and selection handling
//! let mut game = Game::new();
//! game.make_move(Position::new(6, 4).unwrap(), Position::new(4, 4).unwrap())
//!     .unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::{Board, BoardError};
pub use game::{ClickOutcome, Game, GameError, GameSnapshot, MoveOutcome, Selection};
pub use movegen::{
    find_king, generate_moves, is_king_in_check, is_legal_move, is_path_clear, is_safe_move,
    is_square_attacked, valid_moves, Destinations,
};
pub use rules::{RuleSet, ShuffledHeavy, StandardChess};
