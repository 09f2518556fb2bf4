//! The 8x8 board.

use crate::movegen::is_king_in_check;
use chess_core::{Color, Grid, Move, Piece, PieceKind, Placement, PlacementError, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Errors reported when a board does not satisfy the engine's invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board diagram: {0}")]
    Placement(#[from] PlacementError),

    #[error("{0} has no king")]
    MissingKing(Color),

    #[error("{color} has {count} kings, expected one")]
    ExtraKing { color: Color, count: usize },
}

const fn square(row: u8, col: u8) -> Position {
    match Position::new(row, col) {
        Some(pos) => pos,
        None => panic!("square out of range"),
    }
}

const BLACK_KING_HOME: Position = square(0, 4);
const WHITE_KING_HOME: Position = square(7, 4);

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// `Board` is a plain `Copy` value. Every rule function takes `&Board` and
/// leaves it untouched; simulating a move goes through [`Board::after_move`],
/// which returns a new board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Grid,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting layout.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                if let Some(pos) = Position::new(color.home_row(), col) {
                    board.place(pos, Piece::new(kind, color));
                }
                if let Some(pos) = Position::new(color.pawn_start_row(), col) {
                    board.place(pos, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    /// Creates the shuffled heavy-piece layout.
    ///
    /// Both kings stay on their home squares. Each side's queen, rooks,
    /// bishops and knights are dropped on distinct random squares among the
    /// remaining 62. There are no pawns.
    ///
    /// White moves first, so a draw that leaves black in check would let
    /// white take the king. Such draws are thrown away and redrawn.
    pub fn shuffled_heavy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let board = Self::scatter_heavy(rng);
            if !is_king_in_check(&board, Color::Black) {
                return board;
            }
        }
    }

    fn scatter_heavy<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Board::empty();
        board.place(BLACK_KING_HOME, Piece::new(PieceKind::King, Color::Black));
        board.place(WHITE_KING_HOME, Piece::new(PieceKind::King, Color::White));

        let mut free: Vec<Position> = Position::all().filter(|&p| board.is_empty(p)).collect();
        free.shuffle(rng);

        let heavy = Color::ALL
            .iter()
            .flat_map(|&color| Piece::HEAVY_SET.iter().map(move |&kind| Piece::new(kind, color)));
        for (pos, piece) in free.into_iter().zip(heavy) {
            board.place(pos, piece);
        }
        board
    }

    /// Parses a board from a placement diagram.
    ///
    /// The king invariant is not checked here; see [`Board::validate`].
    pub fn from_placement(diagram: &str) -> Result<Self, BoardError> {
        let placement = Placement::parse(diagram)?;
        Ok(Board {
            squares: placement.into_grid(),
        })
    }

    /// Returns the placement diagram of this board.
    pub fn to_placement(&self) -> String {
        Placement::from_grid(self.squares).to_string()
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub const fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize]
    }

    /// Returns true if no piece stands on `pos`.
    #[inline]
    pub const fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Puts a piece on a square, replacing whatever was there.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.squares[pos.row() as usize][pos.col() as usize] = Some(piece);
    }

    /// Clears a square, returning its previous occupant.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize].take()
    }

    /// Builder form of [`Board::place`].
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.place(pos, piece);
        self
    }

    /// Returns a copy of the board with `m` played on it.
    ///
    /// The source square is emptied and the destination receives `m.piece`;
    /// anything standing there is discarded. No legality check is made.
    pub fn after_move(&self, m: Move) -> Board {
        let mut next = *self;
        next.remove(m.from);
        next.place(m.to, m.piece);
        next
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Iterates over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Counts the pieces of the given kind and color.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color).filter(|(_, p)| p.kind == kind).count()
    }

    /// Checks that each color has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            match self.count(PieceKind::King, color) {
                0 => return Err(BoardError::MissingKing(color)),
                1 => {}
                count => return Err(BoardError::ExtraKing { color, count }),
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                let c = square.map_or('.', |p| p.to_char());
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
