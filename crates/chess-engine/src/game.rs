//! Game state and the click-driven controller.
//!
//! The [`Game`] struct owns everything that changes between turns:
//! - The current board, replaced wholesale after every committed move
//! - Whose turn it is and whether that side is in check
//! - The selection state of the two-click move interface
//!
//! Game-over conditions are not tracked. A side with no safe moves simply
//! has nothing to select.

use crate::movegen::Destinations;
use crate::rules::{RuleSet, StandardChess};
use crate::{Board, BoardError};
use chess_core::{Color, Move, Piece, Position};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The starting board breaks the one-king-per-side invariant.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
    /// The side not on move is already in check, so its king could be taken.
    #[error("{0} is in check but not on move")]
    WaitingSideInCheck(Color),
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySquare(Position),
    /// The piece on the source square belongs to the side not on move.
    #[error("the piece on {0} cannot move this turn")]
    NotYourTurn(Position),
    /// The move breaks the piece's movement rules.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The move would leave the mover's own king in check.
    #[error("move leaves the king in check: {0}")]
    LeavesKingInCheck(Move),
}

/// The selection half of the two-click interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    Idle,
    /// A piece of the side to move is selected, with its safe destinations.
    Selected {
        from: Position,
        destinations: Destinations,
    },
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as played.
    pub mov: Move,
    /// The piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// Whether the side now on move is in check.
    pub check: bool,
}

/// What a click did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected.
    Selected {
        from: Position,
        destinations: Destinations,
    },
    /// The selected piece moved to the clicked square.
    Moved(MoveOutcome),
    /// The move was geometrically legal but refused; the selection was cleared.
    Rejected(GameError),
    /// The selection was cleared.
    Deselected,
    /// Nothing was selected and the click did not hit a movable piece.
    Ignored,
}

/// Serializable view of a game, for front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Board diagram, row 0 first.
    pub board: String,
    pub turn: Color,
    pub check: bool,
    pub selected: Option<Position>,
    pub destinations: Vec<Position>,
}

/// A chess game driven by square clicks or explicit moves.
///
/// The board is never edited in place: each committed move swaps in the
/// copy that was checked for safety.
#[derive(Debug, Clone)]
pub struct Game<R = StandardChess> {
    rules: R,
    board: Board,
    turn: Color,
    selection: Selection,
    check: bool,
}

impl Default for Game<StandardChess> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<StandardChess> {
    /// Creates a new game from the standard layout.
    pub fn new() -> Self {
        Self::with_rules(StandardChess)
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a game from the variant's starting board, white to move.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        let check = rules.is_check(&board, Color::White);
        Game {
            rules,
            board,
            turn: Color::White,
            selection: Selection::Idle,
            check,
        }
    }

    /// Creates a game from a custom board.
    ///
    /// The board must hold exactly one king per side, and the side not on
    /// move must not be in check.
    pub fn from_board(rules: R, board: Board, turn: Color) -> Result<Self, GameError> {
        board.validate()?;
        if rules.is_check(&board, turn.opposite()) {
            return Err(GameError::WaitingSideInCheck(turn.opposite()));
        }
        let check = rules.is_check(&board, turn);
        Ok(Game {
            rules,
            board,
            turn,
            selection: Selection::Idle,
            check,
        })
    }

    /// Returns the rule set.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Returns the safe destinations of whatever piece stands on `from`.
    ///
    /// Empty when the square is empty.
    pub fn valid_moves(&self, from: Position) -> Destinations {
        match self.board.piece_at(from) {
            Some(piece) => self.rules.valid_moves(&self.board, from, piece),
            None => Destinations::new(),
        }
    }

    /// Returns every safe move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.generate_moves(&self.board, self.turn)
    }

    /// Selects the piece on `pos` and computes its destinations.
    pub fn select(&mut self, pos: Position) -> Result<Destinations, GameError> {
        let piece = self.board.piece_at(pos).ok_or(GameError::EmptySquare(pos))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourTurn(pos));
        }
        let destinations = self.rules.valid_moves(&self.board, pos, piece);
        debug!(%pos, piece = %piece, count = destinations.len(), "selected");
        self.selection = Selection::Selected {
            from: pos,
            destinations,
        };
        Ok(destinations)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Moves the piece on `from` to `to`.
    ///
    /// Legality and safety are both re-checked here. On success the board
    /// is replaced, the turn passes and the new side's check status is
    /// recomputed. Any failure leaves the board untouched. Either way the
    /// selection is cleared.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, GameError> {
        self.selection = Selection::Idle;

        let piece = self.board.piece_at(from).ok_or(GameError::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourTurn(from));
        }

        let m = Move::new(from, to, piece);
        if !self.rules.is_legal(&self.board, m) {
            trace!(mov = %m, "rejected illegal move");
            return Err(GameError::IllegalMove(m));
        }
        let Some(after) = self.rules.try_make_move(&self.board, m) else {
            debug!(mov = %m, "rejected move into check");
            return Err(GameError::LeavesKingInCheck(m));
        };

        let captured = self.board.piece_at(to);
        self.board = after;
        self.turn = self.turn.opposite();
        self.check = self.rules.is_check(&self.board, self.turn);
        debug!(mov = %m, ?captured, check = self.check, "move committed");

        Ok(MoveOutcome {
            mov: m,
            captured,
            check: self.check,
        })
    }

    /// Applies one click of the two-click interface.
    ///
    /// With nothing selected, clicking a piece of the side to move selects
    /// it. With a piece selected, clicking one of its legal targets plays
    /// the move, clicking another own piece reselects, and anything else
    /// clears the selection.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if let Selection::Selected { from, .. } = self.selection {
            let piece = self.board.piece_at(from);
            if let Some(piece) = piece {
                if self.rules.is_legal(&self.board, Move::new(from, pos, piece)) {
                    return match self.make_move(from, pos) {
                        Ok(outcome) => ClickOutcome::Moved(outcome),
                        Err(err) => ClickOutcome::Rejected(err),
                    };
                }
            }
        }

        let own_piece = self
            .board
            .piece_at(pos)
            .is_some_and(|p| p.color == self.turn);
        let had_selection = self.selection != Selection::Idle;

        if own_piece {
            if let Ok(destinations) = self.select(pos) {
                return ClickOutcome::Selected {
                    from: pos,
                    destinations,
                };
            }
        }

        self.selection = Selection::Idle;
        if had_selection {
            ClickOutcome::Deselected
        } else {
            ClickOutcome::Ignored
        }
    }

    /// Starts over from a fresh starting board, white to move.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_board();
        self.turn = Color::White;
        self.selection = Selection::Idle;
        self.check = self.rules.is_check(&self.board, self.turn);
        debug!(board = %self.board.to_placement(), "game reset");
    }

    /// Returns a serializable view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        let (selected, destinations) = match &self.selection {
            Selection::Idle => (None, Vec::new()),
            Selection::Selected { from, destinations } => {
                (Some(*from), destinations.as_slice().to_vec())
            }
        };
        GameSnapshot {
            board: self.board.to_placement(),
            turn: self.turn,
            check: self.check,
            selected,
            destinations,
        }
    }
}
