//! Text rendering of the board and game status.

use chess_core::{Piece, Position};
use chess_engine::{Game, RuleSet, Selection};

/// Character used for a piece.
fn symbol(piece: Piece, ascii: bool) -> char {
    if ascii {
        piece.to_char()
    } else {
        piece.glyph()
    }
}

/// Draws the board with row and column indices.
///
/// The selected piece is bracketed as `[P]`. Its destinations show as `*`
/// when empty and as `(p)` when a capture.
pub fn board<R: RuleSet>(game: &Game<R>, ascii: bool) -> String {
    let (selected, destinations) = match game.selection() {
        Selection::Idle => (None, None),
        Selection::Selected { from, destinations } => (Some(*from), Some(destinations)),
    };

    let mut out = String::from("   ");
    for col in 0..8 {
        out.push_str(&format!(" {} ", col));
    }
    out.push('\n');

    for row in 0..8u8 {
        out.push_str(&format!("{}  ", row));
        for col in 0..8u8 {
            let Some(pos) = Position::new(row, col) else {
                continue;
            };
            let piece = game.board().piece_at(pos);
            let target = destinations.is_some_and(|d| d.contains(pos));
            let cell = match (piece, selected == Some(pos), target) {
                (Some(p), true, _) => format!("[{}]", symbol(p, ascii)),
                (Some(p), false, true) => format!("({})", symbol(p, ascii)),
                (Some(p), false, false) => format!(" {} ", symbol(p, ascii)),
                (None, _, true) => " * ".to_string(),
                (None, _, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// One-line status: side to move and check.
pub fn status<R: RuleSet>(game: &Game<R>) -> String {
    if game.is_check() {
        format!("{} to move (check)", game.turn())
    } else {
        format!("{} to move", game.turn())
    }
}

/// Lists destinations as `r,c` pairs.
pub fn destinations(list: &[Position]) -> String {
    if list.is_empty() {
        return "no safe moves".to_string();
    }
    list.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
