//! Interactive command loop.
//!
//! A [`Session`] owns one game and reads line-based commands:
//!
//! ```text
//! r,c             click a square (select, move, or clear)
//! select r,c      select a piece of the side to move
//! move r,c r,c    move directly
//! moves r,c       list safe destinations of a piece
//! board           redraw the board
//! state           print the game as JSON
//! reset           start over with the current layout
//! shuffle         start over with a shuffled heavy-piece layout
//! help            show this list
//! quit            leave
//! ```

use crate::config::PlayConfig;
use crate::render;
use chess_core::{Position, PositionError};
use chess_engine::{ClickOutcome, Game, MoveOutcome, RuleSet, ShuffledHeavy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

const HELP: &str = "\
commands:
  r,c             click a square (select, move, or clear)
  select r,c      select a piece of the side to move
  move r,c r,c    move directly
  moves r,c       list safe destinations of a piece
  board           redraw the board
  state           print the game as JSON
  reset           start over with the current layout
  shuffle         start over with a shuffled heavy-piece layout
  help            show this list
  quit            leave";

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),

    #[error("'{0}' takes no argument '{1}'")]
    UnexpectedArgument(&'static str, String),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Position),
    Select(Position),
    Move(Position, Position),
    Moves(Position),
    Board,
    State,
    Reset,
    Shuffle,
    Help,
    Quit,
    /// A blank line.
    Nothing,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(Command::Nothing);
        };

        let command = match word {
            "select" => Command::Select(position_arg(&mut parts, "select")?),
            "move" => {
                let from = position_arg(&mut parts, "move")?;
                let to = position_arg(&mut parts, "move")?;
                Command::Move(from, to)
            }
            "moves" => Command::Moves(position_arg(&mut parts, "moves")?),
            "board" => Command::Board,
            "state" => Command::State,
            "reset" => Command::Reset,
            "shuffle" => Command::Shuffle,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other if other.contains(',') => Command::Click(other.parse()?),
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match parts.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(
                command.name(),
                extra.to_string(),
            )),
            None => Ok(command),
        }
    }
}

fn position_arg<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<Position, CommandError> {
    let text = parts
        .next()
        .ok_or(CommandError::MissingArgument(command, "a square 'r,c'"))?;
    Ok(text.parse()?)
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Command::Click(_) => "r,c",
            Command::Select(_) => "select",
            Command::Move(..) => "move",
            Command::Moves(_) => "moves",
            Command::Board => "board",
            Command::State => "state",
            Command::Reset => "reset",
            Command::Shuffle => "shuffle",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Nothing => "",
        }
    }
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game plus display settings.
pub struct Session {
    game: Game<Box<dyn RuleSet>>,
    rng: StdRng,
    ascii: bool,
    show_moves: bool,
}

impl Session {
    /// Starts a session from the configured layout.
    pub fn new(config: &PlayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session {
            game: Game::with_rules(config.layout.rules(config.seed)),
            rng,
            ascii: config.ascii,
            show_moves: config.show_moves,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game<Box<dyn RuleSet>> {
        &self.game
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, out: &mut W) -> io::Result<()> {
        self.print_board(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    writeln!(out, "error: {}", err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Runs one command.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        match command {
            Command::Click(pos) => match self.game.click(pos) {
                ClickOutcome::Selected { destinations, .. } => {
                    self.print_board(out)?;
                    if self.show_moves {
                        writeln!(out, "moves: {}", render::destinations(destinations.as_slice()))?;
                    }
                }
                ClickOutcome::Moved(outcome) => self.print_move(&outcome, out)?,
                ClickOutcome::Rejected(err) => writeln!(out, "rejected: {}", err)?,
                ClickOutcome::Deselected => writeln!(out, "selection cleared")?,
                ClickOutcome::Ignored => writeln!(out, "nothing to select on {}", pos)?,
            },
            Command::Select(pos) => match self.game.select(pos) {
                Ok(destinations) => {
                    self.print_board(out)?;
                    writeln!(out, "moves: {}", render::destinations(destinations.as_slice()))?;
                }
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            Command::Move(from, to) => match self.game.make_move(from, to) {
                Ok(outcome) => self.print_move(&outcome, out)?,
                Err(err) => writeln!(out, "error: {}", err)?,
            },
            Command::Moves(pos) => {
                let destinations = self.game.valid_moves(pos);
                writeln!(out, "{}", render::destinations(destinations.as_slice()))?;
            }
            Command::Board => self.print_board(out)?,
            Command::State => {
                let json = serde_json::to_string_pretty(&self.game.snapshot())?;
                writeln!(out, "{}", json)?;
            }
            Command::Reset => {
                self.game.reset();
                self.print_board(out)?;
            }
            Command::Shuffle => {
                let seed: u64 = self.rng.gen();
                tracing::info!(seed, "shuffling");
                self.game = Game::with_rules(Box::new(ShuffledHeavy::seeded(seed)));
                self.print_board(out)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Nothing => {}
        }
        Ok(Flow::Continue)
    }

    /// Plays up to `plies` uniformly random safe moves.
    ///
    /// Stops early when the side to move has no safe move. Returns the
    /// number of moves played.
    pub fn autoplay<W: Write>(&mut self, plies: usize, out: &mut W) -> io::Result<usize> {
        let mut played = 0;
        while played < plies {
            let moves = self.game.legal_moves();
            let Some(&m) = moves.choose(&mut self.rng) else {
                writeln!(out, "{} has no safe moves", self.game.turn())?;
                break;
            };
            match self.game.make_move(m.from, m.to) {
                Ok(outcome) => {
                    played += 1;
                    writeln!(out, "{:>3}. {}", played, describe(&outcome))?;
                }
                Err(err) => {
                    tracing::warn!(%err, "generated move refused");
                    break;
                }
            }
        }
        self.print_board(out)?;
        Ok(played)
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render::board(&self.game, self.ascii))?;
        writeln!(out, "{}", render::status(&self.game))
    }

    fn print_move<W: Write>(&self, outcome: &MoveOutcome, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", describe(outcome))?;
        self.print_board(out)
    }
}

fn describe(outcome: &MoveOutcome) -> String {
    let mut text = outcome.mov.to_string();
    if let Some(captured) = outcome.captured {
        text.push_str(&format!(" takes {}", captured));
    }
    if outcome.check {
        text.push_str(", check");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;
    use chess_core::Color;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn session() -> Session {
        Session::new(&PlayConfig {
            ascii: true,
            seed: Some(7),
            ..PlayConfig::default()
        })
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("6,4".parse(), Ok(Command::Click(pos(6, 4))));
        assert_eq!("select 6,4".parse(), Ok(Command::Select(pos(6, 4))));
        assert_eq!(
            "move 6,4 4,4".parse(),
            Ok(Command::Move(pos(6, 4), pos(4, 4)))
        );
        assert_eq!("moves 7,1".parse(), Ok(Command::Moves(pos(7, 1))));
        assert_eq!("  board ".parse(), Ok(Command::Board));
        assert_eq!("exit".parse(), Ok(Command::Quit));
        assert_eq!("".parse(), Ok(Command::Nothing));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert!(matches!(
            "move 6,4".parse::<Command>(),
            Err(CommandError::MissingArgument("move", _))
        ));
        assert!(matches!(
            "9,9".parse::<Command>(),
            Err(CommandError::Position(PositionError::OffBoard { .. }))
        ));
        assert_eq!(
            "board 1".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("board", "1".to_string()))
        );
    }

    #[test]
    fn clicks_play_a_move() {
        let mut session = session();
        let output = run(&mut session, "6,4\n4,4\nquit\n");
        assert!(output.contains("moves: 4,4 5,4"));
        assert!(output.contains("White Pawn 6,4 -> 4,4"));
        assert!(output.contains("Black to move"));
        assert_eq!(session.game().turn(), Color::Black);
    }

    #[test]
    fn bad_lines_do_not_stop_the_loop() {
        let mut session = session();
        let output = run(&mut session, "fly\nmove 6,4 3,4\nmove 6,4 5,4\n");
        assert!(output.contains("error: unknown command 'fly'"));
        assert!(output.contains("error: illegal move"));
        assert_eq!(session.game().turn(), Color::Black);
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = session();
        run(&mut session, "quit\nmove 6,4 4,4\n");
        assert_eq!(session.game().turn(), Color::White);
    }

    #[test]
    fn state_prints_json() {
        let mut session = session();
        let mut out = Vec::new();
        session.execute(Command::State, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["turn"], "white");
        assert_eq!(value["check"], false);
        assert_eq!(
            value["board"],
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn shuffle_then_reset_keeps_the_variant() {
        let mut session = session();
        let mut out = Vec::new();
        session.execute(Command::Shuffle, &mut out).unwrap();
        let board = *session.game().board();
        assert_eq!(board.count(chess_core::PieceKind::Pawn, Color::White), 0);
        assert!(board.validate().is_ok());

        session.execute(Command::Reset, &mut out).unwrap();
        let reset = *session.game().board();
        assert_eq!(reset.count(chess_core::PieceKind::Pawn, Color::Black), 0);
        assert_eq!(session.game().turn(), Color::White);
    }

    #[test]
    fn autoplay_is_reproducible() {
        let config = PlayConfig {
            layout: Layout::Standard,
            seed: Some(11),
            ascii: true,
            ..PlayConfig::default()
        };
        let mut a = Session::new(&config);
        let mut b = Session::new(&config);
        let (mut out_a, mut out_b) = (Vec::new(), Vec::new());

        assert_eq!(a.autoplay(20, &mut out_a).unwrap(), 20);
        assert_eq!(b.autoplay(20, &mut out_b).unwrap(), 20);
        assert_eq!(out_a, out_b);
        assert_eq!(a.game().board(), b.game().board());
    }

    #[test]
    fn autoplay_stops_without_safe_moves() {
        use chess_engine::{Board, StandardChess};

        // Black to move, stalemated in the corner.
        let board = Board::from_placement("k7/2Q5/1K6/8/8/8/8/8").unwrap();
        let mut session = session();
        let rules: Box<dyn RuleSet> = Box::new(StandardChess);
        session.game = Game::from_board(rules, board, Color::Black).unwrap();

        let mut out = Vec::new();
        assert_eq!(session.autoplay(5, &mut out).unwrap(), 0);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Black has no safe moves"));
    }
}
