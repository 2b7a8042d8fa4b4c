//! Line-oriented game session.
//!
//! Reads moves like `e2-e4` one per line, applies them to a [`Position`] and
//! writes the board back after each accepted move. A handful of words are
//! treated as commands instead of moves:
//!
//! - `moves` - list the legal moves for the side to move
//! - `board` - print the board again
//! - `fen` - print the position as FEN
//! - `quit` - end the session

use std::io::{self, BufRead, Write};

use chess_engine::Position;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::SessionConfig;
use crate::display;

/// Errors that end a session early.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A game in progress, plus how to show it.
pub struct Session {
    position: Position,
    config: SessionConfig,
}

impl Session {
    pub fn new(position: Position, config: SessionConfig) -> Self {
        Session { position, config }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Runs until `quit` or end of input. Returns the number of moves played.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
    ) -> Result<usize, SessionError> {
        info!(fen = %self.position.to_fen(), "session started");
        self.print_board(&mut out)?;

        let mut played = 0;
        for line in input.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            match line {
                "quit" => break,
                "board" => self.print_board(&mut out)?,
                "fen" => writeln!(out, "{}", self.position.to_fen())?,
                "moves" => self.print_moves(&mut out)?,
                notation => {
                    if self.play(notation, &mut out)? {
                        played += 1;
                    }
                }
            }
        }

        info!(played, fen = %self.position.to_fen(), "session ended");
        Ok(played)
    }

    /// Applies one move. Returns whether it was accepted.
    fn play<W: Write>(&mut self, notation: &str, out: &mut W) -> io::Result<bool> {
        let mover = self.position.side_to_move();
        match self.position.apply_notation(notation) {
            Ok(m) => {
                debug!(%mover, mv = %m, "move applied");
                self.print_board(out)?;
                if self.config.announce_check {
                    self.print_check_notice(out)?;
                }
                Ok(true)
            }
            Err(e) => {
                if e.is_rejection() {
                    warn!(%mover, input = notation, "move rejected: {}", e);
                } else {
                    error!(%mover, input = notation, "{}", e);
                }
                writeln!(out, "{}", e)?;
                Ok(false)
            }
        }
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", display::render(self.position.board(), &self.config))
    }

    fn print_check_notice<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.position.is_in_check() {
            Ok(true) => writeln!(out, "{} is in check", self.position.side_to_move()),
            Ok(false) => Ok(()),
            Err(e) => {
                error!("{}", e);
                writeln!(out, "{}", e)
            }
        }
    }

    fn print_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.position.legal_moves() {
            Ok(moves) => {
                let list: Vec<String> = moves
                    .to_sorted_vec()
                    .iter()
                    .map(|m| m.to_notation())
                    .collect();
                writeln!(out, "{}", list.join(" "))
            }
            Err(e) => {
                error!("{}", e);
                writeln!(out, "{}", e)
            }
        }
    }
}
