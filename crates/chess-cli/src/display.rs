//! Terminal board rendering.

use chess_core::{ColoredPiece, Square};
use chess_engine::{Board, EMPTY_GLYPH};

use crate::config::SessionConfig;

const FOREGROUND_BLACK: &str = "\x1b[38;5;0m";
const LIGHT_SQUARE: &str = "\x1b[48;5;15m";
const DARK_SQUARE: &str = "\x1b[48;5;250m";
const RESET: &str = "\x1b[0m";

/// Renders the board the way the session is configured to show it.
pub fn render(board: &Board, config: &SessionConfig) -> String {
    if config.color {
        render_checkered(board, config.labels)
    } else {
        board.render(config.labels)
    }
}

/// Renders the board on a checkered ANSI 256-color background.
pub fn render_checkered(board: &Board, with_labels: bool) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        if rank < 7 {
            out.push('\n');
        }
        if with_labels {
            out.push_str(&format!("{} ", rank + 1));
        }
        out.push_str(FOREGROUND_BLACK);
        for file in 0..8 {
            let background = if (rank + file) % 2 == 0 {
                DARK_SQUARE
            } else {
                LIGHT_SQUARE
            };
            let glyph = board
                .piece_at(Square::from_coords(file, rank))
                .map_or(EMPTY_GLYPH, ColoredPiece::glyph);
            out.push_str(background);
            out.push(glyph);
            out.push(' ');
        }
        out.push_str(RESET);
    }
    if with_labels {
        out.push_str("\n  a b c d e f g h");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn plain_render_follows_board() {
        let config = SessionConfig::default();
        assert_eq!(render(&Board::starting(), &config), Board::starting().render(true));
    }

    #[test]
    fn checkered_render_keeps_content() {
        let text = render_checkered(&Board::starting(), true);
        let plain = strip_ansi(&text);
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines[0], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ ");
        assert_eq!(lines[7], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ ");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn a1_is_dark() {
        let text = render_checkered(&Board::empty(), false);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with(&format!("{}{}", FOREGROUND_BLACK, DARK_SQUARE)));
    }
}
