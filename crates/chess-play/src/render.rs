//! Plain-text rendering of a position.
//!
//! White pieces are uppercase and Black lowercase. The selected square is
//! drawn in brackets and its legal destinations are marked with `*`.

use chess_core::{Color, Coord, Move, Piece, BOARD_SIZE};
use chess_engine::Position;
use std::fmt::Write;

const FILES: &str = "     a  b  c  d  e  f  g  h";

/// Draws the board from rank 8 down to rank 1.
pub fn render_board(position: &Position) -> String {
    let board = position.board();
    let selected = position.selected_square();
    let targets = position.valid_moves();

    let mut out = String::new();
    out.push_str(FILES);
    out.push('\n');
    for row in 0..BOARD_SIZE {
        let rank = BOARD_SIZE - row;
        let _ = write!(out, "  {} ", rank);
        for col in 0..BOARD_SIZE {
            let Some(coord) = Coord::new(row, col) else {
                continue;
            };
            let piece = board.get(coord);
            let c = piece.map_or('.', |p| p.to_char());
            if selected == Some(coord) {
                let _ = write!(out, "[{}]", c);
            } else if targets.contains(&coord) {
                match piece {
                    Some(_) => {
                        let _ = write!(out, "*{}*", c);
                    }
                    None => out.push_str(" * "),
                }
            } else {
                let _ = write!(out, " {} ", c);
            }
        }
        let _ = writeln!(out, " {}", rank);
    }
    out.push_str(FILES);
    out.push('\n');
    out
}

/// Lists the pieces each side has taken, e.g. `White captured: p n`.
pub fn render_captures(position: &Position) -> String {
    let mut out = String::new();
    for color in Color::ALL {
        let _ = writeln!(
            out,
            "{} captured: {}",
            color,
            join_pieces(position.captured_by(color))
        );
    }
    out
}

fn join_pieces(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "-".to_string();
    }
    pieces
        .iter()
        .map(|p| p.to_char().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the move history as numbered move pairs: `1. e2e4 e7e5 2. g1f3`.
pub fn render_history(history: &[Move]) -> String {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let moves: Vec<String> = pair.iter().map(|m| m.to_coordinate()).collect();
            format!("{}. {}", i + 1, moves.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Board, capture lists, history and the side to move.
pub fn render(position: &Position) -> String {
    let mut out = render_board(position);
    out.push_str(&render_captures(position));
    if !position.history().is_empty() {
        let _ = writeln!(out, "Moves: {}", render_history(position.history()));
    }
    let _ = writeln!(out, "{} to move", position.current_player());
    out
}
