//! Read-only game state snapshot.

use chess_core::{Color, Coord, Move, Piece};

/// Everything a presentation layer needs to draw the move list, the capture
/// trays, and the selection highlights.
///
/// `is_check` and `is_checkmate` describe the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Color,
    pub selected_square: Option<Coord>,
    pub valid_moves: Vec<Coord>,
    pub move_history: Vec<Move>,
    pub captured_by_white: Vec<Piece>,
    pub captured_by_black: Vec<Piece>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl GameState {
    /// Returns the pieces taken by the given color.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_by_white,
            Color::Black => &self.captured_by_black,
        }
    }

    /// Returns the number of plies played so far.
    pub fn ply_count(&self) -> usize {
        self.move_history.len()
    }
}
