//! Movement offsets and attack detection.
//!
//! A square counts as attacked when some piece of the attacking color has it
//! in its pseudo-legal move list on the given board. This reuses the movement
//! rules rather than a separate attack table, so the two cannot disagree.

use super::{pseudo_legal_moves, MoveList};
use crate::Board;
use chess_core::{Color, Coord};

/// Knight jumps as (row, col) steps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as (row, col) offsets, scanned row by row.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Bishop ray directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Rook ray directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Queen ray directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;

/// Returns true if the given square is attacked by the given color.
pub fn is_square_attacked(board: &Board, sq: Coord, by_color: Color) -> bool {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces_of(by_color) {
        moves.clear();
        pseudo_legal_moves(board, from, &mut moves);
        if moves.iter().any(|m| m.to == sq) {
            return true;
        }
    }
    false
}

/// Returns true if the king of the given color is in check.
pub fn is_king_attacked(board: &Board, king_color: Color) -> bool {
    match board.king_square(king_color) {
        Some(king_sq) => is_square_attacked(board, king_sq, king_color.opposite()),
        None => false, // No king (shouldn't happen in valid position)
    }
}
