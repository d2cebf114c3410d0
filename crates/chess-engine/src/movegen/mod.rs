//! Move generation.
//!
//! Generation is two-phase. [`pseudo_legal_moves`] applies each piece kind's
//! movement shape to the grid; [`legal_moves_from`] then replays every
//! candidate on a copy of the board and keeps it only if the mover's king is
//! not attacked afterward.

mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{Color, Coord, Move, PieceKind};

pub use attacks::{
    is_king_attacked, is_square_attacked, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS,
    QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// A list of moves with a fixed maximum capacity.
///
/// Chess positions have at most 218 legal moves, so we use a fixed-size
/// array to avoid heap allocations during move generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves the list can hold.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Iterates over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }

    /// Returns the destination squares in generation order.
    pub fn destinations(&self) -> Vec<Coord> {
        self.iter().map(|m| m.to).collect()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Appends the pseudo-legal moves of the piece on `from` to `moves`.
///
/// Does nothing if `from` is empty. Moves keep their own king's safety
/// unchecked; see [`legal_moves_from`].
pub fn pseudo_legal_moves(board: &Board, from: Coord, moves: &mut MoveList) {
    let Some(piece) = board.get(from) else {
        return;
    };
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, moves),
        PieceKind::Knight => generate_step_moves(board, from, piece.color, &KNIGHT_OFFSETS, moves),
        PieceKind::Bishop => generate_ray_moves(board, from, piece.color, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => generate_ray_moves(board, from, piece.color, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => generate_ray_moves(board, from, piece.color, &QUEEN_DIRECTIONS, moves),
        PieceKind::King => generate_step_moves(board, from, piece.color, &KING_OFFSETS, moves),
    }
}

/// Generates the legal moves of the piece on `from`.
pub fn legal_moves_from(board: &Board, from: Coord) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };
    pseudo_legal_moves(board, from, &mut moves);
    moves.retain(|m| keeps_king_safe(board, m, piece.color));
    moves
}

/// Generates every legal move of one color, scanning the board row by row.
pub fn legal_moves_for_color(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, _) in board.pieces_of(color) {
        for m in &legal_moves_from(board, from) {
            moves.push(*m);
        }
    }
    moves
}

/// Returns true if playing `m` leaves `color`'s king unattacked.
fn keeps_king_safe(board: &Board, m: &Move, color: Color) -> bool {
    let mut simulated = *board;
    simulated.relocate(m.from, m.to);
    match simulated.king_square(color) {
        Some(king_sq) => !is_square_attacked(&simulated, king_sq, color.opposite()),
        None => false,
    }
}

/// Pushes a move onto `to`, recording its occupant as the capture.
#[inline]
fn push_move(board: &Board, from: Coord, to: Coord, moves: &mut MoveList) {
    moves.push(Move::new(from, to, board.get(to)));
}

/// Returns true if `to` is empty or holds a piece of the other color.
#[inline]
fn is_enterable(board: &Board, to: Coord, color: Color) -> bool {
    board.get(to).map_or(true, |target| target.color != color)
}

/// Generates pawn pushes, the double push from the start row, and diagonal captures.
fn generate_pawn_moves(board: &Board, from: Coord, color: Color, moves: &mut MoveList) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            push_move(board, from, one, moves);

            if from.row() == color.pawn_rank() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        push_move(board, from, two, moves);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.get(to).is_some_and(|target| target.color != color) {
                push_move(board, from, to, moves);
            }
        }
    }
}

/// Generates single-step moves (knight jumps, king steps).
fn generate_step_moves(
    board: &Board,
    from: Coord,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if is_enterable(board, to, color) {
                push_move(board, from, to, moves);
            }
        }
    }
}

/// Generates sliding moves along each direction until the edge or a blocker.
fn generate_ray_moves(
    board: &Board,
    from: Coord,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);
        while let Some(to) = current {
            match board.get(to) {
                None => push_move(board, from, to, moves),
                Some(target) => {
                    if target.color != color {
                        push_move(board, from, to, moves);
                    }
                    break;
                }
            }
            current = to.offset(d_row, d_col);
        }
    }
}
