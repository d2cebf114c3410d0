//! Move representation.

use crate::{Coord, Piece};
use std::fmt;

/// A single ply: one piece moving from one square to another.
///
/// `captured` records the occupant of the destination square before the move,
/// so it is `Some` exactly when the move is a capture.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Piece>,
}

impl Move {
    /// Creates a move, recording whatever occupied the destination.
    #[inline]
    pub const fn new(from: Coord, to: Coord, captured: Option<Piece>) -> Self {
        Move { from, to, captured }
    }

    /// Creates a quiet move onto an empty square.
    #[inline]
    pub const fn quiet(from: Coord, to: Coord) -> Self {
        Self::new(from, to, None)
    }

    /// Returns true if the move takes a piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move::quiet(Coord::ORIGIN, Coord::ORIGIN);

    /// Returns the coordinate form of the move (e.g., `"e2e4"`).
    pub fn to_coordinate(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(piece) => write!(f, "Move({}x{})", self.to_coordinate(), piece.to_char()),
            None => write!(f, "Move({})", self.to_coordinate()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    #[test]
    fn quiet_move() {
        let m = Move::quiet(sq("e2"), sq("e4"));
        assert_eq!(m.from, sq("e2"));
        assert_eq!(m.to, sq("e4"));
        assert!(!m.is_capture());
        assert_eq!(m.to_coordinate(), "e2e4");
    }

    #[test]
    fn capture_move() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let m = Move::new(sq("e4"), sq("d5"), Some(pawn));
        assert!(m.is_capture());
        assert_eq!(m.captured, Some(pawn));
    }

    #[test]
    fn captured_piece_is_part_of_identity() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_ne!(
            Move::quiet(sq("e4"), sq("d5")),
            Move::new(sq("e4"), sq("d5"), Some(pawn))
        );
    }

    #[test]
    fn move_debug_display() {
        let m = Move::quiet(sq("g1"), sq("f3"));
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");

        let queen = Piece::new(PieceKind::Queen, Color::White);
        let c = Move::new(sq("h4"), sq("e1"), Some(queen));
        assert_eq!(format!("{:?}", c), "Move(h4e1xQ)");
    }
}
