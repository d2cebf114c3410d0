//! Mailbox board representation.

use chess_core::{Color, Coord, Piece, PieceKind, BOARD_SIZE};
use std::fmt;

/// Raw grid type: `grid[row][col]`.
pub type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// An 8×8 grid of optional pieces.
///
/// `Board` is `Copy`: look-ahead works on private copies and never shares a
/// mutable grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Grid,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates the standard starting array.
    ///
    /// White's back rank is row 7 with pawns on row 6; Black's back rank is
    /// row 0 with pawns on row 1.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_rank() as usize;
            for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Creates a board from explicit placements. Later entries overwrite earlier ones.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Coord, Piece)>,
    {
        let mut board = Board::empty();
        for (coord, piece) in pieces {
            board.set(coord, Some(piece));
        }
        board
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Piece> {
        self.squares[coord.row() as usize][coord.col() as usize]
    }

    /// Replaces the occupant of a square.
    #[inline]
    pub fn set(&mut self, coord: Coord, piece: Option<Piece>) {
        self.squares[coord.row() as usize][coord.col() as usize] = piece;
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Returns the underlying grid for rendering.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.squares
    }

    /// Iterates over all occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |coord| self.get(coord).map(|piece| (coord, piece)))
    }

    /// Iterates over the squares occupied by one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Counts the pieces of a given kind and color.
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces()
            .filter(|(_, piece)| *piece == Piece::new(kind, color))
            .count()
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Coord> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(coord, _)| coord)
    }

    /// Moves the occupant of `from` onto `to`, returning whatever stood on `to`.
    ///
    /// The source square must be occupied.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let piece = self.get(from);
        debug_assert!(piece.is_some(), "no piece on source square {}", from);
        let captured = self.get(to);
        self.set(to, piece);
        self.set(from, None);
        captured
    }

    /// Returns true if each color has exactly one king.
    pub fn has_both_kings(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.count(PieceKind::King, color) == 1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::ops::Index<Coord> for Board {
    type Output = Option<Piece>;

    #[inline]
    fn index(&self, coord: Coord) -> &Self::Output {
        &self.squares[coord.row() as usize][coord.col() as usize]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in &self.squares {
            for square in row {
                let c = square.map_or('.', |piece| piece.to_char());
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    #[test]
    fn standard_piece_counts() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        for color in Color::ALL {
            assert_eq!(board.count(PieceKind::Pawn, color), 8);
            assert_eq!(board.count(PieceKind::Rook, color), 2);
            assert_eq!(board.count(PieceKind::Knight, color), 2);
            assert_eq!(board.count(PieceKind::Bishop, color), 2);
            assert_eq!(board.count(PieceKind::Queen, color), 1);
            assert_eq!(board.count(PieceKind::King, color), 1);
        }
    }

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(
            board.get(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.king_square(Color::White), Coord::new(7, 4));
        assert_eq!(board.king_square(Color::Black), Coord::new(0, 4));
        assert!(board.is_empty(sq("e4")));
        assert!(board.has_both_kings());
    }

    #[test]
    fn relocate_returns_captured() {
        let mut board = Board::standard();
        assert_eq!(board.relocate(sq("e2"), sq("e4")), None);
        let captured = board.relocate(sq("d8"), sq("d2"));
        assert_eq!(captured, Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(board.is_empty(sq("d8")));
        assert_eq!(
            board[sq("d2")],
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "no piece on source square")]
    fn relocate_from_empty_square_is_a_contract_violation() {
        let mut board = Board::standard();
        board.relocate(sq("e4"), sq("e5"));
    }

    #[test]
    fn pieces_of_scans_row_major() {
        let board = Board::standard();
        let first = board.pieces_of(Color::White).next().unwrap();
        assert_eq!(first.0, sq("a2"));
        let first_black = board.pieces_of(Color::Black).next().unwrap();
        assert_eq!(first_black.0, sq("a8"));
    }

    #[test]
    fn missing_king_detected() {
        let board = Board::from_pieces([(
            sq("e1"),
            Piece::new(PieceKind::King, Color::White),
        )]);
        assert!(!board.has_both_kings());
    }

    #[test]
    fn debug_draws_grid() {
        let text = format!("{:?}", Board::standard());
        assert!(text.contains("rnbqkbnr"));
        assert!(text.contains("RNBQKBNR"));
        assert!(text.contains("........"));
    }
}
