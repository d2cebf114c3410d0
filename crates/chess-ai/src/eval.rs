//! Static evaluation.

use chess_core::{Color, Coord, PieceKind};
use chess_engine::Position;

/// Bonus for a minor piece that has left its two home rows.
const DEVELOPED_BONUS: f64 = 20.0;

/// Bonus for a rook on a file without pawns of either color.
const OPEN_FILE_BONUS: f64 = 30.0;

/// Material value used by the static evaluation.
pub fn material_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 100.0,
        PieceKind::Knight => 300.0,
        PieceKind::Bishop => 325.0,
        PieceKind::Rook => 500.0,
        PieceKind::Queen => 900.0,
        PieceKind::King => 10000.0,
    }
}

/// Value of a captured piece, used for the root capture bonus.
///
/// Bishops and knights count the same here.
pub fn capture_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Bishop => 300.0,
        other => material_value(other),
    }
}

/// Scores `position` from `engine_color`'s point of view.
///
/// Every piece contributes its material value plus a placement bonus; the
/// total is added for the engine's pieces and subtracted for the opponent's.
pub fn evaluate(position: &Position, engine_color: Color) -> f64 {
    let board = position.board();
    let mut score = 0.0;
    for (coord, piece) in board.pieces() {
        let value = material_value(piece.kind) + placement_bonus(position, coord, piece.kind, piece.color);
        if piece.color == engine_color {
            score += value;
        } else {
            score -= value;
        }
    }
    score
}

fn placement_bonus(position: &Position, coord: Coord, kind: PieceKind, color: Color) -> f64 {
    let row = f64::from(coord.row());
    let col = f64::from(coord.col());
    match kind {
        PieceKind::Pawn => {
            let advanced = match color {
                Color::Black => row,
                Color::White => 7.0 - row,
            };
            advanced * 3.0
        }
        PieceKind::Knight | PieceKind::Bishop => {
            let centrality = 7.0 - ((3.5 - row).abs() + (3.5 - col).abs());
            let developed = match color {
                Color::Black => coord.row() > 1,
                Color::White => coord.row() < 6,
            };
            centrality * 3.0 + if developed { DEVELOPED_BONUS } else { 0.0 }
        }
        PieceKind::Rook => {
            let file_has_pawn = (0..8).filter_map(|r| Coord::new(r, coord.col())).any(|c| {
                position
                    .board()
                    .get(c)
                    .is_some_and(|p| p.kind == PieceKind::Pawn)
            });
            if file_has_pawn {
                0.0
            } else {
                OPEN_FILE_BONUS
            }
        }
        PieceKind::Queen | PieceKind::King => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Move, Piece};

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    fn position(pieces: &[(&str, char)], side_to_move: Color) -> Position {
        Position::from_pieces(
            pieces
                .iter()
                .map(|(name, c)| (sq(name), Piece::from_char(*c).unwrap())),
            side_to_move,
        )
    }

    #[test]
    fn start_position_is_balanced() {
        let pos = Position::new();
        assert_eq!(evaluate(&pos, Color::White), 0.0);
        assert_eq!(evaluate(&pos, Color::Black), 0.0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut pos = Position::new();
        assert!(pos.play(Move::quiet(sq("g1"), sq("f3"))));
        assert_eq!(evaluate(&pos, Color::White), -evaluate(&pos, Color::Black));
    }

    #[test]
    fn advanced_pawn_scores_three_per_row() {
        let mut pos = Position::new();
        assert!(pos.play(Move::quiet(sq("e2"), sq("e4"))));
        // Two rows further than the black pawns.
        assert_eq!(evaluate(&pos, Color::White), 6.0);
        assert_eq!(evaluate(&pos, Color::Black), -6.0);
    }

    #[test]
    fn centralized_developed_knight() {
        let pos = position(&[("e1", 'K'), ("e8", 'k'), ("d4", 'N')], Color::White);
        // Knight 300, centrality (7 - 1) * 3, development 20; kings cancel.
        assert_eq!(evaluate(&pos, Color::White), 300.0 + 18.0 + 20.0);
    }

    #[test]
    fn rook_on_open_file() {
        let open = position(&[("e1", 'K'), ("e8", 'k'), ("a1", 'R')], Color::White);
        assert_eq!(evaluate(&open, Color::White), 530.0);

        // A pawn of either color closes the file.
        let closed = position(
            &[("e1", 'K'), ("e8", 'k'), ("a1", 'R'), ("a6", 'p')],
            Color::White,
        );
        // Black pawn on row 2 scores 100 + 6.
        assert_eq!(evaluate(&closed, Color::White), 500.0 - 106.0);
    }

    #[test]
    fn capture_values_flatten_minor_pieces() {
        assert_eq!(capture_value(PieceKind::Bishop), 300.0);
        assert_eq!(capture_value(PieceKind::Knight), 300.0);
        assert_eq!(material_value(PieceKind::Bishop), 325.0);
        assert_eq!(capture_value(PieceKind::King), 10000.0);
    }
}
