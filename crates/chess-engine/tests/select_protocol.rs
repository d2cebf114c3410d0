//! Integration tests driving a game purely through square picks.

use chess_core::{Color, Coord, PieceKind};
use chess_engine::movegen::perft::{perft, perft_divide};
use chess_engine::Position;

fn pick(position: &mut Position, name: &str) {
    let c = Coord::from_algebraic(name).unwrap();
    position.select(i32::from(c.row()), i32::from(c.col()));
}

fn pick_all(position: &mut Position, names: &[&str]) {
    for name in names {
        pick(position, name);
    }
}

#[test]
fn scholars_mate_through_picks() {
    let mut position = Position::new();
    pick_all(
        &mut position,
        &[
            "e2", "e4", "e7", "e5", "f1", "c4", "b8", "c6", "d1", "h5", "g8", "f6", "h5", "f7",
        ],
    );

    assert_eq!(position.history().len(), 7);
    assert_eq!(position.current_player(), Color::Black);
    assert!(position.is_in_check(Color::Black));
    assert!(position.is_in_checkmate(Color::Black));

    let state = position.game_state();
    assert!(state.is_checkmate);
    assert_eq!(state.captured_by_white.len(), 1);
    assert_eq!(state.captured_by_white[0].kind, PieceKind::Pawn);
    assert_eq!(state.move_history.last().unwrap().to_coordinate(), "h5f7");
}

#[test]
fn king_escapes_check_only_with_legal_moves() {
    let mut position = Position::new();
    // 1. e4 f5 2. Qh5+ leaves Black in check; only g6 blocks.
    pick_all(&mut position, &["e2", "e4", "f7", "f5", "d1", "h5"]);
    assert!(position.is_in_check(Color::Black));
    assert!(!position.is_in_checkmate(Color::Black));

    let moves = position.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to_coordinate(), "g7g6");

    // Any other pick leaves the position untouched.
    let before = position.clone();
    pick_all(&mut position, &["e7", "e6"]);
    assert_eq!(position.history(), before.history());
    assert_eq!(position.current_player(), Color::Black);

    pick_all(&mut position, &["g7", "g6"]);
    assert!(!position.is_in_check(Color::Black));
    assert_eq!(position.current_player(), Color::White);
}

#[test]
fn move_counts_after_open_game() {
    let mut position = Position::new();
    pick_all(&mut position, &["e2", "e4", "e7", "e5"]);
    assert_eq!(position.legal_moves().len(), 29);
    assert_eq!(perft(&position, 1), 29);

    let divide = perft_divide(&position, 2);
    assert_eq!(divide.len(), 29);
    let total: u64 = divide.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&position, 2));
}
