//! Engine-versus-engine games through the public API.

use chess_ai::{evaluate, SearchParams, Searcher};
use chess_core::Color;
use chess_engine::Position;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn play_game(seed: u64, plies: usize) -> Position {
    let params = SearchParams {
        depth: 2,
        jitter: 0.1,
    };
    let mut white = Searcher::new(params, Color::White, StdRng::seed_from_u64(seed));
    let mut black = Searcher::new(params, Color::Black, StdRng::seed_from_u64(seed + 1));
    let mut position = Position::new();

    for _ in 0..plies {
        let searcher = match position.current_player() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(m) = searcher.find_best_move(&position) else {
            break;
        };
        assert!(position.is_legal_move(m.from, m.to), "illegal move {}", m);
        assert!(position.play(m));
    }
    position
}

#[test]
fn self_play_stays_legal() {
    let position = play_game(3, 12);
    assert!(!position.history().is_empty());
    for color in [Color::White, Color::Black] {
        assert!(position.king_square(color).is_some());
    }
}

#[test]
fn self_play_is_reproducible() {
    let a = play_game(21, 8);
    let b = play_game(21, 8);
    assert_eq!(a.history(), b.history());
    assert_eq!(evaluate(&a, Color::White), evaluate(&b, Color::White));
}
