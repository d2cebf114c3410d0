//! Leaf counting (perft) for checking the move generator against published
//! node counts.
//!
//! Castling, en passant and promotion are never generated, so only positions
//! and depths where none of them can arise match the reference numbers.

use crate::Position;
use chess_core::Move;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    match depth {
        0 => 1,
        1 => position.legal_moves().len() as u64,
        _ => position
            .legal_moves()
            .iter()
            .map(|m| perft(&child(position, *m), depth - 1))
            .sum(),
    }
}

/// Leaf counts below each root move, keyed by the move's coordinate form and
/// sorted by it. The counts sum to `perft(position, depth)` for `depth >= 1`.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = position
        .legal_moves()
        .iter()
        .map(|m| {
            let nodes = perft(&child(position, *m), depth.saturating_sub(1));
            (m.to_coordinate(), nodes)
        })
        .collect();
    results.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    results
}

fn child(position: &Position, m: Move) -> Position {
    let mut next = position.clone();
    let played = next.play(m);
    debug_assert!(played, "generated move {} rejected", m);
    next
}
