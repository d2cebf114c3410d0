//! Fixed-depth minimax search with alpha-beta pruning.

use chess_core::{Color, Move};
use chess_engine::Position;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::{capture_value, evaluate};

/// Weight of the captured piece's value in a root move's score.
const CAPTURE_WEIGHT: f64 = 0.5;

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Plies searched from the root, the root move included.
    pub depth: u32,
    /// Upper bound of the uniform noise added to each root score.
    /// Zero, or a value that is not finite, disables it.
    pub jitter: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            jitter: 0.1,
        }
    }
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to [`Searcher::minimax`].
    pub nodes: u64,
    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,
}

/// Chooses moves for one side.
pub struct Searcher<R: Rng> {
    params: SearchParams,
    engine_color: Color,
    rng: R,
    stats: SearchStats,
}

impl<R: Rng> Searcher<R> {
    pub fn new(params: SearchParams, engine_color: Color, rng: R) -> Self {
        Searcher {
            params,
            engine_color,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    pub fn engine_color(&self) -> Color {
        self.engine_color
    }

    /// Counters from the last call to [`find_best_move`](Self::find_best_move).
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks a move for the engine color.
    ///
    /// Returns `None` when the engine has no legal move, and also when it is
    /// not the engine's turn in `position`. The position itself is never
    /// modified.
    pub fn find_best_move(&mut self, position: &Position) -> Option<Move> {
        self.stats = SearchStats::default();
        if position.current_player() != self.engine_color {
            return None;
        }

        let moves = position.possible_moves_for_color(self.engine_color);
        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves: Vec<Move> = Vec::new();

        for m in &moves {
            let mut child = position.clone();
            let played = child.play(*m);
            debug_assert!(played, "root move {} not playable", m);

            let mut score = self.minimax(
                &child,
                self.params.depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
            );
            if let Some(piece) = m.captured {
                score += CAPTURE_WEIGHT * capture_value(piece.kind);
            }
            if self.params.jitter > 0.0 && self.params.jitter.is_finite() {
                score += self.rng.gen_range(0.0..self.params.jitter);
            }

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(*m);
            } else if score == best_score {
                best_moves.push(*m);
            }
        }

        let chosen = best_moves.choose(&mut self.rng).copied();
        tracing::debug!(
            engine = %self.engine_color,
            depth = self.params.depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            candidates = best_moves.len(),
            score = best_score,
            "search finished"
        );
        chosen
    }

    /// Scores `position` by alternating best replies down to `depth` plies.
    ///
    /// `maximizing` selects whose moves are expanded: the engine's when true,
    /// the opponent's otherwise, so it must agree with the side to move in
    /// `position`. Nodes without legal moves are scored statically.
    pub fn minimax(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.stats.nodes += 1;
        if depth == 0 {
            return evaluate(position, self.engine_color);
        }

        let side = if maximizing {
            self.engine_color
        } else {
            self.engine_color.opposite()
        };
        let moves = position.possible_moves_for_color(side);
        if moves.is_empty() {
            return evaluate(position, self.engine_color);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for m in &moves {
            let mut child = position.clone();
            let played = child.play(*m);
            debug_assert!(played, "{} is not to move", side);
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
