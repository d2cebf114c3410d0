//! Computer opponent for [`chess_engine::Position`].
//!
//! [`Searcher`] runs a fixed-depth minimax with alpha-beta pruning over
//! clones of the live position, scoring leaves with [`evaluate`]. Root moves
//! get a bonus for the piece they capture plus a small random jitter, and
//! ties are broken uniformly at random, so the injected RNG fully determines
//! which of several equal moves is played.
//!
//! # Example
//!
//! ```
//! use chess_ai::{SearchParams, Searcher};
//! use chess_core::Color;
//! use chess_engine::Position;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut position = Position::new();
//! let opening = position.legal_moves()[0];
//! assert!(position.play(opening));
//!
//! let params = SearchParams { depth: 2, jitter: 0.0 };
//! let mut searcher = Searcher::new(params, Color::Black, StdRng::seed_from_u64(7));
//! let reply = searcher.find_best_move(&position).expect("black has moves");
//! assert!(position.is_legal_move(reply.from, reply.to));
//! ```

mod eval;
mod search;

pub use eval::{capture_value, evaluate, material_value};
pub use search::{SearchParams, SearchStats, Searcher};
