//! Chess position with mailbox representation.
//!
//! This crate provides:
//! - [`Board`] - 8×8 grid of optional pieces with value semantics
//! - [`Position`] - full game state driven by the two-step selection protocol
//! - [`GameState`] - read-only snapshot for a presentation layer
//! - Pseudo-legal and legal move generation, check and checkmate detection
//!
//! # Architecture
//!
//! Move generation is two-phase: every piece kind first produces its
//! pseudo-legal moves on the grid, then each candidate is replayed on a copy
//! of the board and dropped if it leaves the mover's king attacked. Castling,
//! en passant and promotion are not generated.
//!
//! # Example
//!
//! ```
//! use chess_core::Color;
//! use chess_engine::Position;
//!
//! let mut position = Position::new();
//! println!(
//!     "Legal moves from the starting position: {}",
//!     position.possible_moves_for_color(Color::White).len()
//! );
//!
//! // e2-e4: pick the pawn, then its destination.
//! position.select(6, 4);
//! position.select(4, 4);
//! assert_eq!(position.current_player(), Color::Black);
//! ```

mod board;
pub mod movegen;
mod position;
mod state;

pub use board::{Board, Grid};
pub use movegen::{
    is_king_attacked, is_square_attacked, legal_moves_for_color, legal_moves_from,
    pseudo_legal_moves, MoveList,
};
pub use position::Position;
pub use state::GameState;
