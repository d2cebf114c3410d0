//! Core types for chess.
//!
//! This crate provides the fundamental value types shared by the engine,
//! the search and the front end:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Coord`] for board coordinates (row/column grid addressing)
//! - [`Move`] for a single ply, including the captured piece

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{Coord, BOARD_SIZE};
