//! Chess position representation.

use chess_core::{Color, Coord, Move, Piece};

use crate::movegen::{is_king_attacked, legal_moves_for_color, legal_moves_from, MoveList};
use crate::{Board, GameState};

/// Complete chess position state.
///
/// A `Position` advances exactly one ply per completed selection pair: first
/// [`select`](Position::select) one of the mover's pieces, then one of its
/// legal destinations. Look-ahead works on clones; no undo is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece placement.
    board: Board,

    /// The side to move.
    side_to_move: Color,

    /// Currently selected square, if any.
    selected: Option<Coord>,

    /// Legal destinations of the selected piece.
    valid_moves: Vec<Coord>,

    /// Executed moves, oldest first.
    history: Vec<Move>,

    /// Pieces taken, indexed by the capturing color.
    captured: [Vec<Piece>; 2],
}

impl Position {
    /// Creates the standard starting position with White to move.
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    /// Creates a position from explicit placements.
    ///
    /// Each color must have exactly one king.
    pub fn from_pieces<I>(pieces: I, side_to_move: Color) -> Self
    where
        I: IntoIterator<Item = (Coord, Piece)>,
    {
        Self::with_board(Board::from_pieces(pieces), side_to_move)
    }

    fn with_board(board: Board, side_to_move: Color) -> Self {
        debug_assert!(
            board.has_both_kings(),
            "position requires exactly one king per color:{:?}",
            board
        );
        debug_assert!(
            !is_king_attacked(&board, side_to_move.opposite()),
            "side not to move is in check:{:?}",
            board
        );
        Position {
            board,
            side_to_move,
            selected: None,
            valid_moves: Vec::new(),
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Returns the piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.side_to_move
    }

    /// Returns the selected square, if any.
    #[inline]
    pub fn selected_square(&self) -> Option<Coord> {
        self.selected
    }

    /// Returns the legal destinations of the selected piece.
    #[inline]
    pub fn valid_moves(&self) -> &[Coord] {
        &self.valid_moves
    }

    /// Returns the executed moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the pieces taken by the given color.
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Handles a square pick from the player.
    ///
    /// Picking one of the mover's pieces selects it. Picking a legal
    /// destination of the current selection plays the move. Anything else,
    /// including coordinates off the board, is ignored.
    pub fn select(&mut self, row: i32, col: i32) {
        let Some(coord) = Coord::from_signed(row, col) else {
            return;
        };

        if self
            .board
            .get(coord)
            .is_some_and(|piece| piece.color == self.side_to_move)
        {
            self.selected = Some(coord);
            self.valid_moves = self.legal_destinations(coord);
        } else if let Some(from) = self.selected {
            if self.valid_moves.contains(&coord) {
                self.execute(from, coord);
            }
        }
    }

    /// Replays `m` through the selection protocol.
    ///
    /// Returns true if the ply was committed. A move that is not legal for
    /// the side to move is rejected without touching the position, including
    /// any pending selection.
    pub fn play(&mut self, m: Move) -> bool {
        if !self.is_legal_move(m.from, m.to) {
            return false;
        }
        let plies = self.history.len();
        self.select(i32::from(m.from.row()), i32::from(m.from.col()));
        self.select(i32::from(m.to.row()), i32::from(m.to.col()));
        self.history.len() > plies
    }

    /// Moves the piece, records the capture and the move, and passes the turn.
    fn execute(&mut self, from: Coord, to: Coord) {
        let mover = self.side_to_move;
        let captured = self.board.relocate(from, to);
        if let Some(piece) = captured {
            self.captured[mover.index()].push(piece);
        }
        let m = Move::new(from, to, captured);
        tracing::trace!(%mover, mv = %m, capture = captured.is_some(), "ply executed");
        self.history.push(m);
        self.side_to_move = mover.opposite();
        self.selected = None;
        self.valid_moves.clear();
    }

    /// Returns the legal destinations of whatever piece stands on `coord`.
    pub fn legal_destinations(&self, coord: Coord) -> Vec<Coord> {
        legal_moves_from(&self.board, coord).destinations()
    }

    /// Returns true if the side to move may play a piece from `from` to `to`.
    pub fn is_legal_move(&self, from: Coord, to: Coord) -> bool {
        match self.board.get(from) {
            Some(piece) if piece.color == self.side_to_move => {
                legal_moves_from(&self.board, from).iter().any(|m| m.to == to)
            }
            _ => false,
        }
    }

    /// Returns every legal move of `color`, in board-scan order.
    pub fn possible_moves_for_color(&self, color: Color) -> MoveList {
        legal_moves_for_color(&self.board, color)
    }

    /// Returns every legal move of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.possible_moves_for_color(self.side_to_move)
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Coord> {
        self.board.king_square(color)
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.possible_moves_for_color(color).is_empty()
    }

    /// Returns a snapshot of the state for display.
    pub fn game_state(&self) -> GameState {
        let us = self.side_to_move;
        GameState {
            current_player: us,
            selected_square: self.selected,
            valid_moves: self.valid_moves.clone(),
            move_history: self.history.clone(),
            captured_by_white: self.captured[Color::White.index()].clone(),
            captured_by_black: self.captured[Color::Black.index()].clone(),
            is_check: self.is_in_check(us),
            is_checkmate: self.is_in_checkmate(us),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
