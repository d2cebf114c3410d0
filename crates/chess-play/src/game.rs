//! Game controller: one position, an optional computer opponent, and the
//! turn scheduling between them.

use chess_ai::{SearchParams, SearchStats, Searcher};
use chess_core::{Color, Move};
use chess_engine::Position;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Errors from asking the computer to move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not the engine's turn")]
    NotEngineTurn,
    #[error("no engine is playing in this game")]
    NoEngine,
    #[error("the engine found no legal move")]
    NoLegalMove,
}

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    /// The given color is in check but can still move.
    Check(Color),
    Checkmate { winner: Color },
    /// The given color has no legal move and is not in check. The game stops
    /// without a result.
    NoMoves(Color),
}

impl Status {
    /// Computes the status of `position` for its side to move.
    pub fn of(position: &Position) -> Status {
        let side = position.current_player();
        let in_check = position.is_in_check(side);
        let has_moves = !position.legal_moves().is_empty();
        match (in_check, has_moves) {
            (true, false) => Status::Checkmate {
                winner: side.opposite(),
            },
            (true, true) => Status::Check(side),
            (false, false) => Status::NoMoves(side),
            (false, true) => Status::Ongoing,
        }
    }

    /// Returns true once no further move can be made.
    pub fn is_over(self) -> bool {
        matches!(self, Status::Checkmate { .. } | Status::NoMoves(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => write!(f, "in progress"),
            Status::Check(color) => write!(f, "{} is in check", color),
            Status::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            Status::NoMoves(color) => write!(f, "{} has no legal moves", color),
        }
    }
}

/// A game between a human and the computer, or between two humans.
pub struct Game<R: Rng> {
    position: Position,
    engine: Option<Searcher<R>>,
    status: Status,
}

impl<R: Rng> Game<R> {
    /// Starts a game from the standard position.
    ///
    /// `engine_color` is the side the computer plays; `None` leaves both
    /// sides to humans.
    pub fn new(params: SearchParams, engine_color: Option<Color>, rng: R) -> Self {
        Self::from_position(Position::new(), params, engine_color, rng)
    }

    /// Continues a game from an arbitrary position.
    pub fn from_position(
        position: Position,
        params: SearchParams,
        engine_color: Option<Color>,
        rng: R,
    ) -> Self {
        let engine = engine_color.map(|color| Searcher::new(params, color, rng));
        let status = Status::of(&position);
        Game {
            position,
            engine,
            status,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn engine_color(&self) -> Option<Color> {
        self.engine.as_ref().map(|s| s.engine_color())
    }

    /// Counters from the engine's most recent search.
    pub fn last_search_stats(&self) -> Option<SearchStats> {
        self.engine.as_ref().map(|s| s.last_stats())
    }

    /// Returns true if the computer should move now.
    pub fn is_engine_turn(&self) -> bool {
        !self.status.is_over() && self.engine_color() == Some(self.position.current_player())
    }

    /// Forwards a square pick to the position.
    ///
    /// Picks are ignored once the game is over.
    pub fn select(&mut self, row: i32, col: i32) -> Status {
        if self.status.is_over() {
            return self.status;
        }
        let plies = self.position.history().len();
        self.position.select(row, col);
        if self.position.history().len() > plies {
            self.refresh_status();
        }
        self.status
    }

    /// Lets the computer search and play its move.
    pub fn play_engine_move(&mut self) -> Result<Move, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let searcher = self.engine.as_mut().ok_or(GameError::NoEngine)?;
        if searcher.engine_color() != self.position.current_player() {
            return Err(GameError::NotEngineTurn);
        }

        let m = searcher
            .find_best_move(&self.position)
            .ok_or(GameError::NoLegalMove)?;
        self.position
            .select(i32::from(m.from.row()), i32::from(m.from.col()));
        self.position
            .select(i32::from(m.to.row()), i32::from(m.to.col()));
        tracing::info!("Engine moved from {} to {}", m.from, m.to);
        self.refresh_status();
        Ok(m)
    }

    fn refresh_status(&mut self) {
        let status = Status::of(&self.position);
        if status != self.status {
            match status {
                Status::Checkmate { winner } => tracing::info!("CHECKMATE! {} wins!", winner),
                Status::Check(color) => tracing::info!("{} is in CHECK!", color),
                Status::NoMoves(color) => tracing::info!("{} has no legal moves", color),
                Status::Ongoing => {}
            }
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Coord, Piece};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    fn pick(game: &mut Game<StdRng>, name: &str) -> Status {
        let c = sq(name);
        game.select(i32::from(c.row()), i32::from(c.col()))
    }

    fn quick() -> SearchParams {
        SearchParams {
            depth: 2,
            jitter: 0.0,
        }
    }

    fn game(engine: Option<Color>) -> Game<StdRng> {
        Game::new(quick(), engine, StdRng::seed_from_u64(17))
    }

    #[test]
    fn new_game_is_ongoing() {
        let g = game(Some(Color::Black));
        assert_eq!(g.status(), Status::Ongoing);
        assert_eq!(g.engine_color(), Some(Color::Black));
        assert!(!g.is_engine_turn());
        assert_eq!(g.position().current_player(), Color::White);
    }

    #[test]
    fn engine_replies_after_human_move() {
        let mut g = game(Some(Color::Black));
        pick(&mut g, "e2");
        assert_eq!(pick(&mut g, "e4"), Status::Ongoing);
        assert!(g.is_engine_turn());

        let reply = g.play_engine_move().unwrap();
        assert_eq!(g.position().board().get(reply.from), None);
        assert_eq!(
            g.position().board().get(reply.to).map(|p| p.color),
            Some(Color::Black)
        );
        assert_eq!(g.position().current_player(), Color::White);
        assert_eq!(g.position().history().len(), 2);
        assert!(g.last_search_stats().unwrap().nodes > 0);
    }

    #[test]
    fn engine_refuses_out_of_turn() {
        let mut g = game(Some(Color::Black));
        assert_eq!(g.play_engine_move(), Err(GameError::NotEngineTurn));
    }

    #[test]
    fn two_player_game_has_no_engine() {
        let mut g = game(None);
        assert!(!g.is_engine_turn());
        assert_eq!(g.play_engine_move(), Err(GameError::NoEngine));
        assert_eq!(g.last_search_stats(), None);
    }

    #[test]
    fn engine_can_open_as_white() {
        let mut g = game(Some(Color::White));
        assert!(g.is_engine_turn());
        let m = g.play_engine_move().unwrap();
        assert_eq!(g.position().history(), &[m]);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut g = game(None);
        for name in ["f2", "f3", "e7", "e5", "g2", "g4", "d8"] {
            pick(&mut g, name);
        }
        assert_eq!(
            pick(&mut g, "h4"),
            Status::Checkmate {
                winner: Color::Black
            }
        );
        assert!(g.status().is_over());

        // Further picks are ignored.
        let before = g.position().clone();
        pick(&mut g, "e1");
        pick(&mut g, "f2");
        assert_eq!(g.position(), &before);
    }

    #[test]
    fn game_over_blocks_engine() {
        let mut g = game(Some(Color::White));
        // Drive the position by hand into fool's mate.
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            assert!(g.position.play(Move::quiet(sq(from), sq(to))));
        }
        g.refresh_status();
        assert_eq!(g.play_engine_move(), Err(GameError::GameOver));
        assert!(!g.is_engine_turn());
    }

    #[test]
    fn check_is_reported() {
        let position = Position::from_pieces(
            [
                (sq("e1"), Piece::from_char('K').unwrap()),
                (sq("a8"), Piece::from_char('k').unwrap()),
                (sq("d8"), Piece::from_char('r').unwrap()),
            ],
            Color::Black,
        );
        let mut g = Game::from_position(position, quick(), None, StdRng::seed_from_u64(1));
        pick(&mut g, "d8");
        assert_eq!(pick(&mut g, "e8"), Status::Check(Color::White));
        assert!(!g.status().is_over());
    }

    #[test]
    fn stalemate_is_no_moves() {
        let position = Position::from_pieces(
            [
                (sq("a8"), Piece::from_char('k').unwrap()),
                (sq("b6"), Piece::from_char('Q').unwrap()),
                (sq("h1"), Piece::from_char('K').unwrap()),
            ],
            Color::Black,
        );
        let mut g = Game::from_position(
            position,
            quick(),
            Some(Color::Black),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(g.status(), Status::NoMoves(Color::Black));
        assert!(!g.is_engine_turn());
        assert_eq!(g.play_engine_move(), Err(GameError::GameOver));
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Ongoing.to_string(), "in progress");
        assert_eq!(
            Status::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate, White wins"
        );
    }
}
