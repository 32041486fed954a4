use std::fmt::{self, Debug};

use rand::Rng;

use super::{Board, Outcome, Piece};
use crate::error::MoveError;

/// A running match as seen by a driver.
///
/// Holds the authoritative board and applies the moves of both sides in
/// turn. Search code never touches it, agents only see [`Game::perspective`].
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    /// Side to move next.
    pub turn: Piece,
    /// Played columns in order.
    pub moves: Vec<usize>,
}

impl Game {
    pub fn new(first: Piece) -> Game {
        assert_ne!(first, Piece::Empty, "Empty cannot move");
        Game {
            board: Board::new(),
            turn: first,
            moves: Vec::new(),
        }
    }

    /// New game where a coin flip decides who starts.
    pub fn random(rng: &mut impl Rng) -> Game {
        Game::new(if rng.gen() { Piece::Player } else { Piece::Ai })
    }

    /// Clears the board and lets `first` start.
    pub fn reset(&mut self, first: Piece) {
        *self = Game::new(first);
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Plays `col` for the side to move and passes the turn.
    pub fn step(&mut self, col: usize) -> Result<Outcome, MoveError> {
        if self.outcome() != Outcome::None {
            return Err(MoveError::GameOver);
        }
        self.board.play(col, self.turn)?;
        self.moves.push(col);
        self.turn = self.turn.opponent();
        Ok(self.outcome())
    }

    /// The board with the side to move as [`Piece::Ai`], which is the side
    /// the search maximizes.
    pub fn perspective(&self) -> Board {
        match self.turn {
            Piece::Player => self.board.swapped(),
            _ => self.board.clone(),
        }
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.board)?;
        write!(f, "turn: {:?}, moves: {:?}", self.turn, self.moves)
    }
}
