use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Content of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Piece {
    #[default]
    Empty,
    /// The human side, minimizing in the search.
    Player,
    /// The computer side, maximizing in the search.
    Ai,
}

impl Piece {
    /// The other side. `Empty` stays `Empty`.
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Empty => Piece::Empty,
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Player => 'x',
            Piece::Ai => 'o',
        }
    }

    pub fn from_symbol(c: char) -> Result<Piece, BoardError> {
        match c {
            '.' | '_' => Ok(Piece::Empty),
            'x' | 'X' => Ok(Piece::Player),
            'o' | 'O' => Ok(Piece::Ai),
            c => Err(BoardError::Symbol(c)),
        }
    }
}

impl From<Piece> for u8 {
    fn from(p: Piece) -> u8 {
        p as u8
    }
}

impl TryFrom<u8> for Piece {
    type Error = BoardError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Piece::Empty),
            1 => Ok(Piece::Player),
            2 => Ok(Piece::Ai),
            v => Err(BoardError::Value(v)),
        }
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
