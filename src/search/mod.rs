mod heuristic;
pub use heuristic::*;
mod alphabeta;
pub use alphabeta::*;
mod minimax;
pub use minimax::*;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::game::{Board, Outcome, Piece};

pub const WIN: i32 = 1_000_000;
pub const DRAW: i32 = 0;
pub const LOSS: i32 = -1_000_000;

/// A heuristic that evaluates the board at the leafs of a tree search.
///
/// The score is always from the computer's ([`crate::game::Piece::Ai`])
/// perspective, independent of the side to move.
pub trait Heuristic: Debug + Send + Sync {
    fn eval(&self, board: &Board) -> i32;
}

/// Column chosen by a search together with its minimax value.
///
/// The column is only absent at leafs, i.e. for terminal boards or when the
/// depth is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    pub fn leaf(score: i32) -> SearchResult {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// How the root column is picked among equally good moves.
///
/// Only the root move is affected, inner plies always keep the first best
/// column in ascending order as their scores are all that matters there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Deterministic, the first best column in ascending order.
    First,
    /// Uniformly random among all root columns with the best score.
    #[default]
    Random,
}

/// Result of a node that is not expanded: terminal boards and depth zero.
fn leaf(board: &Board, depth: usize, heuristic: &dyn Heuristic) -> Option<SearchResult> {
    match board.outcome() {
        Outcome::Winner(Piece::Ai) => Some(SearchResult::leaf(WIN)),
        Outcome::Winner(_) => Some(SearchResult::leaf(LOSS)),
        Outcome::Draw => Some(SearchResult::leaf(DRAW)),
        Outcome::None if depth == 0 => Some(SearchResult::leaf(heuristic.eval(board))),
        Outcome::None => None,
    }
}
