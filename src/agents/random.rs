use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::game::Board;
use crate::search::{SearchResult, DRAW};

/// Plays a uniformly random valid column.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn step(&self, board: &Board) -> SearchResult {
        let mut rng = SmallRng::from_entropy();
        let column = if board.is_terminal() {
            None
        } else {
            board.valid_columns().choose(&mut rng).copied()
        };
        SearchResult {
            column,
            score: DRAW,
        }
    }
}
