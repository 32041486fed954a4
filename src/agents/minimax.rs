use std::time::Instant;

use log::debug;
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::Board;
use crate::search::{search, SearchResult, TieBreak, WindowHeuristic};

/// Predefined search depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Depth limited alpha-beta search with the window heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MinimaxAgent {
    pub depth: usize,
    pub tie_break: TieBreak,
    pub heuristic: WindowHeuristic,
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self {
            depth: Difficulty::Hard.depth(),
            tie_break: TieBreak::default(),
            heuristic: WindowHeuristic::default(),
        }
    }
}

impl From<Difficulty> for MinimaxAgent {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            ..Self::default()
        }
    }
}

impl MinimaxAgent {
    pub fn step(&self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let result = match self.tie_break {
            TieBreak::First => search(board, self.depth, &self.heuristic, None),
            TieBreak::Random => {
                let mut rng = SmallRng::from_entropy();
                search(board, self.depth, &self.heuristic, Some(&mut rng))
            }
        };
        debug!(
            ">>> alphabeta {} {:?}ms {:?}",
            self.depth,
            start.elapsed().as_millis(),
            result
        );
        result
    }
}
