use std::fmt;
use std::str::FromStr;

mod minimax;
pub use minimax::*;
mod random;
pub use random::*;

use log::{error, info};

use crate::game::{Board, Game, Outcome, Piece, COLUMNS};
use crate::search::{column_scores, SearchResult, WindowHeuristic};

/// Configurable move producer, parsed from JSON.
///
/// ```json
/// {"Minimax": {"depth": 4, "tie_break": "First"}}
/// {"Random": null}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Minimax(MinimaxAgent),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::Minimax(MinimaxAgent::default())
    }
}

impl Agent {
    /// Chooses a move for [`crate::game::Piece::Ai`].
    /// Use [`crate::game::Game::perspective`] to play the other side.
    pub fn step(&self, board: &Board) -> SearchResult {
        match self {
            Agent::Minimax(agent) => agent.step(board),
            Agent::Random(agent) => agent.step(board),
        }
    }
}

impl Agent {
    /// Minimax value of every root column, searched with the depth and
    /// weights of this agent unless `depth` overrides it.
    pub fn column_scores(&self, board: &Board, depth: Option<usize>) -> [Option<i32>; COLUMNS] {
        match self {
            Agent::Minimax(agent) => {
                let depth = depth.unwrap_or(agent.depth);
                column_scores(board, depth, &agent.heuristic)
            }
            Agent::Random(_) => column_scores(
                board,
                depth.unwrap_or(Difficulty::Hard.depth()),
                &WindowHeuristic::default(),
            ),
        }
    }
}

/// Plays a game between two agents, `ai` plays the [`Piece::Ai`] side.
///
/// Returns [`Outcome::None`] if an agent fails to produce a legal move.
pub fn play_game(ai: &Agent, player: &Agent, first: Piece, verbose: bool) -> Outcome {
    let mut game = Game::new(first);

    while game.outcome() == Outcome::None {
        let agent = if game.turn == Piece::Ai { ai } else { player };
        let Some(col) = agent.step(&game.perspective()).column else {
            error!("no move for {:?}", game.turn);
            break;
        };
        if let Err(e) = game.step(col) {
            error!("invalid move {}: {}", col, e);
            break;
        }
        if verbose {
            info!("{:?}", game);
        }
    }
    game.outcome()
}

impl From<Difficulty> for Agent {
    fn from(difficulty: Difficulty) -> Self {
        Self::Minimax(difficulty.into())
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
