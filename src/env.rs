use serde::{Deserialize, Serialize};

use crate::agents::Difficulty;
use crate::game::Board;
use crate::search::SearchResult;

pub const API_VERSION: &str = "1";

/// Body of `POST /move`.
///
/// The board is six rows, bottom row first, of seven cells each encoded as
/// `0` (empty), `1` (player) or `2` (computer). The computer is to move.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MoveRequest {
    pub board: Board,
    /// Overrides the search depth of the server configuration.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResponse {
    /// `null` if the game is already over.
    pub column: Option<usize>,
    pub score: i32,
}

impl From<SearchResult> for MoveResponse {
    fn from(result: SearchResult) -> Self {
        MoveResponse {
            column: result.column,
            score: result.score,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub apiversion: String,
    pub version: String,
    pub agent: String,
}

impl IndexResponse {
    pub fn new(apiversion: String, version: String, agent: String) -> IndexResponse {
        IndexResponse {
            apiversion,
            version,
            agent,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Piece;

    #[test]
    fn move_request() {
        let request: MoveRequest = serde_json::from_str(
            r#"{"board":[
                [1,2,2,2,1,0,0],
                [0,0,1,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0]
            ], "difficulty": "easy"}"#,
        )
        .unwrap();
        assert_eq!(request.board.get(0, 1), Piece::Ai);
        assert_eq!(request.board.get(1, 2), Piece::Player);
        assert_eq!(request.difficulty, Some(Difficulty::Easy));

        let board = serde_json::to_string(&Board::new()).unwrap();
        let request: MoveRequest =
            serde_json::from_str(&format!(r#"{{"board":{}}}"#, board)).unwrap();
        assert_eq!(request.board, Board::new());
        assert_eq!(request.difficulty, None);
    }

    #[test]
    fn move_response() {
        let response = MoveResponse::from(SearchResult::leaf(0));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"column":null,"score":0}"#
        );
        let response = MoveResponse::from(SearchResult {
            column: Some(3),
            score: 6,
        });
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"column":3,"score":6}"#
        );
    }
}
