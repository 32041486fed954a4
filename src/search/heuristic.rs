use serde::{Deserialize, Serialize};

use super::Heuristic;
use crate::game::{Board, Piece, CENTER, COLUMNS, ROWS, WINDOW};

/// Positional heuristic that scores every line of four cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowHeuristic {
    /// Per own disc in the middle column.
    pub center: i32,
    /// Four own discs.
    pub four: i32,
    /// Three own discs and one empty cell.
    pub three: i32,
    /// Two own discs and two empty cells.
    pub two: i32,
    /// Added when the opponent has three discs and one empty cell.
    pub opponent_three: i32,
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        Self {
            center: 3,
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
        }
    }
}

impl WindowHeuristic {
    /// Score of a single window for `piece`.
    pub fn evaluate_window(&self, window: &[Piece; WINDOW], piece: Piece) -> i32 {
        let count = |p: Piece| window.iter().filter(|&&c| c == p).count();
        let own = count(piece);
        let empty = count(Piece::Empty);
        let opp = count(piece.opponent());

        let mut score = if own == 4 {
            self.four
        } else if own == 3 && empty == 1 {
            self.three
        } else if own == 2 && empty == 2 {
            self.two
        } else {
            0
        };
        if opp == 3 && empty == 1 {
            score += self.opponent_three;
        }
        score
    }

    /// Sum of the center bonus and all horizontal, vertical and diagonal
    /// windows, from the perspective of `piece`.
    pub fn score_position(&self, board: &Board, piece: Piece) -> i32 {
        let center = board.column(CENTER).iter().filter(|&&c| c == piece).count();
        let mut score = self.center * center as i32;

        let window = |row: usize, col: usize, dr: isize, dc: isize| {
            let mut window = [Piece::Empty; WINDOW];
            for (i, cell) in window.iter_mut().enumerate() {
                let r = (row as isize + dr * i as isize) as usize;
                let c = (col as isize + dc * i as isize) as usize;
                *cell = board.get(r, c);
            }
            window
        };

        for row in 0..ROWS {
            for col in 0..=COLUMNS - WINDOW {
                score += self.evaluate_window(&window(row, col, 0, 1), piece);
            }
        }
        for col in 0..COLUMNS {
            for row in 0..=ROWS - WINDOW {
                score += self.evaluate_window(&window(row, col, 1, 0), piece);
            }
        }
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLUMNS - WINDOW {
                score += self.evaluate_window(&window(row, col, 1, 1), piece);
            }
        }
        for row in WINDOW - 1..ROWS {
            for col in 0..=COLUMNS - WINDOW {
                score += self.evaluate_window(&window(row, col, -1, 1), piece);
            }
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn eval(&self, board: &Board) -> i32 {
        self.score_position(board, Piece::Ai)
    }
}

/// [`WindowHeuristic::evaluate_window`] with the default weights.
pub fn evaluate_window(window: &[Piece; WINDOW], piece: Piece) -> i32 {
    WindowHeuristic::default().evaluate_window(window, piece)
}

/// [`WindowHeuristic::score_position`] with the default weights.
pub fn score_position(board: &Board, piece: Piece) -> i32 {
    WindowHeuristic::default().score_position(board, piece)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Piece::{Ai as O, Empty as E, Player as X};

    #[test]
    fn window_scores() {
        assert_eq!(evaluate_window(&[O, O, O, O], O), 100);
        assert_eq!(evaluate_window(&[O, O, E, O], O), 5);
        assert_eq!(evaluate_window(&[E, O, E, O], O), 2);
        assert_eq!(evaluate_window(&[X, X, E, X], O), -4);
        assert_eq!(evaluate_window(&[O, E, E, E], O), 0);
        assert_eq!(evaluate_window(&[O, O, X, O], O), 0);
        assert_eq!(evaluate_window(&[E, E, E, E], O), 0);
        assert_eq!(evaluate_window(&[X, X, X, X], O), 0);
        // same windows from the other side
        assert_eq!(evaluate_window(&[X, X, E, X], X), 5);
        assert_eq!(evaluate_window(&[O, O, E, O], X), -4);
    }

    #[test]
    fn window_custom_weights() {
        let heuristic: WindowHeuristic =
            serde_json::from_str(r#"{"three": 50, "opponent_three": -80}"#).unwrap();
        assert_eq!(heuristic.center, 3);
        assert_eq!(heuristic.evaluate_window(&[O, O, E, O], O), 50);
        assert_eq!(heuristic.evaluate_window(&[X, X, E, X], O), -80);
        assert!(serde_json::from_str::<WindowHeuristic>(r#"{"five": 1}"#).is_err());
    }

    #[test]
    fn score_empty() {
        assert_eq!(score_position(&Board::new(), Piece::Ai), 0);
        assert_eq!(score_position(&Board::new(), Piece::Player), 0);
    }

    #[test]
    fn score_center() {
        let mut board = Board::new();
        board.play(3, Piece::Ai).unwrap();
        // only the center bonus, a single disc does not fill a window
        assert_eq!(score_position(&board, Piece::Ai), 3);
        assert_eq!(score_position(&board, Piece::Player), 0);

        let mut board = Board::new();
        board.play(0, Piece::Ai).unwrap();
        assert_eq!(score_position(&board, Piece::Ai), 0);
    }

    #[test]
    fn score_position_board() {
        let board: Board = r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . x . . .
            . . o x . . .
            . o o x x . ."#
            .parse()
            .unwrap();

        let before = board.clone();
        assert_eq!(score_position(&board, Piece::Ai), -2);
        assert_eq!(score_position(&board, Piece::Player), 20);
        assert_eq!(WindowHeuristic::default().eval(&board), -2);
        assert_eq!(board, before);
    }

    #[test]
    fn score_symmetric() {
        let board: Board = r#"
            . . . . . . .
            . . . . . . .
            . . . o . . .
            . . x o . . .
            . o x x o . .
            x o o x x . ."#
            .parse()
            .unwrap();

        let swapped = board.swapped();
        assert_eq!(
            score_position(&board, Piece::Ai),
            score_position(&swapped, Piece::Player)
        );
        assert_eq!(
            score_position(&board, Piece::Player),
            score_position(&swapped, Piece::Ai)
        );
    }
}
