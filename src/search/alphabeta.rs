use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::{leaf, Heuristic, SearchResult};
use crate::game::{Board, Piece};

/// Alpha-Beta search from the root, with the computer to move.
///
/// Without an `rng` the first best column in ascending order is returned.
/// With an `rng` ([`super::TieBreak::Random`]) the column is drawn uniformly
/// from all root columns sharing the best score.
pub fn search(
    board: &Board,
    depth: usize,
    heuristic: &dyn Heuristic,
    rng: Option<&mut SmallRng>,
) -> SearchResult {
    let Some(rng) = rng else {
        return alphabeta(board, depth, i32::MIN, i32::MAX, true, heuristic);
    };
    if let Some(result) = leaf(board, depth, heuristic) {
        return result;
    }

    let mut best = i32::MIN;
    let mut ties = Vec::new();
    for col in board.valid_columns() {
        let mut child = board.clone();
        let row = child.next_open_row(col);
        child.drop_piece(row, col, Piece::Ai);

        // Scores of at least `best` are exact within this window,
        // worse children only have to be refuted.
        let alpha = best.saturating_sub(1);
        let score = alphabeta(&child, depth - 1, alpha, i32::MAX, false, heuristic).score;
        if score > best {
            best = score;
            ties.clear();
        }
        if score == best {
            ties.push(col);
        }
    }
    SearchResult {
        column: ties.choose(rng).copied(),
        score: best,
    }
}

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - The computer ([`Piece::Ai`]) is the maximizing side
/// - `board` is never modified, every child is explored on a private clone
/// - Columns are scanned in ascending order, only strictly better children
///   replace the first valid column
pub fn alphabeta(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    if let Some(result) = leaf(board, depth, heuristic) {
        return result;
    }

    let valid = board.valid_columns();
    if maximizing {
        let mut value = SearchResult {
            column: valid.first().copied(),
            score: i32::MIN,
        };
        for &col in &valid {
            let mut child = board.clone();
            let row = child.next_open_row(col);
            child.drop_piece(row, col, Piece::Ai);

            let newval = alphabeta(&child, depth - 1, alpha, beta, false, heuristic);
            if newval.score > value.score {
                value = SearchResult {
                    column: Some(col),
                    score: newval.score,
                };
            }
            alpha = alpha.max(value.score);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = SearchResult {
            column: valid.first().copied(),
            score: i32::MAX,
        };
        for &col in &valid {
            let mut child = board.clone();
            let row = child.next_open_row(col);
            child.drop_piece(row, col, Piece::Player);

            let newval = alphabeta(&child, depth - 1, alpha, beta, true, heuristic);
            if newval.score < value.score {
                value = SearchResult {
                    column: Some(col),
                    score: newval.score,
                };
            }
            beta = beta.min(value.score);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}
