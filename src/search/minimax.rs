use super::{leaf, Heuristic, SearchResult};
use crate::game::{Board, Piece, COLUMNS};

/// Plain minimax without pruning.
///
/// Visits every node up to `depth` and returns the same result as
/// [`super::alphabeta`], which makes it the reference for the pruned search.
pub fn minimax(
    board: &Board,
    depth: usize,
    maximizing: bool,
    heuristic: &dyn Heuristic,
) -> SearchResult {
    if let Some(result) = leaf(board, depth, heuristic) {
        return result;
    }

    let valid = board.valid_columns();
    let (piece, mut value) = if maximizing {
        (Piece::Ai, i32::MIN)
    } else {
        (Piece::Player, i32::MAX)
    };
    let mut column = valid.first().copied();

    for &col in &valid {
        let mut child = board.clone();
        let row = child.next_open_row(col);
        child.drop_piece(row, col, piece);

        let score = minimax(&child, depth - 1, !maximizing, heuristic).score;
        if (maximizing && score > value) || (!maximizing && score < value) {
            value = score;
            column = Some(col);
        }
    }
    SearchResult {
        column,
        score: value,
    }
}

/// The minimax value of every computer move at the root.
///
/// Full columns and terminal boards yield `None`.
/// The children are searched with `depth - 1` remaining plies.
pub fn column_scores(
    board: &Board,
    depth: usize,
    heuristic: &dyn Heuristic,
) -> [Option<i32>; COLUMNS] {
    let mut result = [None; COLUMNS];
    if board.is_terminal() {
        return result;
    }
    for col in board.valid_columns() {
        let mut child = board.clone();
        let row = child.next_open_row(col);
        child.drop_piece(row, col, Piece::Ai);
        result[col] = Some(minimax(&child, depth.saturating_sub(1), false, heuristic).score);
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::{WindowHeuristic, LOSS, WIN};

    #[test]
    fn minimax_empty() {
        let h = WindowHeuristic::default();
        let result = minimax(&Board::new(), 4, true, &h);
        assert_eq!(result.column, Some(3));
        assert_eq!(result.score, 6);
    }

    #[test]
    fn column_scores_empty() {
        let h = WindowHeuristic::default();
        let scores = column_scores(&Board::new(), 4, &h);
        assert_eq!(
            scores,
            [Some(3), Some(3), Some(3), Some(6), Some(3), Some(3), Some(3)]
        );
    }

    #[test]
    fn column_scores_threat() {
        let b: Board = r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . o o . . .
            . x x x . . ."#
            .parse()
            .unwrap();
        let h = WindowHeuristic::default();
        // every reply loses to the open three
        assert_eq!(column_scores(&b, 2, &h), [Some(LOSS); COLUMNS]);
    }

    #[test]
    fn column_scores_full_column() {
        let b: Board = r#"
            o . . . . . .
            x . . . . . .
            o . . . . . .
            x . . . . . .
            o x x . . . .
            x o o o . . ."#
            .parse()
            .unwrap();
        let h = WindowHeuristic::default();
        let scores = column_scores(&b, 2, &h);
        assert_eq!(scores[0], None);
        assert_eq!(scores[4], Some(WIN));
        assert!(scores[1..].iter().all(Option::is_some));
    }
}
