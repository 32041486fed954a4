use thiserror::Error;

/// Rejected move on the driver side.
///
/// The search never produces these, it only plays columns from
/// [`crate::game::Board::valid_columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("the game is already over")]
    GameOver,
}

/// Failures when reading a board from text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 6 rows of 7 cells, got {rows} rows with {columns} cells")]
    Dimensions { rows: usize, columns: usize },
    #[error("unknown cell symbol {0:?}")]
    Symbol(char),
    #[error("unknown cell value {0}")]
    Value(u8),
    #[error("floating disc at row {row}, column {column}")]
    Floating { row: usize, column: usize },
}
