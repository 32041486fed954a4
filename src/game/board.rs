use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use super::Piece;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 7;
/// Index of the middle column.
pub const CENTER: usize = COLUMNS / 2;

/// Raw cell layout, indexed by `[row][column]` with row 0 at the bottom.
pub type Cells = [[Piece; COLUMNS]; ROWS];

/// The Connect Four grid.
///
/// Discs obey gravity: within a column all empty cells are above all
/// occupied ones. Every constructor that accepts foreign data checks this,
/// [`Board::drop_piece`] does not.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Cells", into = "Cells")]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Board {
        Board {
            cells: [[Piece::Empty; COLUMNS]; ROWS],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    /// The column from bottom to top.
    pub fn column(&self, col: usize) -> [Piece; ROWS] {
        let mut column = [Piece::Empty; ROWS];
        for (row, cell) in column.iter_mut().enumerate() {
            *cell = self.cells[row][col];
        }
        column
    }

    /// Returns if another disc fits into the column.
    ///
    /// # Panics
    /// If `col` is not smaller than [`COLUMNS`].
    pub fn is_valid_column(&self, col: usize) -> bool {
        self.cells[ROWS - 1][col] == Piece::Empty
    }

    /// Lowest empty row of a column.
    ///
    /// The column must not be full. For a full column [`ROWS`] is returned,
    /// which makes the following [`Board::drop_piece`] panic.
    pub fn next_open_row(&self, col: usize) -> usize {
        (0..ROWS)
            .find(|&row| self.cells[row][col] == Piece::Empty)
            .unwrap_or(ROWS)
    }

    /// Places a piece without any validation.
    ///
    /// # Panics
    /// If the cell is outside of the board.
    pub fn drop_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece;
    }

    /// All columns that are not full, in ascending order.
    /// An empty result means the board is full.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| self.is_valid_column(c)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|c| !self.is_valid_column(c))
    }

    /// Checked move for drivers: validates the column and drops the piece
    /// onto the lowest empty row, which is returned.
    pub fn play(&mut self, col: usize, piece: Piece) -> Result<usize, MoveError> {
        if col >= COLUMNS {
            return Err(MoveError::InvalidColumn(col));
        }
        if !self.is_valid_column(col) {
            return Err(MoveError::ColumnFull(col));
        }
        let row = self.next_open_row(col);
        self.drop_piece(row, col, piece);
        Ok(row)
    }

    /// The same position with the roles of both sides exchanged.
    pub fn swapped(&self) -> Board {
        let mut board = self.clone();
        for cell in board.cells.iter_mut().flatten() {
            *cell = cell.opponent();
        }
        board
    }

    /// Number of discs of the given kind.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == piece).count()
    }
}

impl TryFrom<Cells> for Board {
    type Error = BoardError;

    fn try_from(cells: Cells) -> Result<Self, Self::Error> {
        for column in 0..COLUMNS {
            let mut empty = false;
            for row in 0..ROWS {
                match cells[row][column] {
                    Piece::Empty => empty = true,
                    _ if empty => return Err(BoardError::Floating { row, column }),
                    _ => {}
                }
            }
        }
        Ok(Board { cells })
    }
}

impl From<Board> for Cells {
    fn from(board: Board) -> Cells {
        board.cells
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the textual representation used by the command line tools and
    /// tests: one line per row, top row first, `.` empty, `x` player and
    /// `o` computer. Rows may also be separated by `/`.
    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = txt
            .split(|c: char| c == '\n' || c == '/')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut cells = [[Piece::Empty; COLUMNS]; ROWS];
        for (i, line) in lines.iter().enumerate() {
            let pieces = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Piece::from_symbol)
                .collect::<Result<Vec<_>, _>>()?;

            if lines.len() != ROWS || pieces.len() != COLUMNS {
                return Err(BoardError::Dimensions {
                    rows: lines.len(),
                    columns: pieces.len(),
                });
            }
            cells[ROWS - 1 - i].copy_from_slice(&pieces);
        }
        if lines.is_empty() {
            return Err(BoardError::Dimensions { rows: 0, columns: 0 });
        }

        Board::try_from(cells)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter().rev() {
            write!(f, " ")?;
            for cell in row {
                match cell {
                    Piece::Empty => write!(f, " {}", cell.symbol().bright_black())?,
                    Piece::Player => write!(f, " {}", cell.symbol().red())?,
                    Piece::Ai => write!(f, " {}", cell.symbol().yellow())?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn board_new() {
        let board = Board::new();
        assert_eq!(board, Board::default());
        assert_eq!(board.count(Piece::Empty), ROWS * COLUMNS);
        assert_eq!(board.valid_columns(), (0..COLUMNS).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn board_gravity() {
        let mut board = Board::new();
        assert_eq!(board.next_open_row(3), 0);
        board.drop_piece(0, 3, Piece::Player);
        assert_eq!(board.next_open_row(3), 1);
        board.drop_piece(1, 3, Piece::Ai);
        assert_eq!(board.next_open_row(3), 2);

        assert_eq!(board.get(0, 3), Piece::Player);
        assert_eq!(board.get(1, 3), Piece::Ai);
        assert_eq!(
            board.column(3),
            [
                Piece::Player,
                Piece::Ai,
                Piece::Empty,
                Piece::Empty,
                Piece::Empty,
                Piece::Empty
            ]
        );
    }

    #[test]
    fn board_valid_columns() {
        let mut board = Board::new();
        for row in 0..ROWS {
            board.drop_piece(row, 0, Piece::Player);
            board.drop_piece(row, 4, Piece::Ai);
        }
        assert!(!board.is_valid_column(0));
        assert!(board.is_valid_column(1));
        assert!(!board.is_valid_column(4));
        assert_eq!(board.valid_columns(), vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn board_play() {
        let mut board = Board::new();
        assert_eq!(board.play(2, Piece::Ai), Ok(0));
        assert_eq!(board.play(2, Piece::Player), Ok(1));
        assert_eq!(board.play(7, Piece::Ai), Err(MoveError::InvalidColumn(7)));

        for _ in 2..ROWS {
            board.play(2, Piece::Ai).unwrap();
        }
        assert_eq!(board.play(2, Piece::Ai), Err(MoveError::ColumnFull(2)));
        assert_eq!(board.count(Piece::Ai), 5);
    }

    #[test]
    fn board_parse() {
        let board: Board = r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . o . . .
            . . x o . . .
            x o x o . . x"#
            .parse()
            .unwrap();

        println!("{:?}", board);
        assert_eq!(board.get(0, 0), Piece::Player);
        assert_eq!(board.get(0, 1), Piece::Ai);
        assert_eq!(board.get(2, 3), Piece::Ai);
        assert_eq!(board.get(1, 2), Piece::Player);
        assert_eq!(board.get(0, 6), Piece::Player);
        assert_eq!(board.count(Piece::Ai), 4);
        assert_eq!(board.count(Piece::Player), 4);

        let compact: Board = "......./......./......./...o.../..xo.../xoxo..x"
            .parse()
            .unwrap();
        assert_eq!(board, compact);
        assert_eq!(board.to_string().parse::<Board>(), Ok(board));
    }

    #[test]
    fn board_parse_errors() {
        assert_eq!(
            "......./.......".parse::<Board>(),
            Err(BoardError::Dimensions {
                rows: 2,
                columns: 7
            })
        );
        assert_eq!(
            "......./......./......./......./......./......".parse::<Board>(),
            Err(BoardError::Dimensions {
                rows: 6,
                columns: 6
            })
        );
        assert_eq!(
            "......./......./......./......./......./......#".parse::<Board>(),
            Err(BoardError::Symbol('#'))
        );
        assert_eq!(
            "......./......./......./......./..x..../.......".parse::<Board>(),
            Err(BoardError::Floating { row: 1, column: 2 })
        );
        assert!("".parse::<Board>().is_err());
    }

    #[test]
    fn board_json() {
        let mut board = Board::new();
        board.play(3, Piece::Ai).unwrap();
        board.play(3, Piece::Player).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with("[[0,0,0,2,0,0,0],[0,0,0,1,0,0,0],"));
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        // disc in the second row without support
        let floating = r#"[[0,0,0,0,0,0,0],[1,0,0,0,0,0,0],[0,0,0,0,0,0,0],
            [0,0,0,0,0,0,0],[0,0,0,0,0,0,0],[0,0,0,0,0,0,0]]"#;
        assert!(serde_json::from_str::<Board>(floating).is_err());
        let unknown = r#"[[3,0,0,0,0,0,0],[0,0,0,0,0,0,0],[0,0,0,0,0,0,0],
            [0,0,0,0,0,0,0],[0,0,0,0,0,0,0],[0,0,0,0,0,0,0]]"#;
        assert!(serde_json::from_str::<Board>(unknown).is_err());
    }

    #[test]
    fn board_swapped() {
        let board: Board = "......./......./......./......./...x.../..oox.."
            .parse()
            .unwrap();
        let swapped = board.swapped();
        assert_eq!(swapped.get(0, 2), Piece::Player);
        assert_eq!(swapped.get(0, 4), Piece::Ai);
        assert_eq!(swapped.get(1, 3), Piece::Ai);
        assert_eq!(swapped.get(5, 5), Piece::Empty);
        assert_eq!(swapped.swapped(), board);
    }
}
