use super::{Board, Piece, COLUMNS, ROWS};

/// Number of aligned discs that win the game.
pub const WINDOW: usize = 4;

/// The outcome of a game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Draw,
    Winner(Piece),
}

impl Board {
    /// Returns if `piece` has four aligned discs in any direction.
    pub fn has_four_in_row(&self, piece: Piece) -> bool {
        let aligned = |row: usize, col: usize, dr: isize, dc: isize| {
            (0..WINDOW as isize).all(|i| {
                let r = (row as isize + dr * i) as usize;
                let c = (col as isize + dc * i) as usize;
                self.get(r, c) == piece
            })
        };

        // horizontal
        for row in 0..ROWS {
            for col in 0..=COLUMNS - WINDOW {
                if aligned(row, col, 0, 1) {
                    return true;
                }
            }
        }
        // vertical
        for row in 0..=ROWS - WINDOW {
            for col in 0..COLUMNS {
                if aligned(row, col, 1, 0) {
                    return true;
                }
            }
        }
        // "/"
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLUMNS - WINDOW {
                if aligned(row, col, 1, 1) {
                    return true;
                }
            }
        }
        // "\"
        for row in WINDOW - 1..ROWS {
            for col in 0..=COLUMNS - WINDOW {
                if aligned(row, col, -1, 1) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns if either side won or no move is left.
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_row(Piece::Player) || self.has_four_in_row(Piece::Ai) || self.is_full()
    }

    /// Summary of the terminal state.
    /// A computer win takes precedence, matching the search leaves.
    pub fn outcome(&self) -> Outcome {
        if self.has_four_in_row(Piece::Ai) {
            Outcome::Winner(Piece::Ai)
        } else if self.has_four_in_row(Piece::Player) {
            Outcome::Winner(Piece::Player)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::None
        }
    }
}
