use std::fmt;

use super::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-colour pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Directions scanned by `is_win`: right, up, up-right, down-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// The grid. Row 0 is the bottom row; pieces stack upward from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= ROWS || col >= COLS {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Number of pieces stacked in a column. Out-of-range columns report 0.
    pub fn column_height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.heights[col] >= ROWS
    }

    /// Columns that can still take a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// On error the board is left unchanged.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[row][col] = player.cell();
        self.heights[col] += 1;
        Ok(row)
    }

    /// Total number of pieces on the board
    pub fn move_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// True if `player` has four or more in a line anywhere on the board.
    ///
    /// Every occupied cell is used as the start of a run in each of the
    /// four directions, so the answer does not depend on which move was last.
    pub fn is_win(&self, player: Player) -> bool {
        let target = player.cell();
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != target {
                    continue;
                }
                if DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_length(row, col, dr, dc, target) >= CONNECT)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Count consecutive `target` cells starting at (row, col) and stepping by (dr, dc).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, target: Cell) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize, col as isize);
        while r >= 0
            && c >= 0
            && (r as usize) < ROWS
            && (c as usize) < COLS
            && self.cells[r as usize][c as usize] == target
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain text rendering, top row first: `.` empty, `X` player one, `O` player two.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        let labels: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        writeln!(f, "{}", labels.join(" "))
    }
}
