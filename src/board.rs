//! Board state and the directional capture rules.
//!
//! The board is an owned 8×8 grid of [`Cell`] values, mutated only through
//! [`Board::apply_move`]. The same ray scan ([`Board::can_capture`]) backs
//! both move validation and disc flipping.

use crate::common::{Cell, MoveError, Player};
use crate::config::{BOARD_SIZE, DIRECTIONS, INITIAL_DISCS};
use core::fmt;

/// The 8×8 disc grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with the standard four-disc starting position.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, col, player) in INITIAL_DISCS {
            cells[row][col] = Cell::Taken(player);
        }
        Board { cells }
    }

    fn in_bounds(row: isize, col: isize) -> bool {
        (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
    }

    /// Cell contents at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom; each row holds cells left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Number of discs currently held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count()
    }

    /// Returns `true` once every cell holds a disc.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Whether placing a disc at (row, col) would be legal for `player`.
    ///
    /// Pure query: false for out-of-range coordinates, occupied cells, and
    /// placements that capture nothing.
    pub fn is_valid_move(&self, row: isize, col: isize, player: Player) -> bool {
        if !Self::in_bounds(row, col) {
            return false;
        }
        if !self.cells[row as usize][col as usize].is_empty() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(d_row, d_col)| self.can_capture(row, col, d_row, d_col, player))
    }

    /// Scan outward from (row, col) along (d_row, d_col) for a capture line:
    /// one or more opponent discs terminated by one of the player's own.
    /// An empty cell or the board edge ends the scan with no capture.
    fn can_capture(&self, row: isize, col: isize, d_row: isize, d_col: isize, player: Player) -> bool {
        let opponent = player.opponent();
        let mut r = row + d_row;
        let mut c = col + d_col;
        let mut found_opponent = false;

        while Self::in_bounds(r, c) {
            match self.cells[r as usize][c as usize] {
                Cell::Taken(p) if p == opponent => found_opponent = true,
                Cell::Taken(_) => return found_opponent,
                Cell::Empty => break,
            }
            r += d_row;
            c += d_col;
        }
        false
    }

    /// Place a disc for `player` at (row, col) and flip every captured line.
    ///
    /// Validity is checked before any mutation; on rejection the board is
    /// untouched.
    pub fn apply_move(&mut self, row: isize, col: isize, player: Player) -> Result<(), MoveError> {
        if !Self::in_bounds(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let (r, c) = (row as usize, col as usize);
        if !self.cells[r][c].is_empty() {
            return Err(MoveError::Occupied { row: r, col: c });
        }
        if !DIRECTIONS
            .iter()
            .any(|&(d_row, d_col)| self.can_capture(row, col, d_row, d_col, player))
        {
            return Err(MoveError::NoCapture { row: r, col: c });
        }

        self.cells[r][c] = Cell::Taken(player);
        // Rays from one origin are disjoint, so flipping one direction's run
        // cannot affect another direction's scan.
        for (d_row, d_col) in DIRECTIONS {
            if self.can_capture(row, col, d_row, d_col, player) {
                self.flip_line(row, col, d_row, d_col, player);
            }
        }
        Ok(())
    }

    /// Flip the opponent run starting one step out along (d_row, d_col).
    /// Callers must have confirmed the line via `can_capture`, which
    /// guarantees the run ends at one of the player's own discs.
    fn flip_line(&mut self, row: isize, col: isize, d_row: isize, d_col: isize, player: Player) {
        let opponent = player.opponent();
        let mut r = row + d_row;
        let mut c = col + d_col;

        while Self::in_bounds(r, c) && self.cells[r as usize][c as usize] == Cell::Taken(opponent) {
            self.cells[r as usize][c as usize] = Cell::Taken(player);
            r += d_row;
            c += d_col;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row {
                let glyph = match cell {
                    Cell::Empty => '.',
                    Cell::Taken(Player::One) => 'X',
                    Cell::Taken(Player::Two) => 'O',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl From<[[Cell; BOARD_SIZE]; BOARD_SIZE]> for Board {
    /// Build a board from raw cells, for synthesizing positions.
    fn from(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }
}
