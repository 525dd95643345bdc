//! Common types for Reversi: players, cell states, and move errors.

/// One of the two disc colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player. Involutive: `p.opponent().opponent() == p`.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No disc here.
    Empty,
    /// A disc belonging to the given player.
    Taken(Player),
}

impl Cell {
    /// Returns `true` when the cell holds no disc.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Errors returned when a move is rejected.
///
/// Every variant leaves the board untouched; the engine stays usable for
/// subsequent moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Target coordinate falls outside the 8×8 grid.
    OutOfBounds { row: isize, col: isize },
    /// Target cell already holds a disc.
    Occupied { row: usize, col: usize },
    /// Move would capture no opponent discs in any direction.
    NoCapture { row: usize, col: usize },
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "({}, {}) is outside the board", row, col)
            }
            MoveError::Occupied { row, col } => {
                write!(f, "({}, {}) already holds a disc", row, col)
            }
            MoveError::NoCapture { row, col } => {
                write!(f, "a disc at ({}, {}) would capture nothing", row, col)
            }
        }
    }
}
