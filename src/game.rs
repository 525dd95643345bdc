use crate::board::Board;
use crate::common::{MoveError, Player};

/// Progress of a game as seen by the engine.
///
/// The engine only knows two states: moves may still be submitted, or the
/// grid has filled. "Neither player can move" is deliberately not detected;
/// stopping is the turn loop's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete,
}

/// Core rules engine owning the disc grid.
///
/// The engine validates and executes moves. Whose turn it is, input
/// parsing, and rendering are the caller's concern.
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Create an engine over a freshly set up board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Restore an engine around an existing position.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// Read-only view of the board for rendering and scorekeeping.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether placing a disc at (row, col) would be legal for `player`.
    /// Pure query; out-of-range coordinates simply return `false`.
    pub fn is_valid_move(&self, row: isize, col: isize, player: Player) -> bool {
        self.board.is_valid_move(row, col, player)
    }

    /// Execute a move for `player`, flipping every captured line.
    ///
    /// On rejection the board is unchanged and the engine remains usable.
    pub fn make_move(&mut self, row: isize, col: isize, player: Player) -> Result<(), MoveError> {
        self.board.apply_move(row, col, player)
    }

    /// Returns `true` once all 64 cells are occupied. This is the sole
    /// termination condition.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Disc count for `player` implied by the current board.
    pub fn count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.is_full() {
            GameStatus::Complete
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}
