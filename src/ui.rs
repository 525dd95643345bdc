#![cfg(feature = "std")]
//! Console rendering for the board.

use crate::board::Board;
use crate::common::{Cell, Player};
use crate::config::BOARD_SIZE;
use std::fmt::Write as _;

/// Display characters for the three cell states.
///
/// Glyphs are a presentation concern only; the engine never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: char,
    pub player1: char,
    pub player2: char,
}

impl Glyphs {
    pub const fn new(empty: char, player1: char, player2: char) -> Self {
        Self {
            empty,
            player1,
            player2,
        }
    }

    /// Glyph for a single cell.
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Taken(Player::One) => self.player1,
            Cell::Taken(Player::Two) => self.player2,
        }
    }

    /// Glyph for a player's discs.
    pub fn for_player(&self, player: Player) -> char {
        self.for_cell(Cell::Taken(player))
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::new('.', 'X', 'O')
    }
}

/// Render the board with 0-7 indices on both axes, one glyph per cell.
pub fn render_board(board: &Board, glyphs: &Glyphs) -> String {
    let mut out = String::new();
    out.push(' ');
    for col in 0..BOARD_SIZE {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');
    for (row, cells) in board.rows().enumerate() {
        let _ = write!(out, "{}", row);
        for cell in cells {
            let _ = write!(out, " {}", glyphs.for_cell(*cell));
        }
        out.push('\n');
    }
    out
}
