#![cfg(feature = "std")]
//! Interactive turn loop: prompts, parses moves, and alternates players.
//!
//! The session owns the current-player state and a [`GameEngine`]; the
//! engine itself never tracks whose turn it is. A turn advances only when
//! the engine accepts a move. Malformed input never reaches the engine.

use std::io::{BufRead, Write};

use crate::common::Player;
use crate::game::GameEngine;
use crate::ui::{render_board, Glyphs};

/// Final disc counts reported when the board fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub player1_discs: usize,
    pub player2_discs: usize,
}

impl GameOutcome {
    /// The player holding more discs, or `None` on a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.player1_discs.cmp(&self.player2_discs) {
            core::cmp::Ordering::Greater => Some(Player::One),
            core::cmp::Ordering::Less => Some(Player::Two),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Parse a move as exactly two whitespace-separated integers, `row col`.
///
/// Range is not checked here; the engine rejects out-of-range coordinates
/// itself, so raw parsed integers can be passed straight through.
pub fn parse_move(input: &str) -> Result<(isize, isize), String> {
    let mut parts = input.split_whitespace();
    let row = parts
        .next()
        .ok_or_else(|| "empty input - enter row and column (e.g., 2 4)".to_string())?;
    let col = parts
        .next()
        .ok_or_else(|| "missing column - enter row and column (e.g., 2 4)".to_string())?;
    if parts.next().is_some() {
        return Err("too many values - enter exactly two numbers".to_string());
    }
    let row = row
        .parse()
        .map_err(|_| format!("invalid row '{}' - must be a number", row))?;
    let col = col
        .parse()
        .map_err(|_| format!("invalid column '{}' - must be a number", col))?;
    Ok((row, col))
}

/// Turn-loop orchestrator for a two-player console game.
pub struct GameSession {
    engine: GameEngine,
    current: Player,
    glyphs: Glyphs,
}

impl GameSession {
    /// Start a session on a fresh board with Player 1 to move.
    pub fn new(glyphs: Glyphs) -> Self {
        Self {
            engine: GameEngine::new(),
            current: Player::One,
            glyphs,
        }
    }

    /// Start a session over an existing engine with Player 1 to move.
    pub fn with_engine(engine: GameEngine, glyphs: Glyphs) -> Self {
        Self {
            engine,
            current: Player::One,
            glyphs,
        }
    }

    /// Read-only view of the underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The player whose move is expected next.
    pub fn current_player(&self) -> Player {
        self.current
    }

    fn player_label(&self, player: Player) -> String {
        match player {
            Player::One => format!("1 ({})", self.glyphs.for_player(Player::One)),
            Player::Two => format!("2 ({})", self.glyphs.for_player(Player::Two)),
        }
    }

    /// Drive the game until the board fills, reading one `row col` line per
    /// prompt from `input`. Rejected moves and malformed input re-prompt
    /// the same player.
    ///
    /// Fails if `input` ends before the game does.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> anyhow::Result<GameOutcome> {
        let mut lines = input.lines();
        loop {
            writeln!(output)?;
            write!(output, "{}", render_board(self.engine.board(), &self.glyphs))?;

            if self.engine.is_board_full() {
                break;
            }

            writeln!(output, "Player {}'s turn", self.player_label(self.current))?;
            write!(output, "Enter your move (row and column): ")?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => anyhow::bail!("input ended before the board filled"),
            };

            let (row, col) = match parse_move(&line) {
                Ok(coords) => coords,
                Err(reason) => {
                    writeln!(output, "Invalid input: {}", reason)?;
                    continue;
                }
            };

            match self.engine.make_move(row, col, self.current) {
                Ok(()) => {
                    log::debug!("player {:?} played ({}, {})", self.current, row, col);
                    self.current = self.current.opponent();
                }
                Err(err) => {
                    writeln!(output, "Invalid move: {}", err)?;
                }
            }
        }

        let outcome = GameOutcome {
            player1_discs: self.engine.count(Player::One),
            player2_discs: self.engine.count(Player::Two),
        };
        log::info!(
            "game over: {} vs {} discs",
            outcome.player1_discs,
            outcome.player2_discs
        );

        writeln!(output, "The board is full - game over!")?;
        writeln!(
            output,
            "Player {}: {} discs",
            self.player_label(Player::One),
            outcome.player1_discs
        )?;
        writeln!(
            output,
            "Player {}: {} discs",
            self.player_label(Player::Two),
            outcome.player2_discs
        )?;
        match outcome.winner() {
            Some(winner) => writeln!(output, "Player {} wins!", self.player_label(winner))?,
            None => writeln!(output, "It's a draw!")?,
        }
        Ok(outcome)
    }
}
