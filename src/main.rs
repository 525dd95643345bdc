#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use reversi::{init_logging, GameSession, Glyphs};

/// Two-player console Reversi on the classic 8×8 board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Glyph drawn for empty cells.
    #[arg(long, default_value_t = '.')]
    empty: char,

    /// Glyph drawn for Player 1 discs.
    #[arg(long, default_value_t = 'X')]
    player1: char,

    /// Glyph drawn for Player 2 discs.
    #[arg(long, default_value_t = 'O')]
    player2: char,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let glyphs = Glyphs::new(cli.empty, cli.player1, cli.player2);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    let mut session = GameSession::new(glyphs);
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
