use std::io::Cursor;

use reversi::{
    parse_move, Board, Cell, GameEngine, GameSession, Glyphs, Player, BOARD_SIZE,
};

fn run_script(session: &mut GameSession, script: &str) -> (anyhow::Result<reversi::GameOutcome>, String) {
    let mut output = Vec::new();
    let result = session.run(Cursor::new(script.to_string()), &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_parse_move_accepts_two_integers() {
    assert_eq!(parse_move("2 4"), Ok((2, 4)));
    assert_eq!(parse_move("  7\t0  "), Ok((7, 0)));
    // range is the engine's concern, not the parser's
    assert_eq!(parse_move("-1 9"), Ok((-1, 9)));
}

#[test]
fn test_parse_move_rejects_malformed_input() {
    assert!(parse_move("").is_err());
    assert!(parse_move("3").is_err());
    assert!(parse_move("1 2 3").is_err());
    assert!(parse_move("a b").is_err());
    assert!(parse_move("2 x").is_err());
    assert!(parse_move("2.5 3").is_err());
}

#[test]
fn test_accepted_move_advances_turn() {
    let mut session = GameSession::new(Glyphs::default());
    let (result, output) = run_script(&mut session, "2 4\n");

    // the script ends mid-game, which the session reports as an error
    assert!(result.is_err());
    assert_eq!(session.current_player(), Player::Two);
    assert_eq!(session.engine().count(Player::One), 4);
    assert_eq!(session.engine().count(Player::Two), 1);
    assert!(output.contains("Player 1 (X)'s turn"));
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut session = GameSession::new(Glyphs::default());
    let (result, output) = run_script(&mut session, "0 0\n9 9\n3 3\n");

    assert!(result.is_err());
    assert_eq!(session.current_player(), Player::One);
    assert_eq!(session.engine().count(Player::One), 2);
    assert_eq!(session.engine().count(Player::Two), 2);
    assert_eq!(output.matches("Invalid move:").count(), 3);
}

#[test]
fn test_malformed_input_never_reaches_engine() {
    let mut session = GameSession::new(Glyphs::default());
    let (result, output) = run_script(&mut session, "hello\n2\n2 4 6\n");

    assert!(result.is_err());
    assert_eq!(session.current_player(), Player::One);
    assert_eq!(session.engine().count(Player::One), 2);
    assert_eq!(session.engine().count(Player::Two), 2);
    assert_eq!(output.matches("Invalid input:").count(), 3);
}

#[test]
fn test_players_alternate_only_on_accepted_moves() {
    let mut session = GameSession::new(Glyphs::default());
    // P1 plays (2,4); P2 fumbles twice, then plays (2,3).
    let (result, _) = run_script(&mut session, "2 4\nnope\n2 4\n2 3\n");

    assert!(result.is_err());
    assert_eq!(session.current_player(), Player::One);
    // (2,4) gave P1 four discs; (2,3) flipped (3,3) back to P2
    assert_eq!(session.engine().count(Player::One), 3);
    assert_eq!(session.engine().count(Player::Two), 3);
}

#[test]
fn test_full_board_reports_outcome_without_input() {
    let mut cells = [[Cell::Taken(Player::One); BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if r < 2 && c < 4 {
                *cell = Cell::Taken(Player::Two);
            }
        }
    }
    let engine = GameEngine::from_board(Board::from(cells));
    let mut session = GameSession::with_engine(engine, Glyphs::default());

    let (result, output) = run_script(&mut session, "");
    let outcome = result.unwrap();

    assert_eq!(outcome.player1_discs, 56);
    assert_eq!(outcome.player2_discs, 8);
    assert_eq!(outcome.winner(), Some(Player::One));
    assert!(output.contains("game over"));
    assert!(output.contains("Player 1 (X) wins!"));
}

#[test]
fn test_draw_outcome() {
    let mut cells = [[Cell::Taken(Player::One); BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in cells.iter_mut().enumerate() {
        for cell in row.iter_mut() {
            if r >= BOARD_SIZE / 2 {
                *cell = Cell::Taken(Player::Two);
            }
        }
    }
    let engine = GameEngine::from_board(Board::from(cells));
    let mut session = GameSession::with_engine(engine, Glyphs::default());

    let (result, output) = run_script(&mut session, "");
    let outcome = result.unwrap();

    assert_eq!(outcome.player1_discs, 32);
    assert_eq!(outcome.player2_discs, 32);
    assert_eq!(outcome.winner(), None);
    assert!(output.contains("draw"));
}

#[test]
fn test_custom_glyphs_show_in_rendering() {
    let mut session = GameSession::new(Glyphs::new('_', '#', '@'));
    let (result, output) = run_script(&mut session, "");

    assert!(result.is_err());
    assert!(output.contains("Player 1 (#)'s turn"));
    assert!(output.contains("# @"));
    assert!(output.contains("@ #"));
}
