//! Full console transcripts driven from in-memory input.

use pawns_cli::{render_board, CliConfig, Session, SessionEnd};
use pawns_engine::{Board, Game, GameResult, WinReason};
use pawns_core::Color;
use std::io::Cursor;

fn play(input: &str, game: Game) -> (SessionEnd, String) {
    let mut session =
        Session::with_game(Cursor::new(input.to_string()), Vec::new(), &CliConfig::default(), game);
    let end = session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    (end, output)
}

#[test]
fn opening_moves_and_quit() {
    let (end, output) = play("Amy\nBen\ne2e4\nd7d5\nexit\n", Game::new());
    assert_eq!(end, SessionEnd::Quit);

    let mut expected = String::new();
    expected.push_str("Pawns-Only Chess\n");
    expected.push_str("First Player's name:\n> ");
    expected.push_str("Second Player's name:\n> ");
    expected.push_str(&render_board(&Board::startpos()));

    let mut game = Game::new();
    expected.push_str("Amy's turn:\n> ");
    game.submit("e2e4").unwrap();
    expected.push_str(&render_board(game.board()));
    expected.push_str("Ben's turn:\n> ");
    game.submit("d7d5").unwrap();
    expected.push_str(&render_board(game.board()));
    expected.push_str("Amy's turn:\n> ");
    expected.push_str("Bye!\n");

    assert_eq!(output, expected);
}

#[test]
fn rejections_reprompt_same_player() {
    let (_, output) = play("Amy\nBen\ne2e5\ne7e5\ne2\nexit\n", Game::new());
    let turns = output.matches("Amy's turn:\n> ").count();
    assert_eq!(turns, 4);
    assert!(!output.contains("Ben's turn"));
    assert!(output.contains("Amy's turn:\n> Invalid Input\n"));
    assert!(output.contains("Amy's turn:\n> No white pawn at e7\n"));
}

#[test]
fn win_prints_result_then_bye() {
    let game = Game::from_fen("8/7P/8/8/8/8/p7/8 w").unwrap();
    let (end, output) = play("Amy\nBen\nh7h8\n", game);
    assert_eq!(
        end,
        SessionEnd::Finished(GameResult::Win {
            color: Color::White,
            reason: WinReason::FarRank
        })
    );
    assert!(output.ends_with("White wins!\nBye!\n"));
    assert!(output.contains("8 |   |   |   |   |   |   |   | W |"));
}

#[test]
fn stalemate_prints_result() {
    let game = Game::from_fen("8/8/p7/8/P7/8/8/8 b").unwrap();
    let (end, output) = play("Amy\nBen\na6a5\n", game);
    assert_eq!(end, SessionEnd::Finished(GameResult::Stalemate));
    assert!(output.contains("Ben's turn:\n> "));
    assert!(output.ends_with("Stalemate!\nBye!\n"));
}

#[test]
fn en_passant_at_the_console() {
    let game = Game::from_fen("8/3p4/8/4P3/8/8/8/8 b").unwrap();
    let (end, output) = play("Amy\nBen\nd7d5\ne5d6\n", game);
    assert!(matches!(end, SessionEnd::Finished(GameResult::Win { color: Color::White, .. })));
    assert!(output.contains("6 |   |   |   | W |   |   |   |   |"));
    assert!(output.ends_with("White wins!\nBye!\n"));
}
