//! Tests for the terminal game loop and config loading.

use std::io::{Cursor, Write};
use strictly_inarow::{Occupant, Outcome, Player, Position, SessionState};
use strictly_inarow_cli::{App, Config, replay};

fn run(lines: &str) -> (App, String) {
    let mut app = App::new(Config::default());
    let mut output = Vec::new();
    app.run(Cursor::new(lines.to_string()), &mut output)
        .expect("In-memory I/O cannot fail");
    (app, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_win_through_typed_moves() {
    let (app, output) = run("0 0\n1 1\n0,1\n2 2\n0 2\n");

    assert_eq!(
        app.session().state(),
        SessionState::Ended(Outcome::Won(Player::A))
    );
    assert!(output.contains("New game. X (A) moves first."));
    assert!(output.contains("Game over: X (A) wins!"));
    assert!(output.contains("Press enter to play again"));
}

#[test]
fn test_bad_input_is_reported_not_fatal() {
    let (app, output) = run("banana\n0 0\n0 0\n5 5\n");

    assert!(output.contains("Unrecognized input `banana`"));
    assert!(output.contains("Cell (0, 0) is already occupied."));
    assert!(output.contains("(5, 5) is off the 3x3 board."));
    assert_eq!(app.session().history().len(), 1);
    assert_eq!(app.session().current_turn(), Player::B);
}

#[test]
fn test_input_after_game_end_restarts() {
    let (app, output) = run("0 0\n1 0\n0 1\n1 1\n0 2\n\n2 2\n");

    assert!(app.session().is_playing());
    assert_eq!(app.session().history().len(), 1);
    assert_eq!(
        app.session().occupant_at(Position::new(2, 2)),
        Ok(Occupant::Occupied(Player::A))
    );
    assert_eq!(output.matches("New game.").count(), 2);
}

#[test]
fn test_quit_after_game_end() {
    let (app, output) = run("0 0\n1 0\n0 1\n1 1\n0 2\nquit\n2 2\n");

    assert!(!app.session().is_playing());
    assert_eq!(output.matches("New game.").count(), 1);
}

#[test]
fn test_help_after_game_end_does_not_restart() {
    let (app, output) = run("0 0\n1 0\n0 1\n1 1\n0 2\nhelp\n");

    assert_eq!(
        app.session().state(),
        SessionState::Ended(Outcome::Won(Player::A))
    );
    assert_eq!(output.matches("New game.").count(), 1);
    assert!(output.contains("any other input starts a new game"));
}

#[test]
fn test_garbage_after_game_end_restarts() {
    let (app, output) = run("0 0\n1 0\n0 1\n1 1\n0 2\nbanana\n");

    assert!(app.session().is_playing());
    assert!(app.session().history().is_empty());
    assert!(!output.contains("Unrecognized input"));
    assert_eq!(output.matches("New game.").count(), 2);
}

#[test]
fn test_new_command_restarts_mid_game() {
    let (app, _output) = run("1 1\n0 0\nnew\n");

    assert!(app.session().is_playing());
    assert!(app.session().history().is_empty());
    assert_eq!(app.session().current_turn(), Player::A);
}

#[test]
fn test_replay_prints_outcome() {
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]
        .map(|(row, col)| Position::new(row, col));
    let mut output = Vec::new();
    replay(Config::default(), &moves, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.ends_with("Draw\n"));
    assert!(output.contains("0  X O X"));
}

#[test]
fn test_replay_rejects_illegal_moves() {
    let moves = [Position::new(1, 1), Position::new(1, 1)];
    let result = replay(Config::default(), &moves, Vec::new());
    assert!(result.is_err());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "symbol_a = \"R\"\nsymbol_b = \"K\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.player_symbol(Player::A), "R");
    assert_eq!(config.player_symbol(Player::B), "K");
    assert_eq!(config.empty_symbol(), ".");
}

#[test]
fn test_config_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("missing.toml")).is_err());

    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "symbol_a = \"X\"\nsymbol_b = \"X\"\n").unwrap();
    let err = Config::from_file(&path).unwrap_err();
    assert!(err.message.contains("distinct"));

    assert_eq!(Config::load(None).unwrap(), Config::default());
}
