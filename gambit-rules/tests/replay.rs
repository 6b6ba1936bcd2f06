//! Replay
//!
//! Tests of rebuilding games from space separated notation tokens.

use gambit_rules::coretypes::{Color, PieceKind, Square::*};
use gambit_rules::*;

#[test]
fn replay_with_captures() {
    let mut game = Game::new();
    game.initialize_from_notation("e4 d5 exd5 Qxd5 Nc3 Qa5").unwrap();

    let queen = game.board().piece_at(A5).unwrap();
    assert_eq!((queen.color(), queen.piece_kind()), (Color::Black, PieceKind::Queen));
    assert!(game.board().piece_at(D5).is_none());
    assert!(game.board().piece_at(E4).is_none());
    assert_eq!(game.board().material(Color::White), 138);
    assert_eq!(game.board().material(Color::Black), 138);

    assert_eq!(game.turn(), 4);
    assert_eq!(game.active_color(), Color::White);
    assert_eq!(game.history().to_string(), "1. e4 d5 2. exd5 Qxd5 3. Nc3 Qa5");
}

#[test]
fn replay_ignores_extra_whitespace() {
    let mut game = Game::new();
    game.initialize_from_notation("  e4\n\te5   Nf3 ").unwrap();
    assert_eq!(game.history().tokens(), "e4 e5 Nf3");

    game.initialize_from_notation("").unwrap();
    assert_eq!(game, Game::new());
}

#[test]
fn ambiguous_token_moves_first_piece_found() {
    let mut game = Game::new();
    // Both the b1 and f3 knights can reach d2.
    game.initialize_from_notation("d4 d5 Nf3 Nf6 Nd2").unwrap();

    assert!(game.board().piece_at(B1).is_none());
    let f3 = game.board().piece_at(F3).unwrap();
    assert_eq!(f3.piece_kind(), PieceKind::Knight);
    let d2 = game.board().piece_at(D2).unwrap();
    assert_eq!((d2.color(), d2.piece_kind()), (Color::White, PieceKind::Knight));
}

#[test]
fn replay_failure_names_token_and_turn() {
    let mut game = Game::new();
    let err = game
        .initialize_from_notation("e4 e5 Nf3 Nc6 Bb5 a6 Bxa6 bxa6 Qxf7")
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GameUnresolvableMove);
    assert_eq!(
        err.to_string(),
        "game unresolvable move: \"Qxf7\" at turn 5 for W"
    );
    assert_eq!(game.turn(), 5);
    assert_eq!(game.history().plies(), 8);
}

#[test]
fn out_of_turn_token_is_unresolvable() {
    let mut game = Game::new();
    let err = game.initialize_from_notation("e5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GameUnresolvableMove);
    assert_eq!(game, Game::new());
}
