//! Tests for move selection between players.

use std::io::Cursor;
use strictly_games::players::{HumanPlayer, NegamaxPlayer, ScriptedPlayer};
use strictly_games::{
    FirstPlayer, GameConfig, Orchestrator, Outcome, Player, SelectorError, session,
};
use strictly_negamax::{GameState, SearchConfig};
use strictly_tictactoe::{GameStatus, Player as Mark, Position, TicTacToe};

use Position::*;

fn scripted(name: &str, moves: &[Position]) -> Box<dyn Player<TicTacToe>> {
    Box::new(ScriptedPlayer::new(name, moves.iter().copied()))
}

/// Fails the test if it is ever asked for a move.
struct Untouchable;

impl Player<TicTacToe> for Untouchable {
    fn next_move(&mut self, _state: &TicTacToe) -> anyhow::Result<Position> {
        panic!("player consulted on a finished game");
    }

    fn name(&self) -> &str {
        "Untouchable"
    }
}

#[test]
fn test_scripted_game_records_winner() {
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::X),
        scripted("Alice", &[TopLeft, TopCenter, TopRight]),
        scripted("Bob", &[MiddleLeft, Center]),
    );

    let outcome = game.play().unwrap();
    assert_eq!(outcome, Outcome::Winner("Alice".to_string()));
    assert_eq!(game.state().status(), GameStatus::Won(Mark::X));

    let record = game.record().unwrap();
    assert_eq!(record.players(), &["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(record.moves().len(), 5);
    assert_eq!(*record.moves()[4].mv(), TopRight);
    assert_eq!(record.moves()[4].player(), "Alice");
}

#[test]
fn test_second_seat_can_win() {
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::O),
        scripted("Alice", &[TopLeft, TopCenter, BottomRight]),
        scripted("Bob", &[MiddleLeft, Center, MiddleRight]),
    );
    assert_eq!(game.play().unwrap(), Outcome::Winner("Bob".to_string()));
    assert_eq!(game.state().status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::X),
        scripted("Alice", &[Center]),
        scripted("Bob", &[Center, TopLeft]),
    );
    game.step().unwrap();
    let before = game.state().clone();

    let err = game.step().unwrap_err();
    assert!(matches!(
        err,
        SelectorError::IllegalMove { ref player, ref mv } if player == "Bob" && mv == "5"
    ));
    assert_eq!(game.state(), &before);
    assert_eq!(game.current_player(), "Bob");
    assert_eq!(game.moves().len(), 1);

    let turn = game.step().unwrap();
    assert_eq!(*turn.mv(), TopLeft);
    assert_eq!(game.current_player(), "Alice");
}

#[test]
fn test_finished_game_never_consults_players() {
    let won = TicTacToe::from_position("XXX OO. ...".parse().unwrap(), Mark::O);
    let mut game = Orchestrator::new(won, Box::new(Untouchable), Box::new(Untouchable));

    assert!(game.is_over());
    assert!(matches!(game.step(), Err(SelectorError::GameOver)));
    assert!(matches!(game.play(), Ok(Outcome::Winner(_))));

    let drawn = TicTacToe::from_position("XOX OXX OXO".parse().unwrap(), Mark::O);
    let mut game = Orchestrator::new(drawn, Box::new(Untouchable), Box::new(Untouchable));
    assert_eq!(game.play().unwrap(), Outcome::Draw);
}

#[test]
fn test_player_failure_is_reported() {
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::X),
        scripted("Alice", &[Center]),
        scripted("Bob", &[]),
    );
    let err = game.play().unwrap_err();
    assert!(matches!(err, SelectorError::PlayerFailed { ref player, .. } if player == "Bob"));
    assert_eq!(game.moves().len(), 1);
    assert!(game.record().is_none());
}

#[test]
fn test_engines_draw_each_other() {
    let search = SearchConfig::new(9);
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::X),
        Box::new(NegamaxPlayer::new("Engine X", search)),
        Box::new(NegamaxPlayer::new("Engine O", search)),
    );
    assert_eq!(game.play().unwrap(), Outcome::Draw);
    assert_eq!(game.moves().len(), 9);
}

#[test]
fn test_engine_player_leaves_state_alone() {
    let state = TicTacToe::from_position("XX. OO. ...".parse().unwrap(), Mark::X);
    let before = state.clone();
    let mut engine = NegamaxPlayer::new("Engine", SearchConfig::new(6));
    assert_eq!(engine.next_move(&state).unwrap(), TopRight);
    assert_eq!(state, before);
}

#[test]
fn test_session_retries_illegal_moves() {
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::X),
        scripted("Alice", &[Center, TopLeft, BottomRight]),
        scripted("Bob", &[Center, TopCenter, TopRight]),
    );
    let mut out = Vec::new();
    let outcome = session::run(&mut game, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Winner("Alice".to_string()));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Square 5 is not available"));
    assert!(text.ends_with("Alice wins!\n"));
}

#[test]
fn test_human_cannot_beat_engine() {
    let config = GameConfig::new(SearchConfig::new(9), FirstPlayer::Human);
    let input = Cursor::new("1\n2\n3\n4\n5\n6\n7\n8\n9\n".to_string());
    let human = HumanPlayer::new("Human", input, Vec::new());
    let mut game = session::human_vs_engine(&config, Box::new(human));

    assert_eq!(game.state().to_move(), session::HUMAN_MARK);
    let outcome = session::run(&mut game, &mut std::io::sink()).unwrap();
    assert_ne!(outcome, Outcome::Winner("Human".to_string()));
    assert!(game.state().is_terminal());
}

#[test]
fn test_engine_opens_when_configured() {
    let config = GameConfig::new(SearchConfig::new(2), FirstPlayer::Ai);
    let human = HumanPlayer::new("Human", Cursor::new(String::new()), std::io::sink());
    let mut game = session::human_vs_engine(&config, Box::new(human));

    assert_eq!(game.current_player(), "Computer");
    assert_eq!(game.state().to_move(), session::ENGINE_MARK);
    game.step().unwrap();
    assert!(matches!(
        game.step(),
        Err(SelectorError::PlayerFailed { ref player, .. }) if player == "Human"
    ));
}

#[test]
fn test_record_serializes_to_json() {
    let mut game = Orchestrator::new(
        TicTacToe::new(Mark::X),
        scripted("Alice", &[TopLeft, TopCenter, TopRight]),
        scripted("Bob", &[MiddleLeft, Center]),
    );
    game.play().unwrap();

    let json = serde_json::to_value(game.record().unwrap()).unwrap();
    assert_eq!(json["players"][1], "Bob");
    assert_eq!(json["outcome"]["Winner"], "Alice");
    assert_eq!(json["moves"].as_array().unwrap().len(), 5);
    assert_eq!(json["moves"][0]["mv"], "TopLeft");
}
