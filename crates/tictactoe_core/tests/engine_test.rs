//! Tests for the game engine lifecycle.

use tictactoe_core::{
    Cell, GameEngine, GameError, Marker, Outcome, Phase, Position, RoundOutcome, Rejection,
    rules::LINES,
};

fn started() -> GameEngine {
    let mut game = GameEngine::new();
    game.init_game("Alice", "Bob");
    game
}

/// Plays indices in order, asserting every move is accepted.
fn play_all(game: &mut GameEngine, indices: &[usize]) -> RoundOutcome {
    let mut last = None;
    for &index in indices {
        let outcome = game.play_round(index).expect("index in range");
        assert!(!outcome.is_rejected(), "move {} rejected: {:?}", index, outcome);
        last = Some(outcome);
    }
    last.expect("at least one move")
}

#[test]
fn test_setup_phase_before_init() {
    let mut game = GameEngine::new();
    assert_eq!(game.phase(), Phase::Setup);
    assert!(game.current_player().is_none());
    assert!(!game.is_over());

    let outcome = game.play(Position::Center);
    assert_eq!(outcome, RoundOutcome::Rejected(Rejection::NotStarted));
    assert!(game.board().is_empty(Position::Center));
}

#[test]
fn test_init_game_seats_player_one_as_x() {
    let game = started();
    let current = game.current_player().expect("started");
    assert_eq!(current.name(), "Alice");
    assert_eq!(*current.marker(), Marker::X);
    assert_eq!(game.phase(), Phase::InProgress);

    let [one, two] = game.players().expect("started");
    assert_eq!((one.name().as_str(), *one.marker()), ("Alice", Marker::X));
    assert_eq!((two.name().as_str(), *two.marker()), ("Bob", Marker::O));
    assert_eq!(game.player(Marker::O).map(|p| p.name().as_str()), Some("Bob"));
}

#[test]
fn test_turn_alternates_only_on_accepted_moves() {
    let mut game = started();

    assert_eq!(
        game.play_round(0),
        Ok(RoundOutcome::Continue { next: Marker::O })
    );
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Bob"));

    // Same cell again: rejected, no state change.
    let before = game.board().clone();
    assert_eq!(
        game.play_round(0),
        Ok(RoundOutcome::Rejected(Rejection::Occupied(Position::TopLeft)))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Bob"));
    assert_eq!(game.history(), &[Position::TopLeft]);

    assert_eq!(
        game.play_round(4),
        Ok(RoundOutcome::Continue { next: Marker::X })
    );
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Alice"));
}

#[test]
fn test_row_win_example() {
    let mut game = started();
    let outcome = play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(outcome, RoundOutcome::Finished(Outcome::Winner(Marker::X)));
    assert!(game.is_over());
    assert_eq!(game.outcome(), Some(Outcome::Winner(Marker::X)));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let x = Cell::Marked(Marker::X);
    let o = Cell::Marked(Marker::O);
    let e = Cell::Empty;
    assert_eq!(game.board().cells(), &[x, x, x, o, o, e, e, e, e]);
}

#[test]
fn test_tie_example() {
    let mut game = started();
    // X: 0, 1, 5, 6, 8   O: 2, 3, 4, 7
    let outcome = play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(outcome, RoundOutcome::Finished(Outcome::Tie));
    assert!(game.is_over());
    assert_eq!(game.winning_line(), None);
    assert!(game.board().is_full());
}

#[test]
fn test_win_on_last_cell_beats_tie() {
    let mut game = started();
    // X: 0, 2, 4, 7, 8 (diagonal on the ninth move)   O: 1, 3, 5, 6
    let outcome = play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert_eq!(outcome, RoundOutcome::Finished(Outcome::Winner(Marker::X)));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_every_line_wins_for_x() {
    for line in LINES {
        let mut game = started();
        let lines: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
        // O plays the first two free cells that are not on X's line and do
        // not complete a line of their own.
        let mut spare = Position::ALL
            .iter()
            .map(|p| p.to_index())
            .filter(|i| !lines.contains(i));
        let mut outcome = None;
        for &x in &lines {
            outcome = Some(game.play_round(x).expect("in range"));
            if game.is_over() {
                break;
            }
            let o = spare.next().expect("spare cell");
            let _ = game.play_round(o).expect("in range");
        }
        assert_eq!(
            outcome,
            Some(RoundOutcome::Finished(Outcome::Winner(Marker::X))),
            "line {:?}",
            line
        );
        assert_eq!(game.winning_line(), Some(line));
    }
}

#[test]
fn test_o_can_win() {
    let mut game = started();
    // X: 0, 1, 8   O takes the anti-diagonal 2, 4, 6.
    let outcome = play_all(&mut game, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(outcome, RoundOutcome::Finished(Outcome::Winner(Marker::O)));
    assert_eq!(game.player(Marker::O).map(|p| p.name().as_str()), Some("Bob"));
}

#[test]
fn test_no_moves_after_finish() {
    let mut game = started();
    let _ = play_all(&mut game, &[0, 3, 1, 4, 2]);
    let board = game.board().clone();
    let history = game.history().to_vec();

    for index in 0..9 {
        assert_eq!(
            game.play_round(index),
            Ok(RoundOutcome::Rejected(Rejection::GameOver))
        );
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.history(), history.as_slice());
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let mut game = started();
    assert_eq!(game.play_round(9), Err(GameError::OutOfBounds { index: 9 }));
    assert_eq!(
        game.play_round(usize::MAX),
        Err(GameError::OutOfBounds { index: usize::MAX })
    );
    assert!(game.history().is_empty());
    assert_eq!(game.current_player().map(|p| *p.marker()), Some(Marker::X));
}

#[test]
fn test_reinit_resets_match() {
    let mut game = started();
    let _ = play_all(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.is_over());

    game.init_game("Carol", "Dave");
    assert_eq!(game.phase(), Phase::InProgress);
    assert!(!game.is_over());
    assert_eq!(game.outcome(), None);
    assert!(game.history().is_empty());
    assert_eq!(game.valid_moves().len(), 9);
    assert_eq!(game.current_player().map(|p| p.name().as_str()), Some("Carol"));
}

#[test]
fn test_independent_engines() {
    let mut first = started();
    let second = started();
    let _ = first.play(Position::Center);
    assert!(!first.board().is_empty(Position::Center));
    assert!(second.board().is_empty(Position::Center));
}

#[test]
fn test_round_outcome_serializes() {
    let json = serde_json::to_value(RoundOutcome::Finished(Outcome::Winner(Marker::X)))
        .expect("serializable");
    assert_eq!(json, serde_json::json!({ "Finished": { "Winner": "X" } }));

    let json = serde_json::to_value(RoundOutcome::Continue { next: Marker::O })
        .expect("serializable");
    assert_eq!(json, serde_json::json!({ "Continue": { "next": "O" } }));
}
