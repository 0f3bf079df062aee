//! Game session integration tests.
//!
//! These tests play whole games through the public API and check
//! registration, rotation, termination, and the final outcome.

use lowball::{GameError, GameSession, Outcome, Phase, PlayerId, Progress, ValidationError};

fn session_with(names: &[&str]) -> GameSession {
    let mut session = GameSession::new();
    for name in names {
        session.add_player(name).unwrap();
    }
    session
}

fn totals(session: &GameSession) -> Vec<u64> {
    session.players().iter().map(|p| p.total()).collect()
}

// =============================================================================
// Registration
// =============================================================================

/// Players are kept in the order they registered.
#[test]
fn test_registration_order() {
    let names = ["Dana", "Alice", "Carl", "Bob", "Eve"];
    let session = session_with(&names);

    assert_eq!(session.player_count(), names.len());
    let registered: Vec<_> = session.players().iter().map(|p| p.name()).collect();
    assert_eq!(registered, names);
    for (i, player) in session.players().iter().enumerate() {
        assert_eq!(player.id(), PlayerId::new(i as u8));
    }
}

/// Exact and whitespace-padded repeats of a name are rejected.
#[test]
fn test_duplicate_names_rejected() {
    let mut session = session_with(&["Alice"]);

    for attempt in ["Alice", "  Alice  "] {
        assert_eq!(
            session.add_player(attempt),
            Err(GameError::Validation(ValidationError::DuplicateName("Alice".into())))
        );
    }
    assert_eq!(session.player_count(), 1);
}

// =============================================================================
// Starting
// =============================================================================

/// Starting needs two players and a positive set count.
#[test]
fn test_start_preconditions() {
    let mut session = GameSession::new();
    assert!(matches!(
        session.start_game(3),
        Err(GameError::Validation(ValidationError::NotEnoughPlayers { .. }))
    ));

    session.add_player("Alice").unwrap();
    assert!(session.start_game(3).unwrap_err().is_validation());

    session.add_player("Bob").unwrap();
    for sets in [0, -4] {
        assert_eq!(
            session.start_game(sets),
            Err(GameError::Validation(ValidationError::InvalidSetCount))
        );
    }
    assert_eq!(session.phase(), Phase::Setup);

    assert!(session.start_game(3).is_ok());
    assert_eq!(session.phase(), Phase::InProgress);
}

/// A session cannot be started twice.
#[test]
fn test_start_only_once() {
    let mut session = session_with(&["Alice", "Bob"]);
    session.start_game(1).unwrap();

    assert!(session.start_game(1).unwrap_err().is_invalid_state());
}

// =============================================================================
// Turns
// =============================================================================

/// k turns with k players return to the first player and advance the set.
#[test]
fn test_round_robin() {
    let mut session = session_with(&["A", "B", "C", "D"]);
    session.start_game(5).unwrap();

    for set in 1..=3u32 {
        assert_eq!(session.current_set(), set);
        assert_eq!(session.current_player(), PlayerId::new(0));
        for turn in 0..4u8 {
            assert_eq!(session.current_player(), PlayerId::new(turn));
            session.submit_score(1).unwrap();
        }
    }
    assert_eq!(session.current_set(), 4);
}

/// The current turn descriptor follows the rotation.
#[test]
fn test_current_turn_descriptor() {
    let mut session = session_with(&["Alice", "Bob"]);
    session.start_game(2).unwrap();

    let turn = session.current_turn().unwrap();
    assert_eq!((turn.set, turn.max_sets, turn.name.as_str()), (1, 2, "Alice"));

    session.submit_score(3).unwrap();
    session.submit_score(3).unwrap();
    let turn = session.current_turn().unwrap();
    assert_eq!((turn.set, turn.max_sets, turn.name.as_str()), (2, 2, "Alice"));
}

/// Totals equal the sum of scores after every turn.
#[test]
fn test_totals_match_scores() {
    let mut session = session_with(&["Alice", "Bob", "Carol"]);
    session.start_game(3).unwrap();

    for points in [7, 0, 12, 3, 3, 9, 1, 40, 2] {
        let before = session.current_player();
        session.submit_score(points).unwrap();

        let player = &session.players()[before.index()];
        let sum: u64 = player.scores().iter().map(|&s| u64::from(s)).sum();
        assert_eq!(player.total(), sum);
    }
    assert_eq!(totals(&session), vec![11, 43, 23]);
}

/// The game finishes after exactly max_sets * players turns.
#[test]
fn test_termination_count() {
    for (players, sets) in [(2usize, 1i64), (3, 4), (5, 2)] {
        let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut session = session_with(&refs);
        session.start_game(sets).unwrap();

        let expected = players as u64 * sets as u64;
        for taken in 1..=expected {
            let progress = session.submit_score(1).unwrap();
            let finished = matches!(progress, Progress::Finished(_));
            assert_eq!(finished, taken == expected, "turn {taken} of {expected}");
        }
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.turns_taken(), expected);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Two players, one set: the lower score wins.
#[test]
fn test_scenario_single_winner() {
    let mut session = session_with(&["Alice", "Bob"]);
    session.start_game(1).unwrap();

    assert!(matches!(session.submit_score(5).unwrap(), Progress::Next(ref t) if t.name == "Bob"));
    let progress = session.submit_score(3).unwrap();

    let expected = Outcome::Winner {
        name: "Bob".into(),
        total: 3,
    };
    assert_eq!(progress, Progress::Finished(expected.clone()));
    assert_eq!(session.outcome(), Some(&expected));
}

/// Equal totals across two sets tie.
#[test]
fn test_scenario_tie() {
    let mut session = session_with(&["Alice", "Bob"]);
    session.start_game(2).unwrap();

    for _ in 0..4 {
        session.submit_score(5).unwrap();
    }

    let outcome = session.outcome().unwrap();
    assert!(outcome.is_tie());
    assert_eq!(outcome.winners(), &["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(outcome.min_total(), 10);
}

/// Negative points are rejected without touching any total.
#[test]
fn test_scenario_invalid_points() {
    let mut session = session_with(&["Alice", "Bob"]);
    session.start_game(2).unwrap();
    session.submit_score(4).unwrap();

    let before = totals(&session);
    assert_eq!(
        session.submit_score(-1),
        Err(GameError::Validation(ValidationError::InvalidPoints))
    );
    assert_eq!(totals(&session), before);
    assert_eq!(session.current_player(), PlayerId::new(1));
}

/// Scoring before the game starts is misuse.
#[test]
fn test_scenario_score_during_setup() {
    let mut session = session_with(&["Alice", "Bob"]);

    let err = session.submit_score(5).unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(session.phase(), Phase::Setup);
    assert!(session.players().iter().all(|p| p.scores().is_empty()));
}

/// Nothing changes after the game is finished.
#[test]
fn test_finished_is_frozen() {
    let mut session = session_with(&["Alice", "Bob"]);
    session.start_game(1).unwrap();
    session.submit_score(2).unwrap();
    session.submit_score(1).unwrap();

    let before = session.players_snapshot();
    assert!(session.submit_score(0).unwrap_err().is_invalid_state());
    assert!(session.add_player("Carol").unwrap_err().is_invalid_state());
    assert!(session.start_game(1).unwrap_err().is_invalid_state());
    assert_eq!(session.players_snapshot(), before);
}

/// Snapshots are available in every phase and never change afterwards.
#[test]
fn test_snapshots_in_every_phase() {
    let mut session = GameSession::new();
    assert!(session.players_snapshot().is_empty());

    session.add_player("Alice").unwrap();
    session.add_player("Bob").unwrap();
    let setup = session.players_snapshot();
    assert!(setup.iter().all(|p| p.scores.is_empty() && p.total == 0));

    session.start_game(1).unwrap();
    session.submit_score(6).unwrap();
    let playing = session.players_snapshot();
    assert_eq!(playing[0].total, 6);

    session.submit_score(2).unwrap();
    assert_eq!(session.players_snapshot()[1].total, 2);
    assert_eq!(playing[1].total, 0);
    assert!(setup.iter().all(|p| p.total == 0));
}

/// Independent sessions do not share state.
#[test]
fn test_sessions_are_independent() {
    let mut first = session_with(&["Alice", "Bob"]);
    let second = session_with(&["Alice", "Bob"]);

    first.start_game(1).unwrap();
    first.submit_score(9).unwrap();

    assert_eq!(second.phase(), Phase::Setup);
    assert_eq!(totals(&second), vec![0, 0]);
}
