//! End-to-end session scenarios.
//!
//! These drive the engine only through its public API, the way an external
//! agent or training loop would.

use snek_engine::core::{Coord, Direction, GameConfig, GameError, PlayerId};
use snek_engine::game::{GameSession, GameStateBuilder, LOSS_VALUE};
use snek_engine::random_distinct_positions;
use snek_engine::GameRng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[test]
fn test_seven_by_seven_opening() {
    init_logging();
    let mut session = GameSession::new(GameConfig::new(7, 7, 2), 2024).unwrap();
    let state = session.reset();

    assert!(state.allowed_actions().len() <= 4);
    assert!(!state.allowed_actions().is_empty());
    assert_eq!(state.health().as_slice(), &[10, 10]);
    assert_eq!(state.turn_number().as_slice(), &[0, 0]);
    assert_eq!(state.active_player(), PlayerId::new(0));
    assert!(!state.is_end_game());
}

#[test]
fn test_legal_step_from_opening_is_not_terminal() {
    init_logging();
    let mut session = GameSession::new(GameConfig::new(7, 7, 2), 7).unwrap();
    let action = session.reset().allowed_action_indices().next().unwrap();

    let outcome = session.step(action).unwrap();

    // A length-1 snake on an open 7x7 board always has an exit.
    assert!(!outcome.terminal);
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.state.active_player(), PlayerId::new(1));
    assert_eq!(session.state(), &outcome.state);
    assert_eq!(session.current_player(), -1);
}

#[test]
fn test_players_alternate() {
    init_logging();
    let mut session = GameSession::new(GameConfig::new(9, 9, 3), 11).unwrap();

    let mut expected = PlayerId::new(0);
    for _ in 0..6 {
        assert_eq!(session.state().active_player(), expected);
        let action = session.state().allowed_action_indices().next().unwrap();
        let outcome = session.step(action).unwrap();
        if outcome.terminal {
            break;
        }
        expected = expected.next(3);
    }
}

#[test]
fn test_random_playout_terminates() {
    init_logging();
    let mut session = GameSession::new(GameConfig::new(7, 7, 2), 5).unwrap();
    let mut rng = GameRng::new(5);

    let mut plies = 0;
    loop {
        let legal: Vec<usize> = session.state().allowed_action_indices().collect();
        let action = *rng.choose(&legal).unwrap();
        let outcome = session.step(action).unwrap();
        plies += 1;
        if outcome.terminal {
            assert_eq!(outcome.value, -1);
            assert_eq!(outcome.state.value(), LOSS_VALUE);
            break;
        }
        assert!(plies < 10_000, "game never ended");
    }

    assert_eq!(session.step(0).unwrap_err(), GameError::GameOver);
}

// =============================================================================
// Terminal conditions
// =============================================================================

#[test]
fn test_boxed_in_corner_is_terminal() {
    init_logging();
    // Player 1 waits in the top-left corner; player 0 closes its last exit.
    let state = GameStateBuilder::new(GameConfig::new(7, 7, 2).with_food_spawn_interval(0))
        .snake([Coord::new(1, 1), Coord::new(1, 0)])
        .snake([Coord::new(0, 0)])
        .build()
        .unwrap();

    assert!(state.is_allowed(Direction::Left));
    let outcome = state.take_action(Direction::Left.index()).unwrap();

    assert!(outcome.terminal);
    assert_eq!(outcome.value, -1);
    assert!(outcome.state.allowed_actions().is_empty());
    assert_eq!(outcome.state.active_player(), PlayerId::new(1));
    assert_eq!(outcome.state.value(), (-1, -1, -1));
}

#[test]
fn test_starving_player_ends_game_on_its_turn() {
    init_logging();
    let state = GameStateBuilder::new(GameConfig::new(7, 7, 2).with_food_spawn_interval(0))
        .snake([Coord::new(3, 3)])
        .snake([Coord::new(5, 5)])
        .health(PlayerId::new(0), 1)
        .build()
        .unwrap();

    // Player 0 drops to zero health, but player 1 is next and can still move.
    let first = state.take_action(0).unwrap();
    assert!(!first.terminal);
    assert_eq!(first.state.health().as_slice(), &[0, 10]);

    // Back on player 0's turn the game is over.
    let second = first.state.take_action(0).unwrap();
    assert!(second.terminal);
    assert_eq!(second.state.active_player(), PlayerId::new(0));
    assert!(!second.state.allowed_actions().is_empty());
}

// =============================================================================
// Food
// =============================================================================

#[test]
fn test_food_spawns_on_tenth_move() {
    init_logging();
    let state = GameStateBuilder::new(GameConfig::new(7, 7, 1))
        .snake([Coord::new(3, 3)])
        .turn_number(PlayerId::new(0), 9)
        .seed(31)
        .build()
        .unwrap();
    assert_eq!(state.board().food_count(), 0);

    let next = state.take_action(Direction::Up.index()).unwrap().state;

    assert_eq!(next.turn_number()[PlayerId::new(0)], 10);
    assert_eq!(next.board().food_count(), 1);

    // No spawn on the eleventh move.
    let head = next.head(PlayerId::new(0)).unwrap();
    let action = next
        .allowed_actions()
        .iter()
        .copied()
        .find(|&d| !next.board().has_food(head.step(d)))
        .unwrap();
    let after = next.apply(action).unwrap().state;
    assert_eq!(after.board().food_count(), 1);
}

#[test]
fn test_two_player_food_spawns_when_player_zero_is_back_to_move() {
    init_logging();
    let state = GameStateBuilder::new(GameConfig::new(7, 7, 2))
        .snake([Coord::new(1, 1)])
        .snake([Coord::new(5, 5)])
        .turn_number(PlayerId::new(0), 9)
        .turn_number(PlayerId::new(1), 9)
        .seed(31)
        .build()
        .unwrap();
    assert_eq!(state.board().food_count(), 0);

    // Player 0's tenth move hands the turn to player 1: no spawn yet.
    let after_zero = state.take_action(Direction::Up.index()).unwrap().state;
    assert_eq!(after_zero.turn_number().as_slice(), &[10, 9]);
    assert_eq!(after_zero.active_player(), PlayerId::new(1));
    assert_eq!(after_zero.board().food_count(), 0);

    // Player 1's move returns the turn to player 0 at counter 10: one spawn.
    let after_one = after_zero.take_action(Direction::Down.index()).unwrap().state;
    assert_eq!(after_one.turn_number().as_slice(), &[10, 10]);
    assert_eq!(after_one.active_player(), PlayerId::new(0));
    assert_eq!(after_one.board().food_count(), 1);
    assert_eq!(after_one.id().as_bytes(), after_one.binary());
}

#[test]
fn test_food_spawn_is_noop_on_full_food_layer() {
    init_logging();
    let all_cells: Vec<Coord> = (0..2)
        .flat_map(|y| (0..2).map(move |x| Coord::new(x, y)))
        .collect();
    let state = GameStateBuilder::new(GameConfig::new(2, 2, 1))
        .snake([Coord::new(0, 0)])
        .foods(all_cells)
        .build()
        .unwrap();

    assert_eq!(state.board().food_count(), 4);
}

#[test]
fn test_eating_restores_health_in_session_play() {
    init_logging();
    let state = GameStateBuilder::new(GameConfig::new(5, 5, 1).with_food_spawn_interval(0))
        .snake([Coord::new(0, 0)])
        .food(Coord::new(2, 0))
        .build()
        .unwrap();

    let one = state.take_action(Direction::Right.index()).unwrap().state;
    assert_eq!(one.health()[PlayerId::new(0)], 9);

    let two = one.take_action(Direction::Right.index()).unwrap().state;
    assert_eq!(two.health()[PlayerId::new(0)], 10);
    assert_eq!(two.snake(PlayerId::new(0)).len(), 3);
    assert_eq!(two.board().food_count(), 0);
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn test_capacity_exceeded_does_not_hang() {
    let mut rng = GameRng::new(0);
    let err = random_distinct_positions(7 * 7 + 1, 7, 7, &mut rng).unwrap_err();
    assert!(matches!(err, GameError::CapacityExceeded { requested: 50, available: 49 }));
}

#[test]
fn test_session_rejects_oversized_food_batch() {
    let config = GameConfig::new(3, 3, 1).with_initial_food(10);
    assert!(matches!(
        GameSession::new(config, 0),
        Err(GameError::CapacityExceeded { requested: 10, available: 9 })
    ));
}

#[test]
fn test_every_cell_filled_with_players() {
    // Four players fill a 2x2 grid: nobody can move.
    let session = GameSession::new(GameConfig::new(2, 2, 4), 1).unwrap();
    assert!(session.state().is_end_game());
    assert!(session.state().allowed_actions().is_empty());
}
