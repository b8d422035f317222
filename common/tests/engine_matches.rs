use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use common::tictactoe::{GameController, GameMode, GameResult, Status};
use common::{GameError, InvalidMove};

fn play_random_match(seed: u64) -> GameResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut controller = GameController::new();
    controller.start(GameMode::HumanVsEngine).unwrap();

    while controller.status() == Status::Running {
        if controller.is_engine_turn_pending() {
            controller.apply_engine_move().unwrap();
        } else {
            let empty = controller.current_board().empty_cells();
            let index = *empty.choose(&mut rng).unwrap();
            controller.apply_human_move(index).unwrap();
        }
    }

    controller.result().unwrap()
}

#[test]
fn test_engine_never_loses_to_random_human() {
    for seed in 0..200 {
        let result = play_random_match(seed);
        assert_ne!(result, GameResult::XWins, "engine lost with seed {}", seed);
    }
}

#[test]
fn test_same_human_moves_give_same_match() {
    for seed in [1, 7, 42] {
        assert_eq!(play_random_match(seed), play_random_match(seed));
    }
}

#[test]
fn test_engine_punishes_weak_play() {
    let mut controller = GameController::new();
    controller.start(GameMode::HumanVsEngine).unwrap();

    // X keeps taking the lowest free cell, which lets O complete a line.
    while controller.status() == Status::Running {
        if controller.is_engine_turn_pending() {
            controller.apply_engine_move().unwrap();
        } else {
            let index = controller.current_board().empty_cells()[0];
            controller.apply_human_move(index).unwrap();
        }
    }

    assert_eq!(controller.result(), Some(GameResult::OWins));
}

#[test]
fn test_invalid_move_does_not_consume_turn() {
    let mut controller = GameController::new();
    controller.start(GameMode::HumanVsEngine).unwrap();
    controller.apply_human_move(4).unwrap();
    controller.apply_engine_move().unwrap();
    let before = *controller.current_board();

    let result = controller.apply_human_move(4);

    assert_eq!(result, Err(GameError::InvalidMove(InvalidMove::Occupied(4))));
    assert_eq!(*controller.current_board(), before);
    assert!(!controller.is_engine_turn_pending());
}
