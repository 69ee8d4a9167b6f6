//! Game rules exercised the way the engine drives them

use std::collections::HashSet;

use funzone::core::games::runner::PLAYER_SIZE;
use funzone::core::games::snake::{GRID_COLS, GRID_ROWS};
use funzone::core::games::{CodeBreaker, Hangman, Runner};
use funzone::core::{GameModule, View};
use funzone::engine::{create_module, GameHost, HostStatus, ModuleOptions};
use funzone::types::{Action, Direction, GameId, SessionState, FRAME_MS, OPPONENT_DELAY_MS, SNAKE_STEP_MS};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Up)),
        Just(Some(Direction::Down)),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
    ]
}

proptest! {
    #[test]
    fn prop_snake_stays_on_the_board(seed in any::<u64>(), steers in prop::collection::vec(direction(), 1..120)) {
        let mut host = GameHost::new(create_module(GameId::Snake, seed, ModuleOptions::default()));
        host.start().unwrap();

        for steer in steers {
            host.step(SNAKE_STEP_MS as u64, steer.map(Action::Steer));
            let View::Snake(view) = &host.snapshot().view else {
                panic!("expected snake view");
            };
            if host.is_running() {
                let cells: HashSet<_> = view.body.iter().map(|c| (c.x, c.y)).collect();
                prop_assert_eq!(cells.len(), view.body.len());
                for cell in &view.body {
                    prop_assert!((0..GRID_COLS).contains(&cell.x) && (0..GRID_ROWS).contains(&cell.y));
                }
                prop_assert!(!view.body.contains(&view.food));
            } else {
                prop_assert_eq!(host.status(), HostStatus::Finished(SessionState::Lost));
                break;
            }
        }
    }
}

#[test]
fn test_runner_lands_on_the_ground() {
    let mut runner = Runner::new(3);
    runner.start();
    let rest_y = runner.actor().pos.y;

    runner.handle_action(Action::Jump);
    runner.tick(FRAME_MS).unwrap();
    assert!(runner.actor().pos.y < rest_y);
    assert!(!runner.actor().grounded);

    for _ in 0..80 {
        runner.tick(FRAME_MS).unwrap();
        assert!(runner.actor().pos.y + PLAYER_SIZE <= funzone::core::games::runner::GROUND_Y + f32::EPSILON);
    }
    assert!(runner.actor().grounded);
    assert_eq!(runner.actor().pos.y, rest_y);
    assert_eq!(runner.actor().rotation % 90.0, 0.0);
}

#[test]
fn test_runner_ignores_jump_while_airborne() {
    let mut runner = Runner::new(3);
    runner.start();
    runner.handle_action(Action::Jump);
    runner.tick(FRAME_MS).unwrap();
    let vel = runner.actor().vel.y;

    runner.handle_action(Action::Jump);
    runner.tick(FRAME_MS).unwrap();
    assert!(runner.actor().vel.y > vel, "second jump must not reset velocity");
}

#[test]
fn test_hangman_scores() {
    let mut clean = Hangman::with_word(1, "CACHE");
    clean.start();
    for c in ['C', 'A', 'H', 'E'] {
        clean.handle_action(Action::Guess(c));
    }
    assert_eq!(clean.state(), SessionState::Won);
    assert_eq!(clean.current_score(), 85);

    let mut sloppy = Hangman::with_word(1, "CACHE");
    sloppy.start();
    for c in ['Z', 'C', 'A', 'H', 'E'] {
        sloppy.handle_action(Action::Guess(c));
    }
    assert_eq!(sloppy.state(), SessionState::Won);
    assert_eq!(sloppy.current_score(), 75);
}

#[test]
fn test_code_breaker_through_the_host() {
    let mut host = GameHost::new(Box::new(CodeBreaker::new(0)));
    host.start().unwrap();
    for _ in 0..20 {
        host.step(1000, None);
    }
    assert_eq!(host.snapshot().seconds_left(), Some(40));

    for c in "10".chars() {
        host.step(0, Some(Action::Type(c)));
    }
    host.step(0, Some(Action::Submit));
    assert_eq!(host.snapshot().score, 200);

    // Clock is paused while the next level loads
    host.step(999, None);
    assert_eq!(host.snapshot().seconds_left(), Some(40));
    host.step(1, None);
    assert_eq!(host.snapshot().seconds_left(), Some(60));
}

#[test]
fn test_code_breaker_penalties_to_zero_end_the_round_at_once() {
    let mut host = GameHost::new(Box::new(CodeBreaker::new(0)));
    host.start().unwrap();
    let mut report = None;
    for _ in 0..12 {
        host.step(0, Some(Action::Type('0')));
        report = report.or(host.step(0, Some(Action::Submit)));
    }
    let report = report.expect("clock ran out");
    assert_eq!(report.outcome, SessionState::Lost);
    assert_eq!(host.status(), HostStatus::Finished(SessionState::Lost));

    for c in "10".chars() {
        host.step(0, Some(Action::Type(c)));
    }
    assert_eq!(host.step(0, Some(Action::Submit)), None);
    assert_eq!(host.snapshot().score, 0);
    assert_eq!(host.until_next_event_ms(), None);
}

fn play_tictactoe(seed: u64) -> Vec<funzone::core::GameSnapshot> {
    let mut host = GameHost::new(create_module(GameId::TicTacToe, seed, ModuleOptions::default()));
    host.start().unwrap();
    let mut frames = Vec::new();
    for cell in [4, 0, 8, 2, 6, 1, 3, 5, 7] {
        host.step(0, Some(Action::Pick(cell)));
        host.step(OPPONENT_DELAY_MS as u64, None);
        frames.push(host.snapshot().clone());
        if !host.is_running() {
            break;
        }
    }
    frames
}

#[test]
fn test_tictactoe_is_deterministic_per_seed() {
    assert_eq!(play_tictactoe(11), play_tictactoe(11));
    let last = play_tictactoe(11).pop().unwrap();
    assert!(last.state.is_terminal());
}
