//! Whole-session tests: seeded games played to the end

use cheese_dash::sim::{Game, GameEvent, Phase};
use cheese_dash::{RecordingPresenter, SpriteKind, Tuning};
use proptest::prelude::*;

const MAX_FRAMES: u64 = 20_000;

fn new_game(seed: u64) -> Game<RecordingPresenter> {
    let mut game = Game::with_seed(Tuning::default(), RecordingPresenter::new(), seed);
    game.start().unwrap();
    game
}

/// Play until the game ends, checking invariants after every frame
fn play(game: &mut Game<RecordingPresenter>, autopilot: bool) {
    let mut last_score = 0;
    let mut last_level = 0;
    while game.phase() == Phase::Playing && game.state.frame < MAX_FRAMES {
        if autopilot && game.autopilot_wants_jump() {
            game.jump();
        }
        game.step(1.0);

        let state = &game.state;
        assert_eq!(state.hearts.len(), state.health as usize);
        assert_eq!(
            game.presenter.attached_count(|k| k == SpriteKind::Heart),
            state.health as usize
        );
        assert!(state.score >= last_score);
        assert!(state.level >= last_level);
        assert_eq!(state.level, state.score / 10);
        assert_eq!(state.ground.len(), 21);
        assert!(state.pickups.iter().all(|e| !e.dead));
        assert!(state.hazards.iter().all(|e| !e.dead));
        assert!(state.clouds.iter().all(|e| !e.dead));

        let player = state.player.as_ref().unwrap();
        assert!(player.pos.y <= player.baseline);
        assert_eq!(player.pos.y == player.baseline, player.is_grounded());

        last_score = state.score;
        last_level = state.level;
    }
}

#[test]
fn idle_player_loses_to_hazards() {
    let mut game = new_game(2024);
    play(&mut game, false);

    assert!(game.phase().is_terminal());
    assert_eq!(game.state.health, 0);
    assert!(game.state.hearts.is_empty());
    // Three hazards need at least three spawn cooldowns
    assert!(game.state.frame > 300);

    let events = game.drain_events();
    let hits = events
        .iter()
        .filter(|e| matches!(e, GameEvent::HazardHit { .. }))
        .count();
    assert_eq!(hits, 3);
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
}

#[test]
fn autopilot_outlasts_idle_player() {
    let mut idle = new_game(77);
    play(&mut idle, false);

    let mut pilot = new_game(77);
    play(&mut pilot, true);

    assert!(pilot.state.frame >= idle.state.frame);
}

#[test]
fn terminal_phase_matches_score() {
    for seed in [1, 2, 3] {
        let mut game = new_game(seed);
        play(&mut game, true);
        match game.phase() {
            Phase::Won => assert!(game.state.score >= 40),
            Phase::Lost => assert!(game.state.score < 40),
            // The autopilot may survive the whole budget
            Phase::Playing => assert_eq!(game.state.frame, MAX_FRAMES),
            Phase::Loading => unreachable!(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn invariants_hold_for_any_seed(seed in any::<u64>(), autopilot in any::<bool>()) {
        let mut game = new_game(seed);
        play(&mut game, autopilot);
        prop_assert_eq!(game.state.hearts.len(), game.state.health as usize);
        if autopilot {
            prop_assert!(game.phase() != Phase::Loading);
        } else {
            prop_assert!(game.phase().is_terminal());
        }
    }

    #[test]
    fn same_seed_same_game(seed in any::<u64>(), jump_every in 20u64..80) {
        let run = |seed| {
            let mut game = new_game(seed);
            while game.phase() == Phase::Playing && game.state.frame < 2_000 {
                if game.state.frame % jump_every == 0 {
                    game.jump();
                }
                game.step(1.0);
            }
            (game.state.frame, game.state.score, game.state.health, game.drain_events())
        };
        prop_assert_eq!(run(seed), run(seed));
    }
}
