//! Cheese Dash entry point
//!
//! Runs a headless session: the demo autopilot plays at the reference frame
//! rate until the game is won or lost. A graphical host drives the same
//! `Game` with its own `Presenter` and input wiring.

use cheese_dash::sim::{Game, GameEvent, Phase};
use cheese_dash::{RecordingPresenter, Tuning};

/// Give up on a session that never ends (an autopilot that never gets hit)
const MAX_FRAMES: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cheese Dash (headless) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::with_seed(Tuning::default(), RecordingPresenter::new(), seed);
    if let Err(e) = game.start() {
        log::error!("Failed to start: {}", e);
        return;
    }

    let mut jumps = 0u32;
    while game.phase() == Phase::Playing && game.state.frame < MAX_FRAMES {
        if game.autopilot_wants_jump() && game.jump() {
            jumps += 1;
        }
        game.step(1.0);

        for event in game.drain_events() {
            if let GameEvent::HazardHit { health } = event {
                log::info!("Frame {}: hit! {} hearts left", game.state.frame, health);
            }
        }
    }

    match game.phase() {
        Phase::Won => log::info!("Won with score {} ({} jumps)", game.state.score, jumps),
        Phase::Lost => log::info!("Lost with score {} ({} jumps)", game.state.score, jumps),
        phase => log::warn!(
            "Stopped after {} frames still in {:?}, score {}",
            game.state.frame,
            phase,
            game.state.score
        ),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts construct `Game` themselves
}
