//! Score, level, health and the end of the game

use super::collision::intersects;
use super::state::{GameEvent, Phase, SimulationState};
use crate::presenter::{Presenter, Screen};
use crate::score_text;
use crate::tuning::Tuning;

/// Push the score text to the display (every frame, changed or not)
pub fn refresh_score_text<P: Presenter>(state: &mut SimulationState, presenter: &mut P) {
    state.score_text = score_text(state.score);
    if let Some(sprite) = state.score_text_sprite {
        presenter.set_text(sprite, &state.score_text);
    }
}

/// Award a point; level up on every multiple of `points_per_level`
pub fn collect_pickup(state: &mut SimulationState, tuning: &Tuning) {
    state.score += 1;
    state.events.push(GameEvent::PickupCollected { score: state.score });
    log::debug!("Pickup collected, score {}", state.score);

    if state.score % tuning.points_per_level == 0 {
        state.level += 1;
        state.events.push(GameEvent::LevelUp { level: state.level });
        log::info!("Level up: {} (score {})", state.level, state.score);
    }
}

/// Lose one health and the oldest heart; end the game at zero
pub fn take_hit<P: Presenter>(state: &mut SimulationState, tuning: &Tuning, presenter: &mut P) {
    if state.health == 0 {
        return;
    }
    state.health -= 1;
    if !state.hearts.is_empty() {
        let heart = state.hearts.remove(0);
        presenter.detach(heart);
    }
    state.events.push(GameEvent::HazardHit {
        health: state.health,
    });
    log::debug!("Hit by hazard, health {}", state.health);

    if state.health == 0 {
        end_game(state, tuning, presenter);
    }
}

/// Leave Playing for Won or Lost depending on score
pub fn end_game<P: Presenter>(state: &mut SimulationState, tuning: &Tuning, presenter: &mut P) {
    if !state.is_playing() {
        return;
    }
    let won = state.score >= tuning.win_score;
    state.phase = if won { Phase::Won } else { Phase::Lost };
    presenter.show_screen(if won { Screen::Win } else { Screen::Fail });
    state.events.push(GameEvent::GameOver {
        won,
        score: state.score,
    });
    log::info!(
        "Game over after {} frames: {:?} with score {} (level {})",
        state.frame,
        state.phase,
        state.score,
        state.level
    );
}

/// Collect every live pickup touching the player
pub fn resolve_pickups(state: &mut SimulationState, tuning: &Tuning) {
    let Some(player) = state.player.as_ref() else {
        return;
    };
    let player_box = player.bounds();

    for i in 0..state.pickups.len() {
        let pickup = &mut state.pickups[i];
        if pickup.dead || !intersects(&player_box, &pickup.bounds(), tuning.pickup_tolerance) {
            continue;
        }
        pickup.dead = true;
        collect_pickup(state, tuning);
    }
}

/// Apply damage for every live hazard touching the player.
///
/// Checks stop as soon as the game ends.
pub fn resolve_hazards<P: Presenter>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
) {
    let Some(player) = state.player.as_ref() else {
        return;
    };
    let player_box = player.bounds();

    for i in 0..state.hazards.len() {
        if !state.is_playing() {
            break;
        }
        let hazard = &mut state.hazards[i];
        if hazard.dead || !intersects(&player_box, &hazard.bounds(), tuning.hazard_tolerance) {
            continue;
        }
        hazard.dead = true;
        take_hit(state, tuning, presenter);
    }
}
