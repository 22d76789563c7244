//! Entity spawning
//!
//! Each category keeps its own cooldown counter. Once the counter exceeds
//! the category's threshold, every frame rolls against its spawn chance.
//! A spawn resets the counter to zero; any other frame increments it.

use glam::Vec2;

use super::random::RandomSource;
use super::state::{Category, Entity, GameEvent, SimulationState};
use crate::presenter::{Presenter, SpriteKind};
use crate::tuning::Tuning;

/// Run the spawn policy for every category, in frame order
pub fn spawn_all<P: Presenter, R: RandomSource>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
    rng: &mut R,
) {
    for category in Category::ALL {
        spawn_category(state, tuning, presenter, rng, category);
    }
}

/// Roll for one category. Returns the new entity's ID if it spawned.
///
/// Randomness is only drawn once the cooldown has elapsed.
pub fn spawn_category<P: Presenter, R: RandomSource>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
    rng: &mut R,
    category: Category,
) -> Option<u32> {
    let rules = tuning.category(category);
    let eligible = state.cooldowns.get(category) > rules.spawn_threshold;

    if eligible && rng.next_f32() < rules.spawn_chance {
        *state.cooldowns.get_mut(category) = 0;
        Some(spawn_entity(state, tuning, presenter, rng, category))
    } else {
        *state.cooldowns.get_mut(category) += 1;
        None
    }
}

/// Create an entity at the right edge of the field and put it on screen
fn spawn_entity<P: Presenter, R: RandomSource>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
    rng: &mut R,
    category: Category,
) -> u32 {
    let x = tuning.screen_width;
    let (kind, y) = match category {
        Category::Pickup => {
            let raised = rng.next_f32() < tuning.pickup_raised_chance;
            let lift = if raised {
                tuning.pickup_raised_height
            } else {
                0.0
            };
            (
                SpriteKind::Pickup,
                tuning.screen_height - tuning.pickup_lane_offset - lift,
            )
        }
        Category::Hazard => (
            SpriteKind::Hazard,
            tuning.screen_height - tuning.hazard_lane_offset,
        ),
        Category::Cloud => {
            let variant = if rng.next_f32() > 0.5 { 1 } else { 2 };
            let y = rng.next_f32() * tuning.cloud_band;
            (SpriteKind::Cloud { variant }, y)
        }
    };

    let pos = Vec2::new(x, y);
    let sprite = presenter.create_sprite(kind, pos);
    presenter.attach(sprite);
    if kind.is_animated() {
        presenter.play(sprite);
    }

    let id = state.next_entity_id();
    state.entities_mut(category).push(Entity {
        id,
        category,
        sprite,
        pos,
        size: tuning.category(category).sprite.size(),
        dead: false,
    });
    state.events.push(GameEvent::Spawned { category, id });
    log::debug!("Spawned {:?} #{} at ({}, {})", category, id, x, y);

    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::RecordingPresenter;
    use crate::sim::random::ScriptedRandom;

    fn setup() -> (SimulationState, Tuning, RecordingPresenter) {
        let tuning = Tuning::default();
        (SimulationState::new(&tuning), tuning, RecordingPresenter::new())
    }

    #[test]
    fn test_hazard_below_threshold_never_spawns() {
        let (mut state, tuning, mut presenter) = setup();
        let mut rng = ScriptedRandom::constant(0.0);
        state.cooldowns.hazard = 99;

        let spawned = spawn_category(
            &mut state,
            &tuning,
            &mut presenter,
            &mut rng,
            Category::Hazard,
        );
        assert!(spawned.is_none());
        assert_eq!(rng.taken, 0);
        assert_eq!(state.cooldowns.hazard, 100);

        // Threshold itself is still not enough
        let spawned = spawn_category(
            &mut state,
            &tuning,
            &mut presenter,
            &mut rng,
            Category::Hazard,
        );
        assert!(spawned.is_none());
        assert_eq!(state.cooldowns.hazard, 101);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_hazard_eligible_spawn_gate() {
        let (mut state, tuning, mut presenter) = setup();

        // Draw just under 0.6 spawns
        state.cooldowns.hazard = 101;
        let mut rng = ScriptedRandom::new([0.59]);
        let id = spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Hazard);
        assert!(id.is_some());
        assert_eq!(state.cooldowns.hazard, 0);
        assert_eq!(state.hazards.len(), 1);
        assert_eq!(state.hazards[0].pos, Vec2::new(640.0, 252.0));

        // Draw at 0.6 does not
        state.cooldowns.hazard = 101;
        let mut rng = ScriptedRandom::new([0.6]);
        let id = spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Hazard);
        assert!(id.is_none());
        assert_eq!(state.cooldowns.hazard, 102);
    }

    #[test]
    fn test_hazard_spawn_rate_is_chance() {
        let (mut state, tuning, mut presenter) = setup();
        let mut rng = crate::sim::random::seeded(7);
        let trials = 10_000;
        let mut hits = 0;
        for _ in 0..trials {
            state.cooldowns.hazard = 101;
            if spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Hazard)
                .is_some()
            {
                hits += 1;
            }
        }
        let rate = hits as f32 / trials as f32;
        assert!((rate - 0.6).abs() < 0.03, "rate = {rate}");
    }

    #[test]
    fn test_pickup_lanes() {
        let (mut state, tuning, mut presenter) = setup();
        state.cooldowns.pickup = 51;
        // spawn roll, then lane roll (raised)
        let mut rng = ScriptedRandom::new([0.0, 0.1]);
        spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Pickup);
        assert_eq!(state.pickups[0].pos.y, 320.0 - 64.0 - 100.0);

        state.cooldowns.pickup = 51;
        let mut rng = ScriptedRandom::new([0.0, 0.9]);
        spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Pickup);
        assert_eq!(state.pickups[1].pos.y, 320.0 - 64.0);
    }

    #[test]
    fn test_cloud_variant_and_height() {
        let (mut state, tuning, mut presenter) = setup();
        state.cooldowns.cloud = 51;
        let mut rng = ScriptedRandom::new([0.005, 0.75, 0.25]);
        spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Cloud);

        let cloud = &state.clouds[0];
        assert_eq!(cloud.pos, Vec2::new(640.0, 25.0));
        let record = presenter.sprite(cloud.sprite).unwrap();
        assert_eq!(record.kind, SpriteKind::Cloud { variant: 1 });
        assert!(record.attached);
        assert!(!record.playing);
    }

    #[test]
    fn test_cooldowns_are_independent() {
        let (mut state, tuning, mut presenter) = setup();
        let mut rng = ScriptedRandom::constant(0.0);
        for _ in 0..52 {
            spawn_all(&mut state, &tuning, &mut presenter, &mut rng);
        }
        // Pickup and cloud thresholds (50) elapsed, hazard (100) has not
        assert_eq!(state.pickups.len(), 1);
        assert_eq!(state.clouds.len(), 1);
        assert!(state.hazards.is_empty());
        assert_eq!(state.cooldowns.hazard, 52);
    }

    #[test]
    fn test_earliest_respawn_after_threshold() {
        let (mut state, tuning, mut presenter) = setup();
        let mut rng = ScriptedRandom::constant(0.0);
        let mut spawn_frames = Vec::new();
        for frame in 0..200 {
            if spawn_category(&mut state, &tuning, &mut presenter, &mut rng, Category::Pickup)
                .is_some()
            {
                spawn_frames.push(frame);
            }
        }
        // Counter 0..=50 blocks, 51 spawns; then resets to 0
        assert_eq!(spawn_frames, vec![51, 103, 155]);
    }
}
