//! Per-frame simulation step
//!
//! The host calls [`Game::step`] once per rendered frame with the elapsed
//! frame multiplier (1.0 at the reference frame rate). Within a frame the
//! order is fixed: spawn, score text, pickups, clouds, player, hazards,
//! ground.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::motion::{cleanup, move_entities, recycle_ground, scroll_ground};
use super::player::{Player, Transition};
use super::progress::{refresh_score_text, resolve_hazards, resolve_pickups};
use super::random::{RandomSource, seeded};
use super::spawn::spawn_all;
use super::state::{Category, GameEvent, GroundTile, Phase, SimulationState};
use crate::consts::*;
use crate::error::GameError;
use crate::presenter::{Presenter, Screen, SpriteKind};
use crate::score_text;
use crate::tuning::Tuning;

/// Frames of warning the autopilot wants before a hazard reaches the player
const AUTOPILOT_LEAD_FRAMES: f32 = 6.0;
/// Horizontal slack (pixels) the hazard tolerance forgives at the player's front
const AUTOPILOT_FRONT_SLACK: f32 = 30.0;

/// Advance the simulation by one frame
pub fn step<P: Presenter, R: RandomSource>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
    rng: &mut R,
    frame_delta: f32,
) {
    if !state.is_playing() {
        return;
    }
    state.frame += 1;

    spawn_all(state, tuning, presenter, rng);
    refresh_score_text(state, presenter);

    update_category(state, tuning, presenter, Category::Pickup, frame_delta);
    update_category(state, tuning, presenter, Category::Cloud, frame_delta);
    update_player(state, tuning, presenter, frame_delta);
    update_category(state, tuning, presenter, Category::Hazard, frame_delta);

    // A hazard may have ended the game this frame
    if state.is_playing() {
        let dx = tuning.ground_speed_at(state.level) * frame_delta;
        scroll_ground(&mut state.ground, dx, presenter);
        recycle_ground(
            &mut state.ground,
            tuning.ground_recycle_x,
            tuning.ground_tile.size().x,
            presenter,
        );
    }
}

/// Move, collide and clean up one category
fn update_category<P: Presenter>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
    category: Category,
    frame_delta: f32,
) {
    let dx = tuning.category(category).speed_at(state.level) * frame_delta;
    move_entities(state.entities_mut(category), dx, presenter);

    match category {
        Category::Pickup => resolve_pickups(state, tuning),
        Category::Hazard => resolve_hazards(state, tuning, presenter),
        Category::Cloud => {}
    }

    cleanup(state.entities_mut(category), presenter);
}

fn update_player<P: Presenter>(
    state: &mut SimulationState,
    tuning: &Tuning,
    presenter: &mut P,
    frame_delta: f32,
) {
    let Some(player) = state.player.as_mut() else {
        return;
    };
    let transition = player.update(frame_delta, tuning.velocity_floor);
    presenter.set_position(player.sprite, player.pos);

    if transition == Transition::Landed {
        presenter.play(player.sprite);
        state.events.push(GameEvent::Landed);
    }
}

/// A running game: state, tuning, the presenter it draws through and its RNG
pub struct Game<P: Presenter, R: RandomSource = Pcg32> {
    pub state: SimulationState,
    pub tuning: Tuning,
    pub presenter: P,
    rng: R,
}

impl<P: Presenter> Game<P, Pcg32> {
    /// Game driven by the seeded PCG generator
    pub fn with_seed(tuning: Tuning, presenter: P, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::new(tuning, presenter, seeded(seed))
    }
}

impl<P: Presenter, R: RandomSource> Game<P, R> {
    pub fn new(tuning: Tuning, presenter: P, rng: R) -> Self {
        Self {
            state: SimulationState::new(&tuning),
            tuning,
            presenter,
            rng,
        }
    }

    /// Place the initial scene (ground, player, hearts, score) and begin playing
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state.phase != Phase::Loading {
            return Err(GameError::NotLoading(self.state.phase));
        }
        self.tuning.validate()?;

        let tuning = &self.tuning;
        let presenter = &mut self.presenter;
        let state = &mut self.state;

        let (text_x, text_y) = SCORE_TEXT_POS;
        let text = presenter.create_sprite(SpriteKind::ScoreText, Vec2::new(text_x, text_y));
        presenter.attach(text);
        state.score_text = score_text(state.score);
        presenter.set_text(text, &state.score_text);
        state.score_text_sprite = Some(text);

        let tile_width = tuning.ground_tile.size().x;
        for i in 0..tuning.tile_count() {
            let pos = Vec2::new(i as f32 * tile_width, tuning.screen_height);
            let sprite = presenter.create_sprite(SpriteKind::GroundTile, pos);
            presenter.attach(sprite);
            state.ground.push(GroundTile { sprite, pos });
        }

        let player_x = tuning.screen_width / 2.0;
        let player_pos = Vec2::new(player_x, tuning.baseline());
        let sprite = presenter.create_sprite(SpriteKind::Player, player_pos);
        presenter.attach(sprite);
        presenter.play(sprite);
        state.player = Some(Player::new(sprite, player_x, tuning));

        // Right-aligned row; hearts[0] is the rightmost and goes first
        let spacing = tuning.heart.size().x + HEART_MARGIN;
        for i in 0..state.health {
            let x = tuning.screen_width - spacing * i as f32 - HEART_MARGIN;
            let heart = presenter.create_sprite(SpriteKind::Heart, Vec2::new(x, HEART_Y));
            presenter.attach(heart);
            state.hearts.push(heart);
        }

        presenter.show_screen(Screen::Game);
        state.phase = Phase::Playing;
        log::info!(
            "Game started: {} ground tiles, {} hearts",
            state.ground.len(),
            state.hearts.len()
        );
        Ok(())
    }

    /// Request a jump. Ignored unless playing and grounded.
    pub fn jump(&mut self) -> bool {
        if !self.state.is_playing() {
            log::warn!("Jump ignored in phase {:?}", self.state.phase);
            return false;
        }
        let Some(player) = self.state.player.as_mut() else {
            return false;
        };
        if !player.jump(self.tuning.jump_impulse) {
            return false;
        }
        self.presenter.stop(player.sprite);
        self.state.events.push(GameEvent::Jumped);
        true
    }

    /// Advance one frame
    pub fn step(&mut self, frame_delta: f32) {
        step(
            &mut self.state,
            &self.tuning,
            &mut self.presenter,
            &mut self.rng,
            frame_delta,
        );
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Demo AI: jump when a hazard is about to reach the player, or when a
    /// raised pickup is passing overhead and no hazard is near.
    pub fn autopilot_wants_jump(&self) -> bool {
        let Some(player) = self.state.player.as_ref() else {
            return false;
        };
        if !self.state.is_playing() || !player.is_grounded() {
            return false;
        }
        let front = player.bounds().right() - AUTOPILOT_FRONT_SLACK;
        let level = self.state.level;

        let hazard_speed = self.tuning.hazard.speed_at(level).max(f32::EPSILON);
        let mut hazard_near = false;
        for hazard in self.state.hazards.iter().filter(|h| !h.dead) {
            let frames_away = (hazard.bounds().x - front) / hazard_speed;
            if (0.0..=AUTOPILOT_LEAD_FRAMES).contains(&frames_away) {
                return true;
            }
            // Still too close to land in front of
            if (0.0..=AUTOPILOT_LEAD_FRAMES * 8.0).contains(&frames_away) {
                hazard_near = true;
            }
        }
        if hazard_near {
            return false;
        }

        let ground_lane = self.tuning.screen_height - self.tuning.pickup_lane_offset;
        let pickup_speed = self.tuning.pickup.speed_at(level).max(f32::EPSILON);
        self.state
            .pickups
            .iter()
            .filter(|p| !p.dead && p.pos.y < ground_lane)
            .any(|p| {
                let frames_away = (p.bounds().x - front) / pickup_speed;
                (0.0..=AUTOPILOT_LEAD_FRAMES * 2.0).contains(&frames_away)
            })
    }
}
