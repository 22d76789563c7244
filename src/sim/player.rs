//! Player jump physics
//!
//! Two states: `Grounded` and `Airborne`. A jump is only accepted while
//! grounded. While airborne the player integrates velocity, gravity pulls
//! the velocity up to a floor of `velocity_floor * frame_delta`, and the
//! ground baseline clamps the fall.

use glam::Vec2;

use super::collision::Bounds;
use crate::presenter::SpriteHandle;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    Airborne,
}

/// What a physics update did to the jump state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Landed,
}

/// The unicorn
#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: SpriteHandle,
    /// Top-right corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    pub gravity: f32,
    pub state: JumpState,
    /// Resting y
    pub baseline: f32,
}

impl Player {
    pub fn new(sprite: SpriteHandle, x: f32, tuning: &Tuning) -> Self {
        let baseline = tuning.baseline();
        Self {
            sprite,
            pos: Vec2::new(x, baseline),
            size: tuning.player.size(),
            vy: 0.0,
            gravity: tuning.gravity,
            state: JumpState::Grounded,
            baseline,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_top_right(self.pos, self.size)
    }

    pub fn is_grounded(&self) -> bool {
        self.state == JumpState::Grounded
    }

    /// Start a jump. Returns false (and changes nothing) when already airborne.
    pub fn jump(&mut self, impulse: f32) -> bool {
        match self.state {
            JumpState::Grounded => {
                self.vy = impulse;
                self.state = JumpState::Airborne;
                true
            }
            JumpState::Airborne => false,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, frame_delta: f32, velocity_floor: f32) -> Transition {
        self.pos.y += self.vy * frame_delta;
        if self.pos.y > self.baseline {
            self.pos.y = self.baseline;
        }

        match self.state {
            JumpState::Airborne if self.pos.y == self.baseline => {
                self.state = JumpState::Grounded;
                Transition::Landed
            }
            JumpState::Airborne => {
                // The floor scales with frame delta; this shapes the jump arc
                self.vy = (self.vy + self.gravity).max(velocity_floor * frame_delta);
                Transition::None
            }
            JumpState::Grounded => Transition::None,
        }
    }
}
