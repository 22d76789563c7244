//! Cheese Dash - A side-scrolling unicorn arcade game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (spawning, motion, collisions, jump physics)
//! - `presenter`: Boundary to the host's rendering/animation engine
//! - `tuning`: Data-driven game balance
//! - `error`: Error types for the fallible setup surfaces

pub mod error;
pub mod presenter;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use presenter::{Presenter, RecordingPresenter, Screen, SpriteHandle, SpriteKind};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Visible field dimensions
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 320.0;

    /// Distance from the bottom of the screen to the player's ground baseline
    pub const PLAYER_BASELINE_OFFSET: f32 = 86.0;
    pub const PLAYER_HEALTH: u8 = 3;
    /// Upward velocity applied on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -10.0;
    pub const GRAVITY: f32 = 0.5;
    /// Velocity floor, multiplied by frame delta every airborne frame
    pub const VELOCITY_FLOOR: f32 = -10.0;

    /// Ground tiles
    pub const GROUND_TILE_WIDTH: f32 = 32.0;
    pub const GROUND_RECYCLE_X: f32 = -32.0;

    /// Score needed at game over to see the win screen
    pub const WIN_SCORE: u32 = 40;
    /// Points per level
    pub const POINTS_PER_LEVEL: u32 = 10;

    /// Score text placement
    pub const SCORE_TEXT_POS: (f32, f32) = (16.0, 16.0);
    /// Heart row: right-aligned, spaced by heart width plus this gap
    pub const HEART_MARGIN: f32 = 5.0;
    pub const HEART_Y: f32 = 16.0;
}

/// Text shown in the score display
#[inline]
pub fn score_text(score: u32) -> String {
    format!("score: {score}")
}
