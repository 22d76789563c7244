//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, scaled by the host's frame delta
//! - Randomness only through a `RandomSource`
//! - Stable iteration order (spawn order)
//! - Drawing only through the `Presenter` boundary

pub mod collision;
pub mod motion;
pub mod player;
pub mod progress;
pub mod random;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Bounds, Tolerance, intersects};
pub use player::{JumpState, Player};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use state::{Category, Cooldowns, Entity, GameEvent, GroundTile, Phase, SimulationState};
pub use tick::{Game, step};
