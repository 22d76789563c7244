//! Game balance and layout tuning
//!
//! Every speed, spawn rule and sprite size the simulation uses. Defaults
//! reproduce the shipped game; hosts may load overrides from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::{Category, Tolerance};

/// Texture size and display scale of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetrics {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl SpriteMetrics {
    pub const fn new(width: f32, height: f32, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// On-screen size (texture size * scale)
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width * self.scale, self.height * self.scale)
    }
}

/// Spawn and motion rules for one scrolling category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTuning {
    /// Frames since last spawn must exceed this before another spawn
    pub spawn_threshold: u32,
    /// Per-frame spawn probability once eligible
    pub spawn_chance: f32,
    /// Leftward speed at level 0 (pixels per reference frame)
    pub base_speed: f32,
    /// Speed multiplier gained per level
    pub level_factor: f32,
    pub sprite: SpriteMetrics,
}

impl CategoryTuning {
    /// Leftward speed at the given level, before frame delta
    #[inline]
    pub fn speed_at(&self, level: u32) -> f32 {
        self.base_speed * (1.0 + self.level_factor * level as f32)
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Scrolling categories ===
    pub pickup: CategoryTuning,
    pub hazard: CategoryTuning,
    pub cloud: CategoryTuning,

    // === Spawn placement ===
    /// Pickup ground lane sits this far above the bottom edge
    pub pickup_lane_offset: f32,
    /// Raised lane sits this much higher than the ground lane
    pub pickup_raised_height: f32,
    /// Probability a pickup spawns in the raised lane
    pub pickup_raised_chance: f32,
    /// Hazards walk this far above the bottom edge
    pub hazard_lane_offset: f32,
    /// Clouds spawn with their top edge in [0, cloud_band)
    pub cloud_band: f32,

    // === Ground ===
    pub ground_tile: SpriteMetrics,
    pub ground_speed: f32,
    pub ground_level_factor: f32,
    /// Leading tile is recycled once its x drops below this
    pub ground_recycle_x: f32,

    // === Player ===
    pub player: SpriteMetrics,
    pub player_baseline_offset: f32,
    pub player_health: u8,
    pub jump_impulse: f32,
    pub gravity: f32,
    pub velocity_floor: f32,
    pub heart: SpriteMetrics,

    // === Collisions ===
    pub pickup_tolerance: Tolerance,
    pub hazard_tolerance: Tolerance,

    // === Progression ===
    pub points_per_level: u32,
    pub win_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            pickup: CategoryTuning {
                spawn_threshold: 50,
                spawn_chance: 0.5,
                base_speed: 3.0,
                level_factor: 0.4,
                sprite: SpriteMetrics::new(12.0, 12.0, 2.0),
            },
            hazard: CategoryTuning {
                spawn_threshold: 100,
                spawn_chance: 0.6,
                base_speed: 6.0,
                level_factor: 0.2,
                sprite: SpriteMetrics::new(16.0, 12.0, 3.0),
            },
            // Clouds drift at a constant rate regardless of level
            cloud: CategoryTuning {
                spawn_threshold: 50,
                spawn_chance: 0.01,
                base_speed: 0.75,
                level_factor: 0.0,
                sprite: SpriteMetrics::new(32.0, 16.0, 2.0),
            },

            pickup_lane_offset: 64.0,
            pickup_raised_height: 100.0,
            pickup_raised_chance: 0.7,
            hazard_lane_offset: 68.0,
            cloud_band: 100.0,

            ground_tile: SpriteMetrics::new(16.0, 16.0, 2.0),
            ground_speed: 3.0,
            ground_level_factor: 0.4,
            ground_recycle_x: GROUND_RECYCLE_X,

            player: SpriteMetrics::new(24.0, 20.0, 4.0),
            player_baseline_offset: PLAYER_BASELINE_OFFSET,
            player_health: PLAYER_HEALTH,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            velocity_floor: VELOCITY_FLOOR,
            heart: SpriteMetrics::new(16.0, 16.0, 2.0),

            pickup_tolerance: Tolerance::NONE,
            hazard_tolerance: Tolerance::new(10.0, 20.0),

            points_per_level: POINTS_PER_LEVEL,
            win_score: WIN_SCORE,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    /// Reject values that would make the game unplayable or break invariants
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidTuning(msg));

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return invalid(format!(
                "screen must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        for category in Category::ALL {
            let rules = self.category(category);
            if !(0.0..=1.0).contains(&rules.spawn_chance) {
                return invalid(format!(
                    "{category:?} spawn_chance {} outside [0, 1]",
                    rules.spawn_chance
                ));
            }
            if rules.base_speed < 0.0 || rules.level_factor < 0.0 {
                return invalid(format!("{category:?} speed must not be negative"));
            }
        }
        if !(0.0..=1.0).contains(&self.pickup_raised_chance) {
            return invalid(format!(
                "pickup_raised_chance {} outside [0, 1]",
                self.pickup_raised_chance
            ));
        }
        if self.ground_tile.size().x <= 0.0 {
            return invalid("ground tile width must be positive".to_string());
        }
        if self.player_health == 0 {
            return invalid("player_health must be at least 1".to_string());
        }
        if self.points_per_level == 0 {
            return invalid("points_per_level must be at least 1".to_string());
        }
        if self.jump_impulse >= 0.0 {
            return invalid(format!(
                "jump_impulse must be upward (negative), got {}",
                self.jump_impulse
            ));
        }
        Ok(())
    }

    /// Rules for a scrolling category
    pub fn category(&self, category: Category) -> &CategoryTuning {
        match category {
            Category::Pickup => &self.pickup,
            Category::Hazard => &self.hazard,
            Category::Cloud => &self.cloud,
        }
    }

    /// Ground baseline: the player's resting y
    #[inline]
    pub fn baseline(&self) -> f32 {
        self.screen_height - self.player_baseline_offset
    }

    /// Number of ground tiles needed to cover the screen with one spare
    pub fn tile_count(&self) -> usize {
        (self.screen_width / self.ground_tile.size().x).ceil() as usize + 1
    }

    /// Ground scroll speed at the given level, before frame delta
    #[inline]
    pub fn ground_speed_at(&self, level: u32) -> f32 {
        self.ground_speed * (1.0 + self.ground_level_factor * level as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tile_count() {
        let tuning = Tuning::default();
        assert_eq!(tuning.tile_count(), 21);
        assert_eq!(tuning.ground_tile.size().x, GROUND_TILE_WIDTH);
    }

    #[test]
    fn test_default_baseline() {
        assert_eq!(Tuning::default().baseline(), 234.0);
    }

    #[test]
    fn test_speed_scales_with_level() {
        let tuning = Tuning::default();
        assert_eq!(tuning.pickup.speed_at(0), 3.0);
        assert!((tuning.pickup.speed_at(1) - 4.2).abs() < 1e-5);
        assert!((tuning.hazard.speed_at(1) - 7.2).abs() < 1e-5);
        // Clouds ignore level
        assert_eq!(tuning.cloud.speed_at(5), 0.75);
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let tuning = Tuning::from_json(r#"{ "win_score": 25, "player_health": 5 }"#).unwrap();
        assert_eq!(tuning.win_score, 25);
        assert_eq!(tuning.player_health, 5);
        assert_eq!(tuning.hazard, Tuning::default().hazard);
    }

    #[test]
    fn test_from_json_rejects_bad_probability() {
        let json = r#"{ "pickup_raised_chance": 1.5 }"#;
        assert!(matches!(
            Tuning::from_json(json),
            Err(GameError::InvalidTuning(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(GameError::Tuning(_))
        ));
    }

    #[test]
    fn test_roundtrip_json() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
