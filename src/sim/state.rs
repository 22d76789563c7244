//! Simulation state and core types
//!
//! [`SimulationState`] is the single mutable root every frame step reads and
//! writes. Nothing in the simulation lives outside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use super::player::Player;
use crate::presenter::SpriteHandle;
use crate::tuning::Tuning;

/// Top-level game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Assets loading, nothing on screen yet
    Loading,
    /// Active gameplay
    Playing,
    /// Ran out of health with a winning score
    Won,
    /// Ran out of health below the winning score
    Lost,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Class of scrolling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Cheese: collect for points
    Pickup,
    /// Mice: cost a heart on contact
    Hazard,
    /// Decorative, never collides
    Cloud,
}

impl Category {
    /// Spawn order within a frame
    pub const ALL: [Category; 3] = [Category::Pickup, Category::Cloud, Category::Hazard];
}

/// A scrolling pickup, hazard or cloud
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: u32,
    pub category: Category,
    pub sprite: SpriteHandle,
    /// Top-right corner (sprite anchor)
    pub pos: Vec2,
    /// On-screen size
    pub size: Vec2,
    /// Marked for removal at end of frame
    pub dead: bool,
}

impl Entity {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_top_right(self.pos, self.size)
    }
}

/// One background ground segment (anchored bottom-left)
#[derive(Debug, Clone)]
pub struct GroundTile {
    pub sprite: SpriteHandle,
    pub pos: Vec2,
}

/// Frames since each category last spawned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldowns {
    pub pickup: u32,
    pub hazard: u32,
    pub cloud: u32,
}

impl Cooldowns {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Pickup => self.pickup,
            Category::Hazard => self.hazard,
            Category::Cloud => self.cloud,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Pickup => &mut self.pickup,
            Category::Hazard => &mut self.hazard,
            Category::Cloud => &mut self.cloud,
        }
    }
}

/// Things that happened during a step, for hosts that want to react
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { category: Category, id: u32 },
    PickupCollected { score: u32 },
    LevelUp { level: u32 },
    HazardHit { health: u8 },
    Jumped,
    Landed,
    GameOver { won: bool, score: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub phase: Phase,
    /// Increments every `points_per_level` points
    pub level: u32,
    pub score: u32,
    pub health: u8,
    /// Heart indicators, oldest first; always as long as `health`
    pub hearts: Vec<SpriteHandle>,
    pub pickups: Vec<Entity>,
    pub hazards: Vec<Entity>,
    pub clouds: Vec<Entity>,
    /// Fixed-length cyclic ground strip, leftmost first
    pub ground: Vec<GroundTile>,
    pub cooldowns: Cooldowns,
    /// Created by `start()`
    pub player: Option<Player>,
    pub score_text_sprite: Option<SpriteHandle>,
    /// Last text pushed to the score display
    pub score_text: String,
    /// Playing frames stepped so far
    pub frame: u64,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl SimulationState {
    /// Empty state awaiting `start()`
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: Phase::Loading,
            level: 0,
            score: 0,
            health: tuning.player_health,
            hearts: Vec::with_capacity(tuning.player_health as usize),
            pickups: Vec::new(),
            hazards: Vec::new(),
            clouds: Vec::new(),
            ground: Vec::with_capacity(tuning.tile_count()),
            cooldowns: Cooldowns::default(),
            player: None,
            score_text_sprite: None,
            score_text: String::new(),
            frame: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entities(&self, category: Category) -> &Vec<Entity> {
        match category {
            Category::Pickup => &self.pickups,
            Category::Hazard => &self.hazards,
            Category::Cloud => &self.clouds,
        }
    }

    pub fn entities_mut(&mut self, category: Category) -> &mut Vec<Entity> {
        match category {
            Category::Pickup => &mut self.pickups,
            Category::Hazard => &mut self.hazards,
            Category::Cloud => &mut self.clouds,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}
