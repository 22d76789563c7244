//! Rendering/animation collaborator boundary
//!
//! The simulation never draws anything. It tells a [`Presenter`] which
//! sprites exist, where they are, and whether they animate. Hosts wire this
//! to a real engine; [`RecordingPresenter`] keeps everything in memory for
//! headless runs and tests.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a drawable owned by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// What a sprite depicts (selects texture/animation sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Player,
    Pickup,
    Hazard,
    /// Decorative cloud, one of two looks
    Cloud { variant: u8 },
    Heart,
    GroundTile,
    ScoreText,
}

impl SpriteKind {
    /// Animated sprites start playing when created
    pub fn is_animated(&self) -> bool {
        matches!(self, SpriteKind::Player | SpriteKind::Pickup | SpriteKind::Hazard)
    }
}

/// Top-level screens; exactly one is visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Game,
    Win,
    Fail,
}

/// Interface the simulation consumes from the rendering engine
pub trait Presenter {
    /// Create a drawable at `pos` (not yet attached to the scene)
    fn create_sprite(&mut self, kind: SpriteKind, pos: Vec2) -> SpriteHandle;
    /// Add to the game scene
    fn attach(&mut self, handle: SpriteHandle);
    /// Remove from the game scene and release
    fn detach(&mut self, handle: SpriteHandle);
    fn set_position(&mut self, handle: SpriteHandle, pos: Vec2);
    fn play(&mut self, handle: SpriteHandle);
    fn stop(&mut self, handle: SpriteHandle);
    fn set_text(&mut self, handle: SpriteHandle, text: &str);
    fn show_screen(&mut self, screen: Screen);
}

/// Recorded state of one sprite
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRecord {
    pub kind: SpriteKind,
    pub pos: Vec2,
    pub attached: bool,
    pub playing: bool,
    pub text: Option<String>,
}

/// Headless presenter that records what a real one would display
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    sprites: HashMap<SpriteHandle, SpriteRecord>,
    next_id: u32,
    screen: Option<Screen>,
    /// Number of `set_text` calls (score text refreshes)
    pub text_updates: u64,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprite(&self, handle: SpriteHandle) -> Option<&SpriteRecord> {
        self.sprites.get(&handle)
    }

    /// Visible screen, `None` before the game starts
    pub fn screen(&self) -> Option<Screen> {
        self.screen
    }

    /// Count attached sprites matching a predicate on their kind
    pub fn attached_count(&self, pred: impl Fn(SpriteKind) -> bool) -> usize {
        self.sprites
            .values()
            .filter(|s| s.attached && pred(s.kind))
            .count()
    }

    /// Current text of the first text sprite
    pub fn score_text(&self) -> Option<&str> {
        self.sprites
            .values()
            .find(|s| s.kind == SpriteKind::ScoreText)
            .and_then(|s| s.text.as_deref())
    }

    fn record_mut(&mut self, handle: SpriteHandle) -> Option<&mut SpriteRecord> {
        let record = self.sprites.get_mut(&handle);
        if record.is_none() {
            log::warn!("Unknown sprite handle {:?}", handle);
        }
        record
    }
}

impl Presenter for RecordingPresenter {
    fn create_sprite(&mut self, kind: SpriteKind, pos: Vec2) -> SpriteHandle {
        let handle = SpriteHandle(self.next_id);
        self.next_id += 1;
        self.sprites.insert(
            handle,
            SpriteRecord {
                kind,
                pos,
                attached: false,
                playing: false,
                text: None,
            },
        );
        handle
    }

    fn attach(&mut self, handle: SpriteHandle) {
        if let Some(record) = self.record_mut(handle) {
            record.attached = true;
        }
    }

    fn detach(&mut self, handle: SpriteHandle) {
        // Detached sprites are released; the handle is never reused
        self.sprites.remove(&handle);
    }

    fn set_position(&mut self, handle: SpriteHandle, pos: Vec2) {
        if let Some(record) = self.record_mut(handle) {
            record.pos = pos;
        }
    }

    fn play(&mut self, handle: SpriteHandle) {
        if let Some(record) = self.record_mut(handle) {
            record.playing = true;
        }
    }

    fn stop(&mut self, handle: SpriteHandle) {
        if let Some(record) = self.record_mut(handle) {
            record.playing = false;
        }
    }

    fn set_text(&mut self, handle: SpriteHandle, text: &str) {
        self.text_updates += 1;
        if let Some(record) = self.record_mut(handle) {
            record.text = Some(text.to_string());
        }
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }
}
