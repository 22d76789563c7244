//! Axis-aligned bounding box overlap with per-pair tolerances
//!
//! Sprites are larger than what they depict, so collisions against hazards
//! shrink the boxes before testing. The tolerance is deliberately lopsided:
//! the hazard's bottom edge is grown rather than shrunk.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Screen-space box, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of a sprite anchored at its top-right corner
    pub fn from_top_right(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x - size.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Per-pair shrink applied before overlap testing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tolerance {
    /// Inset on the first box's horizontal edges
    pub shrink_a: f32,
    /// Inset on the second box (horizontal edges and top)
    pub shrink_b: f32,
}

impl Tolerance {
    pub const NONE: Self = Self {
        shrink_a: 0.0,
        shrink_b: 0.0,
    };

    pub const fn new(shrink_a: f32, shrink_b: f32) -> Self {
        Self { shrink_a, shrink_b }
    }
}

/// Check whether `a` and `b` overlap after applying `tol`
///
/// Both horizontal and vertical projections must overlap. Touching edges
/// do not count.
pub fn intersects(a: &Bounds, b: &Bounds, tol: Tolerance) -> bool {
    let Tolerance { shrink_a, shrink_b } = tol;
    a.right() - shrink_a > b.x + shrink_b
        && a.x - shrink_a < b.right() - shrink_b
        && a.bottom() > b.y + shrink_b
        && a.y < b.bottom() + shrink_b
}
