//! Horizontal scrolling
//!
//! Entities move left each frame and die once past the left edge. The
//! ground is a fixed ring of tiles: whenever the leading tile scrolls off,
//! it is moved behind the last one.

use super::state::{Entity, GroundTile};
use crate::presenter::Presenter;

/// Shift every live entity left by `dx`, marking those past x = 0 dead
pub fn move_entities<P: Presenter>(entities: &mut [Entity], dx: f32, presenter: &mut P) {
    for entity in entities.iter_mut() {
        entity.pos.x -= dx;
        presenter.set_position(entity.sprite, entity.pos);
        if entity.pos.x < 0.0 {
            entity.dead = true;
        }
    }
}

/// Remove dead entities and release their sprites. Returns how many were removed.
pub fn cleanup<P: Presenter>(entities: &mut Vec<Entity>, presenter: &mut P) -> usize {
    let before = entities.len();
    entities.retain(|entity| {
        if entity.dead {
            presenter.detach(entity.sprite);
        }
        !entity.dead
    });
    before - entities.len()
}

/// Scroll all ground tiles left by `dx`
pub fn scroll_ground<P: Presenter>(tiles: &mut [GroundTile], dx: f32, presenter: &mut P) {
    for tile in tiles.iter_mut() {
        tile.pos.x -= dx;
        presenter.set_position(tile.sprite, tile.pos);
    }
}

/// Move the leading tile behind the last once it drops below `threshold`.
///
/// At most one tile is recycled per call. Returns true if a tile moved.
pub fn recycle_ground<P: Presenter>(
    tiles: &mut [GroundTile],
    threshold: f32,
    tile_width: f32,
    presenter: &mut P,
) -> bool {
    let (Some(first), Some(last)) = (tiles.first(), tiles.last()) else {
        return false;
    };
    if first.pos.x >= threshold {
        return false;
    }

    let new_x = last.pos.x + tile_width;
    tiles[0].pos.x = new_x;
    presenter.set_position(tiles[0].sprite, tiles[0].pos);
    tiles.rotate_left(1);
    true
}
