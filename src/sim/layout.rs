//! Brick wall layout
//!
//! Pure construction: board width plus layout parameters in, a grid of
//! `rows x columns` brick entities out. Brick width is derived from the
//! board width so the wall scales with the board; the formula leaves
//! one padding term distributed across the columns rather than tiling
//! edge to edge.

use glam::Vec2;

use crate::config::LayoutConfig;
use super::entity::{Appearance, CollisionMode, Entity};

/// Width of a single brick for a given board and layout
#[inline]
pub fn brick_width(board_width: f32, layout: &LayoutConfig) -> f32 {
    let columns = layout.columns as f32;
    board_width / columns - layout.padding - layout.padding / columns
}

/// Build the brick wall
///
/// Bricks are center-anchored, stationary, and collision-active,
/// produced row-major. Ids are left at zero; the scene assigns real
/// ones on registration.
pub fn generate_bricks(board_width: f32, layout: &LayoutConfig) -> Vec<Entity> {
    log::debug!("creating bricks");

    let width = brick_width(board_width, layout);
    let size = Vec2::new(width, layout.brick_height);

    let mut bricks = Vec::with_capacity(layout.rows * layout.columns);
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            let pos = Vec2::new(
                layout.x_offset + col as f32 * (width + layout.padding) + layout.padding,
                layout.y_offset + row as f32 * (layout.brick_height + layout.padding) + layout.padding,
            );
            let color = layout.palette[row % layout.palette.len()];

            let mut brick = Entity::new(0, pos, size);
            brick.mode = CollisionMode::Active;
            brick.appearance = Appearance::Rect(color);
            bricks.push(brick);
        }
    }
    bricks
}
