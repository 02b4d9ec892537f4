//! Engine capability seam
//!
//! The simulation core never talks to a concrete engine. It is written
//! against the capabilities here: scene registration, board dimension
//! queries, run-loop control, a typed set of event hooks, and a 2D draw
//! surface for the per-entity render pass. `headless` provides the
//! reference implementation used by the binary and the tests.

pub mod headless;

pub use headless::HeadlessEngine;

use glam::Vec2;

use crate::sim::entity::{Appearance, Color, Entity};

/// Identifier of an entity registered in a scene
pub type EntityId = u32;

/// A collision notification
///
/// `intersection` is the minimum-translation vector that moves `a` out
/// of `b`. Engines deliver one event per participant, so a contact
/// between the ball and a brick arrives twice, once from each
/// perspective with the vector negated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub a: EntityId,
    pub b: EntityId,
    pub intersection: Vec2,
}

/// Scene registry operations and board queries
pub trait Scene {
    /// Register an entity; the scene draws and updates it until killed
    fn add(&mut self, entity: Entity) -> EntityId;
    /// Remove an entity from play; it is no longer drawn or updated
    fn kill(&mut self, id: EntityId);
    fn entity(&self, id: EntityId) -> Option<&Entity>;
    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity>;
    fn draw_width(&self) -> f32;
    fn draw_height(&self) -> f32;
}

/// Run-loop control
pub trait RunControl {
    /// Stop the run loop. Idempotent; stopping a stopped loop is a no-op.
    fn stop(&mut self);
    fn stopped(&self) -> bool;
}

/// Everything a hook may touch while the engine dispatches it
pub trait EngineCtx: Scene + RunControl {}

impl<T: Scene + RunControl> EngineCtx for T {}

/// Typed event subscription
///
/// One implementation per game; the engine serializes all calls on its
/// single thread in a fixed per-frame order: pointer moves, position
/// integration, collisions, post-update, viewport exits.
pub trait Hooks {
    /// Pointer moved to a board-space position
    fn on_pointer_move(&mut self, ctx: &mut dyn EngineCtx, pos: Vec2) {
        let _ = (ctx, pos);
    }

    /// Two entities overlap this frame; fires before any automatic
    /// response the participants' collision modes call for
    fn on_collision(&mut self, ctx: &mut dyn EngineCtx, event: &CollisionEvent) {
        let _ = (ctx, event);
    }

    /// Frame update finished; positions are integrated for this frame
    fn on_post_update(&mut self, ctx: &mut dyn EngineCtx, dt: f32) {
        let _ = (ctx, dt);
    }

    /// An entity's bounds left the visible board entirely
    fn on_exit_viewport(&mut self, ctx: &mut dyn EngineCtx, id: EntityId) {
        let _ = (ctx, id);
    }
}

/// A 2D drawing surface for the per-entity render pass
pub trait DrawSurface {
    fn fill_rect(&mut self, center: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Draw one entity: the default rectangle renderer, or the entity's
/// custom variant
pub fn draw_entity(entity: &Entity, surface: &mut dyn DrawSurface, _delta: f32) {
    match entity.appearance {
        Appearance::Rect(color) => surface.fill_rect(entity.pos, entity.size, color),
        Appearance::Disc { color, radius } => surface.fill_circle(entity.pos, radius, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        rects: Vec<(Vec2, Vec2, Color)>,
        circles: Vec<(Vec2, f32, Color)>,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_rect(&mut self, center: Vec2, size: Vec2, color: Color) {
            self.rects.push((center, size, color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }
    }

    #[test]
    fn test_draw_dispatches_on_appearance() {
        let mut surface = RecordingSurface::default();

        let brick = Entity::new(1, Vec2::new(85.0, 40.0), Vec2::new(77.5, 30.0));
        draw_entity(&brick, &mut surface, 0.016);

        let mut ball = Entity::new(2, Vec2::new(100.0, 300.0), Vec2::splat(30.0));
        ball.appearance = Appearance::Disc {
            color: Color::RED,
            radius: 15.0,
        };
        draw_entity(&ball, &mut surface, 0.016);

        assert_eq!(surface.rects.len(), 1);
        assert_eq!(surface.rects[0].0, Vec2::new(85.0, 40.0));
        assert_eq!(surface.circles.len(), 1);
        assert_eq!(surface.circles[0], (Vec2::new(100.0, 300.0), 15.0, Color::RED));
    }
}
