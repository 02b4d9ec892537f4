//! Entity model and rectangular geometry
//!
//! Every object in play - paddle, ball, bricks - is an `Entity`: a
//! center-anchored axis-aligned box with a velocity, a collision
//! participation mode, and an appearance. Collision detection runs on
//! the bounding box even for the round ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How an entity participates in collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionMode {
    /// Immovable; other entities bounce off it, it never reacts itself
    Fixed,
    /// Fully participates in engine-driven detection and resolution
    Active,
    /// Detected and reported, but the engine applies no automatic response
    Passive,
    /// The engine applies an automatic elastic bounce on contact
    Elastic,
}

/// An RGBA color (8 bits per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const VIOLET: Color = Color::rgb(159, 95, 159);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ROSE: Color = Color::rgb(255, 0, 127);
    pub const VERMILLION: Color = Color::rgb(255, 91, 49);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// How an entity is drawn
///
/// `Rect` is the default shape renderer. `Disc` is the custom variant
/// used by the ball: a filled circle of the given radius around the
/// entity center, independent of the bounding box used for collision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Appearance {
    Rect(Color),
    Disc { color: Color, radius: f32 },
}

/// A positioned, sized, optionally-moving object in the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Center position, pixels
    pub pos: Vec2,
    /// Bounding box extents (width, height), pixels
    pub size: Vec2,
    /// Velocity, pixels per second
    pub vel: Vec2,
    pub mode: CollisionMode,
    pub appearance: Appearance,
    /// Alive until removed; dead entities are no longer drawn or updated
    pub alive: bool,
}

impl Entity {
    pub fn new(id: u32, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            pos,
            size,
            vel: Vec2::ZERO,
            mode: CollisionMode::Fixed,
            appearance: Appearance::Rect(Color::WHITE),
            alive: true,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Axis-aligned overlap test against another entity's bounding box
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Minimum-translation vector resolving an overlap with `other`
    ///
    /// Returns the direction this entity has to move to stop clipping
    /// `other`, with magnitude equal to the penetration depth. `None`
    /// when the boxes do not overlap. Resolution happens along a single
    /// axis, the one with the smaller overlap (x on equal overlap).
    pub fn intersection(&self, other: &Entity) -> Option<Vec2> {
        let delta = self.pos - other.pos;
        let reach = (self.size + other.size) * 0.5;
        let overlap_x = reach.x - delta.x.abs();
        let overlap_y = reach.y - delta.y.abs();

        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            return None;
        }

        if overlap_x <= overlap_y {
            let sign = if delta.x >= 0.0 { 1.0 } else { -1.0 };
            Some(Vec2::new(overlap_x * sign, 0.0))
        } else {
            let sign = if delta.y >= 0.0 { 1.0 } else { -1.0 };
            Some(Vec2::new(0.0, overlap_y * sign))
        }
    }

    /// True when the bounding box is entirely outside `[0, board.x] x [0, board.y]`
    pub fn outside_board(&self, board: Vec2) -> bool {
        self.right() < 0.0 || self.left() > board.x || self.bottom() < 0.0 || self.top() > board.y
    }
}
