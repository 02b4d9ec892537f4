//! Gameplay policy module
//!
//! Everything that decides what happens in a game lives here; it is
//! pure with respect to the engine and exercisable headless:
//! - `entity`: the actor data model and rectangular geometry
//! - `layout`: brick wall construction
//! - `physics`: the ball's velocity-reversal rules
//! - `session`: one game wired to the engine hooks

pub mod entity;
pub mod layout;
pub mod physics;
pub mod session;

pub use entity::{Appearance, Color, CollisionMode, Entity};
pub use layout::{brick_width, generate_bricks};
pub use physics::{BoundaryPolicy, BoundaryStrategy, collision_reflect};
pub use session::{Session, SessionEvent, SessionPhase};
