//! Brickout - a classic brick-breaking game core
//!
//! Core modules:
//! - `sim`: Gameplay policy (entities, brick layout, ball physics, session)
//! - `engine`: Capability traits the core is written against, plus a
//!   headless reference engine that can drive a full session
//! - `config`: Data-driven game configuration

pub mod config;
pub mod engine;
pub mod sim;

pub use config::GameConfig;
pub use sim::{Session, SessionEvent, SessionPhase};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per driven frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START_X: f32 = 150.0;
    /// Paddle centerline sits this far above the bottom board edge
    pub const PADDLE_Y_INSET: f32 = 40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_START_X: f32 = 100.0;
    pub const BALL_START_Y: f32 = 300.0;
    /// Starting speed on each axis, pixels per second
    pub const BALL_SPEED: f32 = 200.0;

    /// Brick wall defaults
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 8;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 20.0;
    pub const BRICK_X_OFFSET: f32 = 65.0;
    pub const BRICK_Y_OFFSET: f32 = 20.0;
}
