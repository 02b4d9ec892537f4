//! Data-driven game configuration
//!
//! Defaults reproduce the classic board exactly. All values are trusted
//! as-is: a zero column count or negative board height produces
//! undefined gameplay rather than an error, matching the permissive
//! behavior of the constructors downstream.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::entity::{Color, CollisionMode};
use crate::sim::physics::{BoundaryPolicy, BoundaryStrategy};

/// Brick wall layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub rows: usize,
    pub columns: usize,
    /// Gap between bricks and around the wall, pixels
    pub padding: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    pub brick_height: f32,
    /// Per-row colors, cycled with row index modulo palette length
    pub palette: Vec<Color>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            padding: BRICK_PADDING,
            x_offset: BRICK_X_OFFSET,
            y_offset: BRICK_Y_OFFSET,
            brick_height: BRICK_HEIGHT,
            palette: vec![Color::VIOLET, Color::ORANGE, Color::YELLOW, Color::ROSE],
        }
    }
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_width: f32,
    pub board_height: f32,
    pub layout: LayoutConfig,

    pub paddle_size: Vec2,
    pub paddle_start_x: f32,

    pub ball_start: Vec2,
    pub ball_velocity: Vec2,
    pub ball_radius: f32,
    /// Passive (the session reverses course itself) or Elastic (the
    /// engine bounces the ball and the session only removes bricks)
    pub ball_mode: CollisionMode,

    pub boundary: BoundaryPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            layout: LayoutConfig::default(),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_start_x: PADDLE_START_X,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_velocity: Vec2::new(BALL_SPEED, BALL_SPEED),
            ball_radius: BALL_RADIUS,
            ball_mode: CollisionMode::Passive,
            boundary: BoundaryPolicy {
                strategy: BoundaryStrategy::Independent,
                reflect_top: true,
            },
        }
    }
}

impl GameConfig {
    /// Paddle centerline y, a fixed inset above the bottom edge
    pub fn paddle_y(&self) -> f32 {
        self.board_height - PADDLE_Y_INSET
    }

    pub fn board(&self) -> Vec2 {
        Vec2::new(self.board_width, self.board_height)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 800.0);
        assert_eq!(config.board_height, 600.0);
        assert_eq!(config.paddle_y(), 560.0);
        assert_eq!(config.layout.rows, 3);
        assert_eq!(config.layout.columns, 8);
        assert_eq!(config.layout.palette.len(), 4);
        assert_eq!(config.ball_mode, CollisionMode::Passive);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            ball_mode: CollisionMode::Elastic,
            boundary: BoundaryPolicy {
                strategy: BoundaryStrategy::Exclusive,
                reflect_top: false,
            },
            ..GameConfig::default()
        };

        let json = config.to_json().unwrap();
        let parsed = GameConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_rejected() {
        assert!(GameConfig::from_json("{\"board_width\": 640.0}").is_err());
    }
}
