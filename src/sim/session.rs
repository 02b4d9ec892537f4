//! Game session orchestration
//!
//! Builds the paddle, ball, and brick wall into a scene, then reacts to
//! the engine's event hooks: pointer input drives the paddle,
//! collisions remove bricks and reverse the ball, the boundary policy
//! runs after every update, and a viewport exit ends the game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::engine::{CollisionEvent, EngineCtx, EntityId, Hooks, Scene};
use super::entity::{Appearance, Color, CollisionMode, Entity};
use super::layout::generate_bricks;
use super::physics::{BoundaryPolicy, collision_reflect};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ball in play
    InPlay,
    /// Every brick destroyed; the clock keeps running and no
    /// notification is surfaced
    Cleared,
    /// Ball left the board; the run loop has been stopped
    Lost,
}

/// Notifications surfaced to the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    BrickDestroyed { id: EntityId, remaining: usize },
    BallLost,
}

/// One game of brick-breaking wired to an engine
pub struct Session {
    boundary: BoundaryPolicy,
    paddle: EntityId,
    ball: EntityId,
    /// Live bricks; each id leaves this set exactly once
    bricks: Vec<EntityId>,
    remaining_bricks: usize,
    phase: SessionPhase,
    stop_issued: bool,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Populate `scene` with the configured board and wire up a session
    pub fn new(config: &GameConfig, scene: &mut dyn Scene) -> Self {
        log::debug!("creating paddle");
        let mut paddle = Entity::new(
            0,
            Vec2::new(config.paddle_start_x, config.paddle_y()),
            config.paddle_size,
        );
        paddle.mode = CollisionMode::Fixed;
        paddle.appearance = Appearance::Rect(Color::VERMILLION);
        let paddle = scene.add(paddle);

        log::debug!("creating ball");
        let mut ball = Entity::new(0, config.ball_start, Vec2::splat(config.ball_radius * 2.0));
        ball.vel = config.ball_velocity;
        ball.mode = config.ball_mode;
        ball.appearance = Appearance::Disc {
            color: Color::RED,
            radius: config.ball_radius,
        };
        let ball = scene.add(ball);

        let bricks: Vec<EntityId> = generate_bricks(config.board_width, &config.layout)
            .into_iter()
            .map(|brick| scene.add(brick))
            .collect();
        let remaining_bricks = bricks.len();

        Self {
            boundary: config.boundary,
            paddle,
            ball,
            bricks,
            remaining_bricks,
            phase: SessionPhase::InPlay,
            stop_issued: false,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn remaining_bricks(&self) -> usize {
        self.remaining_bricks
    }

    pub fn paddle_id(&self) -> EntityId {
        self.paddle
    }

    pub fn ball_id(&self) -> EntityId {
        self.ball
    }

    /// Drain notifications accumulated since the last call
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Hooks for Session {
    fn on_pointer_move(&mut self, ctx: &mut dyn EngineCtx, pos: Vec2) {
        // horizontal only; the pointer may drag the paddle off-board
        if let Some(paddle) = ctx.entity_mut(self.paddle) {
            paddle.pos.x = pos.x;
        }
    }

    fn on_collision(&mut self, ctx: &mut dyn EngineCtx, event: &CollisionEvent) {
        if event.a != self.ball {
            return;
        }

        if let Some(index) = self.bricks.iter().position(|&id| id == event.b) {
            self.bricks.swap_remove(index);
            ctx.kill(event.b);
            self.remaining_bricks -= 1;
            log::debug!("hit brick {} ({} remaining)", event.b, self.remaining_bricks);
            self.events.push(SessionEvent::BrickDestroyed {
                id: event.b,
                remaining: self.remaining_bricks,
            });

            if self.remaining_bricks == 0 && self.phase == SessionPhase::InPlay {
                self.phase = SessionPhase::Cleared;
                log::info!("all bricks cleared");
            }
        }

        // reverse course after any collision; an elastic ball was
        // already bounced by the engine
        if let Some(ball) = ctx.entity_mut(self.ball) {
            if ball.mode != CollisionMode::Elastic {
                collision_reflect(&mut ball.vel, event.intersection);
            }
        }
    }

    fn on_post_update(&mut self, ctx: &mut dyn EngineCtx, _dt: f32) {
        let board = Vec2::new(ctx.draw_width(), ctx.draw_height());
        if let Some(ball) = ctx.entity_mut(self.ball) {
            let half = ball.half_extents();
            self.boundary.apply(ball.pos, half, &mut ball.vel, board);
        }
    }

    fn on_exit_viewport(&mut self, ctx: &mut dyn EngineCtx, id: EntityId) {
        if id != self.ball {
            return;
        }

        if self.phase == SessionPhase::InPlay {
            self.phase = SessionPhase::Lost;
            self.events.push(SessionEvent::BallLost);
            log::info!("ball left the board - game over");
        }

        if !self.stop_issued {
            self.stop_issued = true;
            ctx.stop();
        }
    }
}
