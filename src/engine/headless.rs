//! Headless reference engine
//!
//! A single-threaded, fixed-timestep driver for the capability seam:
//! position integration, bounding-box narrow phase, per-mode automatic
//! response, viewport-exit detection, and hook dispatch. Per frame the
//! order is always: pointer moves, integration, collision events (then
//! automatic responses), post-update, viewport exits.

use glam::Vec2;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::entity::{CollisionMode, Entity};
use super::{CollisionEvent, DrawSurface, EntityId, Hooks, RunControl, Scene, draw_entity};

pub struct HeadlessEngine {
    entities: Vec<Entity>,
    next_id: u32,
    board: Vec2,
    pointer_queue: Vec<Vec2>,
    /// Entities already reported off-board; exit fires once per excursion
    offscreen: Vec<EntityId>,
    accumulator: f32,
    frames: u64,
    stopped: bool,
}

impl HeadlessEngine {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
            board: Vec2::new(width, height),
            pointer_queue: Vec::new(),
            offscreen: Vec::new(),
            accumulator: 0.0,
            frames: 0,
            stopped: false,
        }
    }

    /// Queue a pointer-move; dispatched at the start of the next frame
    pub fn push_pointer(&mut self, pos: Vec2) {
        self.pointer_queue.push(pos);
    }

    /// Frames executed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run the loop at the fixed timestep until stopped or `max_frames`
    /// elapse. Returns the number of frames executed.
    pub fn start<H: Hooks>(&mut self, hooks: &mut H, max_frames: u64) -> u64 {
        let mut executed = 0;
        while !self.stopped && executed < max_frames {
            self.step(hooks, SIM_DT);
            executed += 1;
        }
        executed
    }

    /// Advance by a variable wall-clock delta, running fixed substeps
    pub fn advance<H: Hooks>(&mut self, hooks: &mut H, elapsed: f32) {
        let elapsed = elapsed.min(0.1);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(hooks, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Execute a single frame
    pub fn step<H: Hooks>(&mut self, hooks: &mut H, dt: f32) {
        if self.stopped {
            return;
        }
        self.frames += 1;

        for pos in std::mem::take(&mut self.pointer_queue) {
            hooks.on_pointer_move(self, pos);
        }

        for entity in &mut self.entities {
            if entity.alive {
                entity.pos += entity.vel * dt;
            }
        }

        let events = self.detect_collisions();
        for event in &events {
            hooks.on_collision(self, event);
        }
        self.respond_collisions(&events);

        hooks.on_post_update(self, dt);

        self.dispatch_exits(hooks);
    }

    /// Render all live entities to a draw surface
    pub fn render(&self, surface: &mut dyn DrawSurface, delta: f32) {
        for entity in &self.entities {
            if entity.alive {
                draw_entity(entity, surface, delta);
            }
        }
    }

    /// Collect one event per overlapping pair and participant
    fn detect_collisions(&self) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        for (i, a) in self.entities.iter().enumerate() {
            if !a.alive {
                continue;
            }
            for b in self.entities.iter().skip(i + 1) {
                if !b.alive {
                    continue;
                }
                if a.mode == CollisionMode::Fixed && b.mode == CollisionMode::Fixed {
                    continue;
                }
                if let Some(mtv) = a.intersection(b) {
                    events.push(CollisionEvent {
                        a: a.id,
                        b: b.id,
                        intersection: mtv,
                    });
                    events.push(CollisionEvent {
                        a: b.id,
                        b: a.id,
                        intersection: -mtv,
                    });
                }
            }
        }
        events
    }

    /// Apply each participant's automatic response, by collision mode
    fn respond_collisions(&mut self, events: &[CollisionEvent]) {
        for event in events {
            let other_mode = match self.entity(event.b) {
                Some(other) => other.mode,
                None => continue,
            };
            let Some(entity) = self.entity_mut(event.a) else {
                continue;
            };
            let mtv = event.intersection;

            match entity.mode {
                CollisionMode::Fixed | CollisionMode::Passive => {}
                CollisionMode::Active => {
                    // push out of penetration; share the correction
                    // when the other side also resolves
                    let share = if other_mode == CollisionMode::Fixed { 1.0 } else { 0.5 };
                    entity.pos += mtv * share;
                }
                CollisionMode::Elastic => {
                    entity.pos += mtv;
                    // reflect the component moving into the contact
                    if mtv.x != 0.0 && entity.vel.x * mtv.x < 0.0 {
                        entity.vel.x = -entity.vel.x;
                    } else if mtv.y != 0.0 && entity.vel.y * mtv.y < 0.0 {
                        entity.vel.y = -entity.vel.y;
                    }
                }
            }
        }
    }

    /// Report entities whose bounds left the board, once per excursion
    fn dispatch_exits<H: Hooks>(&mut self, hooks: &mut H) {
        let board = self.board;
        let outside: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| e.alive && e.outside_board(board))
            .map(|e| e.id)
            .collect();

        self.offscreen.retain(|id| outside.contains(id));
        for id in outside {
            if !self.offscreen.contains(&id) {
                self.offscreen.push(id);
                hooks.on_exit_viewport(self, id);
            }
        }
    }
}

impl Scene for HeadlessEngine {
    fn add(&mut self, mut entity: Entity) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        entity.id = id;
        self.entities.push(entity);
        id
    }

    fn kill(&mut self, id: EntityId) {
        if let Some(entity) = self.entities.iter_mut().find(|e| e.id == id) {
            entity.alive = false;
        }
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id && e.alive)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id && e.alive)
    }

    fn draw_width(&self) -> f32 {
        self.board.x
    }

    fn draw_height(&self) -> f32 {
        self.board.y
    }
}

impl RunControl for HeadlessEngine {
    fn stop(&mut self) {
        self.stopped = true;
    }

    fn stopped(&self) -> bool {
        self.stopped
    }
}
