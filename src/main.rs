//! Brickout entry point
//!
//! Runs a headless session with a simple follow-the-ball auto-paddle
//! and reports the outcome. An optional argument names a JSON config
//! file; without it the classic board is used.

use std::env;
use std::fs;
use std::process;

use glam::Vec2;

use brickout::config::GameConfig;
use brickout::consts::SIM_DT;
use brickout::engine::{HeadlessEngine, RunControl, Scene};
use brickout::sim::{Session, SessionEvent};

fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load config: {err}");
            process::exit(1);
        }
    };

    let mut engine = HeadlessEngine::new(config.board_width, config.board_height);
    let mut session = Session::new(&config, &mut engine);

    // ten minutes of play at most
    let max_frames = 10 * 60 * 60;
    let mut frames = 0u64;
    while !engine.stopped() && frames < max_frames {
        // auto-paddle: track the ball, leading it a little
        if let Some(ball) = engine.entity(session.ball_id()) {
            let target = ball.pos.x + ball.vel.x * 0.1;
            engine.push_pointer(Vec2::new(target, 0.0));
        }

        engine.step(&mut session, SIM_DT);
        frames += 1;

        for event in session.take_events() {
            match event {
                SessionEvent::BrickDestroyed { id, remaining } => {
                    log::info!("brick {id} destroyed, {remaining} left");
                }
                SessionEvent::BallLost => log::info!("you lose!"),
            }
        }
    }

    log::info!(
        "finished after {:.1}s: phase {:?}, {} bricks remaining",
        frames as f32 * SIM_DT,
        session.phase(),
        session.remaining_bricks()
    );
}

fn load_config() -> Result<GameConfig, Box<dyn std::error::Error>> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let config = GameConfig::from_json(&text)?;
            log::info!("loaded config from {path}");
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}
