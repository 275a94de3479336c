pub mod ball;
pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod paddle;
pub mod params;
pub mod resources;
pub mod round;
pub mod systems;
pub mod vector;

pub use ball::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use paddle::*;
pub use params::*;
pub use resources::*;
pub use round::*;
pub use vector::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic Pong simulation.
///
/// Per substep: move paddles, integrate the ball, resolve wall then paddle
/// collisions, then check scoring. A point ends the frame after the ball is
/// re-served and the paddles re-centered. Events accumulate for the whole
/// frame.
pub fn step(
    world: &mut World,
    time: &mut Time,
    input: &FrameInput,
    multipliers: &SpeedMultipliers,
    events: &mut Events,
    rng: &mut GameRng,
) -> Result<(), CoreError> {
    events.clear();

    let dt = if time.dt.is_finite() && time.dt >= 0.0 {
        time.dt
    } else {
        log::warn!("ignoring invalid frame dt {}", time.dt);
        0.0
    };

    // Clamp dt to prevent large jumps
    let clamped_dt = dt.min(Params::MAX_DT);

    apply_intents(world, input);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > f64::EPSILON {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;
        // Game speed only runs the ball's clock; paddles keep real time
        let scaled_dt = step_dt * multipliers.game;

        move_paddles(world, step_dt, multipliers.paddle);
        move_ball(world, scaled_dt, multipliers.ball)?;
        check_collisions(world, events);

        if check_scoring(world, events, rng).is_some() {
            recenter_paddles(world);
            break;
        }
    }

    time.now += clamped_dt;
    Ok(())
}

/// Helper to create a paddle entity in its lane, vertically centered
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> Result<hecs::Entity, CoreError> {
    let paddle = Paddle::from_config(side, config)?;
    Ok(world.spawn((paddle, PaddleIntent::new())))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
