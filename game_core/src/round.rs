//! Round orchestration: owns the world and exposes the per-frame contract
//! the game-state layer calls.

use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Config, CoreError, Events, FrameInput, GameRng,
    Paddle, Side, SpeedMultipliers, Time,
};

pub struct RoundController {
    world: World,
    ball: Entity,
    left: Entity,
    right: Entity,
    config: Config,
    time: Time,
    events: Events,
    rng: GameRng,
}

impl RoundController {
    /// Validate `config`, spawn both paddles and serve the ball
    pub fn new(config: Config, seed: u64) -> Result<Self, CoreError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, Side::Left, &config)?;
        let right = create_paddle(&mut world, Side::Right, &config)?;

        let mut ball = Ball::from_config(&config)?;
        let center = config.playfield().center();
        ball.reset(center.x, center.y, &mut rng);
        let ball = create_ball(&mut world, ball);

        Ok(Self {
            world,
            ball,
            left,
            right,
            config,
            time: Time::new(0.0, 0.0),
            events: Events::new(),
            rng,
        })
    }

    /// Advance one frame of `dt` seconds
    pub fn step(
        &mut self,
        dt: f64,
        input: FrameInput,
        multipliers: SpeedMultipliers,
    ) -> Result<Events, CoreError> {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &input,
            &multipliers,
            &mut self.events,
            &mut self.rng,
        )?;
        Ok(self.events)
    }

    /// Re-center paddles and serve a fresh ball from the court center
    pub fn reset_round(&mut self) {
        let center = self.config.playfield().center();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.recenter();
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(center.x, center.y, &mut self.rng);
        }
        self.events.clear();
        log::info!("round reset");
    }

    pub fn set_acceleration_enabled(&mut self, enabled: bool) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.acceleration_enabled = enabled;
        }
    }

    /// Snapshot of the ball, for drawing
    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Snapshot of a paddle, for drawing
    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    /// Events from the most recent frame
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Simulated seconds since the controller was created
    pub fn elapsed(&self) -> f64 {
        self.time.now
    }

    #[cfg(test)]
    pub(crate) fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }
}
