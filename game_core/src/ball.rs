//! The ball: motion integration, wall and paddle collisions, angle-mapped
//! paddle reflection, scoring-boundary detection and serving.

use rand::Rng;

use crate::config::ensure_positive;
use crate::{Config, CoreError, GameRng, Paddle, Params, Playfield, ServePolicy, Side, Vector2D};

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center of the ball
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Multiply speed by `acceleration_factor` on every paddle hit
    pub acceleration_enabled: bool,
    radius: f64,
    base_speed: f64,
    acceleration_factor: f64,
    max_bounce_angle: f64,
    max_speed: Option<f64>,
    serve_policy: ServePolicy,
    last_serve: Option<Side>,
    playfield: Playfield,
}

impl Ball {
    /// A ball at rest. Call `reset` to serve it.
    pub fn new(
        position: Vector2D,
        radius: f64,
        base_speed: f64,
        playfield: Playfield,
    ) -> Result<Self, CoreError> {
        ensure_positive("ball radius", radius)?;
        ensure_positive("ball base speed", base_speed)?;
        ensure_positive("playfield width", playfield.width)?;
        ensure_positive("playfield height", playfield.height)?;

        Ok(Self {
            position,
            velocity: Vector2D::ZERO,
            acceleration_enabled: true,
            radius,
            base_speed,
            acceleration_factor: Params::ACCELERATION_FACTOR,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            max_speed: None,
            serve_policy: ServePolicy::default(),
            last_serve: None,
            playfield,
        })
    }

    /// Ball at the court center, tuned from `config`. Not yet served.
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let playfield = config.playfield();
        Ok(
            Self::new(playfield.center(), config.ball_radius, config.ball_base_speed, playfield)?
                .with_acceleration(config.acceleration_enabled, config.acceleration_factor)?
                .with_max_bounce_angle(config.max_bounce_angle)?
                .with_max_speed(config.ball_max_speed)?
                .with_serve_policy(config.serve_policy),
        )
    }

    pub fn with_acceleration(mut self, enabled: bool, factor: f64) -> Result<Self, CoreError> {
        ensure_positive("acceleration factor", factor)?;
        self.acceleration_enabled = enabled;
        self.acceleration_factor = factor;
        Ok(self)
    }

    pub fn with_max_bounce_angle(mut self, angle: f64) -> Result<Self, CoreError> {
        if !(angle > 0.0 && angle < std::f64::consts::FRAC_PI_2) {
            return Err(CoreError::InvalidConfiguration(format!(
                "max bounce angle must lie in (0, pi/2), got {angle}"
            )));
        }
        self.max_bounce_angle = angle;
        Ok(self)
    }

    pub fn with_max_speed(mut self, max_speed: Option<f64>) -> Result<Self, CoreError> {
        if let Some(max) = max_speed {
            ensure_positive("ball max speed", max)?;
        }
        self.max_speed = max_speed;
        Ok(self)
    }

    pub fn with_serve_policy(mut self, policy: ServePolicy) -> Self {
        self.serve_policy = policy;
        self
    }

    /// Serve from (x, y): random angle within ±45° of the horizontal,
    /// magnitude `base_speed`, direction chosen by the serve policy
    pub fn reset(&mut self, x: f64, y: f64, rng: &mut GameRng) {
        self.position = Vector2D::new(x, y);

        let theta: f64 = rng.0.gen_range(-Params::SERVE_ANGLE..=Params::SERVE_ANGLE);
        let toward = self.next_serve(rng);
        self.last_serve = Some(toward);

        self.velocity = Vector2D::new(
            theta.cos() * self.base_speed * toward.sign(),
            theta.sin() * self.base_speed,
        );
        log::debug!(
            "serve toward {:?} at {:.1}°",
            toward,
            theta.to_degrees()
        );
    }

    fn next_serve(&self, rng: &mut GameRng) -> Side {
        match (self.serve_policy, self.last_serve) {
            (ServePolicy::Alternate, Some(last)) => last.opposite(),
            _ => {
                if rng.0.gen_bool(0.5) {
                    Side::Right
                } else {
                    Side::Left
                }
            }
        }
    }

    /// Integrate position: position += velocity * dt * speed_multiplier
    pub fn update(&mut self, dt: f64, speed_multiplier: f64) {
        self.position += self.velocity * (dt * speed_multiplier);
    }

    /// Unit direction of travel; fails if the ball has stopped
    pub fn direction(&self) -> Result<Vector2D, CoreError> {
        self.velocity.normalize()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Bounce off the top or bottom wall.
    ///
    /// A ball touching a wall is pushed back onto the court; its vertical
    /// velocity is reflected only while it still heads into that wall, so a
    /// second call in the same frame changes nothing.
    pub fn check_wall_collision(&mut self) -> bool {
        let top = self.playfield.top();
        let bottom = self.playfield.bottom();

        if self.position.y - self.radius <= top {
            self.position.y = top + self.radius;
            if self.velocity.y < 0.0 {
                self.velocity = self.velocity.reflect_unit(Vector2D::Y);
                return true;
            }
        } else if self.position.y + self.radius >= bottom {
            self.position.y = bottom - self.radius;
            if self.velocity.y > 0.0 {
                self.velocity = self.velocity.reflect_unit(-Vector2D::Y);
                return true;
            }
        }
        false
    }

    /// Circle vs paddle rectangle, via the closest point on the rectangle
    pub fn check_paddle_collision(&self, paddle: &Paddle) -> bool {
        paddle
            .get_rect()
            .intersects_circle(self.position, self.radius)
    }

    /// Send the ball back across the court.
    ///
    /// The outgoing angle is `offset * max_bounce_angle`, where offset is the
    /// impact height relative to the paddle center in [-1, 1]. Horizontal
    /// direction always points away from the paddle's side. Speed is kept,
    /// or escalated when acceleration is enabled. The ball is then moved just
    /// clear of the paddle so the same contact cannot fire again.
    pub fn reflect_from_paddle(&mut self, paddle: &Paddle) {
        let half_height = paddle.height() / 2.0;
        let offset = ((self.position.y - paddle.center().y) / half_height).clamp(-1.0, 1.0);
        let bounce_angle = offset * self.max_bounce_angle;
        let direction = paddle.side().opposite().sign();

        let mut speed = self.velocity.magnitude();
        if self.acceleration_enabled {
            speed *= self.acceleration_factor;
        }
        if let Some(max) = self.max_speed {
            speed = speed.min(max);
        }

        self.velocity = Vector2D::new(
            bounce_angle.cos() * speed * direction,
            bounce_angle.sin() * speed,
        );
        self.separate_from(paddle);
    }

    fn separate_from(&mut self, paddle: &Paddle) {
        let rect = paddle.get_rect();
        let face = paddle.face_normal();
        let clearance = self.radius + Params::SEPARATION;

        let closest = rect.closest_point(self.position);
        let delta = self.position - closest;
        let distance = delta.magnitude();

        let face_x = match paddle.side() {
            Side::Left => rect.right(),
            Side::Right => rect.left(),
        };

        if distance > 0.0 && delta.dot(face) >= 0.0 {
            self.position = closest + delta * (clearance / distance);

            // A corner push must not leave the court; slide out past the
            // face corner instead
            let top = self.playfield.top() + self.radius;
            let bottom = self.playfield.bottom() - self.radius;
            if self.position.y < top || self.position.y > bottom {
                self.position.y = self.position.y.clamp(top, bottom);
                let corner_y = self.position.y.clamp(rect.top(), rect.bottom());
                let dy = self.position.y - corner_y;
                let dx = if dy.abs() >= clearance {
                    clearance
                } else {
                    (clearance * clearance - dy * dy).sqrt()
                };
                self.position.x = face_x + face.x * dx;
            }
        } else {
            // Center inside or behind the paddle: put it in front of the face
            self.position.x = face_x + face.x * clearance;
        }
    }

    /// Which side scored, if the ball crossed a scoring boundary
    pub fn check_score(&self) -> Option<Side> {
        if self.position.x - self.radius < self.playfield.left() {
            Some(Side::Right)
        } else if self.position.x + self.radius > self.playfield.right() {
            Some(Side::Left)
        } else {
            None
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    pub fn acceleration_factor(&self) -> f64 {
        self.acceleration_factor
    }

    pub fn max_bounce_angle(&self) -> f64 {
        self.max_bounce_angle
    }

    pub fn max_speed(&self) -> Option<f64> {
        self.max_speed
    }

    pub fn serve_policy(&self) -> ServePolicy {
        self.serve_policy
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }
}
