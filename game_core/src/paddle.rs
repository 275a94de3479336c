use crate::config::ensure_positive;
use crate::{Config, CoreError, PaddleDirection, Playfield, Rect, Side, Vector2D};

/// Paddle component - an axis-aligned rectangle that only moves vertically.
///
/// `position` is the top-left corner and always keeps the rectangle
/// inside the playfield's vertical bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    side: Side,
    position: Vector2D,
    width: f64,
    height: f64,
    speed: f64,
    playfield: Playfield,
}

impl Paddle {
    pub fn new(
        side: Side,
        position: Vector2D,
        width: f64,
        height: f64,
        speed: f64,
        playfield: Playfield,
    ) -> Result<Self, CoreError> {
        ensure_positive("paddle width", width)?;
        ensure_positive("paddle height", height)?;
        ensure_positive("paddle speed", speed)?;
        if height > playfield.height {
            return Err(CoreError::InvalidConfiguration(format!(
                "paddle height {} exceeds playfield height {}",
                height, playfield.height
            )));
        }
        if !position.is_finite() {
            return Err(CoreError::InvalidConfiguration(
                "paddle position must be finite".to_string(),
            ));
        }

        let mut paddle = Self {
            side,
            position,
            width,
            height,
            speed,
            playfield,
        };
        paddle.set_y(position.y);
        Ok(paddle)
    }

    /// Paddle in its lane, vertically centered
    pub fn from_config(side: Side, config: &Config) -> Result<Self, CoreError> {
        Self::new(
            side,
            Vector2D::new(config.paddle_x(side), config.paddle_start_y()),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
            config.playfield(),
        )
    }

    /// Move vertically: y += direction * speed * speed_multiplier * dt,
    /// then clamp to the court
    pub fn steer(&mut self, direction: PaddleDirection, dt: f64, speed_multiplier: f64) {
        let delta = direction.as_f64() * self.speed * speed_multiplier * dt;
        self.set_y(self.position.y + delta);
    }

    /// Place the top edge at `y`, clamped to the court
    pub fn set_y(&mut self, y: f64) {
        self.position.y = self.playfield.clamp_top(y, self.height);
    }

    /// Back to the vertical center of the lane
    pub fn recenter(&mut self) {
        self.set_y((self.playfield.height - self.height) / 2.0);
    }

    pub fn get_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn center(&self) -> Vector2D {
        self.get_rect().center()
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Unit normal of the face that looks into the court
    pub fn face_normal(&self) -> Vector2D {
        Vector2D::new(self.side.opposite().sign(), 0.0)
    }
}
