use serde::{Deserialize, Serialize};

use crate::{CoreError, Params, Playfield, ServePolicy, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield_width: f64,
    pub playfield_height: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub paddle_margin: f64,
    pub ball_radius: f64,
    pub ball_base_speed: f64,
    pub ball_max_speed: Option<f64>,
    pub max_bounce_angle: f64,
    pub acceleration_enabled: bool,
    pub acceleration_factor: f64,
    pub serve_policy: ServePolicy,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_radius: Params::BALL_RADIUS,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_max_speed: None,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            acceleration_enabled: true,
            acceleration_factor: Params::ACCELERATION_FACTOR,
            serve_policy: ServePolicy::default(),
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    /// Get X position (left edge) of a paddle's lane
    pub fn paddle_x(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.playfield_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Y position (top edge) that vertically centers a paddle
    pub fn paddle_start_y(&self) -> f64 {
        (self.playfield_height - self.paddle_height) / 2.0
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_base_speed", self.ball_base_speed),
            ("acceleration_factor", self.acceleration_factor),
        ];
        for (name, value) in positive {
            ensure_positive(name, value)?;
        }

        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(invalid(format!(
                "paddle_margin must be non-negative, got {}",
                self.paddle_margin
            )));
        }
        if self.paddle_height > self.playfield_height {
            return Err(invalid(format!(
                "paddle_height {} exceeds playfield_height {}",
                self.paddle_height, self.playfield_height
            )));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.playfield_width {
            return Err(invalid("paddles do not fit across the playfield".to_string()));
        }
        if 2.0 * self.ball_radius >= self.playfield_height {
            return Err(invalid(format!(
                "ball_radius {} is too large for playfield_height {}",
                self.ball_radius, self.playfield_height
            )));
        }
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < std::f64::consts::FRAC_PI_2) {
            return Err(invalid(format!(
                "max_bounce_angle must lie in (0, pi/2), got {}",
                self.max_bounce_angle
            )));
        }
        if let Some(max) = self.ball_max_speed {
            ensure_positive("ball_max_speed", max)?;
            if max < self.ball_base_speed {
                return Err(invalid(format!(
                    "ball_max_speed {} is below ball_base_speed {}",
                    max, self.ball_base_speed
                )));
            }
        }
        if self.win_score == 0 {
            return Err(invalid("win_score must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> CoreError {
    CoreError::InvalidConfiguration(message)
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}
