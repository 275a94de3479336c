use serde::{Deserialize, Serialize};

/// A side of the court. Names a paddle's lane, the direction of a serve,
/// or the player who scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign pointing toward this side (-1 left, +1 right)
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical paddle directive for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleDirection {
    Up,
    #[default]
    Stop,
    Down,
}

impl PaddleDirection {
    /// -1 = up, 0 = stop, 1 = down (screen y grows downward)
    pub fn as_f64(self) -> f64 {
        match self {
            PaddleDirection::Up => -1.0,
            PaddleDirection::Stop => 0.0,
            PaddleDirection::Down => 1.0,
        }
    }

    pub fn from_i8(dir: i8) -> Self {
        match dir.signum() {
            -1 => PaddleDirection::Up,
            1 => PaddleDirection::Down,
            _ => PaddleDirection::Stop,
        }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: PaddleDirection,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// How the horizontal direction of a serve is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServePolicy {
    /// Coin flip on every serve
    #[default]
    Random,
    /// Flip direction each serve; the first serve is a coin flip
    Alternate,
}
