use crate::{PaddleDirection, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f64,  // Delta time for this frame (seconds)
    pub now: f64, // Total elapsed time
}

impl Time {
    pub fn new(dt: f64, now: f64) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    /// Side of the paddle the ball last bounced off this frame
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    /// Side that scored this frame, if any
    pub fn scored(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Runtime speed scaling, driven by the UI sliders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMultipliers {
    /// Scales elapsed time for the ball
    pub game: f64,
    pub paddle: f64,
    pub ball: f64,
}

impl Default for SpeedMultipliers {
    fn default() -> Self {
        Self {
            game: 1.0,
            paddle: 1.0,
            ball: 1.0,
        }
    }
}

/// Paddle directives for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: PaddleDirection,
    pub right: PaddleDirection,
}

impl FrameInput {
    pub fn new(left: PaddleDirection, right: PaddleDirection) -> Self {
        Self { left, right }
    }

    pub fn direction(&self, side: Side) -> PaddleDirection {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(5), None, "No winner below threshold");
        score.increment(Side::Right);
        assert_eq!(score.has_winner(5), Some(Side::Right));
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 3, right: 4 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.record_score(Side::Left);
        events.ball_hit_paddle = Some(Side::Right);
        events.ball_hit_wall = true;
        assert_eq!(events.scored(), Some(Side::Left));

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert_eq!(events.ball_hit_paddle, None);
        assert!(!events.ball_hit_wall);
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_frame_input_direction() {
        let input = FrameInput::new(PaddleDirection::Up, PaddleDirection::Down);
        assert_eq!(input.direction(Side::Left), PaddleDirection::Up);
        assert_eq!(input.direction(Side::Right), PaddleDirection::Down);
    }
}
