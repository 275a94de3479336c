/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (pixels)
    pub const PLAYFIELD_WIDTH: f64 = 1080.0;
    pub const PLAYFIELD_HEIGHT: f64 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 15.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_SPEED: f64 = 400.0; // pixels per second
    pub const PADDLE_MARGIN: f64 = 50.0; // side wall to paddle

    // Ball
    pub const BALL_RADIUS: f64 = 8.0;
    pub const BALL_BASE_SPEED: f64 = 400.0; // pixels per second
    pub const ACCELERATION_FACTOR: f64 = 1.05; // multiply speed on paddle hit

    // Angles (radians)
    pub const MAX_BOUNCE_ANGLE: f64 = std::f64::consts::FRAC_PI_3; // 60°
    pub const SERVE_ANGLE: f64 = std::f64::consts::FRAC_PI_4; // ±45° around the horizontal

    // Gap left between ball and paddle after a hit
    pub const SEPARATION: f64 = 1e-6;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Physics
    pub const FIXED_DT: f64 = 1.0 / 120.0;
    pub const MAX_DT: f64 = 0.1; // Clamp to prevent large jumps
}
