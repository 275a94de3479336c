use game_core::*;

fn small_court() -> Playfield {
    Playfield::new(800.0, 600.0)
}

fn small_ball(position: Vector2D, velocity: Vector2D) -> Ball {
    let mut ball = Ball::new(position, 10.0, 300.0, small_court()).unwrap();
    ball.velocity = velocity;
    ball
}

#[test]
fn test_left_paddle_center_hit_scenario() {
    // 800x600 court, paddle 10x100 at x=20 centered on y=300
    let paddle = Paddle::new(
        Side::Left,
        Vector2D::new(20.0, 250.0),
        10.0,
        100.0,
        400.0,
        small_court(),
    )
    .unwrap();
    let mut ball = small_ball(Vector2D::new(30.0, 300.0), Vector2D::new(-50.0, 0.0));

    assert!(ball.check_paddle_collision(&paddle));
    ball.reflect_from_paddle(&paddle);

    assert!(ball.velocity.x > 0.0, "Ball should bounce away from left paddle");
    assert!(ball.velocity.y.abs() < 1e-9, "Center hit gives a flat return");
}

#[test]
fn test_top_wall_scenario() {
    let mut ball = small_ball(Vector2D::new(400.0, 5.0), Vector2D::new(120.0, -90.0));

    assert!(ball.check_wall_collision());
    assert!(ball.velocity.y > 0.0);
    assert_eq!(ball.velocity.x, 120.0);
}

#[test]
fn test_round_reset_scenario() {
    let mut rng = GameRng::new(2024);
    let mut ball = small_ball(Vector2D::new(13.0, 71.0), Vector2D::new(-999.0, 3.0));

    ball.reset(400.0, 300.0, &mut rng);

    assert_eq!(ball.position, Vector2D::new(400.0, 300.0));
    assert!((ball.velocity.magnitude() - ball.base_speed()).abs() < 1e-9);
    let angle = ball.velocity.y.atan2(ball.velocity.x.abs());
    assert!(angle.abs() <= std::f64::consts::FRAC_PI_4 + 1e-12);
}

#[test]
fn test_scoring_boundaries_scenario() {
    let ball = small_ball(Vector2D::new(-1.0, 300.0), Vector2D::new(-10.0, 0.0));
    assert_eq!(ball.check_score(), Some(Side::Right));

    let ball = small_ball(Vector2D::new(801.0, 300.0), Vector2D::new(10.0, 0.0));
    assert_eq!(ball.check_score(), Some(Side::Left));

    let ball = small_ball(Vector2D::new(400.0, 300.0), Vector2D::new(10.0, 0.0));
    assert_eq!(ball.check_score(), None);
}

#[test]
fn test_rally_keeps_entities_on_court() {
    let config = Config::new();
    let mut round = RoundController::new(config.clone(), 7).unwrap();
    let field = config.playfield();

    let mut points = 0;
    let mut wall_hits = 0;

    for frame in 0..6000 {
        // Sweep both paddles up and down
        let dir = if (frame / 90) % 2 == 0 {
            PaddleDirection::Up
        } else {
            PaddleDirection::Down
        };
        let events = round
            .step(1.0 / 60.0, FrameInput::new(dir, dir), SpeedMultipliers::default())
            .unwrap();

        if events.scored().is_some() {
            points += 1;
        }
        if events.ball_hit_wall {
            wall_hits += 1;
        }

        let ball = round.ball().unwrap();
        assert!(ball.position.y - ball.radius() >= field.top() - 1e-9);
        assert!(ball.position.y + ball.radius() <= field.bottom() + 1e-9);

        for side in [Side::Left, Side::Right] {
            let rect = round.paddle(side).unwrap().get_rect();
            assert!(rect.top() >= field.top());
            assert!(rect.bottom() <= field.bottom());
        }
    }

    assert!(points > 0, "A 100 second rally should produce points");
    assert!(wall_hits > 0, "Serves at an angle should reach a wall");
    assert!(round.elapsed() > 99.0);
}

#[test]
fn test_paddle_returns_ball_in_play() {
    let config = Config::new();
    let mut round = RoundController::new(config.clone(), 11).unwrap();

    // Keep serving until the ball heads left, then track it with the left paddle
    let mut returned = false;
    for _ in 0..20_000 {
        let ball = round.ball().unwrap();
        let paddle = round.paddle(Side::Left).unwrap();
        let dir = if ball.position.y < paddle.center().y - 5.0 {
            PaddleDirection::Up
        } else if ball.position.y > paddle.center().y + 5.0 {
            PaddleDirection::Down
        } else {
            PaddleDirection::Stop
        };

        let events = round
            .step(
                1.0 / 60.0,
                FrameInput::new(dir, PaddleDirection::Stop),
                SpeedMultipliers::default(),
            )
            .unwrap();

        if events.ball_hit_paddle == Some(Side::Left) {
            let ball = round.ball().unwrap();
            assert!(ball.velocity.x > 0.0);
            assert!(ball.speed() > config.ball_base_speed, "Acceleration is on by default");
            returned = true;
            break;
        }
    }
    assert!(returned, "Tracking paddle should return the ball");
}
