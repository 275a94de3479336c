use hecs::World;

use crate::{Ball, CoreError, Paddle, PaddleIntent};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, dt: f64, speed_multiplier: f64) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.steer(intent.dir, dt, speed_multiplier);
    }
}

/// Move ball based on velocity.
///
/// A ball that has stopped (or whose velocity is no longer finite) breaks
/// the motion invariant and is reported as a degenerate vector.
pub fn move_ball(world: &mut World, dt: f64, speed_multiplier: f64) -> Result<(), CoreError> {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(dt, speed_multiplier);
        ball.direction()?;
    }
    Ok(())
}

/// Put both paddles back at the vertical center of their lanes
pub fn recenter_paddles(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.recenter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, PaddleDirection, Side, Vector2D};

    #[test]
    fn test_move_paddles_follows_intent() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, &config).unwrap();
        let start_y = config.paddle_start_y();

        world.get::<&mut PaddleIntent>(left).unwrap().dir = PaddleDirection::Down;
        move_paddles(&mut world, 0.1, 1.5);

        let y = world.get::<&Paddle>(left).unwrap().position().y;
        assert!((y - (start_y + config.paddle_speed * 1.5 * 0.1)).abs() < 1e-9);

        recenter_paddles(&mut world);
        assert_eq!(world.get::<&Paddle>(left).unwrap().position().y, start_y);
    }

    #[test]
    fn test_move_ball_integrates() {
        let mut world = World::new();
        let config = Config::new();
        let mut ball = Ball::from_config(&config).unwrap();
        ball.position = Vector2D::new(100.0, 100.0);
        ball.velocity = Vector2D::new(200.0, -100.0);
        let entity = create_ball(&mut world, ball);

        move_ball(&mut world, 0.5, 2.0).unwrap();

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.position, Vector2D::new(300.0, 0.0));
    }

    #[test]
    fn test_move_ball_rejects_stopped_ball() {
        let mut world = World::new();
        let ball = Ball::from_config(&Config::new()).unwrap();
        create_ball(&mut world, ball);

        assert_eq!(
            move_ball(&mut world, 0.1, 1.0),
            Err(CoreError::DegenerateVector)
        );
    }
}
