use hecs::World;

use crate::{Ball, Events, Paddle};

/// Check ball collisions with walls, then the left paddle, then the right
pub fn check_collisions(world: &mut World, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.check_wall_collision() {
            log::debug!("ball hit wall at y={:.1}", ball.position.y);
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if ball.check_paddle_collision(paddle) {
                ball.reflect_from_paddle(paddle);
                log::debug!(
                    "ball hit {:?} paddle, speed now {:.1}",
                    paddle.side(),
                    ball.speed()
                );
                events.ball_hit_paddle = Some(paddle.side());
            }
        }
    }
}
