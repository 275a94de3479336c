use hecs::World;

use crate::{Ball, Events, GameRng, Side};

/// Check if ball left the court. On a point the ball is served again
/// from the court center.
pub fn check_scoring(world: &mut World, events: &mut Events, rng: &mut GameRng) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(side) = ball.check_score() {
            log::info!("{:?} side scores", side);
            events.record_score(side);

            let center = ball.playfield().center();
            ball.reset(center.x, center.y, rng);
            scorer = Some(side);
        }
    }
    scorer
}
