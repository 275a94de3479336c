use hecs::World;

use crate::{FrameInput, Paddle, PaddleIntent};

/// Copy this frame's directives onto each paddle's intent
pub fn apply_intents(world: &mut World, input: &FrameInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.direction(paddle.side());
    }
}
