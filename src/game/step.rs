use rand::Rng;

use super::input::InputState;
use super::paddle::{clamp_paddles, move_computer, move_player};
use super::physics::{update_ball, StepEvents};
use super::state::WorldState;
use crate::ai::Bot;

/// Run one frame of the simulation
///
/// Frame order is fixed and every host must go through this function:
/// 1. player paddle follows the held keys
/// 2. computer paddle follows the bot
/// 3. both paddles are clamped into the field
/// 4. the ball moves, bounces, scores and is re-served
///
/// Rendering reads the world only after this returns.
pub fn step<R: Rng>(
    world: &mut WorldState,
    input: &InputState,
    bot: &mut dyn Bot,
    rng: &mut R,
) -> StepEvents {
    move_player(world, input);
    let action = bot.get_action(world);
    move_computer(world, action);
    clamp_paddles(world);

    let events = update_ball(world, rng);
    if events.scored.is_some() {
        bot.reset();
    }
    events
}
