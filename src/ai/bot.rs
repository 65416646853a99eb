// Bot trait for the computer paddle

use crate::game::{Move, WorldState};

/// Trait for AI paddle controllers
///
/// A bot looks at the world once per frame and decides which way its
/// paddle should step. It never moves the paddle itself; the paddle
/// controller applies the step and the clamp.
pub trait Bot {
    /// Decide which way the computer paddle should step this frame
    ///
    /// # Returns
    /// * `Some(Move)` - step the paddle one `computer_step` in that direction
    /// * `None` - leave the paddle where it is
    fn get_action(&mut self, world: &WorldState) -> Option<Move>;

    /// Reset bot internal state (called after every point)
    fn reset(&mut self);

    /// Bot name for logging
    fn name(&self) -> &str;
}
