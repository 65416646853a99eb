// Dead-zone tracker - the classic reactive paddle AI

use super::Bot;
use crate::game::{Move, WorldState};

/// Follows the ball along the paddle axis, but only once the ball has
/// drifted more than `dead_zone` away from the paddle center.
///
/// The paddle steps at most `computer_step` per frame, so its effective
/// reaction lag is roughly `dead_zone / computer_step` frames. That lag
/// is what makes it beatable.
pub struct DeadZoneTracker {
    name: String,
    dead_zone: f64,
}

impl DeadZoneTracker {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            name: "Dead-zone tracker".to_string(),
            dead_zone,
        }
    }
}

impl Bot for DeadZoneTracker {
    fn get_action(&mut self, world: &WorldState) -> Option<Move> {
        let axis = world.rules.orientation.paddle_axis();
        let paddle_center = world.computer.center(axis);
        let ball = world.ball.position(axis);

        if paddle_center < ball - self.dead_zone {
            Some(Move::Positive)
        } else if paddle_center > ball + self.dead_zone {
            Some(Move::Negative)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        // Purely reactive, nothing to forget
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;

    fn world_with_ball_x(x: f64) -> WorldState {
        let mut world = WorldState::new(Rules::portrait());
        // Computer paddle center sits at x = 200
        world.ball.x = x;
        world
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        let mut bot = DeadZoneTracker::new(35.0);
        for x in [165.0, 180.0, 200.0, 220.0, 235.0] {
            assert_eq!(bot.get_action(&world_with_ball_x(x)), None, "x = {}", x);
        }
    }

    #[test]
    fn test_follows_ball_outside_dead_zone() {
        let mut bot = DeadZoneTracker::new(35.0);
        assert_eq!(bot.get_action(&world_with_ball_x(236.0)), Some(Move::Positive));
        assert_eq!(bot.get_action(&world_with_ball_x(164.0)), Some(Move::Negative));
    }

    #[test]
    fn test_tracks_y_in_landscape() {
        let mut world = WorldState::new(Rules::landscape());
        // Computer paddle center sits at y = 200
        world.ball.y = 300.0;
        let mut bot = DeadZoneTracker::new(35.0);
        assert_eq!(bot.get_action(&world), Some(Move::Positive));
    }
}
