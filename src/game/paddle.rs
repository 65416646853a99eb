use super::input::{InputState, Move};
use super::rules::Axis;
use super::state::{Paddle, Side, WorldState};

/// Shift a paddle one step along its movement axis
pub fn step_paddle(world: &mut WorldState, side: Side, mv: Move) {
    let axis = world.rules.orientation.paddle_axis();
    let paddle = world.paddle_mut(side);
    let delta = match mv {
        Move::Negative => -paddle.step,
        Move::Positive => paddle.step,
    };
    let moved = paddle.position(axis) + delta;
    paddle.set_position(axis, moved);
}

/// Apply every held key; opposite keys cancel only through arithmetic
pub fn move_player(world: &mut WorldState, input: &InputState) {
    for mv in [Move::Negative, Move::Positive] {
        if input.is_held(mv) {
            step_paddle(world, Side::Player, mv);
        }
    }
}

pub fn move_computer(world: &mut WorldState, action: Option<Move>) {
    if let Some(mv) = action {
        step_paddle(world, Side::Computer, mv);
    }
}

/// Keep both paddles inside the field; runs every frame
pub fn clamp_paddles(world: &mut WorldState) {
    let axis = world.rules.orientation.paddle_axis();
    let bound = world.rules.bound(axis);
    clamp_paddle(&mut world.player, axis, bound);
    clamp_paddle(&mut world.computer, axis, bound);
}

fn clamp_paddle(paddle: &mut Paddle, axis: Axis, bound: f64) {
    let max = bound - paddle.extent(axis);
    let clamped = paddle.position(axis).min(max).max(0.0);
    paddle.set_position(axis, clamped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;

    #[test]
    fn test_held_keys_move_player() {
        let mut world = WorldState::new(Rules::portrait());
        let start = world.player.x;
        let mut input = InputState::new();

        input.press(Move::Negative);
        move_player(&mut world, &input);
        assert_eq!(world.player.x, start - 5.0);

        // Both held: each applies its own step, netting to zero
        input.press(Move::Positive);
        move_player(&mut world, &input);
        assert_eq!(world.player.x, start - 5.0);
    }

    #[test]
    fn test_landscape_player_moves_vertically() {
        let mut world = WorldState::new(Rules::landscape());
        let (x, y) = (world.player.x, world.player.y);
        let mut input = InputState::new();
        input.press(Move::Positive);
        move_player(&mut world, &input);
        assert_eq!(world.player.x, x);
        assert_eq!(world.player.y, y + 5.0);
    }

    #[test]
    fn test_clamp_keeps_paddles_in_field() {
        let mut world = WorldState::new(Rules::portrait());
        world.player.x = -30.0;
        world.computer.x = 390.0;
        clamp_paddles(&mut world);
        assert_eq!(world.player.x, 0.0);
        assert_eq!(world.computer.x, 320.0);
    }

    #[test]
    fn test_clamp_holds_under_sustained_input() {
        let mut world = WorldState::new(Rules::portrait());
        let mut input = InputState::new();
        input.press(Move::Positive);

        for _ in 0..200 {
            move_player(&mut world, &input);
            move_computer(&mut world, Some(Move::Negative));
            clamp_paddles(&mut world);
            assert!(world.player.x >= 0.0 && world.player.x <= 320.0);
            assert!(world.computer.x >= 0.0 && world.computer.x <= 320.0);
        }
        assert_eq!(world.player.x, 320.0);
        assert_eq!(world.computer.x, 0.0);
    }
}
