use rand::Rng;

use super::rules::{Axis, CollisionMode, Deflection};
use super::serve::serve_ball;
use super::state::{Ball, Paddle, Side, WorldState};

/// Gap left between ball and paddle face after a directional bounce
const CLEARANCE: f64 = 1.0;

/// What happened to the ball during one frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepEvents {
    pub wall_bounce: bool,
    pub paddle_hit: Option<Side>,
    /// Side awarded a point this frame
    pub scored: Option<Side>,
}

impl StepEvents {
    pub fn any(&self) -> bool {
        self.wall_bounce || self.paddle_hit.is_some() || self.scored.is_some()
    }
}

/// Advance the ball one frame: move, bounce off walls and paddles, score and re-serve
pub fn update_ball<R: Rng>(world: &mut WorldState, rng: &mut R) -> StepEvents {
    let mut events = StepEvents::default();

    let ball = &mut world.ball;
    ball.x += ball.dx;
    ball.y += ball.dy;

    events.wall_bounce = bounce_off_walls(world);
    events.paddle_hit = check_paddle_collision(world);

    if let Some(scorer) = check_goal(world) {
        world.paddle_mut(scorer).score += 1;
        events.scored = Some(scorer);
        tracing::info!(
            scorer = scorer.label(),
            player = world.player.score,
            computer = world.computer.score,
            "point scored"
        );
        serve_ball(world, rng);
    }

    events
}

// Sign flip only; the ball may sit inside the wall for up to a frame
fn bounce_off_walls(world: &mut WorldState) -> bool {
    let axis = world.rules.orientation.paddle_axis();
    let bound = world.rules.bound(axis);
    let ball = &mut world.ball;
    let pos = ball.position(axis);

    if pos + ball.radius > bound || pos - ball.radius < 0.0 {
        let v = ball.velocity(axis);
        ball.set_velocity(axis, -v);
        true
    } else {
        false
    }
}

fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.y + ball.radius > paddle.y
        && ball.y - ball.radius < paddle.y + paddle.height
        && ball.x + ball.radius > paddle.x
        && ball.x - ball.radius < paddle.x + paddle.width
}

/// Resolve at most one paddle contact, player first
fn check_paddle_collision(world: &mut WorldState) -> Option<Side> {
    let scoring = world.rules.orientation.scoring_axis();

    for side in [Side::Player, Side::Computer] {
        if !overlaps(&world.ball, world.paddle(side)) {
            continue;
        }

        let toward = world.ball.velocity(scoring) * world.end_sign(side) > 0.0;
        match world.rules.collision {
            CollisionMode::Directional if !toward => continue,
            CollisionMode::Directional => directional_bounce(world, side),
            CollisionMode::Simple => simple_bounce(world, side),
        }

        tracing::trace!(side = side.label(), dx = world.ball.dx, dy = world.ball.dy, "paddle hit");
        return Some(side);
    }

    None
}

fn directional_bounce(world: &mut WorldState, side: Side) {
    let scoring = world.rules.orientation.scoring_axis();
    let along = world.rules.orientation.paddle_axis();
    let away = -world.end_sign(side);
    let scale = world.rules.hit_offset_scale;
    let paddle = world.paddle(side).clone();
    let ball = &mut world.ball;

    let v = ball.velocity(scoring).abs();
    ball.set_velocity(scoring, away * v);
    ball.set_velocity(along, hit_offset(ball, &paddle, along) * scale);
    renormalize(ball, scoring, away);

    let face = if away < 0.0 {
        paddle.position(scoring) - ball.radius - CLEARANCE
    } else {
        paddle.position(scoring) + paddle.extent(scoring) + ball.radius + CLEARANCE
    };
    ball.set_position(scoring, face);
}

fn simple_bounce(world: &mut WorldState, side: Side) {
    let scoring = world.rules.orientation.scoring_axis();
    let along = world.rules.orientation.paddle_axis();
    let away = -world.end_sign(side);
    let rules = &world.rules;
    let paddle = world.paddle(side).clone();
    let ball = &mut world.ball;

    let flipped = -ball.velocity(scoring);
    match rules.deflection {
        Deflection::HitOffset => {
            ball.set_velocity(scoring, flipped);
            ball.set_velocity(along, hit_offset(ball, &paddle, along) * rules.hit_offset_scale);
            renormalize(ball, scoring, away);
        }
        Deflection::SpeedRamp => {
            ball.set_velocity(scoring, flipped * rules.speed_multiplier);
            if let Some(max) = rules.max_speed {
                let speed = ball.current_speed();
                if speed > max {
                    ball.dx *= max / speed;
                    ball.dy *= max / speed;
                }
            }
        }
    }
}

/// Where the ball met the paddle: -0.5 at its low edge, +0.5 at its high edge
fn hit_offset(ball: &Ball, paddle: &Paddle, along: Axis) -> f64 {
    let offset = (ball.position(along) - paddle.position(along)) / paddle.extent(along);
    offset - 0.5
}

/// Scale the velocity back to the ball's target speed
///
/// A zero vector has no direction to keep, so the ball is sent straight
/// along the scoring axis in the `away` direction instead.
fn renormalize(ball: &mut Ball, scoring: Axis, away: f64) {
    let current = ball.current_speed();
    if current > f64::EPSILON {
        let factor = ball.speed / current;
        ball.dx *= factor;
        ball.dy *= factor;
    } else {
        ball.dx = 0.0;
        ball.dy = 0.0;
        ball.set_velocity(scoring, away * ball.speed);
    }
}

/// Side that earns a point if the ball has left the field on the scoring axis
fn check_goal(world: &WorldState) -> Option<Side> {
    let axis = world.rules.orientation.scoring_axis();
    let bound = world.rules.bound(axis);
    let guarded = world.rules.collision == CollisionMode::Directional;
    let ball = &world.ball;
    let pos = ball.position(axis);
    let v = ball.velocity(axis);

    let passed = if pos - ball.radius < 0.0 {
        if guarded && v >= 0.0 {
            return None;
        }
        world.side_at(false)
    } else if pos + ball.radius > bound {
        if guarded && v <= 0.0 {
            return None;
        }
        world.side_at(true)
    } else {
        return None;
    };

    Some(passed.opponent())
}
