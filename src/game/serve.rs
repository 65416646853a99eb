use std::f64::consts::FRAC_PI_4;

use rand::Rng;

use super::rules::ServePolicy;
use super::state::WorldState;

/// Put the ball back at center with a fresh velocity
pub fn serve_ball<R: Rng>(world: &mut WorldState, rng: &mut R) {
    let (cx, cy) = world.center();
    let (off_axis, along) = serve_velocity(world.rules.serve, world.ball.speed, rng);

    let orientation = world.rules.orientation;
    let ball = &mut world.ball;
    ball.x = cx;
    ball.y = cy;
    ball.set_velocity(orientation.paddle_axis(), off_axis);
    ball.set_velocity(orientation.scoring_axis(), along);

    tracing::debug!(dx = ball.dx, dy = ball.dy, "ball served");
}

/// Pick a serve velocity as (off-axis, scoring-axis) components
pub fn serve_velocity<R: Rng>(policy: ServePolicy, speed: f64, rng: &mut R) -> (f64, f64) {
    let toward_far_end = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    match policy {
        ServePolicy::Arc { arc } => {
            let angle = (rng.gen::<f64>() - 0.5) * arc;
            (speed * angle.sin(), speed * angle.cos() * toward_far_end)
        }
        ServePolicy::StrictArc { arc, min_component } => {
            let angle = (rng.gen::<f64>() - 0.5) * arc;
            let angle = steepness_floor(angle, speed, min_component);
            (speed * angle.sin(), speed * angle.cos() * toward_far_end)
        }
        ServePolicy::Diagonal => {
            let sideways = if rng.gen_bool(0.5) { speed } else { -speed };
            (sideways, speed * toward_far_end)
        }
    }
}

/// Clamp |angle| so both components of a `speed`-long vector reach `min_component`
///
/// Clamping the angle instead of the components keeps the magnitude at `speed`.
/// If no angle satisfies both floors the serve goes out at 45 degrees.
fn steepness_floor(angle: f64, speed: f64, min_component: f64) -> f64 {
    let sign = if angle >= 0.0 { 1.0 } else { -1.0 };
    let ratio = min_component / speed;
    if ratio.is_nan() || ratio <= 0.0 {
        return angle;
    }
    if ratio > FRAC_PI_4.sin() {
        return sign * FRAC_PI_4;
    }

    let lo = ratio.asin();
    let hi = ratio.acos();
    sign * angle.abs().clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    #[test]
    fn test_serve_recenters_ball() {
        let mut world = WorldState::new(Rules::portrait());
        world.ball.x = 12.0;
        world.ball.y = 590.0;
        let mut rng = StdRng::seed_from_u64(7);

        serve_ball(&mut world, &mut rng);

        assert_eq!((world.ball.x, world.ball.y), (200.0, 300.0));
        assert!((world.ball.current_speed() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_serve_stays_in_arc() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let (off, along) = serve_velocity(ServePolicy::Arc { arc: PI / 2.0 }, 3.0, &mut rng);
            assert!(((off * off + along * along).sqrt() - 3.0).abs() < 1e-9);
            // Within 45 degrees of the scoring axis
            assert!(off.abs() <= along.abs() + 1e-9);
        }
    }

    #[test]
    fn test_strict_serve_has_both_components() {
        let policy = ServePolicy::StrictArc {
            arc: PI / 2.0,
            min_component: 1.5,
        };
        let mut rng = StdRng::seed_from_u64(2);
        let mut saw_far = false;
        let mut saw_near = false;

        for _ in 0..500 {
            let (off, along) = serve_velocity(policy, 3.0, &mut rng);
            assert!(((off * off + along * along).sqrt() - 3.0).abs() < 1e-9);
            assert!(off.abs() >= 1.5 - 1e-9);
            assert!(along.abs() >= 1.5 - 1e-9);
            saw_far |= along > 0.0;
            saw_near |= along < 0.0;
        }
        assert!(saw_far && saw_near);
    }

    #[test]
    fn test_strict_serve_impossible_floor_falls_back_to_diagonal() {
        let angle = steepness_floor(0.1, 3.0, 2.9);
        assert!((angle - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn test_strict_serve_ignores_unusable_floor() {
        assert_eq!(steepness_floor(0.3, 3.0, f64::NAN), 0.3);
        assert_eq!(steepness_floor(-0.3, 3.0, 0.0), -0.3);
    }

    #[test]
    fn test_diagonal_serve_components() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let (off, along) = serve_velocity(ServePolicy::Diagonal, 4.0, &mut rng);
            assert_eq!(off.abs(), 4.0);
            assert_eq!(along.abs(), 4.0);
        }
    }

    #[test]
    fn test_landscape_serve_uses_x_as_scoring_axis() {
        let mut world = WorldState::new(Rules::landscape());
        let mut rng = StdRng::seed_from_u64(4);
        serve_ball(&mut world, &mut rng);
        assert_eq!(world.ball.dx.abs(), 4.0);
        assert_eq!(world.ball.dy.abs(), 4.0);
        assert_eq!((world.ball.x, world.ball.y), (400.0, 200.0));
    }
}
