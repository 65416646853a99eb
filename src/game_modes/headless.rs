use crate::ai;
use crate::game::{self, serve_ball, InputState, Side, WorldState};

use super::common::{make_rng, Session};

/// Tally of a headless run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub player_score: u32,
    pub computer_score: u32,
    pub paddle_hits: u64,
    pub wall_bounces: u64,
}

/// Simulate `frames` frames with no display and an idle player
pub fn run_headless(session: &Session, frames: u64) -> HeadlessReport {
    let mut world = WorldState::new(session.rules.clone());
    let mut bot = ai::create_bot(&world.rules);
    let mut rng = make_rng(session.seed);
    let input = InputState::new();
    let mut report = HeadlessReport::default();

    serve_ball(&mut world, &mut rng);
    for _ in 0..frames {
        let events = game::step(&mut world, &input, bot.as_mut(), &mut rng);
        report.frames += 1;
        if events.paddle_hit.is_some() {
            report.paddle_hits += 1;
        }
        if events.wall_bounce {
            report.wall_bounces += 1;
        }
    }

    report.player_score = world.score(Side::Player);
    report.computer_score = world.score(Side::Computer);
    tracing::info!(?report, "headless run finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game::{Orientation, Variant};

    fn session(variant: Variant, seed: u64) -> Session {
        let config = Config::default();
        let rules = config.rules(Some(variant)).unwrap();
        Session {
            keymap: config.keymap(Orientation::Portrait).unwrap(),
            rules,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let a = run_headless(&session(Variant::Portrait, 11), 3_000);
        let b = run_headless(&session(Variant::Portrait, 11), 3_000);
        assert_eq!(a, b);
        assert_eq!(a.frames, 3_000);
    }

    #[test]
    fn test_idle_player_concedes() {
        // The player paddle never moves, so the computer must score eventually
        let report = run_headless(&session(Variant::Portrait, 3), 20_000);
        assert!(report.computer_score > 0, "{:?}", report);
    }

    #[test]
    fn test_zero_frames() {
        let report = run_headless(&session(Variant::Landscape, 1), 0);
        assert_eq!(report, HeadlessReport::default());
    }
}
