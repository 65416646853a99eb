use std::time::Instant;

use ratatui::Terminal;

use crate::ai;
use crate::config::Config;
use crate::game::{self, poll_input, serve_ball, InputAction, InputState, WorldState};
use crate::ui;

use super::common::{controls_hint, frame_duration, limit_frame_rate, make_rng, Session};

/// Run the player-vs-computer match until a quit key is pressed
///
/// `releases_reported` says whether the terminal delivers key release
/// events; without them held keys expire after `display.hold_frames`.
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    session: &Session,
    releases_reported: bool,
) -> anyhow::Result<()> {
    let mut world = WorldState::new(session.rules.clone());
    let mut bot = ai::create_bot(&world.rules);
    let mut rng = make_rng(session.seed);
    let mut input = if releases_reported {
        InputState::new()
    } else {
        InputState::with_hold_timeout(config.display.hold_frames)
    };
    let frame = frame_duration(config.display.target_fps);
    let hint = controls_hint(&session.keymap);

    tracing::info!(
        bot = bot.name(),
        orientation = ?world.rules.orientation,
        collision = ?world.rules.collision,
        releases_reported,
        "match started"
    );
    serve_ball(&mut world, &mut rng);

    loop {
        let now = Instant::now();

        for action in poll_input(&session.keymap)? {
            match action {
                InputAction::Quit => {
                    tracing::info!(
                        player = world.player.score,
                        computer = world.computer.score,
                        "match ended by user"
                    );
                    return Ok(());
                }
                other => input.apply(other),
            }
        }

        let events = game::step(&mut world, &input, bot.as_mut(), &mut rng);
        if events.any() {
            tracing::debug!(?events, "frame events");
        }
        input.end_frame();

        terminal.draw(|f| ui::render(f, &world, &config.display, &hint))?;

        limit_frame_rate(now, frame);
    }
}
