mod ai;
mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use anyhow::Context;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use game::Variant;
use game_modes::Session;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    variant: Option<Variant>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    headless_frames: Option<u64>,
    debug: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Play(CliArgs),
    Help,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args)? {
        Command::Play(cli) => cli,
        Command::Help => {
            print_usage(&args[0]);
            return Ok(());
        }
    };

    debug::init(cli.debug).context("failed to open debug log")?;
    tracing::info!(?cli, "starting rallypong");

    let config = config::load_config(cli.config_path.as_deref())?;
    let rules = config.rules(cli.variant)?;
    let keymap = config.keymap(rules.orientation)?;
    let session = Session {
        rules,
        keymap,
        seed: cli.seed.or(config.game.seed),
    };

    if let Some(frames) = cli.headless_frames {
        let report = game_modes::run_headless(&session, frames);
        println!(
            "{} frames: player {} - computer {} ({} paddle hits, {} wall bounces)",
            report.frames,
            report.player_score,
            report.computer_score,
            report.paddle_hits,
            report.wall_bounces
        );
        return Ok(());
    }

    // Key release events need the keyboard enhancement protocol
    let releases_reported = supports_keyboard_enhancement().unwrap_or(false);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if releases_reported {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run game
    let result = game_modes::run_game_vs_ai(&mut terminal, &config, &session, releases_reported);

    // Restore terminal
    if releases_reported {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut cli = CliArgs::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        let mut value = |flag: &str| {
            rest.next()
                .cloned()
                .with_context(|| format!("{} requires a value", flag))
        };

        match arg.as_str() {
            "--variant" | "-v" => {
                let name = value(arg.as_str())?;
                cli.variant = Some(
                    Variant::from_name(&name)
                        .with_context(|| format!("unknown variant: {}", name))?,
                );
            }
            "--config" | "-c" => cli.config_path = Some(PathBuf::from(value(arg.as_str())?)),
            "--seed" => {
                let raw = value(arg.as_str())?;
                cli.seed = Some(raw.parse().with_context(|| format!("invalid seed: {}", raw))?);
            }
            "--headless" => {
                let raw = value(arg.as_str())?;
                cli.headless_frames = Some(
                    raw.parse()
                        .with_context(|| format!("invalid frame count: {}", raw))?,
                );
            }
            "--debug" | "-d" => cli.debug = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => anyhow::bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(Command::Play(cli))
}

fn print_usage(program: &str) {
    println!("rallypong - Terminal Pong against a reactive AI");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  -v, --variant <name>   portrait (default), portrait-simple, landscape");
    println!("  -c, --config <path>    Config file (default: {})", config::get_config_path().display());
    println!("      --seed <n>         Fixed RNG seed for reproducible serves");
    println!("      --headless <n>     Simulate n frames without a display and print the score");
    println!("  -d, --debug            Write a debug log to {}", debug::log_path().display());
    println!("  -h, --help             Show this help");
    println!();
    println!("Controls:");
    println!("  portrait:  A/D move, Q/Esc quit");
    println!("  landscape: W/S move, Q/Esc quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rallypong")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Command::Play(CliArgs::default()));
    }

    #[test]
    fn test_all_options() {
        let parsed = parse_args(&args(&[
            "--variant",
            "landscape",
            "--seed",
            "9",
            "--headless",
            "600",
            "-c",
            "/tmp/pong.toml",
            "--debug",
        ]))
        .unwrap();

        assert_eq!(
            parsed,
            Command::Play(CliArgs {
                variant: Some(Variant::Landscape),
                config_path: Some(PathBuf::from("/tmp/pong.toml")),
                seed: Some(9),
                headless_frames: Some(600),
                debug: true,
            })
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--variant", "square"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--fullscreen"])).is_err());
    }
}
