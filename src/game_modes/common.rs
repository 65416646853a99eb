//! Common utilities shared by the interactive and headless drivers

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{KeyMap, Rules};

/// Everything a driver needs to start a match
#[derive(Debug, Clone)]
pub struct Session {
    pub rules: Rules,
    pub keymap: KeyMap,
    /// Fixed seed for reproducible serves
    pub seed: Option<u64>,
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_millis(1000 / target_fps.max(1))
}

/// Apply frame rate limiting to maintain consistent game speed.
///
/// This function should be called at the end of each game loop iteration.
/// It sleeps for the remaining time if the frame finished early.
pub fn limit_frame_rate(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        std::thread::sleep(frame - elapsed);
    }
}

fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    }
}

/// One-line controls hint for the header
pub fn controls_hint(keymap: &KeyMap) -> String {
    let quit = keymap
        .quit
        .iter()
        .map(key_label)
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "{}/{}: Move  {}: Quit",
        key_label(&keymap.move_negative),
        key_label(&keymap.move_positive),
        quit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_controls_hint() {
        let keymap = KeyMap {
            move_negative: KeyCode::Char('a'),
            move_positive: KeyCode::Char('d'),
            quit: vec![KeyCode::Char('q'), KeyCode::Esc],
        };
        assert_eq!(controls_hint(&keymap), "A/D: Move  Q/Esc: Quit");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = make_rng(Some(5)).gen();
        let b: u64 = make_rng(Some(5)).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(60), Duration::from_millis(16));
        // Zero fps is treated as one frame per second
        assert_eq!(frame_duration(0), Duration::from_millis(1000));
    }
}
