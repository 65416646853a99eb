use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Direction along the player paddle's movement axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Negative,
    Positive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Hold(Move),
    Release(Move),
}

/// Keys the host listens for
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMap {
    pub move_negative: KeyCode,
    pub move_positive: KeyCode,
    pub quit: Vec<KeyCode>,
}

impl KeyMap {
    /// Translate a key event into an action; untracked keys yield None
    pub fn translate(&self, key: &KeyEvent) -> Option<InputAction> {
        let is_release = key.kind == KeyEventKind::Release;

        if !is_release && self.quit.iter().any(|q| same_key(q, &key.code)) {
            return Some(InputAction::Quit);
        }

        let mv = if same_key(&self.move_negative, &key.code) {
            Move::Negative
        } else if same_key(&self.move_positive, &key.code) {
            Move::Positive
        } else {
            return None;
        };

        if is_release {
            Some(InputAction::Release(mv))
        } else {
            Some(InputAction::Hold(mv))
        }
    }
}

// Letter bindings ignore case so Shift or Caps Lock don't drop input
fn same_key(bound: &KeyCode, pressed: &KeyCode) -> bool {
    match (bound, pressed) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(b),
        _ => bound == pressed,
    }
}

/// Parse a key name from the config file ("Up", "Esc", "W", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };
    Some(code)
}

#[derive(Clone, Copy, Debug, Default)]
struct KeyHold {
    held: bool,
    frames_left: u32,
}

/// Held flags for the two control keys
///
/// With release reporting, flags follow press/release exactly. Without it,
/// a press holds the key for `hold_frames` frames unless refreshed by
/// auto-repeat.
#[derive(Clone, Debug)]
pub struct InputState {
    negative: KeyHold,
    positive: KeyHold,
    hold_frames: Option<u32>,
}

impl InputState {
    /// Exact press/release tracking
    pub fn new() -> Self {
        Self {
            negative: KeyHold::default(),
            positive: KeyHold::default(),
            hold_frames: None,
        }
    }

    /// Press-only tracking: a press counts as held for `frames` frames
    pub fn with_hold_timeout(frames: u32) -> Self {
        Self {
            hold_frames: Some(frames.max(1)),
            ..Self::new()
        }
    }

    fn key_mut(&mut self, mv: Move) -> &mut KeyHold {
        match mv {
            Move::Negative => &mut self.negative,
            Move::Positive => &mut self.positive,
        }
    }

    pub fn press(&mut self, mv: Move) {
        let frames = self.hold_frames.unwrap_or(0);
        let key = self.key_mut(mv);
        key.held = true;
        key.frames_left = frames;
    }

    pub fn release(&mut self, mv: Move) {
        *self.key_mut(mv) = KeyHold::default();
    }

    pub fn is_held(&self, mv: Move) -> bool {
        match mv {
            Move::Negative => self.negative.held,
            Move::Positive => self.positive.held,
        }
    }

    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Hold(mv) => self.press(mv),
            InputAction::Release(mv) => self.release(mv),
            InputAction::Quit => {}
        }
    }

    /// Age press-only holds by one frame; call once after each step
    pub fn end_frame(&mut self) {
        if self.hold_frames.is_none() {
            return;
        }
        for key in [&mut self.negative, &mut self.positive] {
            if key.held {
                key.frames_left = key.frames_left.saturating_sub(1);
                if key.frames_left == 0 {
                    key.held = false;
                }
            }
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain pending terminal events and return the tracked actions
pub fn poll_input(keymap: &KeyMap) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if let Some(action) = keymap.translate(&key) {
                actions.push(action);
            }
        }
    }

    Ok(actions)
}
