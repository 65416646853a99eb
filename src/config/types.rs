// rallypong configuration types
// Physics keys are overrides on top of the selected variant's preset

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::game::{
    parse_key, CollisionMode, Deflection, KeyMap, Orientation, Rules, ServePolicy, Variant,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameConfig {
    // "portrait", "portrait-simple" or "landscape"
    #[serde(default)]
    pub variant: Variant,

    // Fixed RNG seed for reproducible serves (omit for a random seed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Player paddle controls; unset means A/D in portrait, W/S in landscape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_negative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_positive: Option<String>,

    pub quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_negative: None,
            move_positive: None,
            quit: vec!["Q".to_string(), "Esc".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServeKind {
    Arc,
    StrictArc,
    Diagonal,
}

/// Per-field overrides of the variant preset; anything unset keeps the preset value
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_speed: Option<f64>,
    // Cap applied under the speed ramp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paddle_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paddle_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paddle_inset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computer_step: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision: Option<CollisionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deflection: Option<Deflection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_offset_scale: Option<f64>,
    // Ball speed multiplier on each paddle hit (1.1 = 10% increase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_multiplier: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serve: Option<ServeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serve_arc_degrees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serve_min_component: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Distance the ball may stray from the paddle center before the AI reacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_zone: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Simulation and render rate
    pub target_fps: u64,

    // Frames a key stays held after a press on terminals without release events
    pub hold_frames: u32,

    pub score_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub center_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            hold_frames: 8,
            score_color: [255, 255, 255],       // White
            paddle_color: [255, 255, 255],      // White
            ball_color: [255, 255, 255],        // White
            center_line_color: [100, 100, 100], // Gray
        }
    }
}

impl Config {
    /// Resolve the rule set: preset for `variant` (or the configured one), then overrides
    pub fn rules(&self, variant: Option<Variant>) -> anyhow::Result<Rules> {
        let variant = variant.unwrap_or(self.game.variant);
        let mut rules = variant.rules();
        let p = &self.physics;

        let set = |target: &mut f64, value: Option<f64>| {
            if let Some(v) = value {
                *target = v;
            }
        };
        set(&mut rules.ball_radius, p.ball_radius);
        set(&mut rules.ball_speed, p.ball_speed);
        set(&mut rules.paddle_length, p.paddle_length);
        set(&mut rules.paddle_thickness, p.paddle_thickness);
        set(&mut rules.paddle_inset, p.paddle_inset);
        set(&mut rules.player_step, p.player_step);
        set(&mut rules.computer_step, p.computer_step);
        set(&mut rules.hit_offset_scale, p.hit_offset_scale);
        set(&mut rules.speed_multiplier, p.speed_multiplier);
        set(&mut rules.dead_zone, self.ai.dead_zone);

        if p.max_speed.is_some() {
            rules.max_speed = p.max_speed;
        }
        if let Some(collision) = p.collision {
            rules.collision = collision;
        }
        if let Some(deflection) = p.deflection {
            rules.deflection = deflection;
        }
        rules.serve = self.serve_policy(rules.serve);

        rules
            .validate()
            .with_context(|| format!("invalid rules for variant {:?}", variant))?;
        Ok(rules)
    }

    fn serve_policy(&self, preset: ServePolicy) -> ServePolicy {
        let p = &self.physics;
        let (preset_arc, preset_min) = match preset {
            ServePolicy::Arc { arc } => (arc, None),
            ServePolicy::StrictArc { arc, min_component } => (arc, Some(min_component)),
            ServePolicy::Diagonal => (std::f64::consts::FRAC_PI_2, None),
        };
        let arc = p.serve_arc_degrees.map(f64::to_radians).unwrap_or(preset_arc);
        let min_component = p.serve_min_component.or(preset_min).unwrap_or(1.5);

        match p.serve {
            None => match preset {
                ServePolicy::Arc { .. } => ServePolicy::Arc { arc },
                ServePolicy::StrictArc { .. } => ServePolicy::StrictArc { arc, min_component },
                ServePolicy::Diagonal => ServePolicy::Diagonal,
            },
            Some(ServeKind::Arc) => ServePolicy::Arc { arc },
            Some(ServeKind::StrictArc) => ServePolicy::StrictArc { arc, min_component },
            Some(ServeKind::Diagonal) => ServePolicy::Diagonal,
        }
    }

    /// Key bindings for the player paddle, defaulting by field orientation
    pub fn keymap(&self, orientation: Orientation) -> anyhow::Result<KeyMap> {
        let (neg_default, pos_default) = match orientation {
            Orientation::Portrait => ("A", "D"),
            Orientation::Landscape => ("W", "S"),
        };
        let kb = &self.keybindings;
        let neg_name = kb.move_negative.as_deref().unwrap_or(neg_default);
        let pos_name = kb.move_positive.as_deref().unwrap_or(pos_default);

        let lookup = |name: &str| {
            parse_key(name).with_context(|| format!("unknown key name in config: {:?}", name))
        };

        Ok(KeyMap {
            move_negative: lookup(neg_name)?,
            move_positive: lookup(pos_name)?,
            quit: kb
                .quit
                .iter()
                .map(|name| lookup(name))
                .collect::<anyhow::Result<Vec<_>>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_defaults_match_preset() {
        let config = Config::default();
        assert_eq!(config.rules(None).unwrap(), Rules::portrait());
        assert_eq!(
            config.rules(Some(Variant::Landscape)).unwrap(),
            Rules::landscape()
        );
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let mut config = Config::default();
        config.physics.ball_speed = Some(5.0);
        config.physics.deflection = Some(Deflection::SpeedRamp);
        config.physics.max_speed = Some(9.0);
        config.ai.dead_zone = Some(10.0);

        let rules = config.rules(Some(Variant::Landscape)).unwrap();
        assert_eq!(rules.ball_speed, 5.0);
        assert_eq!(rules.max_speed, Some(9.0));
        assert_eq!(rules.dead_zone, 10.0);
        assert_eq!(rules.field_width, 800.0);
    }

    #[test]
    fn test_serve_override() {
        let mut config = Config::default();
        config.physics.serve = Some(ServeKind::Arc);
        config.physics.serve_arc_degrees = Some(60.0);

        let rules = config.rules(None).unwrap();
        match rules.serve {
            ServePolicy::Arc { arc } => assert!((arc - 60f64.to_radians()).abs() < 1e-12),
            other => panic!("unexpected serve policy {:?}", other),
        }
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut config = Config::default();
        config.physics.ball_speed = Some(-1.0);
        assert!(config.rules(None).is_err());
    }

    #[test]
    fn test_nan_overrides_rejected() {
        let config: Config = toml::from_str("[physics]\nserve_min_component = nan\n").unwrap();
        assert!(config.rules(None).is_err());

        let config: Config = toml::from_str("[physics]\nspeed_multiplier = nan\n").unwrap();
        assert!(config.rules(Some(Variant::Landscape)).is_err());

        let config: Config = toml::from_str("[ai]\ndead_zone = nan\n").unwrap();
        assert!(config.rules(None).is_err());
    }

    #[test]
    fn test_keymap_defaults_by_orientation() {
        let config = Config::default();
        let portrait = config.keymap(Orientation::Portrait).unwrap();
        assert_eq!(portrait.move_negative, KeyCode::Char('a'));
        assert_eq!(portrait.move_positive, KeyCode::Char('d'));
        assert_eq!(portrait.quit, vec![KeyCode::Char('q'), KeyCode::Esc]);

        let landscape = config.keymap(Orientation::Landscape).unwrap();
        assert_eq!(landscape.move_negative, KeyCode::Char('w'));
        assert_eq!(landscape.move_positive, KeyCode::Char('s'));
    }

    #[test]
    fn test_keymap_rejects_unknown_key() {
        let mut config = Config::default();
        config.keybindings.move_negative = Some("Hyper".to_string());
        assert!(config.keymap(Orientation::Portrait).is_err());
    }
}
