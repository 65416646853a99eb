// Resolved rule set for one session
// Presets reproduce the three historical layouts of the game

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Named preset selecting field layout and default physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// 400×600, horizontal paddles, directional collisions, strict serve
    #[default]
    Portrait,
    /// 400×600, horizontal paddles, unguarded collisions, plain arc serve
    PortraitSimple,
    /// 800×400, vertical paddles, speed ramp on every hit, diagonal serve
    Landscape,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "portrait" => Some(Variant::Portrait),
            "portrait-simple" | "simple" => Some(Variant::PortraitSimple),
            "landscape" => Some(Variant::Landscape),
            _ => None,
        }
    }

    pub fn rules(&self) -> Rules {
        match self {
            Variant::Portrait => Rules::portrait(),
            Variant::PortraitSimple => Rules {
                collision: CollisionMode::Simple,
                deflection: Deflection::HitOffset,
                serve: ServePolicy::Arc { arc: PI / 2.0 },
                ..Rules::portrait()
            },
            Variant::Landscape => Rules::landscape(),
        }
    }
}

/// Which way the field is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Paddles slide along x, points are scored off the top and bottom edges
    Portrait,
    /// Paddles slide along y, points are scored off the left and right edges
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Orientation {
    /// Axis the paddles move on
    pub fn paddle_axis(&self) -> Axis {
        match self {
            Orientation::Portrait => Axis::X,
            Orientation::Landscape => Axis::Y,
        }
    }

    /// Axis along which the ball leaving play awards a point
    pub fn scoring_axis(&self) -> Axis {
        match self {
            Orientation::Portrait => Axis::Y,
            Orientation::Landscape => Axis::X,
        }
    }
}

/// How a paddle contact is recognized and answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionMode {
    /// Only counts when the ball moves toward the paddle; ball is pushed clear
    #[default]
    Directional,
    /// Any overlap flips the ball
    Simple,
}

/// How the ball's velocity is reshaped by a simple-mode paddle hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deflection {
    /// Off-axis velocity from where the ball met the paddle, renormalized
    #[default]
    HitOffset,
    /// Scoring-axis velocity amplified by the speed multiplier
    SpeedRamp,
}

/// How a fresh velocity is chosen after a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServePolicy {
    /// Random angle within `arc` radians centered on the scoring axis
    Arc { arc: f64 },
    /// Like `Arc`, but neither component may drop below `min_component`
    StrictArc { arc: f64, min_component: f64 },
    /// Each component is ±speed with an independent random sign
    Diagonal,
}

/// Every tunable of a session, fixed once the world is built
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub orientation: Orientation,
    pub field_width: f64,
    pub field_height: f64,

    pub ball_radius: f64,
    pub ball_speed: f64,
    /// Cap on ball speed under a speed ramp (None = unbounded)
    pub max_speed: Option<f64>,

    /// Paddle size along its movement axis
    pub paddle_length: f64,
    /// Paddle size along the scoring axis
    pub paddle_thickness: f64,
    /// Distance from each end of the scoring axis to the paddle's low-coordinate edge
    pub paddle_inset: f64,
    pub player_step: f64,
    pub computer_step: f64,

    pub dead_zone: f64,

    pub collision: CollisionMode,
    pub deflection: Deflection,
    pub hit_offset_scale: f64,
    pub speed_multiplier: f64,
    pub serve: ServePolicy,
}

impl Rules {
    pub fn portrait() -> Self {
        Self {
            orientation: Orientation::Portrait,
            field_width: 400.0,
            field_height: 600.0,
            ball_radius: 10.0,
            ball_speed: 3.0,
            max_speed: None,
            paddle_length: 80.0,
            paddle_thickness: 10.0,
            paddle_inset: 30.0,
            player_step: 5.0,
            computer_step: 4.0,
            dead_zone: 35.0,
            collision: CollisionMode::Directional,
            deflection: Deflection::HitOffset,
            hit_offset_scale: 6.0,
            speed_multiplier: 1.1,
            serve: ServePolicy::StrictArc {
                arc: PI / 2.0,
                min_component: 1.5,
            },
        }
    }

    pub fn landscape() -> Self {
        Self {
            orientation: Orientation::Landscape,
            field_width: 800.0,
            field_height: 400.0,
            ball_radius: 10.0,
            ball_speed: 4.0,
            max_speed: None,
            paddle_length: 80.0,
            paddle_thickness: 10.0,
            paddle_inset: 20.0,
            player_step: 5.0,
            computer_step: 4.0,
            dead_zone: 35.0,
            collision: CollisionMode::Simple,
            deflection: Deflection::SpeedRamp,
            hit_offset_scale: 6.0,
            speed_multiplier: 1.1,
            serve: ServePolicy::Diagonal,
        }
    }

    /// Field extent along an axis
    pub fn bound(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.field_width,
            Axis::Y => self.field_height,
        }
    }

    /// Reject combinations the simulation cannot run sensibly
    pub fn validate(&self) -> anyhow::Result<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_length", self.paddle_length),
            ("paddle_thickness", self.paddle_thickness),
            ("player_step", self.player_step),
            ("computer_step", self.computer_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("{} must be a positive number, got {}", name, value);
            }
        }

        let non_negative = [
            ("dead_zone", self.dead_zone),
            ("paddle_inset", self.paddle_inset),
            ("hit_offset_scale", self.hit_offset_scale),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                anyhow::bail!("{} must be a non-negative number, got {}", name, value);
            }
        }

        let along = self.bound(self.orientation.paddle_axis());
        if self.paddle_length > along {
            anyhow::bail!(
                "paddle_length {} does not fit the field ({} units)",
                self.paddle_length,
                along
            );
        }

        let across = self.bound(self.orientation.scoring_axis());
        if self.paddle_inset < self.paddle_thickness {
            anyhow::bail!(
                "paddle_inset {} leaves no room for the far paddle ({} thick)",
                self.paddle_inset,
                self.paddle_thickness
            );
        }
        if 2.0 * self.paddle_inset + self.paddle_thickness >= across {
            anyhow::bail!("paddles overlap: field is only {} units deep", across);
        }

        if !(self.speed_multiplier.is_finite() && self.speed_multiplier >= 1.0) {
            anyhow::bail!(
                "speed_multiplier must be at least 1.0, got {}",
                self.speed_multiplier
            );
        }

        if let Some(max) = self.max_speed {
            if !(max.is_finite() && max >= self.ball_speed) {
                anyhow::bail!(
                    "max_speed must be at least ball_speed {}, got {}",
                    self.ball_speed,
                    max
                );
            }
        }

        if let ServePolicy::StrictArc { min_component, .. } = self.serve {
            if !(min_component.is_finite() && min_component >= 0.0) {
                anyhow::bail!(
                    "serve min_component must be a non-negative number, got {}",
                    min_component
                );
            }
        }

        match self.serve {
            ServePolicy::Arc { arc } | ServePolicy::StrictArc { arc, .. }
                if !(arc > 0.0 && arc < PI) =>
            {
                anyhow::bail!("serve arc must lie in (0, π), got {}", arc)
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for variant in [Variant::Portrait, Variant::PortraitSimple, Variant::Landscape] {
            assert!(variant.rules().validate().is_ok(), "{:?}", variant);
        }
    }

    #[test]
    fn test_portrait_simple_keeps_portrait_geometry() {
        let rules = Variant::PortraitSimple.rules();
        assert_eq!(rules.orientation, Orientation::Portrait);
        assert_eq!(rules.field_width, 400.0);
        assert_eq!(rules.collision, CollisionMode::Simple);
    }

    #[test]
    fn test_oversized_paddle_rejected() {
        let rules = Rules {
            paddle_length: 500.0,
            ..Rules::portrait()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_speed_cap_below_speed_rejected() {
        let rules = Rules {
            max_speed: Some(1.0),
            ..Rules::landscape()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_nan_and_negative_values_rejected() {
        let cases = [
            Rules { dead_zone: f64::NAN, ..Rules::portrait() },
            Rules { dead_zone: -1.0, ..Rules::portrait() },
            Rules { paddle_inset: f64::NAN, ..Rules::portrait() },
            Rules { hit_offset_scale: f64::NAN, ..Rules::portrait() },
            Rules { hit_offset_scale: f64::INFINITY, ..Rules::portrait() },
            Rules { speed_multiplier: f64::NAN, ..Rules::landscape() },
            Rules { speed_multiplier: 0.9, ..Rules::landscape() },
            Rules { max_speed: Some(f64::NAN), ..Rules::landscape() },
            Rules {
                serve: ServePolicy::StrictArc { arc: PI / 2.0, min_component: f64::NAN },
                ..Rules::portrait()
            },
            Rules {
                serve: ServePolicy::StrictArc { arc: PI / 2.0, min_component: -1.0 },
                ..Rules::portrait()
            },
        ];
        for rules in cases {
            assert!(rules.validate().is_err(), "{:?}", rules);
        }
    }

    #[test]
    fn test_inset_must_fit_far_paddle() {
        let rules = Rules {
            paddle_inset: 5.0,
            ..Rules::portrait()
        };
        assert!(rules.validate().is_err());

        let rules = Rules {
            paddle_inset: 295.0,
            ..Rules::portrait()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::from_name("Landscape"), Some(Variant::Landscape));
        assert_eq!(Variant::from_name("portrait-simple"), Some(Variant::PortraitSimple));
        assert_eq!(Variant::from_name("square"), None);
    }
}
