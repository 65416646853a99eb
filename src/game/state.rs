use super::rules::{Axis, Orientation, Rules};

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    /// Magnitude every renormalized velocity is scaled back to
    pub speed: f64,
}

impl Ball {
    pub fn new(x: f64, y: f64, radius: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            radius,
            dx: 0.0,
            dy: 0.0,
            speed,
        }
    }

    pub fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set_position(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    pub fn velocity(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }

    pub fn set_velocity(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.dx = value,
            Axis::Y => self.dy = value,
        }
    }

    pub fn current_speed(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Distance moved per frame while driven
    pub step: f64,
    pub score: u32,
}

impl Paddle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, step: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            step,
            score: 0,
        }
    }

    pub fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn set_position(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    pub fn center(&self, axis: Axis) -> f64 {
        self.position(axis) + self.extent(axis) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }
}

/// Everything the simulation mutates, owned in one place
#[derive(Debug, Clone)]
pub struct WorldState {
    pub rules: Rules,
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
}

impl WorldState {
    /// Build a fresh world: paddles centered on their lanes, ball resting at center
    pub fn new(rules: Rules) -> Self {
        let ball = Ball::new(
            rules.field_width / 2.0,
            rules.field_height / 2.0,
            rules.ball_radius,
            rules.ball_speed,
        );
        let player = Self::spawn_paddle(&rules, Side::Player);
        let computer = Self::spawn_paddle(&rules, Side::Computer);

        Self {
            rules,
            ball,
            player,
            computer,
        }
    }

    fn spawn_paddle(rules: &Rules, side: Side) -> Paddle {
        let step = match side {
            Side::Player => rules.player_step,
            Side::Computer => rules.computer_step,
        };
        let lane = if end_sign(rules.orientation, side) > 0.0 {
            rules.bound(rules.orientation.scoring_axis()) - rules.paddle_inset
        } else {
            rules.paddle_inset
        };

        match rules.orientation {
            Orientation::Portrait => Paddle::new(
                (rules.field_width - rules.paddle_length) / 2.0,
                lane,
                rules.paddle_length,
                rules.paddle_thickness,
                step,
            ),
            Orientation::Landscape => Paddle::new(
                lane,
                (rules.field_height - rules.paddle_length) / 2.0,
                rules.paddle_thickness,
                rules.paddle_length,
                step,
            ),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score
    }

    /// +1.0 if `side` guards the far end of the scoring axis, -1.0 for the near end
    pub fn end_sign(&self, side: Side) -> f64 {
        end_sign(self.rules.orientation, side)
    }

    /// The side whose paddle guards the given end of the scoring axis
    pub fn side_at(&self, far_end: bool) -> Side {
        if (self.end_sign(Side::Player) > 0.0) == far_end {
            Side::Player
        } else {
            Side::Computer
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.rules.field_width / 2.0, self.rules.field_height / 2.0)
    }
}

// Portrait puts the player at the bottom (far y), landscape at the left (near x)
fn end_sign(orientation: Orientation, side: Side) -> f64 {
    match (orientation, side) {
        (Orientation::Portrait, Side::Player) => 1.0,
        (Orientation::Portrait, Side::Computer) => -1.0,
        (Orientation::Landscape, Side::Player) => -1.0,
        (Orientation::Landscape, Side::Computer) => 1.0,
    }
}
