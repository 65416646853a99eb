pub mod input;
pub mod paddle;
pub mod physics;
pub mod rules;
pub mod serve;
pub mod state;
pub mod step;

pub use input::{parse_key, poll_input, InputAction, InputState, KeyMap, Move};
pub use rules::{CollisionMode, Deflection, Orientation, Rules, ServePolicy, Variant};
pub use serve::serve_ball;
pub use state::{Paddle, Side, WorldState};
pub use step::step;
