mod ai;
pub mod common;
mod headless;

pub use ai::run_game_vs_ai;
pub use common::Session;
pub use headless::run_headless;
