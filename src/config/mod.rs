// Configuration module for rallypong
// Handles loading the TOML config file and resolving it into game rules

pub mod loader;
pub mod types;

pub use loader::{get_config_path, load_config};
pub use types::Config;
