// Configuration file loading and creation

use super::types::Config;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("rallypong");
    path.push("config.toml");
    path
}

/// Load configuration from `explicit`, or from the default location
///
/// An explicit path must exist. The default file is created with defaults
/// on first run. A file that fails to parse falls back to defaults with a
/// warning rather than refusing to start.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => get_config_path(),
    };

    if !config_path.exists() {
        create_default_config(&config_path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    Ok(parse_config(&contents, &config_path))
}

fn parse_config(contents: &str, path: &Path) -> Config {
    match toml::from_str(contents) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config parse failed, using defaults");
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }

    let toml_string =
        toml::to_string_pretty(&Config::default()).context("failed to serialize default config")?;

    // Add helpful header comments
    let commented_toml = format!(
        "# rallypong configuration file\n\
         # Restart the game after editing\n\
         #\n\
         # [game] variant: \"portrait\", \"portrait-simple\" or \"landscape\"\n\
         #\n\
         # [physics] keys override the variant preset, e.g.:\n\
         #   ball_speed = 4.0\n\
         #   collision = \"directional\"      # or \"simple\"\n\
         #   deflection = \"speed-ramp\"      # or \"hit-offset\"\n\
         #   speed_multiplier = 1.1\n\
         #   max_speed = 12.0\n\
         #   serve = \"strict-arc\"           # \"arc\", \"strict-arc\", \"diagonal\"\n\
         #   serve_arc_degrees = 90.0\n\
         #   serve_min_component = 1.5\n\
         #\n\
         # [ai] dead_zone = 35.0\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Left\", \"Right\", \"Esc\", \"Space\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\"\n\
         # Unset move keys default to A/D (portrait) or W/S (landscape)\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}
