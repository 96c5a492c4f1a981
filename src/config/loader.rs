// Configuration file loading and creation

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::types::Config;
use crate::error::Result;

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("reflex-pong");
    path.push("config.toml");
    path
}

/// Load the default configuration file, creating it if it doesn't exist
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if config_path.exists() {
        load_config_from(&config_path)
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Load and validate a configuration file.
///
/// Parse errors and invalid values are reported, not papered over with defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_string = toml::to_string_pretty(&Config::default())?;

    let commented_toml = format!(
        "# Reflex Pong Configuration File\n\
         # Edit this file to customize the table and the AI opponents\n\
         #\n\
         # Distances are pixels, velocities are pixels per tick (60 ticks per second)\n\
         #\n\
         # AI difficulties: \"easy\", \"medium\", \"hard\"\n\
         # Add `seed = <number>` under [ai] for reproducible matches\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!(path = %path.display(), "created default config file");
    Ok(())
}
