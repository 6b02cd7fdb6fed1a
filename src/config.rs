//! Configuration loading
//!
//! Reads `~/.config/keyscout/config.toml`. A missing file yields defaults; an
//! unreadable or malformed file yields defaults plus a warning for the UI.

mod types;

pub use types::{Config, SearchConfig, UiConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KeyscoutError;

const CONFIG_DIR: &str = "keyscout";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus a warning to surface when the file could not be used
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Config ignored ({}): {}", path.display(), e)),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, KeyscoutError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, KeyscoutError> {
    toml::from_str::<Config>(contents).map_err(|e| KeyscoutError::InvalidConfig(e.message().to_string()))
}
