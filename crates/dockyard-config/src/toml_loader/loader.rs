//! Read a config from a string, a path, or the platform default location.

use std::path::Path;

use dockyard_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::DockConfig;
use crate::validation;

/// Parse a TOML document. Missing fields take their defaults; invalid
/// values are logged and kept.
pub fn load_from_str(content: &str) -> Result<DockConfig, ConfigError> {
    let config: DockConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<DockConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load from `default_config_path()`, writing a commented default file
/// first if there is none.
pub fn load_default() -> Result<DockConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(DockConfig::default())
        }
        Err(e) => Err(e),
    }
}
