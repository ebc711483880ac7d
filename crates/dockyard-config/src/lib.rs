//! Dock configuration.
//!
//! TOML-based, with defaults for every field so partial files work. The
//! loaders warn on invalid values; [`load_config`] and [`validation::validate`]
//! reject them.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{DockConfig, EventsConfig, LoggingConfig, MarkerConfig, PanelConfig};
pub use toml_loader::{default_config_path, load_default, load_from_path, load_from_str};
pub use validation::validate;

use dockyard_common::ConfigError;

/// Load `config.toml` from the OS config directory (creating a commented
/// default when missing) and validate it.
pub fn load_config() -> Result<DockConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
