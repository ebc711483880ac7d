//! Configuration validation.
//!
//! Every check runs; the errors are joined into one `ConfigError`.

mod helpers;
mod markers;


use dockyard_common::ConfigError;

use crate::schema::{DockConfig, EventsConfig};
use helpers::{validate_non_empty, validate_range};

pub fn validate(config: &DockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "panel.panel_id", &config.panel.panel_id);
    markers::validate_markers(&mut errors, config);
    validate_range(
        &mut errors,
        "events.capacity",
        config.events.capacity,
        EventsConfig::MIN_CAPACITY,
        EventsConfig::MAX_CAPACITY,
    );
    validate_non_empty(&mut errors, "logging.filter", &config.logging.filter);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
