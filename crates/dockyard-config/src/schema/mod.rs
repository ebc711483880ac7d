//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work.

mod markers;
mod panel;
mod system;

pub use markers::*;
pub use panel::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for a dock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub panel: PanelConfig,
    pub markers: MarkerConfig,
    pub events: EventsConfig,
    pub logging: LoggingConfig,
}
