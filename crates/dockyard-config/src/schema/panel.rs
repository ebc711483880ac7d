//! Panel engine options.

use serde::{Deserialize, Serialize};

/// Options handed to the panel engine when the dock is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Whether tabs can be dragged within and across strips.
    pub tabs_movable: bool,
    /// Whether dragged tabs are kept inside their own strip.
    pub tabs_constrained: bool,
    /// Show the "+" button on tab strips.
    pub add_button_enabled: bool,
    /// DOM id of the panel root.
    pub panel_id: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tabs_movable: true,
            tabs_constrained: false,
            add_button_enabled: false,
            panel_id: "docker-main".into(),
        }
    }
}
