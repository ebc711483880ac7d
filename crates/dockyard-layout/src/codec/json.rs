//! JSON session format helpers.

use dockyard_common::DockError;

use super::encode;
use crate::tree::{LiveLayout, SerializedLayout};
use crate::widget::LiveWidget;

/// Encode a live layout and render it as pretty-printed JSON.
pub fn layout_to_json<W: LiveWidget>(layout: &LiveLayout<W>) -> Result<String, DockError> {
    serialized_to_json(&encode(layout))
}

pub fn serialized_to_json(layout: &SerializedLayout) -> Result<String, DockError> {
    Ok(serde_json::to_string_pretty(layout)?)
}

pub fn json_to_serialized_layout(json: &str) -> Result<SerializedLayout, DockError> {
    let layout: SerializedLayout = serde_json::from_str(json)?;
    tracing::debug!(
        panels = layout.panel_count(),
        widgets = layout.widget_count(),
        "parsed serialized layout"
    );
    Ok(layout)
}
