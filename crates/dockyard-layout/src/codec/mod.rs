//! Live tree <-> persisted tree.
//!
//! Both directions are pure and built on [`Layout::map`] / [`Layout::try_map`],
//! so a decoded tree always has exactly the shape it was decoded from.

mod json;

pub use json::{json_to_serialized_layout, layout_to_json, serialized_to_json};

use crate::tree::{Layout, LiveLayout, SerializedLayout};
use crate::widget::{LiveWidget, WidgetConfig};

/// Persisted form of the engine's live layout.
///
/// Orientation, sizes, `currentIndex` and child order are copied verbatim.
/// An empty dock encodes as `{ "main": null }`.
pub fn encode<W: LiveWidget>(layout: &LiveLayout<W>) -> SerializedLayout {
    layout.map(W::to_config)
}

/// Build the live tree the engine's restore entry point expects.
///
/// `factory` is called exactly once per [`WidgetConfig`], depth-first and
/// left to right. Its first error is returned as is and no further widgets
/// are built.
pub fn decode<W, E, F>(serialized: &SerializedLayout, factory: F) -> Result<LiveLayout<W>, E>
where
    F: FnMut(&WidgetConfig) -> Result<W, E>,
{
    serialized.try_map(factory)
}

pub fn count_splits<T>(layout: &Layout<T>) -> usize {
    layout.split_count()
}

pub fn count_panels<T>(layout: &Layout<T>) -> usize {
    layout.panel_count()
}

pub fn count_widgets<T>(layout: &Layout<T>) -> usize {
    layout.widget_count()
}

#[cfg(test)]
mod tests;
