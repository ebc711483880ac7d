//! Declarative dock layout trees and the codec between the persisted form
//! and the panel engine's live form.

pub mod codec;
pub mod tree;
pub mod widget;

pub use codec::{
    count_panels, count_splits, count_widgets, decode, encode, json_to_serialized_layout,
    layout_to_json, serialized_to_json,
};
pub use tree::{Area, Layout, LiveLayout, Orientation, SerializedArea, SerializedLayout, ShapeIssue};
pub use widget::{KindTag, LiveWidget, Title, WidgetConfig, CLOSABLE_CLASS, UNKNOWN_KIND};
