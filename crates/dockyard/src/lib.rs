//! A dock of split and tabbed panels over an external panel engine.
//!
//! [`Dock`] owns one attached [`PanelEngine`] host and keeps three things in
//! step: the engine's live layout, the persisted [`SerializedLayout`], and
//! the registry of live tabs kept by the [`TabTracker`].

pub mod dock;
pub mod registry;

pub use dock::{engine_options, tracker_markers, Dock, DockCount};
pub use registry::{WidgetModel, WidgetOptions, WidgetRegistry};

pub use dockyard_common::{DockError, DockEvent, EventBus, Result};
pub use dockyard_config::DockConfig;
pub use dockyard_layout::{
    Area, KindTag, Layout, LiveLayout, LiveWidget, Orientation, SerializedLayout, WidgetConfig,
};
pub use dockyard_tracker::{
    AddOptions, Dom, EngineOptions, InsertMode, Markers, PanelEngine, TabCallbacks, TabNodeConfig,
    TabTracker, WidgetSlot,
};
