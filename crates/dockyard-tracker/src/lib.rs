//! Tab lifecycle tracking for a dock panel.
//!
//! The panel engine only reports raw DOM churn and a couple of structural
//! signals. [`TabTracker`] folds both channels into one registry of live
//! tabs and reports added, removed and activated tabs to the application.

pub mod callbacks;
pub mod host;
pub mod node;
pub mod tracker;

#[cfg(any(test, feature = "memory-host"))]
pub mod memory;

pub use callbacks::TabCallbacks;
pub use host::{
    AddOptions, CurrentChanged, Dom, EngineOptions, HostSignal, InsertMode, Markers,
    MutationRecord, ObserverId, PanelEngine,
};
pub use node::{TabNodeConfig, WidgetSlot};
pub use tracker::TabTracker;
