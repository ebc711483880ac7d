//! Wiring between the tracker's hooks, the application's hooks and the
//! event bus.

use dockyard_common::{DockEvent, EventBus};
use dockyard_config::{MarkerConfig, PanelConfig};
use dockyard_layout::LiveWidget;
use dockyard_tracker::{EngineOptions, Markers, TabCallbacks, TabNodeConfig};

pub fn tracker_markers(config: &MarkerConfig) -> Markers {
    Markers {
        tab: config.tab.clone(),
        tab_bar: config.tab_bar.clone(),
        tab_bar_content: config.tab_bar_content.clone(),
        toolbar: config.toolbar.clone(),
    }
}

pub fn engine_options(config: &PanelConfig) -> EngineOptions {
    EngineOptions {
        tabs_movable: config.tabs_movable,
        tabs_constrained: config.tabs_constrained,
        add_button_enabled: config.add_button_enabled,
        panel_id: config.panel_id.clone(),
    }
}

fn widget_id<N, W: LiveWidget>(tab: &TabNodeConfig<N, W>) -> Option<String> {
    tab.widget().and_then(|w| w.id())
}

/// Publish every notification on `events`, then pass it on to the
/// application's hook.
pub(super) fn relay_callbacks<N, W>(
    events: &EventBus,
    app: Option<TabCallbacks<N, W>>,
) -> TabCallbacks<N, W>
where
    N: 'static,
    W: LiveWidget + 'static,
{
    let (mut added, mut removed, mut activated) =
        app.map(TabCallbacks::into_parts).unwrap_or_default();
    let (on_added, on_removed, on_activated) = (events.clone(), events.clone(), events.clone());

    TabCallbacks::<N, W>::new()
        .on_tab_added(move |tab| {
            on_added.publish(DockEvent::TabAdded {
                tab_id: tab.tab_id.clone(),
                widget_id: widget_id(tab),
            });
            if let Some(f) = added.as_mut() {
                f(tab);
            }
        })
        .on_tab_removed(move |tab| {
            on_removed.publish(DockEvent::TabRemoved {
                tab_id: tab.tab_id.clone(),
                widget_id: widget_id(tab),
            });
            if let Some(f) = removed.as_mut() {
                f(tab);
            }
        })
        .on_tab_activated(move |tab| {
            on_activated.publish(DockEvent::TabActivated {
                tab_id: tab.map(|t| t.tab_id.clone()),
                widget_id: tab.and_then(widget_id),
            });
            if let Some(f) = activated.as_mut() {
                f(tab);
            }
        })
}
