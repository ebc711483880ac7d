//! Add path: a tab node appeared under the panel root.

use dockyard_layout::{LiveWidget, CLOSABLE_CLASS};
use tracing::{debug, warn};

use super::TabTracker;
use crate::host::PanelEngine;
use crate::node::{TabNodeConfig, WidgetSlot};

impl<H: PanelEngine> TabTracker<H> {
    pub(super) fn tab_added(&mut self, host: &mut H, tab: &H::Node) {
        let tab_id = host.node_id(tab);
        if self
            .registry
            .get(&tab_id)
            .is_some_and(|existing| existing.tab == *tab)
        {
            debug!(tab_id = %tab_id, "tab already tracked");
            return;
        }

        let tab_bar = host.closest(tab, &self.markers.tab_bar);
        let toolbar = match &tab_bar {
            Some(bar) => {
                self.enable_scroll_once(host, bar);
                self.ensure_toolbar(host, bar)
            }
            None => {
                warn!(tab_id = %tab_id, "tab outside any tab strip");
                host.create_element(&self.markers.toolbar)
            }
        };

        let view = host.labelled_by(&tab_id);
        let widget = resolve_widget(&*host, view.as_ref());
        if widget.is_unresolved() {
            warn!(tab_id = %tab_id, "tab added before its widget is known");
        }
        if let Some(view) = &view {
            let view_id = host.node_id(view);
            host.set_data(tab, "id", &view_id);
        }

        let config = TabNodeConfig {
            tab_id: tab_id.clone(),
            tab: tab.clone(),
            tab_bar,
            toolbar,
            view,
            widget,
            closable: host.has_class(tab, CLOSABLE_CLASS),
        };

        // A different node reusing a tracked id replaces the stale entry.
        let stale = self.registry.insert(tab_id.clone(), config);
        debug!(tab_id = %tab_id, tracked = self.registry.len(), "tab added");
        if let Some(stale) = &stale {
            self.callbacks.tab_removed(stale);
        }
        if let Some(config) = self.registry.get(&tab_id) {
            self.callbacks.tab_added(config);
        }

        // Strips created by drag-splits only show up through their tabs.
        self.connect_tab_bars(host);
    }

    /// The strip's toolbar container, created on first sight.
    fn ensure_toolbar(&self, host: &mut H, tab_bar: &H::Node) -> H::Node {
        if let Some(toolbar) = host.query(tab_bar, &self.markers.toolbar) {
            return toolbar;
        }
        let toolbar = host.create_element(&self.markers.toolbar);
        host.append_child(tab_bar, &toolbar);
        debug!(tab_bar = ?tab_bar, "toolbar created");
        toolbar
    }

    fn enable_scroll_once(&mut self, host: &mut H, tab_bar: &H::Node) {
        if self.scroll_enabled.contains(tab_bar) {
            return;
        }
        if let Some(content) = host.query(tab_bar, &self.markers.tab_bar_content) {
            host.enable_wheel_scroll(&content);
            self.scroll_enabled.insert(tab_bar.clone());
        }
    }

    /// Retry widget lookup for one entry if it is still unresolved.
    pub fn resolve(&mut self, host: &H, tab_id: &str) -> Option<&H::Widget> {
        let entry = self.registry.get_mut(tab_id)?;
        if entry.widget.is_unresolved() {
            if entry.view.is_none() {
                entry.view = host.labelled_by(tab_id);
            }
            entry.widget = resolve_widget(host, entry.view.as_ref());
            if let WidgetSlot::Resolved(widget) = &entry.widget {
                debug!(tab_id, widget = ?widget, "late widget resolution");
            }
        }
        entry.widget.get()
    }

    /// Retry lookup for every unresolved entry.
    pub(super) fn resolve_pending(&mut self, host: &H) {
        let pending: Vec<String> = self
            .registry
            .iter()
            .filter(|(_, entry)| entry.widget.is_unresolved())
            .map(|(id, _)| id.clone())
            .collect();
        for tab_id in pending {
            self.resolve(host, &tab_id);
        }
    }
}

/// Find the live widget whose id matches the view's id.
pub(super) fn resolve_widget<H: PanelEngine>(
    host: &H,
    view: Option<&H::Node>,
) -> WidgetSlot<H::Widget> {
    let Some(view) = view else {
        return WidgetSlot::Unresolved;
    };
    let view_id = host.node_id(view);
    if view_id.is_empty() {
        return WidgetSlot::Absent;
    }
    host.widgets()
        .into_iter()
        .find(|w| w.id().or_else(|| w.node_id()).as_deref() == Some(view_id.as_str()))
        .map_or(WidgetSlot::Unresolved, WidgetSlot::Resolved)
}
