//! Activation path: per-strip "current changed" subscriptions.

use tracing::debug;

use super::TabTracker;
use crate::host::{CurrentChanged, PanelEngine};

impl<H: PanelEngine> TabTracker<H> {
    /// Connect every tab strip not connected yet. Strips come and go as the
    /// user splits, so this runs after every placement and tab arrival.
    pub fn connect_tab_bars(&mut self, host: &mut H) {
        if self.disposed {
            return;
        }
        for tab_bar in host.tab_bars() {
            if self.subscribed.insert(tab_bar.clone()) {
                host.connect_current_changed(&tab_bar);
                debug!(tab_bar = ?tab_bar, "tab strip connected");
            }
        }
    }

    pub fn handle_current_changed(&mut self, host: &mut H, change: CurrentChanged<H::Widget>) {
        if self.disposed || self.last_activated == change.current {
            return;
        }
        self.last_activated = change.current.clone();

        let Some(current) = change.current else {
            self.callbacks.tab_activated(None);
            return;
        };
        self.resolve_pending(host);
        let entry = self
            .registry
            .values()
            .find(|entry| entry.widget() == Some(&current));
        debug!(
            widget = ?current,
            tab_id = ?entry.map(|e| e.tab_id.as_str()),
            "tab activated"
        );
        self.callbacks.tab_activated(entry);
    }

    /// Widget most recently reported through `on_tab_activated`.
    pub fn last_activated(&self) -> Option<&H::Widget> {
        self.last_activated.as_ref()
    }

    pub fn is_subscribed(&self, tab_bar: &H::Node) -> bool {
        self.subscribed.contains(tab_bar)
    }
}
