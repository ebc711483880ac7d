//! Remove path. Both removal channels end up in [`TabTracker::reconcile`].

use tracing::debug;

use super::TabTracker;
use crate::host::PanelEngine;

pub(super) enum Removal<'a, N> {
    /// The observer saw this tab node leave the DOM. An entry under the same
    /// id is only evicted if it is this node, or if its own node is gone too.
    Tab(&'a str, &'a N),
    /// The engine detached a widget: evict every tab no longer under the root.
    Detached,
}

impl<H: PanelEngine> TabTracker<H> {
    /// Drop the selected entries, then notify. Ids already gone are skipped,
    /// so replaying either channel is harmless. Returns the eviction count.
    pub(super) fn reconcile(&mut self, host: &H, removal: Removal<'_, H::Node>) -> usize {
        let doomed: Vec<String> = match removal {
            Removal::Tab(tab_id, node) => self
                .registry
                .get(tab_id)
                .filter(|entry| {
                    entry.tab == *node || !host.contains(&self.root, &entry.tab)
                })
                .map(|_| vec![tab_id.to_string()])
                .unwrap_or_default(),
            Removal::Detached => self
                .registry
                .iter()
                .filter(|(_, entry)| !host.contains(&self.root, &entry.tab))
                .map(|(id, _)| id.clone())
                .collect(),
        };

        let evicted: Vec<_> = doomed
            .iter()
            .filter_map(|id| self.registry.shift_remove(id))
            .collect();
        if !evicted.is_empty() {
            debug!(
                evicted = evicted.len(),
                tracked = self.registry.len(),
                "tabs removed"
            );
        }
        // A restored widget equal to the last active one must still report.
        let last = self.last_activated.as_ref();
        if last.is_some() && evicted.iter().any(|entry| entry.widget() == last) {
            self.last_activated = None;
        }
        for entry in &evicted {
            self.callbacks.tab_removed(entry);
        }
        evicted.len()
    }
}
