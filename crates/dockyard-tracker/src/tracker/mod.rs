//! The tab registry and the two input channels feeding it.

mod activation;
mod added;
mod reconcile;

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::callbacks::TabCallbacks;
use crate::host::{Dom, HostSignal, Markers, MutationRecord, ObserverId, PanelEngine};
use crate::node::TabNodeConfig;

use reconcile::Removal;

/// Registry entry type for a given host.
pub type Entry<H> = TabNodeConfig<<H as Dom>::Node, <H as PanelEngine>::Widget>;

/// Keeps a registry of live tabs consistent with the panel's DOM.
///
/// Two channels feed it: observer flushes ([`HostSignal::Mutations`]) and
/// engine signals ([`HostSignal::CurrentChanged`], [`HostSignal::ChildRemoved`]).
/// Their relative order is not guaranteed, so each handler is idempotent on
/// its own.
pub struct TabTracker<H: PanelEngine> {
    root: H::Node,
    observer: Option<ObserverId>,
    markers: Markers,
    /// Keyed by tab node DOM id, in insertion order.
    registry: IndexMap<String, Entry<H>>,
    callbacks: TabCallbacks<H::Node, H::Widget>,
    /// Tab strips whose "current changed" signal is already connected.
    subscribed: HashSet<H::Node>,
    /// Tab strips with wheel scrolling already enabled.
    scroll_enabled: HashSet<H::Node>,
    last_activated: Option<H::Widget>,
    disposed: bool,
}

impl<H: PanelEngine> TabTracker<H> {
    /// Install the subtree observer on the panel root and start tracking.
    pub fn attach(
        host: &mut H,
        markers: Markers,
        callbacks: TabCallbacks<H::Node, H::Widget>,
    ) -> Self {
        let root = host.root();
        let observer = host.observe(&root);
        info!(root = ?root, "tab tracker attached");
        Self {
            root,
            observer: Some(observer),
            markers,
            registry: IndexMap::new(),
            callbacks,
            subscribed: HashSet::new(),
            scroll_enabled: HashSet::new(),
            last_activated: None,
            disposed: false,
        }
    }

    /// Route one host signal to its handler.
    pub fn handle_signal(&mut self, host: &mut H, signal: HostSignal<H::Node, H::Widget>) {
        match signal {
            HostSignal::Mutations(records) => self.handle_mutations(host, &records),
            HostSignal::CurrentChanged { tab_bar, change } => {
                debug!(tab_bar = ?tab_bar, "current changed");
                self.handle_current_changed(host, change);
            }
            HostSignal::ChildRemoved(widget) => {
                debug!(widget = ?widget, "child removed");
                self.handle_child_removed(host);
            }
        }
    }

    /// Process one observer flush: every addition and removal in the batch
    /// is applied before this returns.
    pub fn handle_mutations(&mut self, host: &mut H, records: &[MutationRecord<H::Node>]) {
        if self.disposed {
            return;
        }
        for record in records {
            for node in &record.added {
                if host.has_class(node, &self.markers.tab) {
                    self.tab_added(host, node);
                }
            }
            for node in &record.removed {
                if host.has_class(node, &self.markers.tab) {
                    let tab_id = host.node_id(node);
                    self.reconcile(host, Removal::Tab(&tab_id, node));
                }
            }
        }
    }

    /// The engine detached a widget. Tabs whose node left the panel without
    /// an observed removal are evicted here.
    pub fn handle_child_removed(&mut self, host: &mut H) {
        if self.disposed {
            return;
        }
        self.reconcile(host, Removal::Detached);
    }

    /// Disconnect the observer and forget every tab without notifying.
    /// Safe to call more than once.
    pub fn dispose(&mut self, host: &mut H) {
        if let Some(observer) = self.observer.take() {
            host.disconnect(observer);
        }
        if self.disposed {
            return;
        }
        self.registry.clear();
        self.subscribed.clear();
        self.scroll_enabled.clear();
        self.last_activated = None;
        self.disposed = true;
        info!("tab tracker disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn root(&self) -> &H::Node {
        &self.root
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// All tracked tabs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Entry<H>> {
        self.registry.values()
    }

    /// Owned copy of the registry.
    pub fn snapshot(&self) -> Vec<Entry<H>> {
        self.registry.values().cloned().collect()
    }

    pub fn get(&self, tab_id: &str) -> Option<&Entry<H>> {
        self.registry.get(tab_id)
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.registry.contains_key(tab_id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
