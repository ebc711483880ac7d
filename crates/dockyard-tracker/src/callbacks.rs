//! Application callbacks for tab lifecycle notifications.

use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use crate::node::TabNodeConfig;

pub type TabCallback<N, W> = Box<dyn FnMut(&TabNodeConfig<N, W>)>;
pub type ActivationCallback<N, W> = Box<dyn FnMut(Option<&TabNodeConfig<N, W>>)>;

/// The three lifecycle hooks. A hook that panics is logged and skipped;
/// the tracker keeps delivering later notifications.
pub struct TabCallbacks<N, W> {
    on_tab_added: Option<TabCallback<N, W>>,
    on_tab_removed: Option<TabCallback<N, W>>,
    on_tab_activated: Option<ActivationCallback<N, W>>,
}

impl<N, W> Default for TabCallbacks<N, W> {
    fn default() -> Self {
        Self {
            on_tab_added: None,
            on_tab_removed: None,
            on_tab_activated: None,
        }
    }
}

impl<N, W> TabCallbacks<N, W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_tab_added(mut self, f: impl FnMut(&TabNodeConfig<N, W>) + 'static) -> Self {
        self.on_tab_added = Some(Box::new(f));
        self
    }

    pub fn on_tab_removed(mut self, f: impl FnMut(&TabNodeConfig<N, W>) + 'static) -> Self {
        self.on_tab_removed = Some(Box::new(f));
        self
    }

    pub fn on_tab_activated(
        mut self,
        f: impl FnMut(Option<&TabNodeConfig<N, W>>) + 'static,
    ) -> Self {
        self.on_tab_activated = Some(Box::new(f));
        self
    }

    /// Take the hooks back out, for wrapping them in another set.
    pub fn into_parts(
        self,
    ) -> (
        Option<TabCallback<N, W>>,
        Option<TabCallback<N, W>>,
        Option<ActivationCallback<N, W>>,
    ) {
        (self.on_tab_added, self.on_tab_removed, self.on_tab_activated)
    }

    pub(crate) fn tab_added(&mut self, config: &TabNodeConfig<N, W>) {
        if let Some(f) = self.on_tab_added.as_mut() {
            guarded("tab_added", Some(&config.tab_id), || f(config));
        }
    }

    pub(crate) fn tab_removed(&mut self, config: &TabNodeConfig<N, W>) {
        if let Some(f) = self.on_tab_removed.as_mut() {
            guarded("tab_removed", Some(&config.tab_id), || f(config));
        }
    }

    pub(crate) fn tab_activated(&mut self, config: Option<&TabNodeConfig<N, W>>) {
        if let Some(f) = self.on_tab_activated.as_mut() {
            let tab_id = config.map(|c| c.tab_id.as_str());
            guarded("tab_activated", tab_id, || f(config));
        }
    }
}

fn guarded(event: &'static str, tab_id: Option<&str>, f: impl FnOnce()) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        error!(event, tab_id = ?tab_id, panic = message, "tab callback panicked");
    }
}
