//! The dock: one panel engine host, its tab tracker, and the widget kinds
//! it can build.

mod persistence;
mod placement;
mod relay;


pub use relay::{engine_options, tracker_markers};

use dockyard_common::{DockError, DockEvent, EventBus, Result};
use dockyard_config::DockConfig;
use dockyard_layout::{KindTag, LiveWidget};
use dockyard_tracker::tracker::Entry;
use dockyard_tracker::{PanelEngine, TabCallbacks, TabTracker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::registry::WidgetRegistry;

/// Widget and tab-area totals of the current layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockCount {
    pub widgets: usize,
    pub panels: usize,
}

struct Attached<H: PanelEngine> {
    host: H,
    tracker: TabTracker<H>,
}

pub struct Dock<H: PanelEngine> {
    config: DockConfig,
    registry: WidgetRegistry<H::Widget>,
    events: EventBus,
    /// Application hooks, handed to the tracker on attach.
    callbacks: Option<TabCallbacks<H::Node, H::Widget>>,
    attached: Option<Attached<H>>,
    disposed: bool,
}

impl<H> Dock<H>
where
    H: PanelEngine + 'static,
    H::Widget: KindTag,
{
    pub fn new(config: DockConfig, registry: WidgetRegistry<H::Widget>) -> Self {
        let capacity = config.events.effective_capacity();
        if capacity != config.events.capacity {
            warn!(
                configured = config.events.capacity,
                capacity, "event capacity out of range, clamped"
            );
        }
        let events = EventBus::new(capacity);
        Self {
            config,
            registry,
            events,
            callbacks: None,
            attached: None,
            disposed: false,
        }
    }

    /// Application hooks for tab lifecycle notifications. Takes effect on
    /// the next [`Dock::attach`].
    pub fn with_callbacks(mut self, callbacks: TabCallbacks<H::Node, H::Widget>) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    /// Take ownership of `host` and start tracking its tabs.
    pub fn attach(&mut self, mut host: H) -> Result<()> {
        if self.disposed {
            return Err(DockError::Other("dock is disposed".into()));
        }
        if self.attached.is_some() {
            return Err(DockError::Other("dock is already attached".into()));
        }

        host.configure(&engine_options(&self.config.panel));
        let callbacks = relay::relay_callbacks(&self.events, self.callbacks.take());
        let markers = tracker_markers(&self.config.markers);
        let mut tracker = TabTracker::attach(&mut host, markers, callbacks);
        tracker.connect_tab_bars(&mut host);
        info!(panel_id = %self.config.panel.panel_id, "dock attached");

        self.attached = Some(Attached { host, tracker });
        self.pump();
        Ok(())
    }

    /// Feed everything the host queued (engine signals, then the pending
    /// mutation batch) to the tracker. Returns the number of signals.
    pub fn pump(&mut self) -> usize {
        let Some(Attached { host, tracker }) = self.attached.as_mut() else {
            return 0;
        };
        let signals = host.drain_signals();
        let count = signals.len();
        for signal in signals {
            tracker.handle_signal(host, signal);
        }
        if count > 0 {
            debug!(signals = count, tabs = tracker.len(), "host signals processed");
        }
        count
    }

    /// Run `deleted` hooks for every widget still hosted, stop tracking and
    /// drop the host. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(Attached {
            mut host,
            mut tracker,
        }) = self.attached.take()
        {
            for widget in host.widgets() {
                self.registry.deleted(&widget);
            }
            tracker.dispose(&mut host);
        }
        self.disposed = true;
        self.events.publish(DockEvent::Disposed);
        info!("dock disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn registry(&self) -> &WidgetRegistry<H::Widget> {
        &self.registry
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn host(&self) -> Option<&H> {
        self.attached.as_ref().map(|a| &a.host)
    }

    /// Direct host access for operations the dock does not wrap. Call
    /// [`Dock::pump`] afterwards.
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.attached.as_mut().map(|a| &mut a.host)
    }

    pub fn tracker(&self) -> Option<&TabTracker<H>> {
        self.attached.as_ref().map(|a| &a.tracker)
    }

    /// Snapshot of the live tab registry, in insertion order.
    pub fn tabs(&self) -> Vec<Entry<H>> {
        self.tracker().map(TabTracker::snapshot).unwrap_or_default()
    }

    /// The tab registered under `tab_id`, resolving its widget if that is
    /// still pending.
    pub fn tab(&mut self, tab_id: &str) -> Option<&Entry<H>> {
        let Attached { host, tracker } = self.attached.as_mut()?;
        tracker.resolve(host, tab_id);
        tracker.get(tab_id)
    }

    /// The tab hosting `widget`, if it is tracked.
    pub fn tab_of(&self, widget: &H::Widget) -> Option<&Entry<H>> {
        let id = widget.id();
        self.tracker()?
            .nodes()
            .find(|entry| entry.widget().is_some_and(|w| w.id() == id))
    }

    pub fn split_count(&self) -> usize {
        self.host().map_or(0, |host| host.save_layout().split_count())
    }

    pub fn panel_count(&self) -> usize {
        self.host().map_or(0, |host| host.save_layout().panel_count())
    }

    pub fn count(&self) -> DockCount {
        self.host().map_or_else(DockCount::default, |host| {
            let layout = host.save_layout();
            DockCount {
                widgets: layout.widget_count(),
                panels: layout.panel_count(),
            }
        })
    }

    fn attached_mut(&mut self) -> Result<&mut Attached<H>> {
        self.attached.as_mut().ok_or(DockError::NotAttached)
    }
}
