//! Save and restore.

use dockyard_common::{DockError, DockEvent, Result};
use dockyard_layout::{
    decode, encode, json_to_serialized_layout, serialized_to_json, KindTag, Layout, LiveLayout,
    SerializedLayout, WidgetConfig,
};
use dockyard_tracker::PanelEngine;
use tracing::{info, warn};

use super::{Attached, Dock};

impl<H> Dock<H>
where
    H: PanelEngine + 'static,
    H::Widget: KindTag,
{
    /// The current layout in persisted form; `{ "main": null }` when no host
    /// is attached.
    pub fn save(&self) -> SerializedLayout {
        self.host()
            .map_or_else(Layout::empty, |host| encode(&host.save_layout()))
    }

    pub fn save_json(&self) -> Result<String> {
        serialized_to_json(&self.save())
    }

    /// Rebuild every widget of `serialized` through the registry and hand
    /// the tree to the engine. Fails on the first unknown kind, before the
    /// engine is touched.
    pub fn restore(&mut self, serialized: &SerializedLayout) -> Result<()> {
        if self.attached.is_none() {
            return Err(DockError::NotAttached);
        }
        let live = decode(serialized, |config| self.registry.create(config))?;
        self.apply_layout(live)
    }

    /// [`Dock::restore`] with a caller-supplied factory. Its errors come back
    /// unchanged.
    pub fn restore_with<E, F>(
        &mut self,
        serialized: &SerializedLayout,
        factory: F,
    ) -> std::result::Result<(), E>
    where
        F: FnMut(&WidgetConfig) -> std::result::Result<H::Widget, E>,
        E: From<DockError>,
    {
        if self.attached.is_none() {
            return Err(DockError::NotAttached.into());
        }
        let live = decode(serialized, factory)?;
        self.apply_layout(live).map_err(E::from)
    }

    pub fn restore_json(&mut self, json: &str) -> Result<()> {
        let serialized = json_to_serialized_layout(json)?;
        self.restore(&serialized)
    }

    /// Attach to `host`, then restore the session stored in `json`.
    pub fn load(&mut self, host: H, json: &str) -> Result<()> {
        let serialized = json_to_serialized_layout(json)?;
        self.attach(host)?;
        self.restore(&serialized)
    }

    fn apply_layout(&mut self, live: LiveLayout<H::Widget>) -> Result<()> {
        for issue in live.shape_issues() {
            warn!(%issue, "restoring malformed layout");
        }
        let (panels, widgets) = (live.panel_count(), live.widget_count());

        let Attached { host, tracker } = self.attached_mut()?;
        host.restore_layout(live);
        tracker.connect_tab_bars(host);
        self.pump();

        self.events
            .publish(DockEvent::LayoutRestored { panels, widgets });
        info!(panels, widgets, "layout restored");
        Ok(())
    }
}
