//! Creating, placing and activating widgets.

use dockyard_common::Result;
use dockyard_layout::KindTag;
use dockyard_tracker::{AddOptions, PanelEngine};
use tracing::debug;

use super::{Attached, Dock};
use crate::registry::WidgetOptions;

impl<H> Dock<H>
where
    H: PanelEngine + 'static,
    H::Widget: KindTag,
{
    /// Build a widget of a registered kind. Does not place it.
    pub fn widget(&self, kind: &str, options: WidgetOptions) -> Result<H::Widget> {
        self.registry.create(&options.into_config(kind))
    }

    pub fn add(&mut self, widget: H::Widget, options: AddOptions<H::Widget>) -> Result<()> {
        let Attached { host, tracker } = self.attached_mut()?;
        debug!(widget = ?widget, mode = ?options.mode, "placing widget");
        host.add_widget(widget, options);
        // A split may have produced a new tab strip.
        tracker.connect_tab_bars(host);
        self.pump();
        Ok(())
    }

    pub fn activate(&mut self, widget: &H::Widget) -> Result<()> {
        let Attached { host, .. } = self.attached_mut()?;
        host.activate_widget(widget);
        self.pump();
        Ok(())
    }
}
