//! Registry entries for tracked tabs.

/// Resolution state of the widget behind a tab.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSlot<W> {
    /// Lookup has not succeeded yet; retried on the next read.
    Unresolved,
    Resolved(W),
    /// The tab's view carries no id, so no widget can ever match.
    Absent,
}

impl<W> WidgetSlot<W> {
    pub fn get(&self) -> Option<&W> {
        match self {
            WidgetSlot::Resolved(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, WidgetSlot::Unresolved)
    }
}

/// A live tab as seen in the DOM. Created only when the tab node is seen
/// inserted, dropped only when it is seen gone.
#[derive(Debug, Clone, PartialEq)]
pub struct TabNodeConfig<N, W> {
    /// DOM id of the tab node, the registry key.
    pub tab_id: String,
    pub tab: N,
    /// Owning tab strip. `None` when the tab was found outside any strip.
    pub tab_bar: Option<N>,
    /// Per-strip control container, shared by all tabs of the strip.
    pub toolbar: N,
    /// Content node labelled by the tab.
    pub view: Option<N>,
    pub widget: WidgetSlot<W>,
    pub closable: bool,
}

impl<N, W> TabNodeConfig<N, W> {
    pub fn widget(&self) -> Option<&W> {
        self.widget.get()
    }
}
