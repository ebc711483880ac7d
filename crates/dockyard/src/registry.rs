//! Widget kinds known to a dock: how to build them and what to run when
//! they come and go.

use std::collections::HashMap;
use std::fmt;

use dockyard_common::{new_widget_id, DockError, Result};
use dockyard_layout::{KindTag, LiveWidget, WidgetConfig};
use tracing::debug;

pub type WidgetFactory<W> = Box<dyn Fn(&WidgetConfig) -> W>;
pub type WidgetHook<W> = Box<dyn Fn(&W)>;

/// Per-kind lifecycle hooks.
pub struct WidgetModel<W> {
    created: Option<WidgetHook<W>>,
    deleted: Option<WidgetHook<W>>,
}

impl<W> Default for WidgetModel<W> {
    fn default() -> Self {
        Self {
            created: None,
            deleted: None,
        }
    }
}

impl<W> WidgetModel<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs right after the factory built a widget of this kind.
    pub fn on_created(mut self, f: impl Fn(&W) + 'static) -> Self {
        self.created = Some(Box::new(f));
        self
    }

    /// Runs for every remaining widget of this kind when the dock is disposed.
    pub fn on_deleted(mut self, f: impl Fn(&W) + 'static) -> Self {
        self.deleted = Some(Box::new(f));
        self
    }
}

/// Display options for [`crate::Dock::widget`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetOptions {
    pub id: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub closable: bool,
}

impl WidgetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// The config a factory receives. Without an explicit id a fresh
    /// `widget-<kind>-<uuid>` id is generated.
    pub fn into_config(self, kind: &str) -> WidgetConfig {
        WidgetConfig {
            id: self.id.unwrap_or_else(|| new_widget_id(kind)),
            kind: kind.to_string(),
            label: self.label,
            icon: self.icon,
            closable: Some(self.closable),
        }
    }
}

/// Maps a widget kind to the factory that builds it.
pub struct WidgetRegistry<W> {
    factories: HashMap<String, WidgetFactory<W>>,
    models: HashMap<String, WidgetModel<W>>,
}

impl<W> Default for WidgetRegistry<W> {
    fn default() -> Self {
        Self {
            factories: HashMap::new(),
            models: HashMap::new(),
        }
    }
}

impl<W> fmt::Debug for WidgetRegistry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("WidgetRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

impl<W: LiveWidget + KindTag> WidgetRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `kind`.
    pub fn with(
        mut self,
        kind: impl Into<String>,
        factory: impl Fn(&WidgetConfig) -> W + 'static,
    ) -> Self {
        self.register(kind, factory);
        self
    }

    pub fn with_model(mut self, kind: impl Into<String>, model: WidgetModel<W>) -> Self {
        self.models.insert(kind.into(), model);
        self
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        factory: impl Fn(&WidgetConfig) -> W + 'static,
    ) {
        self.factories.insert(kind.into(), Box::new(factory));
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Build the widget `config` describes, stamp its kind and run the
    /// kind's `created` hook.
    pub fn create(&self, config: &WidgetConfig) -> Result<W> {
        let factory = self
            .factories
            .get(&config.kind)
            .ok_or_else(|| DockError::UnknownWidgetKind(config.kind.clone()))?;
        let mut widget = factory(config);
        widget.set_kind(&config.kind);
        debug!(kind = %config.kind, widget_id = %config.id, "widget created");

        if let Some(created) = self
            .models
            .get(&config.kind)
            .and_then(|m| m.created.as_ref())
        {
            created(&widget);
        }
        Ok(widget)
    }

    /// Run the `deleted` hook of the widget's kind, if any.
    pub fn deleted(&self, widget: &W) {
        let Some(kind) = widget.kind() else {
            return;
        };
        if let Some(deleted) = self.models.get(&kind).and_then(|m| m.deleted.as_ref()) {
            deleted(widget);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use dockyard_tracker::memory::MemoryWidget;

    fn editor_factory(config: &WidgetConfig) -> MemoryWidget {
        // Deliberately leaves the kind unset.
        let mut widget = MemoryWidget::untagged(&config.id);
        if let Some(label) = &config.label {
            widget = widget.with_label(label);
        }
        widget
    }

    #[test]
    fn create_stamps_kind() {
        let registry = WidgetRegistry::new().with("EDITOR", editor_factory);
        let widget = registry
            .create(&WidgetConfig::new("e1", "EDITOR").with_label("main.rs"))
            .unwrap();
        assert_eq!(widget.kind(), Some("EDITOR".to_string()));
        assert_eq!(widget.title().label.as_deref(), Some("main.rs"));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let registry = WidgetRegistry::new().with("EDITOR", editor_factory);
        let err = registry
            .create(&WidgetConfig::new("t1", "TERMINAL"))
            .unwrap_err();
        assert!(matches!(err, DockError::UnknownWidgetKind(kind) if kind == "TERMINAL"));
    }

    #[test]
    fn model_hooks_run_per_kind() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let created = Rc::clone(&seen);
        let deleted = Rc::clone(&seen);
        let registry = WidgetRegistry::new()
            .with("EDITOR", editor_factory)
            .with("TERMINAL", |c: &WidgetConfig| MemoryWidget::untagged(&c.id))
            .with_model(
                "EDITOR",
                WidgetModel::new()
                    .on_created(move |w: &MemoryWidget| {
                        created.borrow_mut().push(format!("created:{}", w.id))
                    })
                    .on_deleted(move |w: &MemoryWidget| {
                        deleted.borrow_mut().push(format!("deleted:{}", w.id))
                    }),
            );

        let editor = registry.create(&WidgetConfig::new("e1", "EDITOR")).unwrap();
        let terminal = registry.create(&WidgetConfig::new("t1", "TERMINAL")).unwrap();
        registry.deleted(&terminal);
        registry.deleted(&editor);
        registry.deleted(&MemoryWidget::untagged("stray"));

        assert_eq!(*seen.borrow(), vec!["created:e1", "deleted:e1"]);
    }

    #[test]
    fn options_fill_in_a_generated_id() {
        let config = WidgetOptions::new().with_label("Terminal").into_config("TERMINAL");
        assert!(config.id.starts_with("widget-TERMINAL-"));
        assert_eq!(config.kind, "TERMINAL");
        assert_eq!(config.closable, Some(false));

        let config = WidgetOptions::new()
            .with_id("fixed")
            .closable(true)
            .into_config("EDITOR");
        assert_eq!(config.id, "fixed");
        assert!(config.is_closable());
    }

    #[test]
    fn debug_lists_kinds() {
        let registry: WidgetRegistry<MemoryWidget> = WidgetRegistry::new()
            .with("TERMINAL", |c: &WidgetConfig| MemoryWidget::untagged(&c.id))
            .with("EDITOR", editor_factory);
        assert_eq!(
            format!("{registry:?}"),
            r#"WidgetRegistry { kinds: ["EDITOR", "TERMINAL"] }"#
        );
    }
}
