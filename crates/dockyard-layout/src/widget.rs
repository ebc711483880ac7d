//! Widget identity as persisted (`WidgetConfig`) and as read from a live
//! widget (`LiveWidget`).

use serde::{Deserialize, Serialize};

/// Kind recorded for a live widget that carries no kind tag.
pub const UNKNOWN_KIND: &str = "UNKNOWN";

/// Title class marking a tab as closable.
pub const CLOSABLE_CLASS: &str = "closable";

/// Persisted description of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub id: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closable: Option<bool>,
}

impl WidgetConfig {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: None,
            icon: None,
            closable: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    pub fn is_closable(&self) -> bool {
        self.closable.unwrap_or(false)
    }
}

/// Display metadata shown on a widget's tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    pub label: Option<String>,
    pub icon_class: Option<String>,
    /// Space separated class list applied to the tab node.
    pub class_name: Option<String>,
}

impl Title {
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|names| names.split_whitespace().any(|c| c == class))
    }
}

/// Read access to a widget hosted by the panel engine.
pub trait LiveWidget {
    /// Application-assigned id.
    fn id(&self) -> Option<String>;

    /// Id of the widget's own DOM node.
    fn node_id(&self) -> Option<String> {
        None
    }

    /// Application-defined kind tag.
    fn kind(&self) -> Option<String>;

    fn title(&self) -> Title;

    /// Persisted form of this widget.
    fn to_config(&self) -> WidgetConfig {
        let title = self.title();
        WidgetConfig {
            id: self.id().or_else(|| self.node_id()).unwrap_or_default(),
            kind: self.kind().unwrap_or_else(|| UNKNOWN_KIND.to_string()),
            closable: Some(title.has_class(CLOSABLE_CLASS)),
            label: title.label,
            icon: title.icon_class,
        }
    }
}

/// Widgets that carry a writable kind tag. Factories may forget to set it,
/// so whoever dispatched on the kind stamps it afterwards.
pub trait KindTag {
    fn set_kind(&mut self, kind: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl LiveWidget for Bare {
        fn id(&self) -> Option<String> {
            None
        }

        fn kind(&self) -> Option<String> {
            None
        }

        fn title(&self) -> Title {
            Title::default()
        }
    }

    struct NodeOnly;

    impl LiveWidget for NodeOnly {
        fn id(&self) -> Option<String> {
            None
        }

        fn node_id(&self) -> Option<String> {
            Some("node-7".into())
        }

        fn kind(&self) -> Option<String> {
            Some("TERMINAL".into())
        }

        fn title(&self) -> Title {
            Title {
                label: Some("Shell".into()),
                icon_class: Some("term-icon".into()),
                class_name: Some("tab-class closable".into()),
            }
        }
    }

    #[test]
    fn bare_widget_falls_back() {
        let config = Bare.to_config();
        assert_eq!(config.id, "");
        assert_eq!(config.kind, UNKNOWN_KIND);
        assert_eq!(config.label, None);
        assert_eq!(config.icon, None);
        assert_eq!(config.closable, Some(false));
    }

    #[test]
    fn node_id_used_when_no_explicit_id() {
        let config = NodeOnly.to_config();
        assert_eq!(config.id, "node-7");
        assert_eq!(config.kind, "TERMINAL");
        assert_eq!(config.label.as_deref(), Some("Shell"));
        assert_eq!(config.icon.as_deref(), Some("term-icon"));
        assert_eq!(config.closable, Some(true));
    }

    #[test]
    fn closable_matches_whole_class_names() {
        let title = Title {
            class_name: Some("not-closable other".into()),
            ..Title::default()
        };
        assert!(!title.has_class(CLOSABLE_CLASS));
    }

    #[test]
    fn optional_fields_skipped_on_the_wire() {
        let json = serde_json::to_string(&WidgetConfig::new("w1", "EDITOR")).unwrap();
        assert_eq!(json, r#"{"id":"w1","kind":"EDITOR"}"#);
    }

    #[test]
    fn builder_sets_fields() {
        let config = WidgetConfig::new("w1", "EDITOR")
            .with_label("main.rs")
            .with_icon("rust")
            .with_closable(true);
        assert!(config.is_closable());
        assert_eq!(config.label.as_deref(), Some("main.rs"));
        assert_eq!(config.icon.as_deref(), Some("rust"));
    }
}
