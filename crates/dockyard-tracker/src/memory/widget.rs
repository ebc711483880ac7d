use dockyard_layout::{KindTag, LiveWidget, Title, WidgetConfig, CLOSABLE_CLASS};

/// Widget hosted by [`super::MemoryHost`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryWidget {
    pub id: String,
    pub kind: Option<String>,
    pub title: Title,
}

impl MemoryWidget {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind.into()),
            title: Title::default(),
        }
    }

    /// A widget built outside any factory, with no kind tag.
    pub fn untagged(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            title: Title::default(),
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            id: config.id.clone(),
            kind: Some(config.kind.clone()),
            title: Title {
                label: config.label.clone(),
                icon_class: config.icon.clone(),
                class_name: config.is_closable().then(|| CLOSABLE_CLASS.to_string()),
            },
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.title.label = Some(label.into());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.title.class_name = closable.then(|| CLOSABLE_CLASS.to_string());
        self
    }
}

impl LiveWidget for MemoryWidget {
    fn id(&self) -> Option<String> {
        Some(self.id.clone())
    }

    fn kind(&self) -> Option<String> {
        self.kind.clone()
    }

    fn title(&self) -> Title {
        self.title.clone()
    }
}

impl KindTag for MemoryWidget {
    fn set_kind(&mut self, kind: &str) {
        self.kind = Some(kind.to_string());
    }
}
