//! DOM class names the panel engine uses for its tab strips.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Class on every tab handle.
    pub tab: String,
    /// Class on the tab strip container.
    pub tab_bar: String,
    /// Class on the strip's scrollable tab list.
    pub tab_bar_content: String,
    /// Class given to the per-strip toolbar the dock creates.
    pub toolbar: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            tab: "lm-TabBar-tab".into(),
            tab_bar: "lm-TabBar".into(),
            tab_bar_content: "lm-TabBar-content".into(),
            toolbar: "lm-TabBar-toolbar".into(),
        }
    }
}

impl MarkerConfig {
    /// `(name, value)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("markers.tab", self.tab.as_str()),
            ("markers.tab_bar", self.tab_bar.as_str()),
            ("markers.tab_bar_content", self.tab_bar_content.as_str()),
            ("markers.toolbar", self.toolbar.as_str()),
        ]
    }
}
