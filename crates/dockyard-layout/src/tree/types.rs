//! Core types for the layout tree: Orientation, Area and Layout.

use serde::{Deserialize, Serialize};

use crate::widget::WidgetConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One region of a dock. `T` is the widget payload: a [`WidgetConfig`] in
/// the persisted tree, a live widget handle in the engine's tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Area<T> {
    /// Leaf region: ordered tabs with one active index.
    #[serde(rename_all = "camelCase")]
    TabArea { widgets: Vec<T>, current_index: usize },
    /// Branch region: ordered children with positionally matching weights.
    SplitArea {
        orientation: Orientation,
        sizes: Vec<f64>,
        children: Vec<Area<T>>,
    },
}

/// A whole dock, rooted at an optional top-level area. `None` is an empty dock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout<T> {
    pub main: Option<Area<T>>,
}

pub type SerializedArea = Area<WidgetConfig>;
pub type SerializedLayout = Layout<WidgetConfig>;
pub type LiveLayout<W> = Layout<W>;

impl<T> Area<T> {
    pub fn tab_area(widgets: Vec<T>, current_index: usize) -> Self {
        Area::TabArea {
            widgets,
            current_index,
        }
    }

    pub fn split(orientation: Orientation, sizes: Vec<f64>, children: Vec<Area<T>>) -> Self {
        Area::SplitArea {
            orientation,
            sizes,
            children,
        }
    }

    /// Split with equal weights for every child.
    pub fn split_even(orientation: Orientation, children: Vec<Area<T>>) -> Self {
        let weight = if children.is_empty() {
            0.0
        } else {
            1.0 / children.len() as f64
        };
        let sizes = vec![weight; children.len()];
        Area::split(orientation, sizes, children)
    }

    pub fn is_tab_area(&self) -> bool {
        matches!(self, Area::TabArea { .. })
    }
}

impl<T> Layout<T> {
    pub fn empty() -> Self {
        Layout { main: None }
    }

    pub fn new(main: Area<T>) -> Self {
        Layout { main: Some(main) }
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_none()
    }
}

impl<T> Default for Layout<T> {
    fn default() -> Self {
        Self::empty()
    }
}
