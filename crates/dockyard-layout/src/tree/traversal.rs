//! Depth-first traversal of the layout tree: the map/try_map pair the codec
//! is built on, plus counting helpers.

use super::{Area, Layout};

impl<T> Area<T> {
    /// Rebuild the same shape with every widget mapped through `f`, visiting
    /// widgets depth-first, left to right.
    pub fn map<U, F>(&self, f: &mut F) -> Area<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Area::TabArea {
                widgets,
                current_index,
            } => Area::TabArea {
                widgets: widgets.iter().map(|w| f(w)).collect(),
                current_index: *current_index,
            },
            Area::SplitArea {
                orientation,
                sizes,
                children,
            } => Area::SplitArea {
                orientation: *orientation,
                sizes: sizes.clone(),
                children: children.iter().map(|c| c.map(f)).collect(),
            },
        }
    }

    /// Fallible [`Area::map`]. Stops at the first error; `f` is never called
    /// for widgets after the failing one.
    pub fn try_map<U, E, F>(&self, f: &mut F) -> Result<Area<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        match self {
            Area::TabArea {
                widgets,
                current_index,
            } => Ok(Area::TabArea {
                widgets: widgets.iter().map(|w| f(w)).collect::<Result<_, E>>()?,
                current_index: *current_index,
            }),
            Area::SplitArea {
                orientation,
                sizes,
                children,
            } => Ok(Area::SplitArea {
                orientation: *orientation,
                sizes: sizes.clone(),
                children: children
                    .iter()
                    .map(|c| c.try_map(f))
                    .collect::<Result<_, E>>()?,
            }),
        }
    }

    /// Visit every widget depth-first, left to right.
    pub fn for_each_widget<'a>(&'a self, f: &mut impl FnMut(&'a T)) {
        match self {
            Area::TabArea { widgets, .. } => widgets.iter().for_each(|w| f(w)),
            Area::SplitArea { children, .. } => {
                for child in children {
                    child.for_each_widget(f);
                }
            }
        }
    }

    /// Collect all widgets in document order.
    pub fn widgets(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.for_each_widget(&mut |w| out.push(w));
        out
    }

    pub fn widget_count(&self) -> usize {
        match self {
            Area::TabArea { widgets, .. } => widgets.len(),
            Area::SplitArea { children, .. } => children.iter().map(Area::widget_count).sum(),
        }
    }

    /// Number of tab areas in this subtree.
    pub fn panel_count(&self) -> usize {
        match self {
            Area::TabArea { .. } => 1,
            Area::SplitArea { children, .. } => children.iter().map(Area::panel_count).sum(),
        }
    }

    /// Number of split areas in this subtree, including this one.
    pub fn split_count(&self) -> usize {
        match self {
            Area::TabArea { .. } => 0,
            Area::SplitArea { children, .. } => {
                1 + children.iter().map(Area::split_count).sum::<usize>()
            }
        }
    }
}

impl<T> Layout<T> {
    pub fn map<U, F>(&self, mut f: F) -> Layout<U>
    where
        F: FnMut(&T) -> U,
    {
        Layout {
            main: self.main.as_ref().map(|area| area.map(&mut f)),
        }
    }

    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Layout<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        Ok(Layout {
            main: self
                .main
                .as_ref()
                .map(|area| area.try_map(&mut f))
                .transpose()?,
        })
    }

    pub fn widgets(&self) -> Vec<&T> {
        self.main.as_ref().map(Area::widgets).unwrap_or_default()
    }

    pub fn widget_count(&self) -> usize {
        self.main.as_ref().map_or(0, Area::widget_count)
    }

    pub fn panel_count(&self) -> usize {
        self.main.as_ref().map_or(0, Area::panel_count)
    }

    pub fn split_count(&self) -> usize {
        self.main.as_ref().map_or(0, Area::split_count)
    }
}
