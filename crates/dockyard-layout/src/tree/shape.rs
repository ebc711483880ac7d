//! Structural shape checks. Only the shape is checked: sizes against
//! children, and the active index against the tab count.

use std::fmt;

use super::{Area, Layout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeIssue {
    /// A split area whose `sizes` and `children` lengths differ.
    SizesMismatch {
        path: String,
        sizes: usize,
        children: usize,
    },
    /// A non-empty tab area whose `currentIndex` is past the last tab.
    CurrentIndexOutOfRange {
        path: String,
        current_index: usize,
        widgets: usize,
    },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeIssue::SizesMismatch {
                path,
                sizes,
                children,
            } => write!(f, "{path}: {sizes} sizes for {children} children"),
            ShapeIssue::CurrentIndexOutOfRange {
                path,
                current_index,
                widgets,
            } => write!(
                f,
                "{path}: currentIndex {current_index} out of range for {widgets} widgets"
            ),
        }
    }
}

impl<T> Area<T> {
    pub fn shape_issues(&self) -> Vec<ShapeIssue> {
        let mut issues = Vec::new();
        self.collect_issues("main", &mut issues);
        issues
    }

    fn collect_issues(&self, path: &str, out: &mut Vec<ShapeIssue>) {
        match self {
            Area::TabArea {
                widgets,
                current_index,
            } => {
                if !widgets.is_empty() && *current_index >= widgets.len() {
                    out.push(ShapeIssue::CurrentIndexOutOfRange {
                        path: path.to_string(),
                        current_index: *current_index,
                        widgets: widgets.len(),
                    });
                }
            }
            Area::SplitArea {
                sizes, children, ..
            } => {
                if sizes.len() != children.len() {
                    out.push(ShapeIssue::SizesMismatch {
                        path: path.to_string(),
                        sizes: sizes.len(),
                        children: children.len(),
                    });
                }
                for (i, child) in children.iter().enumerate() {
                    child.collect_issues(&format!("{path}.children[{i}]"), out);
                }
            }
        }
    }
}

impl<T> Layout<T> {
    pub fn shape_issues(&self) -> Vec<ShapeIssue> {
        self.main
            .as_ref()
            .map(Area::shape_issues)
            .unwrap_or_default()
    }
}
