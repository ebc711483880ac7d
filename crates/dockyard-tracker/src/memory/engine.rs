//! Docking behaviour of [`MemoryHost`]: placement, removal, activation and
//! whole-layout restore.

use std::mem;

use dockyard_layout::{Area, Layout, LiveLayout, Orientation};

use super::{MemoryHost, MemoryWidget, NodeId, RenderedTab};
use crate::host::{
    AddOptions, CurrentChanged, EngineOptions, HostSignal, InsertMode, PanelEngine,
};

/// Index path from the root area to a tab area, plus the tab index in it.
type TabPath = (Vec<usize>, usize);

fn find_tab(area: &Area<MemoryWidget>, widget_id: &str) -> Option<TabPath> {
    match area {
        Area::TabArea { widgets, .. } => widgets
            .iter()
            .position(|w| w.id == widget_id)
            .map(|index| (Vec::new(), index)),
        Area::SplitArea { children, .. } => {
            children.iter().enumerate().find_map(|(i, child)| {
                find_tab(child, widget_id).map(|(mut path, index)| {
                    path.insert(0, i);
                    (path, index)
                })
            })
        }
    }
}

fn first_tab_area(area: &Area<MemoryWidget>) -> Vec<usize> {
    match area {
        Area::TabArea { .. } => Vec::new(),
        Area::SplitArea { children, .. } => match children.first() {
            Some(child) => {
                let mut path = first_tab_area(child);
                path.insert(0, 0);
                path
            }
            None => Vec::new(),
        },
    }
}

fn area_at<'a>(area: &'a mut Area<MemoryWidget>, path: &[usize]) -> &'a mut Area<MemoryWidget> {
    match path.split_first() {
        None => area,
        Some((&i, rest)) => match area {
            Area::SplitArea { children, .. } => area_at(&mut children[i], rest),
            Area::TabArea { .. } => area,
        },
    }
}

fn split_orientation(mode: InsertMode) -> Option<(Orientation, bool)> {
    match mode {
        InsertMode::SplitLeft => Some((Orientation::Horizontal, false)),
        InsertMode::SplitRight => Some((Orientation::Horizontal, true)),
        InsertMode::SplitTop => Some((Orientation::Vertical, false)),
        InsertMode::SplitBottom => Some((Orientation::Vertical, true)),
        InsertMode::TabBefore | InsertMode::TabAfter => None,
    }
}

impl MemoryHost {
    /// Close a widget: its tab, view and, when it was the last tab, its strip
    /// all leave the DOM, then `ChildRemoved` is signalled.
    pub fn remove_widget(&mut self, widget: &MemoryWidget) -> bool {
        let Some(root_area) = self.layout.as_mut() else {
            return false;
        };
        let Some((path, index)) = find_tab(root_area, &widget.id) else {
            return false;
        };

        let now_empty = match area_at(root_area, &path) {
            Area::TabArea {
                widgets,
                current_index,
            } => {
                widgets.remove(index);
                if *current_index >= widgets.len() && *current_index > 0 {
                    *current_index -= 1;
                }
                widgets.is_empty()
            }
            Area::SplitArea { .. } => false,
        };

        if let Some(rendered) = self.rendered.remove(&widget.id) {
            self.dom_remove(rendered.tab);
            self.dom_remove(rendered.view);
            if now_empty {
                self.dom_remove(rendered.bar);
                self.bars.retain(|b| *b != rendered.bar);
            }
        }
        if now_empty {
            self.collapse(&path);
        }
        self.signals.push(HostSignal::ChildRemoved(widget.clone()));
        true
    }

    /// Drop the (empty) tab area at `path` and fold single-child splits.
    fn collapse(&mut self, path: &[usize]) {
        let Some((&last, parent_path)) = path.split_last() else {
            self.layout = None;
            return;
        };
        let Some(root_area) = self.layout.as_mut() else {
            return;
        };
        let parent = area_at(root_area, parent_path);
        let survivor = match parent {
            Area::SplitArea {
                sizes, children, ..
            } => {
                children.remove(last);
                if last < sizes.len() {
                    sizes.remove(last);
                }
                (children.len() == 1).then(|| children.remove(0))
            }
            Area::TabArea { .. } => None,
        };
        if let Some(only) = survivor {
            *parent = only;
        }
    }

    fn render_area(&mut self, area: &Area<MemoryWidget>) {
        match area {
            Area::TabArea { widgets, .. } => {
                let bar = self.render_bar();
                for widget in widgets {
                    self.render_tab(bar, widget, usize::MAX);
                }
            }
            Area::SplitArea { children, .. } => {
                for child in children {
                    self.render_area(child);
                }
            }
        }
    }

    fn render_bar(&mut self) -> NodeId {
        let bar = self.arena.create("", &[self.markers.tab_bar.as_str()]);
        let content = self
            .arena
            .create("", &[self.markers.tab_bar_content.as_str()]);
        self.arena.append(bar, content);
        self.dom_append(self.root, bar);
        self.bars.push(bar);
        bar
    }

    fn render_tab(&mut self, bar: NodeId, widget: &MemoryWidget, index: usize) {
        let tab_id = format!("tab-key-{}", self.next_tab);
        self.next_tab += 1;

        let mut classes = vec![self.markers.tab.clone()];
        if let Some(class_name) = &widget.title.class_name {
            classes.extend(class_name.split_whitespace().map(str::to_string));
        }
        let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
        let tab = self.arena.create(&tab_id, &class_refs);

        let content = self.content_of(bar);
        self.dom_insert(content, tab, index);

        let view = self.attach_view(&tab_id, &widget.id);
        self.rendered
            .insert(widget.id.clone(), RenderedTab { bar, tab, view });
    }

    fn place_tab(&mut self, widget: MemoryWidget, path: Vec<usize>, index: Option<usize>) {
        let Some(root_area) = self.layout.as_mut() else {
            return;
        };
        let inserted = match area_at(root_area, &path) {
            Area::TabArea {
                widgets,
                current_index,
            } => {
                let at = index.unwrap_or(widgets.len()).min(widgets.len());
                widgets.insert(at, widget.clone());
                *current_index = at;
                Some((at, widgets.iter().find(|w| w.id != widget.id).map(|w| w.id.clone())))
            }
            Area::SplitArea { .. } => None,
        };
        let Some((at, sibling)) = inserted else {
            return;
        };
        let bar = sibling
            .and_then(|id| self.bar_node(&id))
            .unwrap_or_else(|| self.render_bar());
        self.render_tab(bar, &widget, at);
    }

    fn place_split(
        &mut self,
        widget: MemoryWidget,
        path: Vec<usize>,
        orientation: Orientation,
        after: bool,
    ) {
        let Some(root_area) = self.layout.as_mut() else {
            return;
        };
        let fresh = Area::tab_area(vec![widget.clone()], 0);

        let parent_matches = path.split_last().is_some_and(|(_, parent_path)| {
            matches!(
                area_at(root_area, parent_path),
                Area::SplitArea { orientation: o, .. } if *o == orientation
            )
        });

        if parent_matches {
            if let Some((&last, parent_path)) = path.split_last() {
                if let Area::SplitArea {
                    sizes, children, ..
                } = area_at(root_area, parent_path)
                {
                    let half = sizes.get(last).copied().unwrap_or(1.0) / 2.0;
                    if let Some(size) = sizes.get_mut(last) {
                        *size = half;
                    }
                    let at = if after { last + 1 } else { last };
                    children.insert(at, fresh);
                    sizes.insert(at.min(sizes.len()), half);
                }
            }
        } else {
            let target = area_at(root_area, &path);
            let old = mem::replace(target, Area::tab_area(Vec::new(), 0));
            let children = if after { vec![old, fresh] } else { vec![fresh, old] };
            *target = Area::split(orientation, vec![0.5, 0.5], children);
        }

        let bar = self.render_bar();
        self.render_tab(bar, &widget, 0);
    }
}

impl PanelEngine for MemoryHost {
    type Widget = MemoryWidget;

    fn configure(&mut self, options: &EngineOptions) {
        self.arena.get_mut(self.root).id = options.panel_id.clone();
        self.options = options.clone();
    }

    fn widgets(&self) -> Vec<MemoryWidget> {
        let mut all: Vec<MemoryWidget> = self
            .layout
            .as_ref()
            .map(|area| area.widgets().into_iter().cloned().collect())
            .unwrap_or_default();
        all.extend(self.loose.iter().cloned());
        all
    }

    fn tab_bars(&self) -> Vec<NodeId> {
        self.bars.clone()
    }

    fn connect_current_changed(&mut self, tab_bar: &NodeId) {
        *self.connections.entry(*tab_bar).or_default() += 1;
    }

    fn save_layout(&self) -> LiveLayout<MemoryWidget> {
        Layout {
            main: self.layout.clone(),
        }
    }

    fn restore_layout(&mut self, layout: LiveLayout<MemoryWidget>) {
        let old = self.layout.take();
        for bar in mem::take(&mut self.bars) {
            self.dom_remove(bar);
        }
        let views: Vec<NodeId> = self.rendered.drain().map(|(_, r)| r.view).collect();
        for view in views {
            self.dom_remove(view);
        }
        if let Some(old) = old {
            for widget in old.widgets() {
                self.signals.push(HostSignal::ChildRemoved(widget.clone()));
            }
        }

        if let Some(main) = &layout.main {
            self.render_area(main);
        }
        self.layout = layout.main;
    }

    fn add_widget(&mut self, widget: MemoryWidget, options: AddOptions<MemoryWidget>) {
        let Some(root_area) = self.layout.as_ref() else {
            self.layout = Some(Area::tab_area(vec![widget.clone()], 0));
            let bar = self.render_bar();
            self.render_tab(bar, &widget, 0);
            return;
        };

        let reference = options
            .reference
            .as_ref()
            .and_then(|r| find_tab(root_area, &r.id));

        match split_orientation(options.mode) {
            Some((orientation, after)) => {
                let path = reference.map(|(path, _)| path).unwrap_or_default();
                self.place_split(widget, path, orientation, after);
            }
            None => {
                let (path, index) = match reference {
                    Some((path, index)) if options.mode == InsertMode::TabBefore => {
                        (path, Some(index))
                    }
                    Some((path, index)) => (path, Some(index + 1)),
                    None => (first_tab_area(root_area), None),
                };
                self.place_tab(widget, path, index);
            }
        }
    }

    fn activate_widget(&mut self, widget: &MemoryWidget) {
        let Some(root_area) = self.layout.as_mut() else {
            return;
        };
        let Some((path, index)) = find_tab(root_area, &widget.id) else {
            return;
        };
        let previous = match area_at(root_area, &path) {
            Area::TabArea {
                widgets,
                current_index,
            } => {
                let previous = widgets.get(*current_index).cloned();
                *current_index = index;
                previous
            }
            Area::SplitArea { .. } => None,
        };
        let Some(bar) = self.bar_node(&widget.id) else {
            return;
        };
        if self.connection_count(bar) > 0 {
            self.signals.push(HostSignal::CurrentChanged {
                tab_bar: bar,
                change: CurrentChanged {
                    previous,
                    current: Some(widget.clone()),
                },
            });
        }
    }

    fn drain_signals(&mut self) -> Vec<HostSignal<NodeId, MemoryWidget>> {
        let mut out = mem::take(&mut self.signals);
        if !self.batch.is_empty() {
            out.push(HostSignal::Mutations(mem::take(&mut self.batch)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Dom;

    fn editor(id: &str) -> MemoryWidget {
        MemoryWidget::new(id, "EDITOR")
    }

    #[test]
    fn first_widget_creates_a_tab_area() {
        let mut host = MemoryHost::new();
        host.add_widget(editor("a"), AddOptions::default());
        let layout = host.save_layout();
        assert_eq!(layout.panel_count(), 1);
        assert_eq!(host.tab_bars().len(), 1);
        let tab = host.tab_node("a").unwrap();
        assert_eq!(host.labelled_by(&host.node_id(&tab)), host.view_node("a"));
    }

    #[test]
    fn tab_after_reference() {
        let mut host = MemoryHost::new();
        host.add_widget(editor("a"), AddOptions::default());
        host.add_widget(editor("c"), AddOptions::default());
        host.add_widget(editor("b"), AddOptions::new(InsertMode::TabAfter, editor("a")));
        let ids: Vec<_> = host.widgets().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(host.bar_node("a"), host.bar_node("b"));
    }

    #[test]
    fn split_right_then_left_shares_parent() {
        let mut host = MemoryHost::new();
        host.add_widget(editor("a"), AddOptions::default());
        host.add_widget(editor("b"), AddOptions::new(InsertMode::SplitRight, editor("a")));
        host.add_widget(editor("c"), AddOptions::new(InsertMode::SplitLeft, editor("a")));
        let layout = host.save_layout();
        match layout.main.unwrap() {
            Area::SplitArea {
                orientation,
                sizes,
                children,
            } => {
                assert_eq!(orientation, Orientation::Horizontal);
                assert_eq!(children.len(), 3);
                assert_eq!(sizes, vec![0.25, 0.25, 0.5]);
            }
            other => panic!("expected split, got {other:?}"),
        }
        assert_eq!(host.tab_bars().len(), 3);
    }

    #[test]
    fn removing_last_tab_collapses_split() {
        let mut host = MemoryHost::new();
        host.add_widget(editor("a"), AddOptions::default());
        host.add_widget(editor("b"), AddOptions::new(InsertMode::SplitBottom, editor("a")));
        assert!(host.remove_widget(&editor("b")));
        let layout = host.save_layout();
        assert!(layout.main.as_ref().is_some_and(Area::is_tab_area));
        assert_eq!(host.tab_bars().len(), 1);
        assert!(!host.remove_widget(&editor("b")));
    }

    #[test]
    fn no_mutations_without_observer() {
        let mut host = MemoryHost::new();
        host.add_widget(editor("a"), AddOptions::default());
        assert!(host.drain_signals().is_empty());
    }

    #[test]
    fn engine_signals_precede_mutation_batch() {
        let mut host = MemoryHost::new();
        let root = host.root();
        host.observe(&root);
        host.add_widget(editor("a"), AddOptions::default());
        host.drain_signals();

        host.remove_widget(&editor("a"));
        let signals = host.drain_signals();
        assert_eq!(signals.len(), 2);
        assert!(matches!(signals[0], HostSignal::ChildRemoved(_)));
        assert!(matches!(signals[1], HostSignal::Mutations(_)));
    }

    #[test]
    fn restore_replaces_strips() {
        let mut host = MemoryHost::new();
        host.add_widget(editor("a"), AddOptions::default());
        let old_bar = host.bar_node("a").unwrap();
        host.restore_layout(Layout::new(Area::split_even(
            Orientation::Vertical,
            vec![
                Area::tab_area(vec![editor("x")], 0),
                Area::tab_area(vec![editor("y"), editor("z")], 1),
            ],
        )));
        let root = host.root();
        assert!(!host.contains(&root, &old_bar));
        assert_eq!(host.tab_bars().len(), 2);
        assert!(host.tab_node("a").is_none());
        assert_eq!(host.save_layout().widget_count(), 3);
    }
}
