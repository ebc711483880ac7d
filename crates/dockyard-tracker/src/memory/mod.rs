//! In-memory panel engine and DOM.
//!
//! Renders one tab strip per tab area under a single root, with tab handles
//! in the strip's content node and one view per widget linked back through
//! `aria-labelledby`. Like a browser, it reports only directly inserted or
//! removed nodes, records mutations only while an observer is connected,
//! and delivers engine signals ahead of the pending mutation batch.

mod dom;
mod engine;
mod widget;

use std::collections::HashMap;

pub use dom::{NodeData, NodeId};
pub use widget::MemoryWidget;

use dom::Arena;

use crate::host::{Dom, EngineOptions, HostSignal, Markers, MutationRecord, ObserverId};
use dockyard_layout::Area;

#[derive(Debug, Clone, Copy)]
struct RenderedTab {
    bar: NodeId,
    tab: NodeId,
    view: NodeId,
}

#[derive(Debug)]
pub struct MemoryHost {
    arena: Arena,
    root: NodeId,
    markers: Markers,
    options: EngineOptions,
    layout: Option<Area<MemoryWidget>>,
    /// Keyed by widget id.
    rendered: HashMap<String, RenderedTab>,
    bars: Vec<NodeId>,
    /// Widgets registered without a tab, visible through `widgets()`.
    loose: Vec<MemoryWidget>,
    connections: HashMap<NodeId, usize>,
    observer: Option<ObserverId>,
    next_observer: u64,
    next_tab: usize,
    signals: Vec<HostSignal<NodeId, MemoryWidget>>,
    batch: Vec<MutationRecord<NodeId>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::with_markers(Markers::default())
    }

    pub fn with_markers(markers: Markers) -> Self {
        let mut arena = Arena::default();
        let root = arena.create("docker-main", &["lm-DockPanel"]);
        Self {
            arena,
            root,
            markers,
            options: EngineOptions::default(),
            layout: None,
            rendered: HashMap::new(),
            bars: Vec::new(),
            loose: Vec::new(),
            connections: HashMap::new(),
            observer: None,
            next_observer: 1,
            next_tab: 1,
            signals: Vec::new(),
            batch: Vec::new(),
        }
    }

    /// Options last applied through [`PanelEngine::configure`].
    ///
    /// [`PanelEngine::configure`]: crate::host::PanelEngine::configure
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn node(&self, node: NodeId) -> &NodeData {
        self.arena.get(node)
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    pub fn tab_node(&self, widget_id: &str) -> Option<NodeId> {
        self.rendered.get(widget_id).map(|r| r.tab)
    }

    pub fn bar_node(&self, widget_id: &str) -> Option<NodeId> {
        self.rendered.get(widget_id).map(|r| r.bar)
    }

    pub fn view_node(&self, widget_id: &str) -> Option<NodeId> {
        self.rendered.get(widget_id).map(|r| r.view)
    }

    /// How many times the strip's "current changed" signal was connected.
    pub fn connection_count(&self, tab_bar: NodeId) -> usize {
        self.connections.get(&tab_bar).copied().unwrap_or(0)
    }

    /// How many times wheel scrolling was enabled on the strip's content.
    pub fn wheel_scroll_count(&self, tab_bar: NodeId) -> usize {
        self.arena
            .find(tab_bar, &|n| {
                n.classes.iter().any(|c| *c == self.markers.tab_bar_content)
            })
            .map_or(0, |content| self.arena.get(content).wheel_scroll)
    }

    pub fn children_with_class(&self, parent: NodeId, class: &str) -> usize {
        self.arena
            .get(parent)
            .children
            .iter()
            .filter(|c| self.arena.has_class(**c, class))
            .count()
    }

    /// Unlink a node without producing a mutation record.
    pub fn detach_silently(&mut self, node: NodeId) {
        self.arena.detach(node);
    }

    /// Queue a raw mutation record, as if the observer had seen it.
    pub fn push_mutation(&mut self, record: MutationRecord<NodeId>) {
        self.batch.push(record);
    }

    /// Queue a raw engine signal.
    pub fn push_signal(&mut self, signal: HostSignal<NodeId, MemoryWidget>) {
        self.signals.push(signal);
    }

    /// Append a tab handle with no view behind it.
    pub fn insert_raw_tab(&mut self, tab_bar: NodeId, tab_id: &str) -> NodeId {
        let tab = self.arena.create(tab_id, &[self.markers.tab.as_str()]);
        let content = self.content_of(tab_bar);
        self.dom_append(content, tab);
        tab
    }

    /// Make `widget` visible to lookups without giving it a tab.
    pub fn register_widget(&mut self, widget: MemoryWidget) {
        self.loose.push(widget);
    }

    /// Attach a view for `widget_id` labelled by `tab_id`.
    pub fn attach_view(&mut self, tab_id: &str, widget_id: &str) -> NodeId {
        let view = self.arena.create(widget_id, &["lm-Widget"]);
        self.arena
            .get_mut(view)
            .attrs
            .insert("aria-labelledby".into(), tab_id.to_string());
        self.dom_append(self.root, view);
        view
    }

    fn observing(&self, node: NodeId) -> bool {
        self.observer.is_some() && self.arena.contains(self.root, node)
    }

    fn dom_append(&mut self, parent: NodeId, child: NodeId) {
        let index = self.arena.get(parent).children.len();
        self.dom_insert(parent, child, index);
    }

    fn dom_insert(&mut self, parent: NodeId, child: NodeId, index: usize) {
        self.arena.insert_at(parent, child, index);
        if self.observing(parent) {
            self.batch.push(MutationRecord {
                target: parent,
                added: vec![child],
                removed: Vec::new(),
            });
        }
    }

    fn dom_remove(&mut self, node: NodeId) {
        let Some(parent) = self.arena.parent(node) else {
            return;
        };
        let observed = self.observing(parent);
        self.arena.detach(node);
        if observed {
            self.batch.push(MutationRecord {
                target: parent,
                added: Vec::new(),
                removed: vec![node],
            });
        }
    }

    fn content_of(&mut self, tab_bar: NodeId) -> NodeId {
        let class = self.markers.tab_bar_content.clone();
        match self.arena.find(tab_bar, &|n| n.classes.contains(&class)) {
            Some(content) => content,
            None => {
                let content = self.arena.create("", &[class.as_str()]);
                self.arena.append(tab_bar, content);
                content
            }
        }
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MemoryHost {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.root
    }

    fn node_id(&self, node: &NodeId) -> String {
        self.arena.get(*node).id.clone()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.arena.has_class(*node, class)
    }

    fn closest(&self, node: &NodeId, class: &str) -> Option<NodeId> {
        self.arena.closest(*node, class)
    }

    fn query(&self, scope: &NodeId, class: &str) -> Option<NodeId> {
        self.arena
            .find(*scope, &|n| n.classes.iter().any(|c| c == class))
    }

    fn labelled_by(&self, id: &str) -> Option<NodeId> {
        self.arena.find(self.root, &|n| {
            n.attrs.get("aria-labelledby").map(String::as_str) == Some(id)
        })
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.arena.contains(*ancestor, *node)
    }

    fn create_element(&mut self, class: &str) -> NodeId {
        self.arena.create("", &[class])
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.dom_append(*parent, *child);
    }

    fn set_data(&mut self, node: &NodeId, key: &str, value: &str) {
        self.arena
            .get_mut(*node)
            .data
            .insert(key.to_string(), value.to_string());
    }

    fn enable_wheel_scroll(&mut self, node: &NodeId) {
        self.arena.get_mut(*node).wheel_scroll += 1;
    }

    fn observe(&mut self, _root: &NodeId) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observer = Some(id);
        id
    }

    fn disconnect(&mut self, observer: ObserverId) {
        if self.observer == Some(observer) {
            self.observer = None;
            self.batch.clear();
        }
    }
}
