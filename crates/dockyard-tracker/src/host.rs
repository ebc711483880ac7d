//! The seam between the tracker and the panel engine it observes.

use std::fmt::Debug;
use std::hash::Hash;

use dockyard_layout::{LiveLayout, LiveWidget};

/// Handle for an installed subtree observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Class names the engine puts on its tab strip nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub tab: String,
    pub tab_bar: String,
    pub tab_bar_content: String,
    pub toolbar: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            tab: "lm-TabBar-tab".into(),
            tab_bar: "lm-TabBar".into(),
            tab_bar_content: "lm-TabBar-content".into(),
            toolbar: "lm-TabBar-toolbar".into(),
        }
    }
}

/// Panel options the engine applies when the dock takes it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    pub tabs_movable: bool,
    pub tabs_constrained: bool,
    pub add_button_enabled: bool,
    /// DOM id given to the panel root.
    pub panel_id: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tabs_movable: true,
            tabs_constrained: false,
            add_button_enabled: false,
            panel_id: "docker-main".into(),
        }
    }
}

/// One child-list change. Only the nodes directly inserted or removed are
/// listed, not their descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRecord<N> {
    pub target: N,
    pub added: Vec<N>,
    pub removed: Vec<N>,
}

/// Payload of a tab strip's "current changed" signal: the owners of the
/// previously and newly current titles.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentChanged<W> {
    pub previous: Option<W>,
    pub current: Option<W>,
}

/// Everything the host reports back to the dock.
#[derive(Debug, Clone, PartialEq)]
pub enum HostSignal<N, W> {
    /// One observer flush.
    Mutations(Vec<MutationRecord<N>>),
    /// A subscribed tab strip changed its current tab.
    CurrentChanged { tab_bar: N, change: CurrentChanged<W> },
    /// A widget was detached from the panel.
    ChildRemoved(W),
}

/// DOM operations the tracker needs.
pub trait Dom {
    type Node: Clone + Eq + Hash + Debug;

    /// The panel's root node.
    fn root(&self) -> Self::Node;

    fn node_id(&self, node: &Self::Node) -> String;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// `node` itself or its nearest ancestor carrying `class`.
    fn closest(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;

    /// First descendant of `scope` carrying `class`.
    fn query(&self, scope: &Self::Node, class: &str) -> Option<Self::Node>;

    /// The attached node whose `aria-labelledby` is `id`.
    fn labelled_by(&self, id: &str) -> Option<Self::Node>;

    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn create_element(&mut self, class: &str) -> Self::Node;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Set a `data-*` attribute.
    fn set_data(&mut self, node: &Self::Node, key: &str, value: &str);

    /// Route vertical wheel deltas on `node` to horizontal scrolling.
    fn enable_wheel_scroll(&mut self, node: &Self::Node);

    /// Start delivering child-list mutations for the subtree under `root`.
    fn observe(&mut self, root: &Self::Node) -> ObserverId;

    fn disconnect(&mut self, observer: ObserverId);
}

/// Where [`PanelEngine::add_widget`] places a widget relative to `reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    SplitTop,
    SplitLeft,
    SplitRight,
    SplitBottom,
    TabBefore,
    #[default]
    TabAfter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddOptions<W> {
    pub mode: InsertMode,
    pub reference: Option<W>,
}

impl<W> Default for AddOptions<W> {
    fn default() -> Self {
        Self {
            mode: InsertMode::default(),
            reference: None,
        }
    }
}

impl<W> AddOptions<W> {
    pub fn new(mode: InsertMode, reference: W) -> Self {
        Self {
            mode,
            reference: Some(reference),
        }
    }
}

/// The docking engine: layout, widgets, tab strips and their signals.
pub trait PanelEngine: Dom {
    type Widget: LiveWidget + Clone + PartialEq + Debug;

    /// Apply panel options. Called once, before tracking starts.
    fn configure(&mut self, options: &EngineOptions);

    /// All hosted widgets.
    fn widgets(&self) -> Vec<Self::Widget>;

    /// All live tab strip nodes.
    fn tab_bars(&self) -> Vec<Self::Node>;

    /// Subscribe to the tab strip's "current changed" signal.
    fn connect_current_changed(&mut self, tab_bar: &Self::Node);

    fn save_layout(&self) -> LiveLayout<Self::Widget>;

    fn restore_layout(&mut self, layout: LiveLayout<Self::Widget>);

    fn add_widget(&mut self, widget: Self::Widget, options: AddOptions<Self::Widget>);

    fn activate_widget(&mut self, widget: &Self::Widget);

    /// Take everything reported since the last call, in delivery order.
    fn drain_signals(&mut self) -> Vec<HostSignal<Self::Node, Self::Widget>>;
}
