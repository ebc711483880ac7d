//! Arena DOM backing [`super::MemoryHost`].

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub id: String,
    pub classes: Vec<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub attrs: HashMap<String, String>,
    pub data: HashMap<String, String>,
    pub wheel_scroll: usize,
}

#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<NodeData>,
}

impl Arena {
    pub fn create(&mut self, id: &str, classes: &[&str]) -> NodeId {
        let node = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            id: id.to_string(),
            classes: classes
                .iter()
                .flat_map(|c| c.split_whitespace())
                .map(str::to_string)
                .collect(),
            ..NodeData::default()
        });
        node
    }

    pub fn get(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0]
    }

    pub fn get_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).classes.iter().any(|c| c == class)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).parent
    }

    /// Unlink `node` from its parent. Returns the former parent.
    pub fn detach(&mut self, node: NodeId) -> Option<NodeId> {
        let parent = self.get_mut(node).parent.take()?;
        self.get_mut(parent).children.retain(|c| *c != node);
        Some(parent)
    }

    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.get_mut(child).parent = Some(parent);
        self.get_mut(parent).children.push(child);
    }

    pub fn insert_at(&mut self, parent: NodeId, child: NodeId, index: usize) {
        self.detach(child);
        self.get_mut(child).parent = Some(parent);
        let children = &mut self.get_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, child);
    }

    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if self.has_class(current, class) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// Depth-first search of the descendants of `scope`.
    pub fn find(&self, scope: NodeId, pred: &impl Fn(&NodeData) -> bool) -> Option<NodeId> {
        for &child in &self.get(scope).children {
            if pred(self.get(child)) {
                return Some(child);
            }
            if let Some(found) = self.find(child, pred) {
                return Some(found);
            }
        }
        None
    }
}
