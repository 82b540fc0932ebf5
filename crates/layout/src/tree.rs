//! Arena-backed node tree.
//!
//! Nodes are addressed by stable [`NodeId`]s. Children are owned as an ordered
//! list of ids; the parent link is a plain id that [`LayoutTree::attach`]
//! recomputes from the child lists, so it can never disagree with them after
//! an attach and never forms an ownership cycle.

use crate::LayoutError;
use crate::traverse;
use serde::Serialize;
use std::fmt;
use trellis_style::StyleRecord;
use trellis_types::{Edges, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    name: Option<String>,
    style: StyleRecord,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    pub(crate) metrics: Option<Rect>,
    pub(crate) resolved_margin: Option<Edges<f32>>,
    pub(crate) resolved_border_box: Option<Rect>,
    pub(crate) resolved_content_box: Option<Rect>,
}

impl Node {
    /// Debug name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn style(&self) -> &StyleRecord {
        &self.style
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The immediate ancestor. Only valid after [`LayoutTree::attach`].
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Absolute border-box geometry from the last completed layout pass.
    pub fn metrics(&self) -> Option<Rect> {
        self.metrics
    }

    pub fn resolved_margin(&self) -> Option<Edges<f32>> {
        self.resolved_margin
    }

    pub fn resolved_border_box(&self) -> Option<Rect> {
        self.resolved_border_box
    }

    pub fn resolved_content_box(&self) -> Option<Rect> {
        self.resolved_content_box
    }

    fn clear_layout(&mut self) {
        self.metrics = None;
        self.resolved_margin = None;
        self.resolved_border_box = None;
        self.resolved_content_box = None;
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<Node>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn new_leaf(&mut self, style: StyleRecord) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            style,
            ..Default::default()
        });
        id
    }

    pub fn new_with_children(
        &mut self,
        style: StyleRecord,
        children: &[NodeId],
    ) -> Result<NodeId, LayoutError> {
        for &child in children {
            self.node(child)?;
        }
        let id = self.new_leaf(style);
        self.nodes[id.index()].children = children.to_vec();
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, LayoutError> {
        self.get(id).ok_or(LayoutError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, LayoutError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(LayoutError::UnknownNode(id))
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], LayoutError> {
        Ok(self.node(id)?.children())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, LayoutError> {
        Ok(self.node(id)?.parent())
    }

    pub fn style(&self, id: NodeId) -> Result<&StyleRecord, LayoutError> {
        Ok(self.node(id)?.style())
    }

    pub fn metrics(&self, id: NodeId) -> Result<Rect, LayoutError> {
        self.node(id)?.metrics().ok_or(LayoutError::NotLaidOut(id))
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), LayoutError> {
        self.node_mut(id)?.name = Some(name.into());
        Ok(())
    }

    pub fn set_style(&mut self, id: NodeId, style: StyleRecord) -> Result<(), LayoutError> {
        self.node_mut(id)?.style = style;
        self.invalidate(id);
        Ok(())
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let index = self.node(parent)?.children.len();
        self.insert_child(parent, index, child)
    }

    /// Inserts `child` at `index` (clamped to the current child count).
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), LayoutError> {
        self.node(child)?;
        let children = &mut self.node_mut(parent)?.children;
        let index = index.min(children.len());
        children.insert(index, child);
        self.invalidate(parent);
        self.invalidate(child);
        Ok(())
    }

    /// Removes the first occurrence of `child`. Returns whether it was present.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool, LayoutError> {
        self.node(child)?;
        let children = &mut self.node_mut(parent)?.children;
        let Some(position) = children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        children.remove(position);
        self.invalidate(parent);
        self.invalidate(child);
        if let Some(node) = self.nodes.get_mut(child.index()) {
            node.parent = None;
        }
        Ok(true)
    }

    /// Re-establishes parent links for the tree rooted at `root`.
    ///
    /// Idempotent. Fails without touching any node when an id is unknown or a
    /// node is reachable twice (shared child or cycle).
    pub fn attach(&mut self, root: NodeId) -> Result<NodeId, LayoutError> {
        let links = traverse::try_pre_order(self, root)?;
        for (id, parent) in links {
            self.nodes[id.index()].parent = parent;
        }
        Ok(root)
    }

    /// Clears layout results of `id`, its subtree and its ancestor chain.
    fn invalidate(&mut self, id: NodeId) {
        for node_id in traverse::pre_order(self, id) {
            self.nodes[node_id.index()].clear_layout();
        }
        let mut current = self.get(id).and_then(Node::parent);
        let mut remaining = self.nodes.len();
        while let Some(ancestor) = current {
            if remaining == 0 {
                break;
            }
            remaining -= 1;
            let Some(node) = self.nodes.get_mut(ancestor.index()) else {
                break;
            };
            node.clear_layout();
            current = node.parent;
        }
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.parent = Some(parent);
        }
    }

    pub(crate) fn set_layout(
        &mut self,
        id: NodeId,
        metrics: Rect,
        margin: Edges<f32>,
        content_box: Rect,
    ) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.metrics = Some(metrics);
            node.resolved_margin = Some(margin);
            node.resolved_border_box = Some(metrics);
            node.resolved_content_box = Some(content_box);
        }
    }
}

impl std::ops::Index<NodeId> for LayoutTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tree: &mut LayoutTree) -> NodeId {
        tree.new_leaf(StyleRecord::default())
    }

    #[test]
    fn test_attach_sets_parents() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        let inner = tree.new_with_children(StyleRecord::default(), &[b]).unwrap();
        let root = tree
            .new_with_children(StyleRecord::default(), &[a, inner])
            .unwrap();

        assert_eq!(tree.attach(root).unwrap(), root);
        assert_eq!(tree.parent(root).unwrap(), None);
        assert_eq!(tree.parent(a).unwrap(), Some(root));
        assert_eq!(tree.parent(inner).unwrap(), Some(root));
        assert_eq!(tree.parent(b).unwrap(), Some(inner));

        // Re-attaching is a no-op.
        tree.attach(root).unwrap();
        assert_eq!(tree.parent(b).unwrap(), Some(inner));
    }

    #[test]
    fn test_attach_rejects_shared_children() {
        let mut tree = LayoutTree::new();
        let shared = leaf(&mut tree);
        let root = tree
            .new_with_children(StyleRecord::default(), &[shared, shared])
            .unwrap();
        assert_eq!(tree.attach(root), Err(LayoutError::MalformedTree(shared)));
        assert_eq!(tree.parent(shared).unwrap(), None);
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let b = tree.new_with_children(StyleRecord::default(), &[a]).unwrap();
        tree.add_child(a, b).unwrap();
        assert!(matches!(tree.attach(b), Err(LayoutError::MalformedTree(_))));
    }

    #[test]
    fn test_unknown_nodes() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let mut other = LayoutTree::new();
        let _ = leaf(&mut other);
        let foreign = leaf(&mut other);
        assert_eq!(
            tree.add_child(a, foreign),
            Err(LayoutError::UnknownNode(foreign))
        );
        assert_eq!(tree.attach(foreign), Err(LayoutError::UnknownNode(foreign)));
    }

    #[test]
    fn test_mutation_invalidates_subtree_and_ancestors() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let inner = tree.new_with_children(StyleRecord::default(), &[a]).unwrap();
        let root = tree.new_with_children(StyleRecord::default(), &[inner]).unwrap();
        tree.attach(root).unwrap();
        for id in [a, inner, root] {
            tree.set_layout(id, Rect::default(), Edges::zero(), Rect::default());
        }

        tree.set_style(inner, StyleRecord::default()).unwrap();
        assert!(tree[a].metrics().is_none());
        assert!(tree[inner].resolved_content_box().is_none());
        assert!(tree[root].metrics().is_none());
    }

    #[test]
    fn test_insert_and_remove_children() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        let c = leaf(&mut tree);
        let root = tree.new_with_children(StyleRecord::default(), &[a, c]).unwrap();
        tree.insert_child(root, 1, b).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a, b, c]);

        tree.attach(root).unwrap();
        assert!(tree.remove_child(root, a).unwrap());
        assert!(!tree.remove_child(root, a).unwrap());
        assert_eq!(tree.children(root).unwrap(), &[b, c]);
        assert_eq!(tree.parent(a).unwrap(), None);
    }
}
