//! Generic pre-order and post-order walks over a [`LayoutTree`].
//!
//! All walks are iterative and visit children in insertion order. A node that
//! is reachable twice is only visited once, so a malformed tree can never make
//! a walk loop forever; [`try_pre_order`] reports such trees instead.

use crate::LayoutError;
use crate::tree::{LayoutTree, NodeId};

/// Calls `visitor(node, parent)` for every node, parents before children.
pub fn walk_pre_order<F>(tree: &LayoutTree, root: NodeId, mut visitor: F)
where
    F: FnMut(NodeId, Option<NodeId>),
{
    if tree.get(root).is_none() {
        return;
    }
    let mut visited = vec![false; tree.len()];
    let mut stack = vec![(root, None)];
    while let Some((id, parent)) = stack.pop() {
        if std::mem::replace(&mut visited[id.index()], true) {
            continue;
        }
        visitor(id, parent);
        for &child in tree[id].children().iter().rev() {
            if tree.get(child).is_some() {
                stack.push((child, Some(id)));
            }
        }
    }
}

/// Maps every node through `visitor`, children before parents. The root's
/// result is last; leaves come first.
pub fn flat_map_post_order<R, F>(tree: &LayoutTree, root: NodeId, mut visitor: F) -> Vec<R>
where
    F: FnMut(NodeId) -> R,
{
    let mut results = Vec::new();
    if tree.get(root).is_none() {
        return results;
    }
    let mut visited = vec![false; tree.len()];
    let mut stack = vec![(root, false)];
    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            results.push(visitor(id));
            continue;
        }
        if std::mem::replace(&mut visited[id.index()], true) {
            continue;
        }
        stack.push((id, true));
        for &child in tree[id].children().iter().rev() {
            if tree.get(child).is_some() {
                stack.push((child, false));
            }
        }
    }
    results
}

pub fn pre_order(tree: &LayoutTree, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    walk_pre_order(tree, root, |id, _| order.push(id));
    order
}

pub fn post_order(tree: &LayoutTree, root: NodeId) -> Vec<NodeId> {
    flat_map_post_order(tree, root, |id| id)
}

/// Pre-order listing of `(node, parent)` pairs that fails on unknown ids and
/// on nodes reachable more than once.
pub fn try_pre_order(
    tree: &LayoutTree,
    root: NodeId,
) -> Result<Vec<(NodeId, Option<NodeId>)>, LayoutError> {
    tree.node(root)?;
    let mut visited = vec![false; tree.len()];
    let mut links = Vec::new();
    let mut stack = vec![(root, None)];
    while let Some((id, parent)) = stack.pop() {
        let node = tree.node(id)?;
        if std::mem::replace(&mut visited[id.index()], true) {
            return Err(LayoutError::MalformedTree(id));
        }
        links.push((id, parent));
        for &child in node.children().iter().rev() {
            stack.push((child, Some(id)));
        }
    }
    Ok(links)
}
