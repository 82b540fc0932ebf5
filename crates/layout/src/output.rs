//! Output types from the layout engine.
//!
//! This module contains the flattened, read-only view of a laid-out tree that
//! renderers consume: one [`LaidOutNode`] per node, with its final geometry and
//! the paint hint carried through from its style.

use crate::LayoutError;
use crate::traverse;
use crate::tree::{LayoutTree, NodeId};
use serde::Serialize;
use trellis_style::PaintHint;
use trellis_types::{Metrics, Rect};

/// A single node after layout, ready for painting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaidOutNode {
    pub id: NodeId,
    pub name: Option<String>,
    /// Absolute border box.
    pub metrics: Metrics,
    /// Absolute content box.
    pub content_box: Rect,
    pub paint: PaintHint,
    pub is_leaf: bool,
}

impl LayoutTree {
    /// Every node under `root`, leaves first (post-order).
    ///
    /// Fails with [`LayoutError::NotLaidOut`] if any node has no metrics.
    pub fn laid_out(&self, root: NodeId) -> Result<Vec<LaidOutNode>, LayoutError> {
        self.node(root)?;
        traverse::flat_map_post_order(self, root, |id| {
            let node = &self[id];
            let metrics = node.metrics().ok_or(LayoutError::NotLaidOut(id))?;
            Ok(LaidOutNode {
                id,
                name: node.name().map(str::to_string),
                metrics,
                content_box: node.resolved_content_box().unwrap_or(metrics),
                paint: node.style().paint.clone(),
                is_leaf: node.is_leaf(),
            })
        })
        .into_iter()
        .collect()
    }

    /// Like [`laid_out`](Self::laid_out), stably sorted by the `z_index`
    /// depth hint (unset counts as `0`). Paint in the returned order.
    pub fn paint_order(&self, root: NodeId) -> Result<Vec<LaidOutNode>, LayoutError> {
        let mut nodes = self.laid_out(root)?;
        nodes.sort_by_key(|node| node.paint.z_index.unwrap_or(0));
        Ok(nodes)
    }
}
