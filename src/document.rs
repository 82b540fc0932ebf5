//! JSON layout documents.
//!
//! A document describes one tree of styled boxes and the owner it is laid out
//! in:
//!
//! ```json
//! {
//!   "owner": { "width": 400, "height": 250 },
//!   "config": { "roundPercentages": true },
//!   "root": {
//!     "name": "root",
//!     "style": { "width": "100%", "flexDirection": "row" },
//!     "children": [{ "name": "item", "style": { "flex": 1 } }]
//!   }
//! }
//! ```

use crate::error::TrellisError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;
use trellis_layout::{LayoutConfig, LayoutEngine, LayoutTree, LogObserver, NodeId, traverse};
use trellis_style::{StyleProps, parse_style};
use trellis_types::{Rect, Size};

/// One node of a document tree.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NodeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub style: StyleProps,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub owner: Size,
    #[serde(default)]
    pub config: LayoutConfig,
    pub root: NodeSpec,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, TrellisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, TrellisError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Overrides the owner dimensions where given.
    pub fn with_owner(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        if let Some(width) = width {
            self.owner.width = width;
        }
        if let Some(height) = height {
            self.owner.height = height;
        }
        self
    }

    /// Builds the layout tree. Children keep their document order.
    pub fn build(&self) -> Result<(LayoutTree, NodeId), TrellisError> {
        let mut tree = LayoutTree::new();
        let root = tree.new_leaf(parse_style(&self.root.style));
        let mut pending = vec![(root, &self.root)];

        while let Some((id, spec)) = pending.pop() {
            if let Some(name) = &spec.name {
                tree.set_name(id, name.clone())?;
            }
            for child in &spec.children {
                let child_id = tree.new_leaf(parse_style(&child.style));
                tree.add_child(id, child_id)?;
                pending.push((child_id, child));
            }
        }

        Ok((tree, root))
    }

    /// Builds and lays out the document.
    pub fn layout(&self) -> Result<LayoutReport, TrellisError> {
        let (mut tree, root) = self.build()?;
        let engine = LayoutEngine::new(self.config).with_observer(Arc::new(LogObserver));
        engine.layout(&mut tree, root, self.owner)?;
        LayoutReport::from_tree(&tree, root)
    }
}

/// Final geometry of one node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportNode {
    pub name: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub content_box: Rect,
}

/// The laid-out document, one entry per node in pre-order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct LayoutReport {
    pub nodes: Vec<ReportNode>,
}

impl LayoutReport {
    pub fn from_tree(tree: &LayoutTree, root: NodeId) -> Result<Self, TrellisError> {
        let nodes = traverse::pre_order(tree, root)
            .into_iter()
            .map(|id| {
                let metrics = tree.metrics(id)?;
                let node = &tree[id];
                Ok(ReportNode {
                    name: node.name().map(str::to_string),
                    x: metrics.x,
                    y: metrics.y,
                    width: metrics.width,
                    height: metrics.height,
                    content_box: node.resolved_content_box().unwrap_or(metrics),
                })
            })
            .collect::<Result<Vec<_>, TrellisError>>()?;
        Ok(Self { nodes })
    }

    /// The first node with the given name.
    pub fn find(&self, name: &str) -> Option<&ReportNode> {
        self.nodes
            .iter()
            .find(|node| node.name.as_deref() == Some(name))
    }
}
