use thiserror::Error;
use trellis_style::StyleParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid percentage value '{value}' on node {node}.")]
    InvalidPercentage { node: NodeId, value: String },
    #[error("Owner size {width}x{height} must be finite and non-negative.")]
    InvalidOwnerSize { width: f32, height: f32 },
    #[error("Node {0} does not belong to this tree.")]
    UnknownNode(NodeId),
    #[error("Node {0} is reachable more than once (shared child or cycle).")]
    MalformedTree(NodeId),
    #[error("Node {0} has not been laid out.")]
    NotLaidOut(NodeId),
}

impl LayoutError {
    pub(crate) fn invalid_style(node: NodeId, err: StyleParseError) -> Self {
        match err {
            StyleParseError::InvalidPercentage(value) | StyleParseError::Parse(value) => {
                LayoutError::InvalidPercentage { node, value }
            }
        }
    }
}

pub mod box_model;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod measure;
pub mod output;
pub mod traverse;
pub mod tree;
pub mod units;

pub use self::box_model::{BoxModel, resolve_box_model};
pub use self::config::LayoutConfig;
pub use self::diagnostics::{LayoutObserver, LogObserver, NoOpObserver, Pass, PassProfiler, PassStats};
#[cfg(feature = "parallel")]
pub use self::engine::LayoutJob;
pub use self::engine::{LayoutEngine, layout};
pub use self::measure::{Measure, NoMeasure};
pub use self::output::LaidOutNode;
pub use self::tree::{LayoutTree, Node, NodeId};
pub use self::units::Resolver;

// Re-export geometry and style types used in the public API to prevent type mismatches
pub use trellis_style::{StyleProps, StyleRecord, parse_style};
pub use trellis_types::{Axis, Edges, Rect, Size};

#[cfg(test)]
mod test_utils;
