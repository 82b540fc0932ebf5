//! Trellis computes pixel geometry for trees of styled boxes using a
//! two-pass, flexbox-style layout algorithm.
//!
//! The workspace is split into foundation crates re-exported here:
//!
//! - [`types`]: geometry primitives (`Rect`, `Size`, `Edges`, `Axis`).
//! - [`style`]: raw style input and its normalized [`StyleRecord`].
//! - [`layout`]: the node tree, the layout engine and the box-model resolver.
//!
//! [`Document`] wraps all of it behind a JSON format.

pub mod document;
pub mod error;

pub use trellis_layout as layout;
pub use trellis_style as style;
pub use trellis_types as types;

pub use document::{Document, LayoutReport, NodeSpec, ReportNode};
pub use error::TrellisError;
pub use trellis_layout::{
    BoxModel, LaidOutNode, LayoutConfig, LayoutEngine, LayoutError, LayoutTree, NodeId,
};
pub use trellis_style::{StyleProps, StyleRecord, parse_style};
pub use trellis_types::{Rect, Size};
