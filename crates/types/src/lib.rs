pub mod geometry;

pub use geometry::{Axis, Edges, Metrics, Rect, Size};
