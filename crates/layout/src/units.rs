//! Resolution of [`Dimension`] values into pixels.
//!
//! A dimension is always resolved against an explicit base: the parent's
//! content box for sizes and flex margins, or the node's own border box for
//! the box-model edges. An unknown (indefinite) base resolves percentages to
//! `0`.

use crate::config::LayoutConfig;
use trellis_style::{ConstrainedSize, Dimension, StyleParseError};
use trellis_types::{Edges, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    round_percentages: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl Resolver {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            round_percentages: config.round_percentages,
        }
    }

    fn percent(&self, base: f32, percent: f32) -> f32 {
        let value = base * percent / 100.0;
        if self.round_percentages {
            value.round()
        } else {
            value
        }
    }

    /// Resolves a size against the parent's content size on the same axis.
    ///
    /// `Auto` yields `None`. A percentage with no known base yields `Some(0)`.
    pub fn against_parent(
        &self,
        dim: &Dimension,
        base: Option<f32>,
    ) -> Result<Option<f32>, StyleParseError> {
        match dim {
            Dimension::Fixed(v) => Ok(Some(*v)),
            Dimension::Percent(p) => Ok(Some(base.map_or(0.0, |b| self.percent(b, *p)))),
            Dimension::Auto => Ok(None),
            Dimension::Malformed(text) => Err(StyleParseError::InvalidPercentage(text.to_string())),
        }
    }

    /// Resolves a box edge against the node's own size. `Auto` is `0`.
    pub fn against_own(&self, dim: &Dimension, own: f32) -> Result<f32, StyleParseError> {
        Ok(self.against_parent(dim, Some(own))?.unwrap_or(0.0).max(0.0))
    }

    /// Left/right against `size.width`, top/bottom against `size.height`.
    pub fn edges_against_own(
        &self,
        edges: &Edges<Dimension>,
        size: Size,
    ) -> Result<Edges<f32>, StyleParseError> {
        self.edges_against_parent(edges, Some(size.width), Some(size.height))
    }

    pub fn edges_against_parent(
        &self,
        edges: &Edges<Dimension>,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<Edges<f32>, StyleParseError> {
        let resolve = |dim: &Dimension, base: Option<f32>| -> Result<f32, StyleParseError> {
            Ok(self.against_parent(dim, base)?.unwrap_or(0.0).max(0.0))
        };
        Ok(Edges {
            left: resolve(&edges.left, width)?,
            right: resolve(&edges.right, width)?,
            top: resolve(&edges.top, height)?,
            bottom: resolve(&edges.bottom, height)?,
        })
    }

    /// Resolves a constrained size: `(value, min, max)`, each `None` when
    /// unconstrained.
    pub fn constraints(
        &self,
        size: &ConstrainedSize,
        base: Option<f32>,
    ) -> Result<(Option<f32>, Option<f32>, Option<f32>), StyleParseError> {
        Ok((
            self.against_parent(&size.value, base)?,
            self.against_parent(&size.min, base)?,
            self.against_parent(&size.max, base)?,
        ))
    }
}

/// Edge values that need no base. Percentages and `auto` count as `0`.
pub fn fixed_edges(edges: &Edges<Dimension>) -> Edges<f32> {
    edges.map(|dim| dim.fixed().unwrap_or(0.0).max(0.0))
}

/// Applies `max`, then `min`, then floors at `0`. When `min > max` the
/// result is `min`.
pub fn clamp_size(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let value = max.map_or(value, |max| value.min(max));
    let value = min.map_or(value, |min| value.max(min));
    value.max(0.0)
}
