//! The canonical, default-filled style record consumed by the layout engine.

use crate::dimension::{Dimension, RawSize};
use crate::flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
use crate::props::StyleProps;
use serde::Serialize;
use trellis_types::{Axis, Edges};

/// A size along one axis together with its clamping bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConstrainedSize {
    pub value: Dimension,
    pub min: Dimension,
    pub max: Dimension,
}

/// The flex basis of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexBasis {
    Length(Dimension),
    /// Size the item from its content, ignoring its own main size.
    Content,
}

impl Default for FlexBasis {
    fn default() -> Self {
        FlexBasis::Length(Dimension::Auto)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FlexModel {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    // Item properties
    pub grow: f32,
    pub shrink: f32,
    pub basis: FlexBasis,
    pub align_self: AlignSelf,
}

/// Gap between adjacent items (`main`) and between wrapped lines (`cross`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Gap {
    pub main: f32,
    pub cross: f32,
}

/// Opaque paint data. Layout never reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PaintHint {
    pub background_color: Option<String>,
    pub color: Option<String>,
    /// Optional depth hint used to order painting.
    pub z_index: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRecord {
    pub width: ConstrainedSize,
    pub height: ConstrainedSize,
    pub flex: FlexModel,
    pub margin: Edges<Dimension>,
    pub padding: Edges<Dimension>,
    pub border_width: Edges<Dimension>,
    pub gap: Gap,
    pub paint: PaintHint,
}

impl Default for StyleRecord {
    fn default() -> Self {
        parse_style(&StyleProps::default())
    }
}

impl StyleRecord {
    pub fn size(&self, axis: Axis) -> &ConstrainedSize {
        match axis {
            Axis::Horizontal => &self.width,
            Axis::Vertical => &self.height,
        }
    }

    /// Returns the first literal that failed percentage parsing, if any.
    pub fn first_malformed(&self) -> Option<&str> {
        let sizes = [&self.width, &self.height]
            .into_iter()
            .flat_map(|s| [&s.value, &s.min, &s.max]);
        let edges = [&self.margin, &self.padding, &self.border_width]
            .into_iter()
            .flat_map(|e| [&e.left, &e.right, &e.top, &e.bottom]);
        let basis = match &self.flex.basis {
            FlexBasis::Length(dim) => Some(dim),
            FlexBasis::Content => None,
        };
        sizes
            .chain(edges)
            .chain(basis)
            .find_map(|dim| dim.malformed())
    }
}

fn dimension(raw: Option<&RawSize>) -> Dimension {
    raw.map(Dimension::from_raw).unwrap_or_default()
}

/// Picks the most specific value: single edge, then axis, then all edges.
fn edge(single: &Option<RawSize>, axis: &Option<RawSize>, all: &Option<RawSize>) -> Dimension {
    dimension(single.as_ref().or(axis.as_ref()).or(all.as_ref()))
}

fn parse_edges(
    all: &Option<RawSize>,
    horizontal: &Option<RawSize>,
    vertical: &Option<RawSize>,
    [left, right, top, bottom]: [&Option<RawSize>; 4],
) -> Edges<Dimension> {
    Edges {
        left: edge(left, horizontal, all),
        right: edge(right, horizontal, all),
        top: edge(top, vertical, all),
        bottom: edge(bottom, vertical, all),
    }
}

fn parse_flex_basis(raw: Option<&RawSize>) -> FlexBasis {
    match raw {
        Some(RawSize::Text(text)) if text.trim().eq_ignore_ascii_case("content") => {
            FlexBasis::Content
        }
        other => FlexBasis::Length(dimension(other)),
    }
}

fn parse_flex(src: &StyleProps) -> FlexModel {
    // Without the `flex` shorthand an item keeps its own size: grow 0, shrink 0.
    // With it, `flex` stands in for a missing `flexGrow` and shrink defaults to 1.
    let (grow, shrink) = match src.flex {
        None => (src.flex_grow.unwrap_or(0.0), src.flex_shrink.unwrap_or(0.0)),
        Some(flex) => (src.flex_grow.unwrap_or(flex), src.flex_shrink.unwrap_or(1.0)),
    };

    FlexModel {
        direction: src.flex_direction.unwrap_or_default(),
        wrap: src.flex_wrap.unwrap_or_default(),
        justify_content: src.justify_content.unwrap_or_default(),
        align_items: src.align_items.unwrap_or_default(),
        align_content: src.align_content.unwrap_or_default(),
        grow: grow.max(0.0),
        shrink: shrink.max(0.0),
        basis: parse_flex_basis(src.flex_basis.as_ref()),
        align_self: src.align_self.unwrap_or_default(),
    }
}

fn parse_gap(src: &StyleProps, direction: FlexDirection) -> Gap {
    let horizontal = src.column_gap.or(src.gap).unwrap_or(0.0).max(0.0);
    let vertical = src.row_gap.or(src.gap).unwrap_or(0.0).max(0.0);
    if direction.is_row() {
        Gap {
            main: horizontal,
            cross: vertical,
        }
    } else {
        Gap {
            main: vertical,
            cross: horizontal,
        }
    }
}

/// Normalizes raw style properties into a complete [`StyleRecord`].
///
/// Total: every missing property resolves to its default, and malformed
/// size literals are kept as [`Dimension::Malformed`] for the layout pass to
/// report.
pub fn parse_style(src: &StyleProps) -> StyleRecord {
    let flex = parse_flex(src);
    let gap = parse_gap(src, flex.direction);

    StyleRecord {
        width: ConstrainedSize {
            value: dimension(src.width.as_ref()),
            min: dimension(src.min_width.as_ref()),
            max: dimension(src.max_width.as_ref()),
        },
        height: ConstrainedSize {
            value: dimension(src.height.as_ref()),
            min: dimension(src.min_height.as_ref()),
            max: dimension(src.max_height.as_ref()),
        },
        margin: parse_edges(
            &src.margin,
            &src.margin_horizontal,
            &src.margin_vertical,
            [
                &src.margin_left,
                &src.margin_right,
                &src.margin_top,
                &src.margin_bottom,
            ],
        ),
        padding: parse_edges(
            &src.padding,
            &src.padding_horizontal,
            &src.padding_vertical,
            [
                &src.padding_left,
                &src.padding_right,
                &src.padding_top,
                &src.padding_bottom,
            ],
        ),
        // Border widths have no axis shorthand.
        border_width: parse_edges(
            &src.border_width,
            &None,
            &None,
            [
                &src.border_left_width,
                &src.border_right_width,
                &src.border_top_width,
                &src.border_bottom_width,
            ],
        ),
        flex,
        gap,
        paint: PaintHint {
            background_color: src.background_color.clone(),
            color: src.color.clone(),
            z_index: src.z_index,
        },
    }
}
