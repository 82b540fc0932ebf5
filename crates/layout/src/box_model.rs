use crate::units::Resolver;
use serde::Serialize;
use trellis_style::{StyleParseError, StyleRecord};
use trellis_types::{Edges, Rect};

/// The four nested boxes of a laid-out node plus the edge sizes that
/// separate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content_box: Rect,
    pub margin: Edges<f32>,
    pub border: Edges<f32>,
    pub padding: Edges<f32>,
}

/// Derives the box model of a node from its final metrics.
///
/// Percentage edges resolve against the node's own border-box width
/// (left/right) or height (top/bottom). Pure: calling it twice yields the
/// same result and `metrics` is never touched.
pub fn resolve_box_model(
    metrics: &Rect,
    style: &StyleRecord,
    resolver: &Resolver,
) -> Result<BoxModel, StyleParseError> {
    let own = metrics.size();
    let margin = resolver.edges_against_own(&style.margin, own)?;
    let border = resolver.edges_against_own(&style.border_width, own)?;
    let padding = resolver.edges_against_own(&style.padding, own)?;

    let border_box = *metrics;
    let padding_box = border_box.inset(&border);
    let content_box = padding_box.inset(&padding);

    Ok(BoxModel {
        margin_box: border_box.outset(&margin),
        border_box,
        padding_box,
        content_box,
        margin,
        border,
        padding,
    })
}
