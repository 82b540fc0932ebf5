//! The sparse, shorthand-heavy style input as supplied by callers.

use crate::dimension::RawSize;
use crate::flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
use serde::{Deserialize, Serialize};

/// Raw style properties for one node. Every field is optional; missing values
/// are filled in by [`crate::parse_style`].
///
/// Keys use camelCase (`marginHorizontal`, `borderLeftWidth`, `flexGrow`, ...).
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleProps {
    // Size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<RawSize>,

    // Margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<RawSize>,

    // Padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<RawSize>,

    // Border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right_width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<RawSize>,

    // Flex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<RawSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignSelf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<AlignContent>,

    // Gap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_gap: Option<f32>,

    // Paint hints, carried through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}
