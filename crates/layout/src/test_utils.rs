use crate::tree::{LayoutTree, NodeId};
use trellis_style::{StyleProps, StyleRecord, parse_style};
use trellis_types::Rect;

/// Parses a style from a JSON object, as a document would supply it.
pub fn style(value: serde_json::Value) -> StyleRecord {
    let props: StyleProps = serde_json::from_value(value).expect("valid style props");
    parse_style(&props)
}

pub fn leaf(tree: &mut LayoutTree, value: serde_json::Value) -> NodeId {
    tree.new_leaf(style(value))
}

pub fn container(tree: &mut LayoutTree, value: serde_json::Value, children: &[NodeId]) -> NodeId {
    tree.new_with_children(style(value), children)
        .expect("children belong to the tree")
}

pub fn metrics(tree: &LayoutTree, id: NodeId) -> Rect {
    tree.metrics(id).expect("node was laid out")
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_rect(actual: Rect, (x, y, width, height): (f32, f32, f32, f32)) {
    let expected = Rect::new(x, y, width, height);
    assert!(
        (actual.x - x).abs() < 1e-3
            && (actual.y - y).abs() < 1e-3
            && (actual.width - width).abs() < 1e-3
            && (actual.height - height).abs() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}
