use trellis::Rect;

pub const EPSILON: f32 = 1e-3;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn rect_approx_eq(a: &Rect, b: &Rect) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.width, b.width) && approx_eq(a.height, b.height)
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert the border box of a report node: `assert_node_box!(node, x, y, w, h)`
#[macro_export]
macro_rules! assert_node_box {
    ($node:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {
        let actual = trellis::Rect::new($node.x, $node.y, $node.width, $node.height);
        let expected = trellis::Rect::new($x as f32, $y as f32, $w as f32, $h as f32);
        assert!(
            $crate::common::geometry_assertions::rect_approx_eq(&actual, &expected),
            "Node {:?} should be at {:?}, but was {:?}",
            $node.name,
            expected,
            actual
        );
    };
}

/// Assert that one rectangle lies within another
#[macro_export]
macro_rules! assert_contains_rect {
    ($outer:expr, $inner:expr) => {
        assert!(
            $outer.contains_rect(&$inner),
            "{:?} should contain {:?}",
            $outer,
            $inner
        );
    };
}

/// Assert two sizes are equal within the layout epsilon
#[macro_export]
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {
        assert!(
            $crate::common::geometry_assertions::approx_eq($actual, $expected as f32),
            "expected {}, got {}",
            $expected,
            $actual
        );
    };
}
