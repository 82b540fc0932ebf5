mod common;

use common::fixtures::*;
use common::{TestResult, layout_document, node};
use serde_json::json;

#[test]
fn test_flex_direction_row() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        400.0,
        250.0,
        json!({}),
        vec![
            leaf("a", json!({ "height": 100 })),
            leaf("b", json!({ "width": 50, "height": 100 })),
            leaf("c", json!({ "width": 100, "height": 100 })),
        ],
    );
    let report = layout_document(&document(400.0, 250.0, root))?;

    assert_node_box!(node(&report, "root")?, 0, 0, 400, 250);
    assert_node_box!(node(&report, "a")?, 0, 0, 0, 100);
    assert_node_box!(node(&report, "b")?, 0, 0, 50, 100);
    assert_node_box!(node(&report, "c")?, 50, 0, 100, 100);
    Ok(())
}

#[test]
fn test_flex_direction_row_reverse() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        300.0,
        50.0,
        json!({ "flexDirection": "row-reverse" }),
        items("item", 2, json!({ "width": 100 })),
    );
    let report = layout_document(&document(300.0, 50.0, root))?;

    assert_node_box!(node(&report, "item1")?, 0, 0, 100, 50);
    assert_node_box!(node(&report, "item0")?, 100, 0, 100, 50);
    Ok(())
}

#[test]
fn test_flex_direction_column() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = container(
        "root",
        json!({ "width": 200, "height": 300 }),
        vec![
            leaf("header", json!({ "height": 50 })),
            leaf("body", json!({ "flex": 1 })),
        ],
    );
    let report = layout_document(&document(200.0, 300.0, root))?;

    assert_node_box!(node(&report, "header")?, 0, 0, 200, 50);
    assert_node_box!(node(&report, "body")?, 0, 50, 200, 250);
    Ok(())
}

#[test]
fn test_flex_direction_column_reverse() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = container(
        "root",
        json!({ "width": 100, "height": 100, "flexDirection": "column-reverse" }),
        vec![
            leaf("first", json!({ "height": 10 })),
            leaf("second", json!({ "height": 30 })),
        ],
    );
    let report = layout_document(&document(100.0, 100.0, root))?;

    assert_node_box!(node(&report, "second")?, 0, 0, 100, 30);
    assert_node_box!(node(&report, "first")?, 0, 30, 100, 10);
    Ok(())
}

#[test]
fn test_flex_grow_fills_container() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row("root", 300.0, 100.0, json!({}), vec![leaf("grow", json!({ "flexGrow": 1 }))]);
    let report = layout_document(&document(300.0, 100.0, root))?;

    assert_node_box!(node(&report, "grow")?, 0, 0, 300, 100);
    Ok(())
}

#[test]
fn test_flex_grow_ratio_with_gap() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        330.0,
        10.0,
        json!({ "gap": 30 }),
        vec![leaf("one", json!({ "flex": 1 })), leaf("two", json!({ "flex": 2 }))],
    );
    let report = layout_document(&document(330.0, 10.0, root))?;

    assert_node_box!(node(&report, "one")?, 0, 0, 100, 10);
    assert_node_box!(node(&report, "two")?, 130, 0, 200, 10);
    Ok(())
}

#[test]
fn test_justify_content_modes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let cases = [
        ("flex-start", [0.0, 50.0, 100.0]),
        ("flex-end", [150.0, 200.0, 250.0]),
        ("center", [75.0, 125.0, 175.0]),
        ("space-between", [0.0, 125.0, 250.0]),
        ("space-around", [25.0, 125.0, 225.0]),
        ("space-evenly", [37.5, 125.0, 212.5]),
    ];

    for (mode, expected) in cases {
        let root = row(
            "root",
            300.0,
            20.0,
            json!({ "justifyContent": mode }),
            items("item", 3, json!({ "width": 50 })),
        );
        let report = layout_document(&document(300.0, 20.0, root))?;
        for (i, x) in expected.iter().enumerate() {
            let item = node(&report, &format!("item{}", i))?;
            assert_approx!(item.x, *x);
        }
    }
    Ok(())
}

#[test]
fn test_justify_content_overflow() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let cases = [
        ("space-between", [0.0, 50.0, 100.0]),
        ("space-around", [-25.0, 25.0, 75.0]),
        ("space-evenly", [-25.0, 25.0, 75.0]),
    ];

    for (mode, expected) in cases {
        let root = row(
            "root",
            100.0,
            20.0,
            json!({ "justifyContent": mode }),
            items("item", 3, json!({ "width": 50 })),
        );
        let report = layout_document(&document(100.0, 20.0, root))?;
        for (i, x) in expected.iter().enumerate() {
            let item = node(&report, &format!("item{}", i))?;
            assert_approx!(item.x, *x);
        }
    }
    Ok(())
}

#[test]
fn test_align_items_modes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let cases = [
        ("flex-start", 0.0),
        ("flex-end", 80.0),
        ("center", 40.0),
        ("stretch", 0.0),
        ("baseline", 0.0),
    ];

    for (mode, expected_y) in cases {
        let root = row(
            "root",
            300.0,
            100.0,
            json!({ "alignItems": mode }),
            vec![leaf("item", json!({ "width": 50, "height": 20 }))],
        );
        let report = layout_document(&document(300.0, 100.0, root))?;
        assert_node_box!(node(&report, "item")?, 0, expected_y, 50, 20);
    }
    Ok(())
}

#[test]
fn test_align_self_overrides_align_items() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        300.0,
        100.0,
        json!({ "alignItems": "flex-end" }),
        vec![
            leaf("inherits", json!({ "width": 50, "height": 20 })),
            leaf("overrides", json!({ "width": 50, "height": 20, "alignSelf": "flex-start" })),
            leaf("stretches", json!({ "width": 50, "alignSelf": "stretch" })),
        ],
    );
    let report = layout_document(&document(300.0, 100.0, root))?;

    assert_node_box!(node(&report, "inherits")?, 0, 80, 50, 20);
    assert_node_box!(node(&report, "overrides")?, 50, 0, 50, 20);
    assert_node_box!(node(&report, "stretches")?, 100, 0, 50, 100);
    Ok(())
}

#[test]
fn test_flex_wrap() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        100.0,
        100.0,
        json!({ "flexWrap": "wrap" }),
        items("item", 4, json!({ "width": 40, "height": 20 })),
    );
    let report = layout_document(&document(100.0, 100.0, root))?;

    assert_node_box!(node(&report, "item0")?, 0, 0, 40, 20);
    assert_node_box!(node(&report, "item1")?, 40, 0, 40, 20);
    assert_node_box!(node(&report, "item2")?, 0, 50, 40, 20);
    assert_node_box!(node(&report, "item3")?, 40, 50, 40, 20);
    Ok(())
}

#[test]
fn test_flex_wrap_with_gap_and_align_content() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        100.0,
        100.0,
        json!({ "flexWrap": "wrap", "gap": 10, "alignContent": "flex-start" }),
        items("item", 3, json!({ "width": 40, "height": 20 })),
    );
    let report = layout_document(&document(100.0, 100.0, root))?;

    assert_node_box!(node(&report, "item0")?, 0, 0, 40, 20);
    assert_node_box!(node(&report, "item1")?, 50, 0, 40, 20);
    assert_node_box!(node(&report, "item2")?, 0, 30, 40, 20);
    Ok(())
}

#[test]
fn test_auto_height_wrap_pushes_following_siblings() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let grid = container(
        "grid",
        json!({ "width": 100, "padding": 5, "flexDirection": "row", "flexWrap": "wrap", "gap": 10 }),
        items("tile", 3, json!({ "width": 40, "height": 20 })),
    );
    let root = container(
        "root",
        json!({ "width": 300, "height": 300 }),
        vec![grid, leaf("footer", json!({ "height": 10 }))],
    );
    let report = layout_document(&document(300.0, 300.0, root))?;

    assert_node_box!(node(&report, "grid")?, 0, 0, 100, 60);
    assert_node_box!(node(&report, "tile1")?, 55, 5, 40, 20);
    assert_node_box!(node(&report, "tile2")?, 5, 35, 40, 20);
    assert_node_box!(node(&report, "footer")?, 0, 60, 300, 10);
    Ok(())
}

#[test]
fn test_flex_wrap_center_lines() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        100.0,
        100.0,
        json!({ "flexWrap": "wrap", "alignContent": "center" }),
        items("item", 3, json!({ "width": 60, "height": 20 })),
    );
    let report = layout_document(&document(100.0, 100.0, root))?;

    // Three lines of 20 leave 40 to split around them.
    assert_node_box!(node(&report, "item0")?, 0, 20, 60, 20);
    assert_node_box!(node(&report, "item1")?, 0, 40, 60, 20);
    assert_node_box!(node(&report, "item2")?, 0, 60, 60, 20);
    Ok(())
}

#[test]
fn test_flex_shrink() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        200.0,
        10.0,
        json!({}),
        vec![
            leaf("small", json!({ "width": 100, "flexShrink": 1 })),
            leaf("large", json!({ "width": 300, "flexShrink": 1 })),
        ],
    );
    let report = layout_document(&document(200.0, 10.0, root))?;

    assert_node_box!(node(&report, "small")?, 0, 0, 50, 10);
    assert_node_box!(node(&report, "large")?, 50, 0, 150, 10);
    Ok(())
}

#[test]
fn test_flex_basis_percentage() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        400.0,
        10.0,
        json!({}),
        vec![
            leaf("quarter", json!({ "flexBasis": "25%" })),
            leaf("rest", json!({ "flexGrow": 1 })),
        ],
    );
    let report = layout_document(&document(400.0, 10.0, root))?;

    assert_node_box!(node(&report, "quarter")?, 0, 0, 100, 10);
    assert_node_box!(node(&report, "rest")?, 100, 0, 300, 10);
    Ok(())
}

#[test]
fn test_flex_distribution_conserves_space() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    for width in [200.0_f32, 333.0, 517.0] {
        let children = vec![
            leaf("a", json!({ "width": 10, "flexGrow": 1 })),
            leaf("b", json!({ "width": 20, "flexGrow": 2 })),
            leaf("c", json!({ "width": 30, "flexGrow": 3, "maxWidth": 90 })),
        ];
        let root = row("root", width, 10.0, json!({ "gap": 7 }), children);
        let report = layout_document(&document(width, 10.0, root))?;

        let total: f32 = ["a", "b", "c"]
            .iter()
            .map(|name| node(&report, name).map(|n| n.width))
            .sum::<Result<f32, _>>()?;
        assert_approx!(total + 14.0, width);

        let c = node(&report, "c")?;
        assert!(c.width <= 90.0 + 1e-3);
    }
    Ok(())
}

#[test]
fn test_percentage_width_of_parent() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let root = row(
        "root",
        400.0,
        100.0,
        json!({}),
        vec![leaf("half", json!({ "width": "50%" }))],
    );
    let report = layout_document(&document(400.0, 100.0, root))?;

    assert_node_box!(node(&report, "half")?, 0, 0, 200, 100);
    Ok(())
}
