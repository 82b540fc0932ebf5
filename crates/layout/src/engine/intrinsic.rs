//! Pass 1: bottom-up content sizing.
//!
//! Only absolute information is used here. Percentages (sizes, bounds and
//! edges) are deferred to the resolution pass and count as unset.

use super::flex::{self, FlexItem};
use crate::diagnostics::{LayoutObserver, Pass};
use crate::measure::Measure;
use crate::traverse;
use crate::tree::{LayoutTree, NodeId};
use crate::units::{clamp_size, fixed_edges};
use trellis_style::{Dimension, FlexBasis, FlexWrap};
use trellis_types::{Axis, Size};

/// Computes the provisional border-box size of every node under `root`.
///
/// The returned table is indexed by [`NodeId::index`]; nodes outside the
/// subtree keep a zero size.
pub(super) fn intrinsic_sizes(
    tree: &LayoutTree,
    root: NodeId,
    measure: &dyn Measure,
    observer: &dyn LayoutObserver,
) -> Vec<Size> {
    let mut sizes = vec![Size::zero(); tree.len()];

    observer.pass_started(Pass::Intrinsic);
    for id in traverse::post_order(tree, root) {
        observer.node_visited(Pass::Intrinsic, id, &tree[id]);
        let size = Size::new(
            axis_size(tree, id, Axis::Horizontal, &sizes, measure),
            axis_size(tree, id, Axis::Vertical, &sizes, measure),
        );
        sizes[id.index()] = size;
    }
    observer.pass_finished(Pass::Intrinsic);

    sizes
}

fn axis_size(
    tree: &LayoutTree,
    id: NodeId,
    axis: Axis,
    sizes: &[Size],
    measure: &dyn Measure,
) -> f32 {
    let node = &tree[id];
    let style = node.style();
    let constraint = style.size(axis);

    let size = match constraint.value.fixed() {
        Some(fixed) => fixed,
        None => {
            let edges = fixed_edges(&style.padding).along(axis)
                + fixed_edges(&style.border_width).along(axis);
            let content = if node.is_leaf() {
                measure.measure_intrinsic(node, axis)
            } else {
                children_extent(tree, id, axis, sizes)
            };
            content.max(0.0) + edges
        }
    };

    clamp_size(size, constraint.min.fixed(), constraint.max.fixed())
}

/// Sum of outer sizes along the main axis plus gaps, or the largest outer
/// size along the cross axis. A wrapping container with a fixed main size
/// stacks its lines instead: each line is as tall as its largest item.
fn children_extent(tree: &LayoutTree, id: NodeId, axis: Axis, sizes: &[Size]) -> f32 {
    let style = tree[id].style();
    let main = style.flex.direction.main_axis();
    let children = tree[id].children();

    if axis == main {
        let gaps = style.gap.main * children.len().saturating_sub(1) as f32;
        return children
            .iter()
            .map(|&child| outer_size(tree, child, axis, main, sizes))
            .sum::<f32>()
            + gaps;
    }

    let Some(available) = wrap_width(tree, id, main) else {
        return children
            .iter()
            .map(|&child| outer_size(tree, child, axis, main, sizes))
            .fold(0.0, f32::max);
    };

    let items: Vec<_> = children
        .iter()
        .map(|&child| {
            let mut item = FlexItem::new(child);
            item.hypothetical = outer_size(tree, child, main, main, sizes);
            item.intrinsic_cross = outer_size(tree, child, axis, main, sizes);
            item
        })
        .collect();
    let lines = flex::break_lines(&items, Some(available), style.gap.main);
    let gaps = style.gap.cross * lines.len().saturating_sub(1) as f32;
    lines
        .into_iter()
        .map(|line| {
            items[line]
                .iter()
                .map(|item| item.intrinsic_cross)
                .fold(0.0, f32::max)
        })
        .sum::<f32>()
        + gaps
}

/// Content-box main size of a wrapping container whose main size is fixed.
fn wrap_width(tree: &LayoutTree, id: NodeId, main: Axis) -> Option<f32> {
    let style = tree[id].style();
    if style.flex.wrap == FlexWrap::NoWrap {
        return None;
    }
    let constraint = style.size(main);
    let size = clamp_size(
        constraint.value.fixed()?,
        constraint.min.fixed(),
        constraint.max.fixed(),
    );
    let edges =
        fixed_edges(&style.padding).along(main) + fixed_edges(&style.border_width).along(main);
    Some((size - edges).max(0.0))
}

/// A child's provisional size along `axis` plus its fixed margins.
fn outer_size(tree: &LayoutTree, child: NodeId, axis: Axis, main: Axis, sizes: &[Size]) -> f32 {
    let child_style = tree[child].style();
    let margin = fixed_edges(&child_style.margin).along(axis);
    let mut size = sizes[child.index()].get(axis);
    if axis == main {
        // A fixed basis stands in for the child's own main size.
        if let FlexBasis::Length(Dimension::Fixed(basis)) = child_style.flex.basis {
            let bounds = child_style.size(axis);
            size = clamp_size(basis, bounds.min.fixed(), bounds.max.fixed());
        }
    }
    size + margin
}
