//! Flex line algorithms: line breaking, flexible length resolution,
//! main-axis justification and cross-axis alignment.
//!
//! Everything here works on [`FlexItem`]s in the container's local
//! coordinate space (offsets relative to the content-box origin) and knows
//! nothing about the tree.

use crate::tree::NodeId;
use crate::units::clamp_size;
use std::ops::Range;
use trellis_style::{AlignContent, AlignItems, JustifyContent};

const EPSILON: f32 = 1e-4;

/// A child of a flex container, as seen by one line of the algorithm.
#[derive(Debug, Clone)]
pub(crate) struct FlexItem {
    pub id: NodeId,
    pub grow: f32,
    pub shrink: f32,
    /// Flex base size, before clamping.
    pub basis: f32,
    /// Base size clamped by the main-axis bounds.
    pub hypothetical: f32,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub margin_main_start: f32,
    pub margin_main_end: f32,
    pub main_definite: bool,

    pub cross_value: Option<f32>,
    pub cross_min: Option<f32>,
    pub cross_max: Option<f32>,
    pub intrinsic_cross: f32,
    pub margin_cross_start: f32,
    pub margin_cross_end: f32,
    pub align: AlignItems,

    // Results
    pub target: f32,
    pub main_offset: f32,
    pub cross_size: f32,
    pub cross_offset: f32,
    pub cross_definite: bool,
    frozen: bool,
}

impl FlexItem {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            grow: 0.0,
            shrink: 0.0,
            basis: 0.0,
            hypothetical: 0.0,
            min: None,
            max: None,
            margin_main_start: 0.0,
            margin_main_end: 0.0,
            main_definite: false,
            cross_value: None,
            cross_min: None,
            cross_max: None,
            intrinsic_cross: 0.0,
            margin_cross_start: 0.0,
            margin_cross_end: 0.0,
            align: AlignItems::default(),
            target: 0.0,
            main_offset: 0.0,
            cross_size: 0.0,
            cross_offset: 0.0,
            cross_definite: false,
            frozen: false,
        }
    }

    fn main_margins(&self) -> f32 {
        self.margin_main_start + self.margin_main_end
    }

    fn cross_margins(&self) -> f32 {
        self.margin_cross_start + self.margin_cross_end
    }

    pub fn outer_hypothetical(&self) -> f32 {
        self.hypothetical + self.main_margins()
    }

    pub fn outer_target(&self) -> f32 {
        self.target + self.main_margins()
    }

    /// Cross size the item takes when it is not stretched.
    pub fn hypothetical_cross(&self) -> f32 {
        clamp_size(
            self.cross_value.unwrap_or(self.intrinsic_cross),
            self.cross_min,
            self.cross_max,
        )
    }

    pub fn outer_hypothetical_cross(&self) -> f32 {
        self.hypothetical_cross() + self.cross_margins()
    }
}

fn gaps(gap: f32, count: usize) -> f32 {
    gap * count.saturating_sub(1) as f32
}

/// Breaks items into lines greedily. With no `available` size everything
/// stays on one line. A line always holds at least one item.
pub(crate) fn break_lines(items: &[FlexItem], available: Option<f32>, gap: f32) -> Vec<Range<usize>> {
    let Some(available) = available else {
        return vec![0..items.len()];
    };

    let mut lines = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (index, item) in items.iter().enumerate() {
        let outer = item.outer_hypothetical();
        if index > start && used + gap + outer > available + EPSILON {
            lines.push(start..index);
            start = index;
            used = outer;
        } else if index == start {
            used = outer;
        } else {
            used += gap + outer;
        }
    }
    lines.push(start..items.len());
    lines
}

/// Grows or shrinks the items of one line so their outer sizes plus gaps
/// fill `available`.
///
/// Positive free space goes to items by `grow / Σ grow`; negative free space
/// is taken by `shrink * basis / Σ (shrink * basis)`. Items that hit a bound
/// are frozen at it and the rest of the space is handed out again among the
/// remaining items. Sizes never drop below zero.
pub(crate) fn resolve_flexible_lengths(items: &mut [FlexItem], available: f32, gap: f32) {
    let gaps = gaps(gap, items.len());
    let initial_free =
        available - items.iter().map(FlexItem::outer_hypothetical).sum::<f32>() - gaps;
    let growing = initial_free > 0.0;

    for item in items.iter_mut() {
        item.target = item.hypothetical;
        let weight = if growing { item.grow } else { item.shrink };
        item.frozen = initial_free.abs() <= EPSILON
            || weight <= 0.0
            || (growing && item.basis > item.hypothetical)
            || (!growing && item.basis < item.hypothetical);
    }

    // Every round freezes at least one item or terminates.
    for _ in 0..=items.len() {
        if items.iter().all(|item| item.frozen) {
            break;
        }

        let used: f32 = items
            .iter()
            .map(|item| {
                let size = if item.frozen { item.target } else { item.basis };
                size + item.main_margins()
            })
            .sum();
        let free = available - used - gaps;

        let weights: Vec<f32> = items
            .iter()
            .map(|item| match (item.frozen, growing) {
                (true, _) => 0.0,
                (false, true) => item.grow,
                (false, false) => item.shrink * item.basis,
            })
            .collect();
        let total_weight: f32 = weights.iter().sum();

        let mut violations = vec![0.0; items.len()];
        for ((item, weight), violation) in items.iter_mut().zip(&weights).zip(&mut violations) {
            if item.frozen {
                continue;
            }
            let unclamped = if total_weight > 0.0 {
                item.basis + free * weight / total_weight
            } else {
                item.basis
            };
            item.target = clamp_size(unclamped, item.min, item.max);
            *violation = item.target - unclamped;
        }
        let total_violation: f32 = violations.iter().sum();

        if total_violation.abs() <= EPSILON || total_weight <= 0.0 {
            break;
        }

        // Freeze the items clamped in the same direction as the net violation.
        for (item, violation) in items.iter_mut().zip(&violations) {
            if violation * total_violation > 0.0 {
                item.frozen = true;
            }
        }
    }
}

/// Leading space before the first item and extra space between items for a
/// line with `remaining` free space.
pub(crate) fn justify_offsets(justify: JustifyContent, remaining: f32, count: usize) -> (f32, f32) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let n = count as f32;
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::FlexEnd => (remaining, 0.0),
        JustifyContent::Center => (remaining / 2.0, 0.0),
        JustifyContent::SpaceBetween => {
            if count <= 1 || remaining < 0.0 {
                (0.0, 0.0)
            } else {
                (0.0, remaining / (n - 1.0))
            }
        }
        JustifyContent::SpaceAround => {
            if remaining < 0.0 {
                (remaining / 2.0, 0.0)
            } else {
                (remaining / (2.0 * n), remaining / n)
            }
        }
        JustifyContent::SpaceEvenly => {
            if remaining < 0.0 {
                (remaining / 2.0, 0.0)
            } else {
                let space = remaining / (n + 1.0);
                (space, space)
            }
        }
    }
}

/// Positions a line along the main axis. `main_offset` is the border-box
/// start of each item. Reversed lines are laid out from the last item.
pub(crate) fn place_main(
    items: &mut [FlexItem],
    available: f32,
    gap: f32,
    justify: JustifyContent,
    reversed: bool,
) {
    let used: f32 = items.iter().map(FlexItem::outer_target).sum::<f32>() + gaps(gap, items.len());
    let (leading, between) = justify_offsets(justify, available - used, items.len());

    let mut cursor = leading;
    let mut place = |item: &mut FlexItem| {
        item.main_offset = cursor + item.margin_main_start;
        cursor += item.outer_target() + between + gap;
    };
    if reversed {
        items.iter_mut().rev().for_each(&mut place);
    } else {
        items.iter_mut().for_each(&mut place);
    }
}

/// Distribution of free cross space between lines, as `(leading, between)`.
pub(crate) fn align_content_offsets(align: AlignContent, free: f32, lines: usize) -> (f32, f32) {
    let justify = match align {
        AlignContent::FlexStart | AlignContent::Stretch | AlignContent::Baseline => {
            JustifyContent::FlexStart
        }
        AlignContent::FlexEnd => JustifyContent::FlexEnd,
        AlignContent::Center => JustifyContent::Center,
        AlignContent::SpaceBetween => JustifyContent::SpaceBetween,
        AlignContent::SpaceAround => JustifyContent::SpaceAround,
    };
    justify_offsets(justify, free, lines)
}

/// Sizes one item along the cross axis of a line of `line_cross` size.
pub(crate) fn size_cross(item: &mut FlexItem, line_cross: f32, stretch_definite: bool) {
    let stretch = item.align == AlignItems::Stretch && item.cross_value.is_none();
    if stretch {
        item.cross_size = clamp_size(
            line_cross - item.cross_margins(),
            item.cross_min,
            item.cross_max,
        );
        item.cross_definite = stretch_definite;
    } else {
        item.cross_size = item.hypothetical_cross();
        item.cross_definite = item.cross_value.is_some();
    }
}

/// Positions a sized item inside its line. `cross_offset` is relative to the
/// line start.
pub(crate) fn align_cross(item: &mut FlexItem, line_cross: f32) {
    let free = line_cross - item.cross_size - item.cross_margins();
    item.cross_offset = item.margin_cross_start
        + match item.align {
            AlignItems::FlexEnd => free,
            AlignItems::Center => free / 2.0,
            // Baseline has no text metrics to align on.
            AlignItems::Stretch | AlignItems::FlexStart | AlignItems::Baseline => 0.0,
        };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, basis: f32, grow: f32, shrink: f32) -> FlexItem {
        let mut item = FlexItem::new(NodeId::from_index(index));
        item.basis = basis;
        item.hypothetical = basis;
        item.grow = grow;
        item.shrink = shrink;
        item
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_grow_distributes_by_ratio() {
        let mut items = vec![item(0, 0.0, 1.0, 0.0), item(1, 0.0, 3.0, 0.0)];
        resolve_flexible_lengths(&mut items, 400.0, 0.0);
        assert_close(items[0].target, 100.0);
        assert_close(items[1].target, 300.0);
    }

    #[test]
    fn test_zero_grow_leaves_free_space() {
        let mut items = vec![item(0, 50.0, 0.0, 0.0), item(1, 50.0, 0.0, 0.0)];
        resolve_flexible_lengths(&mut items, 400.0, 0.0);
        assert_eq!(items[0].target, 50.0);
        assert_eq!(items[1].target, 50.0);
    }

    #[test]
    fn test_shrink_is_weighted_by_basis() {
        let mut items = vec![item(0, 100.0, 0.0, 1.0), item(1, 300.0, 0.0, 1.0)];
        resolve_flexible_lengths(&mut items, 200.0, 0.0);
        assert_close(items[0].target, 50.0);
        assert_close(items[1].target, 150.0);
    }

    #[test]
    fn test_max_violation_redistributes() {
        let mut items = vec![item(0, 0.0, 1.0, 0.0), item(1, 0.0, 1.0, 0.0)];
        items[0].max = Some(50.0);
        resolve_flexible_lengths(&mut items, 300.0, 10.0);
        assert_close(items[0].target, 50.0);
        assert_close(items[1].target, 240.0);
        let total: f32 = items.iter().map(|i| i.target).sum::<f32>() + 10.0;
        assert_close(total, 300.0);
    }

    #[test]
    fn test_min_violation_while_shrinking() {
        let mut items = vec![item(0, 100.0, 0.0, 1.0), item(1, 100.0, 0.0, 1.0)];
        items[0].min = Some(90.0);
        items[0].hypothetical = 100.0;
        resolve_flexible_lengths(&mut items, 100.0, 0.0);
        assert_close(items[0].target, 90.0);
        assert_close(items[1].target, 10.0);
    }

    #[test]
    fn test_shrink_never_goes_negative() {
        let mut items = vec![item(0, 10.0, 0.0, 1.0), item(1, 100.0, 0.0, 0.0)];
        resolve_flexible_lengths(&mut items, 20.0, 0.0);
        assert_eq!(items[0].target, 0.0);
        assert_eq!(items[1].target, 100.0);
    }

    #[test]
    fn test_justify_offsets() {
        assert_eq!(justify_offsets(JustifyContent::FlexStart, 90.0, 3), (0.0, 0.0));
        assert_eq!(justify_offsets(JustifyContent::FlexEnd, 90.0, 3), (90.0, 0.0));
        assert_eq!(justify_offsets(JustifyContent::Center, 90.0, 3), (45.0, 0.0));
        assert_eq!(justify_offsets(JustifyContent::SpaceBetween, 90.0, 3), (0.0, 45.0));
        assert_eq!(justify_offsets(JustifyContent::SpaceBetween, 90.0, 1), (0.0, 0.0));
        assert_eq!(justify_offsets(JustifyContent::SpaceAround, 90.0, 3), (15.0, 30.0));
        assert_eq!(justify_offsets(JustifyContent::SpaceEvenly, 80.0, 3), (20.0, 20.0));
        // Overflow
        assert_eq!(justify_offsets(JustifyContent::SpaceBetween, -20.0, 3), (0.0, 0.0));
        assert_eq!(justify_offsets(JustifyContent::SpaceAround, -20.0, 3), (-10.0, 0.0));
        assert_eq!(justify_offsets(JustifyContent::SpaceEvenly, -20.0, 3), (-10.0, 0.0));
    }

    #[test]
    fn test_place_main_with_gap_and_reverse() {
        let mut items = vec![item(0, 10.0, 0.0, 0.0), item(1, 20.0, 0.0, 0.0)];
        for item in items.iter_mut() {
            item.target = item.basis;
        }
        place_main(&mut items, 100.0, 5.0, JustifyContent::FlexStart, false);
        assert_eq!(items[0].main_offset, 0.0);
        assert_eq!(items[1].main_offset, 15.0);

        place_main(&mut items, 100.0, 5.0, JustifyContent::FlexStart, true);
        assert_eq!(items[1].main_offset, 0.0);
        assert_eq!(items[0].main_offset, 25.0);
    }

    #[test]
    fn test_break_lines() {
        let items: Vec<_> = (0..4).map(|i| item(i, 40.0, 0.0, 0.0)).collect();
        assert_eq!(break_lines(&items, None, 0.0), vec![0..4]);
        assert_eq!(break_lines(&items, Some(100.0), 10.0), vec![0..2, 2..4]);
        assert_eq!(break_lines(&items, Some(10.0), 0.0), vec![0..1, 1..2, 2..3, 3..4]);
    }

    #[test]
    fn test_align_cross() {
        let mut stretched = item(0, 0.0, 0.0, 0.0);
        stretched.margin_cross_start = 5.0;
        stretched.margin_cross_end = 5.0;
        size_cross(&mut stretched, 100.0, true);
        align_cross(&mut stretched, 100.0);
        assert_eq!(stretched.cross_size, 90.0);
        assert_eq!(stretched.cross_offset, 5.0);
        assert!(stretched.cross_definite);

        let mut centered = item(1, 0.0, 0.0, 0.0);
        centered.align = AlignItems::Center;
        centered.cross_value = Some(40.0);
        size_cross(&mut centered, 100.0, true);
        align_cross(&mut centered, 100.0);
        assert_eq!(centered.cross_size, 40.0);
        assert_eq!(centered.cross_offset, 30.0);

        let mut end = item(2, 0.0, 0.0, 0.0);
        end.align = AlignItems::FlexEnd;
        end.intrinsic_cross = 25.0;
        size_cross(&mut end, 100.0, true);
        align_cross(&mut end, 100.0);
        assert_eq!(end.cross_offset, 75.0);
        assert!(!end.cross_definite);
    }
}
