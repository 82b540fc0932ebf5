//! Pass 2: top-down size distribution and positioning.

use super::flex::{self, FlexItem};
use crate::LayoutError;
use crate::box_model::resolve_box_model;
use crate::diagnostics::{LayoutObserver, Pass};
use crate::traverse;
use crate::tree::{LayoutTree, NodeId};
use crate::units::{Resolver, clamp_size};
use trellis_style::{AlignContent, FlexBasis, FlexWrap, StyleParseError};
use trellis_types::{Axis, Rect, Size};

/// Where a node ended up, and which axes of its content box are definite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Placement {
    /// Absolute border box.
    pub rect: Rect,
    pub definite_width: bool,
    pub definite_height: bool,
}

impl Placement {
    fn definite(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.definite_width,
            Axis::Vertical => self.definite_height,
        }
    }
}

pub(super) struct Resolution<'a> {
    pub tree: &'a LayoutTree,
    pub intrinsic: &'a [Size],
    pub resolver: &'a Resolver,
    pub observer: &'a dyn LayoutObserver,
}

impl Resolution<'_> {
    /// Places every node under `root` inside an owner of size `owner`.
    pub fn run(&self, root: NodeId, owner: Size) -> Result<Vec<Option<Placement>>, LayoutError> {
        let mut placements = vec![None; self.tree.len()];
        placements[root.index()] = Some(self.place_root(root, owner)?);

        self.observer.pass_started(Pass::Resolve);
        for id in traverse::pre_order(self.tree, root) {
            self.observer.node_visited(Pass::Resolve, id, &self.tree[id]);
            let placement = placements[id.index()].ok_or(LayoutError::MalformedTree(id))?;
            for (child, child_placement) in self.layout_children(id, &placement)? {
                placements[child.index()] = Some(child_placement);
            }
        }
        self.observer.pass_finished(Pass::Resolve);

        Ok(placements)
    }

    /// The root resolves size percentages against the owner and falls back
    /// to its intrinsic size when `auto`. Margins follow its own size.
    fn place_root(&self, root: NodeId, owner: Size) -> Result<Placement, LayoutError> {
        let style = self.tree[root].style();
        let intrinsic = self.intrinsic[root.index()];
        let invalid = |err: StyleParseError| LayoutError::invalid_style(root, err);

        let resolve_axis = |axis: Axis| -> Result<(f32, bool), LayoutError> {
            let base = Some(owner.get(axis));
            let (value, min, max) = self
                .resolver
                .constraints(style.size(axis), base)
                .map_err(invalid)?;
            let size = value.unwrap_or(intrinsic.get(axis));
            Ok((clamp_size(size, min, max), value.is_some()))
        };
        let (width, definite_width) = resolve_axis(Axis::Horizontal)?;
        let (height, definite_height) = resolve_axis(Axis::Vertical)?;
        let margin = self
            .resolver
            .edges_against_own(&style.margin, Size::new(width, height))
            .map_err(invalid)?;

        Ok(Placement {
            rect: Rect::new(margin.left, margin.top, width, height),
            definite_width,
            definite_height,
        })
    }

    fn layout_children(
        &self,
        id: NodeId,
        placement: &Placement,
    ) -> Result<Vec<(NodeId, Placement)>, LayoutError> {
        let node = &self.tree[id];
        if node.is_leaf() {
            return Ok(Vec::new());
        }
        let style = node.style();
        let content = resolve_box_model(&placement.rect, style, self.resolver)
            .map_err(|err| LayoutError::invalid_style(id, err))?
            .content_box;

        let direction = style.flex.direction;
        let main = direction.main_axis();
        let cross = main.cross();
        let main_size = content.size().get(main);
        let cross_size = content.size().get(cross);
        let main_definite = placement.definite(main);
        let cross_definite = placement.definite(cross);

        let mut items = node
            .children()
            .iter()
            .map(|&child| self.flex_item(id, child, &content, placement))
            .collect::<Result<Vec<_>, _>>()?;

        let wraps = style.flex.wrap != FlexWrap::NoWrap && main_definite;
        let lines = flex::break_lines(
            &items,
            wraps.then_some(main_size),
            style.gap.main,
        );

        for line in &lines {
            let line_items = &mut items[line.clone()];
            flex::resolve_flexible_lengths(line_items, main_size, style.gap.main);
            for item in line_items.iter_mut() {
                let own = oriented(main, item.target, item.hypothetical_cross());
                self.set_margins(item, main, own)?;
            }
            flex::place_main(
                line_items,
                main_size,
                style.gap.main,
                style.flex.justify_content,
                direction.is_reversed(),
            );
        }

        // Line cross sizes and their offsets along the cross axis.
        let single_line = !wraps;
        let mut line_sizes: Vec<f32> = if single_line {
            vec![cross_size]
        } else {
            lines
                .iter()
                .map(|line| {
                    items[line.clone()]
                        .iter()
                        .map(FlexItem::outer_hypothetical_cross)
                        .fold(0.0, f32::max)
                })
                .collect()
        };
        let cross_gaps = style.gap.cross * lines.len().saturating_sub(1) as f32;
        let free_cross = cross_size - line_sizes.iter().sum::<f32>() - cross_gaps;
        if !single_line && free_cross > 0.0 && style.flex.align_content == AlignContent::Stretch {
            let extra = free_cross / lines.len() as f32;
            line_sizes.iter_mut().for_each(|size| *size += extra);
        }
        let (leading, between) = if single_line {
            (0.0, 0.0)
        } else {
            flex::align_content_offsets(style.flex.align_content, free_cross.max(0.0), lines.len())
        };

        let mut stacking: Vec<usize> = (0..lines.len()).collect();
        if style.flex.wrap == FlexWrap::WrapReverse {
            stacking.reverse();
        }
        let mut line_offsets = vec![0.0; lines.len()];
        let mut cursor = leading;
        for index in stacking {
            line_offsets[index] = cursor;
            cursor += line_sizes[index] + between + style.gap.cross;
        }

        let stretch_definite = single_line && cross_definite;
        let mut placed = Vec::with_capacity(items.len());
        for ((line, line_size), line_offset) in lines.iter().zip(&line_sizes).zip(&line_offsets) {
            for item in &mut items[line.clone()] {
                flex::size_cross(item, *line_size, stretch_definite);
                let own = oriented(main, item.target, item.cross_size);
                self.set_margins(item, main, own)?;
                flex::align_cross(item, *line_size);

                let size = oriented(main, item.target, item.cross_size);
                let origin = oriented(main, item.main_offset, line_offset + item.cross_offset);

                let child_main_definite = main_definite || item.main_definite;
                let (definite_width, definite_height) = match main {
                    Axis::Horizontal => (child_main_definite, item.cross_definite),
                    Axis::Vertical => (item.cross_definite, child_main_definite),
                };
                placed.push((
                    item.id,
                    Placement {
                        rect: Rect::from_origin_size(
                            content.x + origin.width,
                            content.y + origin.height,
                            size,
                        ),
                        definite_width,
                        definite_height,
                    },
                ));
            }
        }

        Ok(placed)
    }

    /// Resolves a child's flex inputs against the parent's content box.
    fn flex_item(
        &self,
        parent: NodeId,
        child: NodeId,
        content: &Rect,
        placement: &Placement,
    ) -> Result<FlexItem, LayoutError> {
        let parent_style = self.tree[parent].style();
        let style = self.tree[child].style();
        let invalid = |err: StyleParseError| LayoutError::invalid_style(child, err);

        let main = parent_style.flex.direction.main_axis();
        let cross = main.cross();
        let base = |axis: Axis| placement.definite(axis).then(|| content.size().get(axis));
        let intrinsic = self.intrinsic[child.index()];

        let (main_value, min, max) = self
            .resolver
            .constraints(style.size(main), base(main))
            .map_err(invalid)?;
        let (cross_value, cross_min, cross_max) = self
            .resolver
            .constraints(style.size(cross), base(cross))
            .map_err(invalid)?;

        let basis = match &style.flex.basis {
            FlexBasis::Content => intrinsic.get(main),
            FlexBasis::Length(dim) if dim.is_auto() => {
                main_value.unwrap_or_else(|| intrinsic.get(main))
            }
            FlexBasis::Length(dim) => self
                .resolver
                .against_parent(dim, base(main))
                .map_err(invalid)?
                .unwrap_or_else(|| intrinsic.get(main)),
        };

        let mut item = FlexItem::new(child);
        item.grow = style.flex.grow;
        item.shrink = style.flex.shrink;
        item.basis = basis.max(0.0);
        item.hypothetical = clamp_size(basis, min, max);
        item.min = min;
        item.max = max;
        item.main_definite = main_value.is_some();
        item.cross_value = cross_value;
        item.cross_min = cross_min;
        item.cross_max = cross_max;
        item.intrinsic_cross = intrinsic.get(cross);
        item.align = style.flex.align_self.resolve(parent_style.flex.align_items);

        let own = oriented(main, item.hypothetical, item.hypothetical_cross());
        self.set_margins(&mut item, main, own)?;
        Ok(item)
    }

    /// Resolves an item's margins against its own border-box size `own`,
    /// the same rule the committed box model uses.
    fn set_margins(&self, item: &mut FlexItem, main: Axis, own: Size) -> Result<(), LayoutError> {
        let margin = self
            .resolver
            .edges_against_own(&self.tree[item.id].style().margin, own)
            .map_err(|err| LayoutError::invalid_style(item.id, err))?;
        let cross = main.cross();
        item.margin_main_start = margin.start(main);
        item.margin_main_end = margin.end(main);
        item.margin_cross_start = margin.start(cross);
        item.margin_cross_end = margin.end(cross);
        Ok(())
    }
}

fn oriented(main: Axis, main_size: f32, cross_size: f32) -> Size {
    let mut size = Size::zero();
    size.set(main, main_size);
    size.set(main.cross(), cross_size);
    size
}
