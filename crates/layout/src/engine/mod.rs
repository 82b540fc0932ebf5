//! The two-pass layout engine.
//!
//! A layout call validates the whole subtree, computes intrinsic sizes
//! bottom-up, resolves final geometry top-down, and only then writes metrics
//! into the tree. A failing call leaves every node exactly as it was.

mod flex;
mod intrinsic;
mod resolve;

use crate::box_model::{BoxModel, resolve_box_model};
use crate::config::LayoutConfig;
use crate::diagnostics::{LayoutObserver, NoOpObserver};
use crate::measure::{Measure, NoMeasure};
use crate::traverse;
use crate::tree::{LayoutTree, NodeId};
use crate::units::Resolver;
use crate::LayoutError;
use std::sync::Arc;
use trellis_types::Size;

use self::resolve::Resolution;

pub struct LayoutEngine {
    config: LayoutConfig,
    resolver: Resolver,
    measure: Box<dyn Measure>,
    observer: Arc<dyn LayoutObserver>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            resolver: Resolver::new(&config),
            config,
            measure: Box::new(NoMeasure),
            observer: Arc::new(NoOpObserver),
        }
    }

    /// Replaces the intrinsic size source for leaves.
    pub fn with_measure(mut self, measure: impl Measure + 'static) -> Self {
        self.measure = Box::new(measure);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn LayoutObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Lays out the subtree rooted at `root` inside an owner of size `owner`.
    ///
    /// On success every node of the subtree carries fresh metrics and
    /// box-model caches, and parent links below `root` are re-established.
    /// The link from `root` to its own parent is left as is. On error no
    /// node has been modified.
    pub fn layout(&self, tree: &mut LayoutTree, root: NodeId, owner: Size) -> Result<(), LayoutError> {
        if !owner.is_finite() || owner.width < 0.0 || owner.height < 0.0 {
            return Err(LayoutError::InvalidOwnerSize {
                width: owner.width,
                height: owner.height,
            });
        }

        // 1. Structure and style validation
        let links = traverse::try_pre_order(tree, root)?;
        for &(id, _) in &links {
            if let Some(value) = tree[id].style().first_malformed() {
                return Err(LayoutError::InvalidPercentage {
                    node: id,
                    value: value.to_string(),
                });
            }
        }
        log::debug!(
            "Laying out {} node(s) from {} in {}x{}",
            links.len(),
            root,
            owner.width,
            owner.height
        );

        // 2. Intrinsic sizes, bottom-up
        let intrinsic =
            intrinsic::intrinsic_sizes(tree, root, self.measure.as_ref(), self.observer.as_ref());

        // 3. Final geometry, top-down
        let placements = Resolution {
            tree,
            intrinsic: &intrinsic,
            resolver: &self.resolver,
            observer: self.observer.as_ref(),
        }
        .run(root, owner)?;

        // 4. Box models for every node
        let mut committed = Vec::with_capacity(links.len());
        for &(id, _) in &links {
            let placement = placements[id.index()].ok_or(LayoutError::MalformedTree(id))?;
            let model = resolve_box_model(&placement.rect, tree[id].style(), &self.resolver)
                .map_err(|err| LayoutError::invalid_style(id, err))?;
            committed.push((id, model));
        }

        // 5. Commit. The root keeps its own parent link.
        for &(id, parent) in &links {
            if let Some(parent) = parent {
                tree.set_parent(id, parent);
            }
        }
        for (id, model) in committed {
            tree.set_layout(id, model.border_box, model.margin, model.content_box);
        }
        Ok(())
    }

    /// The box model of a laid-out node, with percentages resolved the way
    /// this engine resolves them.
    pub fn box_model(&self, tree: &LayoutTree, id: NodeId) -> Result<BoxModel, LayoutError> {
        let node = tree.node(id)?;
        let metrics = node.metrics().ok_or(LayoutError::NotLaidOut(id))?;
        resolve_box_model(&metrics, node.style(), &self.resolver)
            .map_err(|err| LayoutError::invalid_style(id, err))
    }

    /// Lays out independent trees concurrently. Results are in job order.
    #[cfg(feature = "parallel")]
    pub fn layout_forest(&self, jobs: &mut [LayoutJob]) -> Vec<Result<(), LayoutError>> {
        use rayon::prelude::*;

        jobs.par_iter_mut()
            .map(|job| self.layout(&mut job.tree, job.root, job.owner))
            .collect()
    }
}

/// One independent tree for [`LayoutEngine::layout_forest`].
#[cfg(feature = "parallel")]
#[derive(Debug, Clone)]
pub struct LayoutJob {
    pub tree: LayoutTree,
    pub root: NodeId,
    pub owner: Size,
}

/// Lays out `root` with a default engine.
pub fn layout(tree: &mut LayoutTree, root: NodeId, width: f32, height: f32) -> Result<(), LayoutError> {
    LayoutEngine::default().layout(tree, root, Size::new(width, height))
}

impl LayoutTree {
    /// The box model of a laid-out node using the default percentage
    /// rounding. See [`LayoutEngine::box_model`] for other configurations.
    pub fn box_model(&self, id: NodeId) -> Result<BoxModel, LayoutError> {
        let node = self.node(id)?;
        let metrics = node.metrics().ok_or(LayoutError::NotLaidOut(id))?;
        resolve_box_model(&metrics, node.style(), &Resolver::default())
            .map_err(|err| LayoutError::invalid_style(id, err))
    }
}
