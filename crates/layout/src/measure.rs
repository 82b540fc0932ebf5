use crate::tree::Node;
use trellis_types::Axis;

/// Supplies the intrinsic size of leaves that have no fixed size on an axis.
///
/// Called at most once per leaf and axis during the intrinsic pass. Must be
/// pure: the same node and axis always give the same answer.
pub trait Measure: Send + Sync {
    fn measure_intrinsic(&self, node: &Node, axis: Axis) -> f32;
}

/// Every leaf measures `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMeasure;

impl Measure for NoMeasure {
    #[inline(always)]
    fn measure_intrinsic(&self, _node: &Node, _axis: Axis) -> f32 {
        0.0
    }
}

impl<F> Measure for F
where
    F: Fn(&Node, Axis) -> f32 + Send + Sync,
{
    fn measure_intrinsic(&self, node: &Node, axis: Axis) -> f32 {
        self(node, axis)
    }
}
