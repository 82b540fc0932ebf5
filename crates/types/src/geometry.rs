use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in absolute screen space.
///
/// This is also the shape of a node's layout metrics: `x`/`y` is the top-left
/// corner of the border box, `width`/`height` its size excluding margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Layout metrics written by the engine for every node.
pub type Metrics = Rect;

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(x: f32, y: f32, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrinks the rectangle by `edges`.
    ///
    /// The result is clamped so it never has a negative size and never escapes
    /// `self`, even when the edges are larger than the rectangle.
    pub fn inset(&self, edges: &Edges<f32>) -> Rect {
        let left = edges.left.max(0.0).min(self.width);
        let top = edges.top.max(0.0).min(self.height);
        let width = (self.width - left - edges.right.max(0.0)).max(0.0);
        let height = (self.height - top - edges.bottom.max(0.0)).max(0.0);
        Rect {
            x: self.x + left,
            y: self.y + top,
            width,
            height,
        }
    }

    /// Grows the rectangle by `edges` (used for the margin box).
    pub fn outset(&self, edges: &Edges<f32>) -> Rect {
        Rect {
            x: self.x - edges.left,
            y: self.y - edges.top,
            width: (self.width + edges.horizontal()).max(0.0),
            height: (self.height + edges.vertical()).max(0.0),
        }
    }

    /// Returns true if `other` lies entirely within `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.001;
        other.x + EPSILON >= self.x
            && other.y + EPSILON >= self.y
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.width = value,
            Axis::Vertical => self.height = value,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// One of the two physical layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A value per physical edge of a box (margin, padding, border width).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl<T: Clone> Edges<T> {
    pub fn all(value: T) -> Self {
        Self {
            left: value.clone(),
            right: value.clone(),
            top: value.clone(),
            bottom: value,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Edges<U> {
        Edges {
            left: f(&self.left),
            right: f(&self.right),
            top: f(&self.top),
            bottom: f(&self.bottom),
        }
    }
}

impl Edges<f32> {
    pub fn zero() -> Self {
        Self::all(0.0)
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Sum of both edges along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    /// The leading edge (left or top) along `axis`.
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The trailing edge (right or bottom) along `axis`.
    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}
