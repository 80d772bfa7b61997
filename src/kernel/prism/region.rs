//! Planar regions and their boolean combination.
//!
//! A region is a set of disjoint shapes; each shape is an outer contour
//! followed by its holes. Overlay work is delegated to `i_overlay`.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::math::polygon_2d::contour_signed_area;

/// Ordered `[x, y]` vertices of one closed contour.
pub type Contour = Vec<[f64; 2]>;

/// Outer contour followed by zero or more hole contours.
pub type Shape = Vec<Contour>;

/// A planar region made of disjoint shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    shapes: Vec<Shape>,
}

impl Region {
    /// Builds a normalized region from a single, possibly non-simple,
    /// contour. Self-overlapping parts of the contour are filled once
    /// (non-zero winding). Shapes with area at or below `min_area` are
    /// discarded.
    #[must_use]
    pub fn from_contour(contour: Contour, min_area: f64) -> Self {
        if contour.len() < 3 {
            return Self::default();
        }
        let subject = vec![contour];
        let clip: Vec<Contour> = Vec::new();
        let shapes = subject.overlay(&clip, OverlayRule::Subject, FillRule::NonZero);
        Self::from_shapes(shapes, min_area)
    }

    /// Wraps shapes that are already disjoint, dropping slivers.
    #[must_use]
    pub fn from_shapes(shapes: Vec<Shape>, min_area: f64) -> Self {
        let shapes = shapes
            .into_iter()
            .filter(|shape| shape_area(shape) > min_area)
            .collect();
        Self { shapes }
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Enclosed area, holes excluded.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.shapes.iter().map(shape_area).sum()
    }

    #[must_use]
    pub fn union(&self, other: &Self, min_area: f64) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Union, min_area)
    }

    #[must_use]
    pub fn difference(&self, other: &Self, min_area: f64) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Difference, min_area)
    }

    #[must_use]
    pub fn intersection(&self, other: &Self, min_area: f64) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }
        self.overlay(other, OverlayRule::Intersect, min_area)
    }

    /// Returns `true` if the symmetric difference of the two regions has no
    /// area above `min_area`.
    #[must_use]
    pub fn same_as(&self, other: &Self, min_area: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        if (self.area() - other.area()).abs() > min_area {
            return false;
        }
        self.overlay(other, OverlayRule::Xor, min_area).area() <= min_area
    }

    fn overlay(&self, other: &Self, rule: OverlayRule, min_area: f64) -> Self {
        let subject = self.paths();
        let clip = other.paths();
        // Each side is a set of disjoint shapes, so even-odd filling keeps
        // holes regardless of contour direction.
        let shapes = subject.overlay(&clip, rule, FillRule::EvenOdd);
        Self::from_shapes(shapes, min_area)
    }

    fn paths(&self) -> Vec<Contour> {
        self.shapes.iter().flatten().cloned().collect()
    }
}

/// Area of a shape: outer contour minus holes.
#[must_use]
pub fn shape_area(shape: &Shape) -> f64 {
    let mut contours = shape.iter();
    let Some(outer) = contours.next() else {
        return 0.0;
    };
    let holes: f64 = contours.map(|c| contour_signed_area(c).abs()).sum();
    contour_signed_area(outer).abs() - holes
}

/// Axis-aligned XY bounds of a shape's outer contour as `(min, max)`.
#[must_use]
pub fn shape_bounds(shape: &Shape) -> Option<([f64; 2], [f64; 2])> {
    let outer = shape.first()?;
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for p in outer {
        for axis in 0..2 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }
    (min[0] <= max[0]).then_some((min, max))
}

/// Returns `true` if two shapes share more than `min_area` of area.
#[must_use]
pub fn shapes_overlap(a: &Shape, b: &Shape, min_area: f64) -> bool {
    let (Some((a_min, a_max)), Some((b_min, b_max))) = (shape_bounds(a), shape_bounds(b)) else {
        return false;
    };
    let disjoint = a_max[0] < b_min[0]
        || b_max[0] < a_min[0]
        || a_max[1] < b_min[1]
        || b_max[1] < a_min[1];
    if disjoint {
        return false;
    }
    let ra = Region {
        shapes: vec![a.clone()],
    };
    let rb = Region {
        shapes: vec![b.clone()],
    };
    ra.intersection(&rb, min_area).area() > min_area
}
