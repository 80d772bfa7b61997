use crate::math::Point3;

use super::region::{shape_bounds, Region};

/// A horizontal band of a solid: `region` swept from `bottom` to `top`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slab {
    pub bottom: f64,
    pub top: f64,
    pub region: Region,
}

impl Slab {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.region.area() * self.height()
    }
}

/// A solid made of vertically stacked slabs.
///
/// Slabs are sorted by elevation and never overlap in `z`. Every solid the
/// prism kernel returns from a boolean operation is connected.
#[derive(Debug, Clone, PartialEq)]
pub struct PrismSolid {
    slabs: Vec<Slab>,
}

impl PrismSolid {
    pub(crate) fn from_slabs(mut slabs: Vec<Slab>) -> Self {
        slabs.sort_by(|a, b| a.bottom.total_cmp(&b.bottom));
        Self { slabs }
    }

    #[must_use]
    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    pub(crate) fn into_slabs(self) -> Vec<Slab> {
        self.slabs
    }

    /// Enclosed volume.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.slabs.iter().map(Slab::volume).sum()
    }

    /// Lowest and highest elevation of the solid.
    #[must_use]
    pub fn z_range(&self) -> Option<(f64, f64)> {
        let bottom = self.slabs.first()?.bottom;
        let top = self.slabs.iter().map(|s| s.top).fold(bottom, f64::max);
        Some((bottom, top))
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let (bottom, top) = self.z_range()?;
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for (lo, hi) in self
            .slabs
            .iter()
            .flat_map(|s| s.region.shapes())
            .filter_map(shape_bounds)
        {
            for axis in 0..2 {
                min[axis] = min[axis].min(lo[axis]);
                max[axis] = max[axis].max(hi[axis]);
            }
        }
        if min[0] > max[0] {
            return None;
        }
        Some((
            Point3::new(min[0], min[1], bottom),
            Point3::new(max[0], max[1], top),
        ))
    }
}
