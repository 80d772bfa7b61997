//! Reference kernel for vertical extrusions.
//!
//! A [`PrismSolid`] is a stack of horizontal slabs, each a planar region
//! swept between two elevations. Every solid this crate builds is a vertical
//! extrusion of a horizontal profile, or a boolean combination of such
//! extrusions, so the representation is exact for them.

mod boolean;
mod extrude;
mod join;
mod offset;
mod region;
mod solid;

pub use region::{Contour, Region, Shape};
pub use solid::{PrismSolid, Slab};

use tracing::debug;

use crate::error::KernelError;
use crate::geometry::{Plane, Polyline};

use self::boolean::BooleanOp;
use super::{CornerStyle, GeometryKernel};

/// Maximum deviation of a plane normal from the Z axis.
const HORIZONTAL_TOLERANCE: f64 = 1e-9;

/// Stateless kernel producing [`PrismSolid`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrismKernel;

impl PrismKernel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GeometryKernel for PrismKernel {
    type Solid = PrismSolid;

    fn offset(
        &self,
        curve: &Polyline,
        plane: &Plane,
        distance: f64,
        tolerance: f64,
        corner: CornerStyle,
    ) -> Result<Vec<Polyline>, KernelError> {
        if !plane.is_horizontal(HORIZONTAL_TOLERANCE) {
            return Err(KernelError::InvalidInput(
                "offset plane must be horizontal".to_owned(),
            ));
        }
        if curve
            .points
            .iter()
            .any(|p| plane.signed_distance(p).abs() > tolerance)
        {
            return Err(KernelError::InvalidInput(
                "curve does not lie on the offset plane".to_owned(),
            ));
        }
        // The primitive offsets to the right as seen from the plane normal;
        // the planar routine works with left offsets in world XY.
        let left = -distance * plane.normal().z.signum();
        offset::offset(curve, left, tolerance, corner)
    }

    fn join(&self, curves: Vec<Polyline>, tolerance: f64) -> Result<Vec<Polyline>, KernelError> {
        Ok(join::join(curves, tolerance))
    }

    fn extrude(
        &self,
        profile: &Polyline,
        height: f64,
        capped: bool,
    ) -> Result<Option<PrismSolid>, KernelError> {
        extrude::extrude(profile, height, capped)
    }

    fn boolean_union(
        &self,
        solids: Vec<PrismSolid>,
        tolerance: f64,
    ) -> Result<Vec<PrismSolid>, KernelError> {
        let count = solids.len();
        let mut solids = solids.into_iter();
        let Some(first) = solids.next() else {
            return Ok(Vec::new());
        };
        let merged = solids.fold(first.into_slabs(), |acc, solid| {
            boolean::combine(&acc, solid.slabs(), BooleanOp::Union, tolerance)
        });
        let components = boolean::split_components(merged, tolerance);
        debug!(inputs = count, components = components.len(), "prism union");
        Ok(components)
    }

    fn boolean_difference(
        &self,
        base: &PrismSolid,
        cutters: Vec<PrismSolid>,
        tolerance: f64,
    ) -> Result<Vec<PrismSolid>, KernelError> {
        if cutters.is_empty() {
            return Ok(vec![base.clone()]);
        }
        let count = cutters.len();
        let tool = cutters.into_iter().fold(Vec::new(), |acc, cutter| {
            boolean::combine(&acc, cutter.slabs(), BooleanOp::Union, tolerance)
        });
        let remaining = boolean::combine(base.slabs(), &tool, BooleanOp::Difference, tolerance);
        let components = boolean::split_components(remaining, tolerance);
        debug!(cutters = count, components = components.len(), "prism difference");
        Ok(components)
    }
}
