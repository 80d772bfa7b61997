//! Kernel wrappers for exercising failure paths.

use crate::error::KernelError;
use crate::geometry::{Plane, Polyline};

use super::{CornerStyle, GeometryKernel, PrismKernel, PrismSolid};

/// The primitive a [`FailingKernel`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// `offset` returns an error.
    Offset,
    /// `extrude` returns no solid.
    ExtrudeNothing,
    /// `boolean_union` returns an error.
    Union,
    /// `boolean_difference` returns an error.
    Difference,
}

/// Delegates to [`PrismKernel`] except for one failing primitive.
#[derive(Debug, Clone, Copy)]
pub struct FailingKernel {
    pub failure: Failure,
}

impl FailingKernel {
    fn injected(&self) -> KernelError {
        KernelError::Failed(format!("injected {:?} failure", self.failure))
    }
}

impl GeometryKernel for FailingKernel {
    type Solid = PrismSolid;

    fn offset(
        &self,
        curve: &Polyline,
        plane: &Plane,
        distance: f64,
        tolerance: f64,
        corner: CornerStyle,
    ) -> Result<Vec<Polyline>, KernelError> {
        if self.failure == Failure::Offset {
            return Err(self.injected());
        }
        PrismKernel.offset(curve, plane, distance, tolerance, corner)
    }

    fn join(&self, curves: Vec<Polyline>, tolerance: f64) -> Result<Vec<Polyline>, KernelError> {
        PrismKernel.join(curves, tolerance)
    }

    fn extrude(
        &self,
        profile: &Polyline,
        height: f64,
        capped: bool,
    ) -> Result<Option<PrismSolid>, KernelError> {
        if self.failure == Failure::ExtrudeNothing {
            return Ok(None);
        }
        PrismKernel.extrude(profile, height, capped)
    }

    fn boolean_union(
        &self,
        solids: Vec<PrismSolid>,
        tolerance: f64,
    ) -> Result<Vec<PrismSolid>, KernelError> {
        if self.failure == Failure::Union {
            return Err(self.injected());
        }
        PrismKernel.boolean_union(solids, tolerance)
    }

    fn boolean_difference(
        &self,
        base: &PrismSolid,
        cutters: Vec<PrismSolid>,
        tolerance: f64,
    ) -> Result<Vec<PrismSolid>, KernelError> {
        if self.failure == Failure::Difference {
            return Err(self.injected());
        }
        PrismKernel.boolean_difference(base, cutters, tolerance)
    }
}
