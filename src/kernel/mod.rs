//! The geometry-kernel seam.
//!
//! Construction code never offsets, joins, extrudes or combines geometry by
//! itself; it calls these primitives and interprets their (possibly empty)
//! results. Every primitive receives its tolerance explicitly.

pub mod prism;
#[cfg(test)]
pub(crate) mod testing;

use std::fmt::Debug;

use crate::error::KernelError;
use crate::geometry::{Plane, Polyline};

pub use prism::{PrismKernel, PrismSolid};

/// Corner treatment for offset curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerStyle {
    /// Extend adjacent offset segments until they meet (miter).
    #[default]
    Sharp,
    /// Connect adjacent offset segments with a straight bevel.
    Chamfer,
}

/// Primitive operations of a solid-modelling kernel.
pub trait GeometryKernel {
    /// Volumetric body produced by extrusion and boolean operations.
    type Solid: Clone + Debug;

    /// Offsets `curve` within `plane` by `distance`.
    ///
    /// Positive distances offset to the right of the direction of travel as
    /// seen from the plane normal, so a counter-clockwise loop grows. An
    /// empty result means the offset collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] if the curve cannot be offset in `plane`.
    fn offset(
        &self,
        curve: &Polyline,
        plane: &Plane,
        distance: f64,
        tolerance: f64,
        corner: CornerStyle,
    ) -> Result<Vec<Polyline>, KernelError>;

    /// Joins curves whose endpoints meet within `tolerance` into chains,
    /// closing chains whose ends meet.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] if the input cannot be joined.
    fn join(&self, curves: Vec<Polyline>, tolerance: f64) -> Result<Vec<Polyline>, KernelError>;

    /// Extrudes a closed planar profile by `height` along its plane normal.
    /// Negative heights extrude in the opposite direction.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] for inputs the kernel rejects outright.
    fn extrude(
        &self,
        profile: &Polyline,
        height: f64,
        capped: bool,
    ) -> Result<Option<Self::Solid>, KernelError>;

    /// Unions `solids`, returning one solid per connected component.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] if the union cannot be computed.
    fn boolean_union(
        &self,
        solids: Vec<Self::Solid>,
        tolerance: f64,
    ) -> Result<Vec<Self::Solid>, KernelError>;

    /// Subtracts every cutter from `base`, returning one solid per remaining
    /// connected component.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] if the difference cannot be computed.
    fn boolean_difference(
        &self,
        base: &Self::Solid,
        cutters: Vec<Self::Solid>,
        tolerance: f64,
    ) -> Result<Vec<Self::Solid>, KernelError>;
}
