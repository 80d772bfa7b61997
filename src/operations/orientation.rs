use tracing::debug;

use crate::error::{ConstructionError, Result, Subject};
use crate::geometry::{BoundaryCurve, CurveOrientation, Plane, Room};

/// Normalizes room boundaries to counter-clockwise winding.
///
/// Winding is measured against a fixed reference plane. Boundaries that are
/// clockwise are reversed in place; their shape does not change.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalizeWinding {
    reference: Plane,
    tolerance: f64,
}

impl CanonicalizeWinding {
    #[must_use]
    pub fn new(reference: Plane, tolerance: f64) -> Self {
        Self {
            reference,
            tolerance,
        }
    }

    /// Canonicalizes every room boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UndeterminedWinding`] for the first room
    /// whose boundary is non-planar, self-intersecting or degenerate.
    pub fn execute(&self, rooms: &mut [Room]) -> Result<()> {
        for room in rooms {
            let subject = Subject::Room(room.name.clone());
            let reversed = self.canonicalize(&mut room.boundary, subject)?;
            debug!(room = %room.name, reversed, "canonicalized boundary winding");
        }
        Ok(())
    }

    /// Canonicalizes one boundary, returning `true` if it was reversed.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UndeterminedWinding`] if the winding
    /// cannot be determined.
    pub fn canonicalize(&self, boundary: &mut BoundaryCurve, subject: Subject) -> Result<bool> {
        match boundary
            .polyline()
            .orientation(&self.reference, self.tolerance)
        {
            CurveOrientation::CounterClockwise => Ok(false),
            CurveOrientation::Clockwise => {
                boundary.reverse();
                Ok(true)
            }
            CurveOrientation::Undefined => {
                Err(ConstructionError::UndeterminedWinding { subject }.into())
            }
        }
    }
}

impl Default for CanonicalizeWinding {
    fn default() -> Self {
        Self::new(Plane::world_xy(), 0.01)
    }
}
