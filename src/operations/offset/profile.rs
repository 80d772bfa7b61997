use tracing::debug;

use crate::error::{ConstructionError, Result, Stage, Subject};
use crate::geometry::{CurveOrientation, Polyline, Profile};
use crate::kernel::{CornerStyle, GeometryKernel};
use crate::operations::Outcome;

/// Which way an offset profile moves relative to the enclosed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSide {
    /// Shrinks the loop.
    Inside,
    /// Grows the loop.
    Outside,
}

/// Derives a closed profile at a fixed distance inside or outside a closed
/// planar curve.
///
/// The kernel's offset sign is relative to the direction of travel, so the
/// signed distance is chosen from the curve's winding: a counter-clockwise
/// curve shrinks with a negative distance and a clockwise one with a
/// positive distance.
#[derive(Debug, Clone, Copy)]
pub struct OffsetProfile {
    side: OffsetSide,
    distance: f64,
    tolerance: f64,
}

impl OffsetProfile {
    #[must_use]
    pub fn new(side: OffsetSide, distance: f64, tolerance: f64) -> Self {
        Self {
            side,
            distance,
            tolerance,
        }
    }

    #[must_use]
    pub fn inside(distance: f64, tolerance: f64) -> Self {
        Self::new(OffsetSide::Inside, distance, tolerance)
    }

    #[must_use]
    pub fn outside(distance: f64, tolerance: f64) -> Self {
        Self::new(OffsetSide::Outside, distance, tolerance)
    }

    /// Offsets `curve` and joins the pieces into one closed profile.
    ///
    /// Returns [`Outcome::Empty`] if the curve has no plane or winding, or
    /// the offset collapsed to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Kernel`] if the offset or join primitive
    /// fails, and [`ConstructionError::FragmentedOffset`] if the join does not
    /// yield exactly one closed curve.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        curve: &Polyline,
        subject: &Subject,
    ) -> Result<Outcome<Profile>> {
        let Some(plane) = curve.try_get_plane(self.tolerance) else {
            debug!(%subject, "offset skipped: curve has no plane");
            return Ok(Outcome::Empty);
        };

        let shrink = match curve.orientation(&plane, self.tolerance) {
            CurveOrientation::CounterClockwise => -self.distance,
            CurveOrientation::Clockwise => self.distance,
            CurveOrientation::Undefined => {
                debug!(%subject, "offset skipped: winding undefined");
                return Ok(Outcome::Empty);
            }
        };
        let signed = match self.side {
            OffsetSide::Inside => shrink,
            OffsetSide::Outside => -shrink,
        };

        let pieces = kernel
            .offset(curve, &plane, signed, self.tolerance, CornerStyle::Sharp)
            .map_err(|source| ConstructionError::Kernel {
                stage: Stage::Offset,
                subject: subject.clone(),
                source,
            })?;
        if pieces.is_empty() {
            debug!(%subject, side = ?self.side, distance = self.distance, "offset collapsed");
            return Ok(Outcome::Empty);
        }

        let mut joined = kernel
            .join(pieces, self.tolerance)
            .map_err(|source| ConstructionError::Kernel {
                stage: Stage::Join,
                subject: subject.clone(),
                source,
            })?;
        let loops = joined.len();
        let profile = match joined.pop() {
            Some(curve) if loops == 1 => Profile::new(curve),
            _ => None,
        };
        profile.map(Outcome::Value).ok_or_else(|| {
            ConstructionError::FragmentedOffset {
                subject: subject.clone(),
                loops,
            }
            .into()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kernel::PrismKernel;
    use crate::math::polygon_2d::signed_area_xy;
    use crate::math::Point3;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polyline {
        Polyline::new(
            vec![
                Point3::new(x0, y0, 0.0),
                Point3::new(x1, y0, 0.0),
                Point3::new(x1, y1, 0.0),
                Point3::new(x0, y1, 0.0),
            ],
            true,
        )
    }

    fn subject() -> Subject {
        Subject::Room("test".to_owned())
    }

    fn profile(op: OffsetProfile, curve: &Polyline) -> Profile {
        match op.execute(&PrismKernel, curve, &subject()).unwrap() {
            Outcome::Value(p) => p,
            Outcome::Empty => panic!("offset produced no profile"),
        }
    }

    #[test]
    fn inside_shrinks_and_outside_grows_regardless_of_winding() {
        for curve in [rect(0.0, 0.0, 10.0, 6.0), rect(0.0, 0.0, 10.0, 6.0).reversed()] {
            let inner = profile(OffsetProfile::inside(1.0, 0.01), &curve);
            let outer = profile(OffsetProfile::outside(1.0, 0.01), &curve);
            assert!((signed_area_xy(&inner.polyline().points).abs() - 32.0).abs() < 1e-9);
            assert!((signed_area_xy(&outer.polyline().points).abs() - 96.0).abs() < 1e-9);
        }
    }

    #[test]
    fn inside_then_outside_round_trips_a_convex_loop() {
        let original = rect(0.0, 0.0, 8.0, 5.0);
        let inner = profile(OffsetProfile::inside(1.0, 0.01), &original);
        let back = profile(OffsetProfile::outside(1.0, 0.01), inner.polyline());
        assert_eq!(back.polyline().points.len(), original.points.len());
        for p in &original.points {
            assert!(
                back.polyline()
                    .points
                    .iter()
                    .any(|q| (p - q).norm() < 0.01),
                "vertex {p:?} not reproduced"
            );
        }
    }

    #[test]
    fn collapsed_offset_is_empty() {
        let result = OffsetProfile::inside(4.0, 0.01)
            .execute(&PrismKernel, &rect(0.0, 0.0, 6.0, 6.0), &subject())
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn offset_that_splits_the_loop_is_fragmented() {
        // Two halves joined by a neck narrower than twice the offset.
        let dumbbell = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 1.5, 0.0),
                Point3::new(6.0, 1.5, 0.0),
                Point3::new(6.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(10.0, 4.0, 0.0),
                Point3::new(5.5, 4.0, 0.0),
                Point3::new(5.5, 2.3, 0.0),
                Point3::new(4.5, 2.3, 0.0),
                Point3::new(4.5, 4.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
            true,
        );
        let err = OffsetProfile::inside(1.0, 0.01)
            .execute(&PrismKernel, &dumbbell, &subject())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::FragmentedOffset { loops: 2, .. })
        ));
    }

    #[test]
    fn open_curve_has_no_profile() {
        let mut open = rect(0.0, 0.0, 4.0, 4.0);
        open.closed = false;
        let result = OffsetProfile::outside(1.0, 0.01)
            .execute(&PrismKernel, &open, &subject())
            .unwrap();
        assert!(result.is_empty());
    }
}
