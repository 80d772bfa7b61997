//! Door and window cutters.
//!
//! An opening marker is an open centerline. Its cutter profile is the strip
//! between the marker's two side offsets, closed with straight end caps.
//! Markers that cannot be turned into a profile are skipped with a warning;
//! a profile that then fails to extrude is fatal.

use tracing::{debug, warn};

use crate::config::{OpeningParams, WindowParams};
use crate::error::{Result, Subject};
use crate::geometry::{OpeningSegment, Plane, Polyline, Profile};
use crate::kernel::{CornerStyle, GeometryKernel};
use crate::operations::{ExtrudeProfile, Outcome};

/// Builds the solid cut out of the walls for one door or window.
#[derive(Debug, Clone, Copy)]
pub struct OpeningCutter {
    thickness: f64,
    height: f64,
    /// Sill elevation above the marker.
    elevation: f64,
    tolerance: f64,
}

impl OpeningCutter {
    #[must_use]
    pub fn new(thickness: f64, height: f64, elevation: f64, tolerance: f64) -> Self {
        Self {
            thickness,
            height,
            elevation,
            tolerance,
        }
    }

    /// A door cutter standing on the marker's elevation.
    #[must_use]
    pub fn door(params: &OpeningParams, tolerance: f64) -> Self {
        Self::new(params.thickness, params.height, 0.0, tolerance)
    }

    /// A window cutter raised by the sill height.
    #[must_use]
    pub fn window(params: &WindowParams, tolerance: f64) -> Self {
        Self::new(
            params.thickness,
            params.height,
            params.height_from_floor,
            tolerance,
        )
    }

    /// Builds the cutter solid.
    ///
    /// Returns [`Outcome::Empty`] (and logs a warning) if the marker does
    /// not yield a closed profile.
    ///
    /// # Errors
    ///
    /// Returns an error if a valid profile fails to extrude.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        segment: &OpeningSegment,
        subject: &Subject,
    ) -> Result<Outcome<K::Solid>> {
        let profile = match self.profile(kernel, segment) {
            Ok(profile) => profile,
            Err(reason) => {
                warn!(%subject, reason, "skipping opening");
                return Ok(Outcome::Empty);
            }
        };
        let raised = profile.raised(self.elevation);
        let solid = ExtrudeProfile::new(self.height).execute(
            kernel,
            Outcome::Value(&raised),
            subject,
        )?;
        debug!(%subject, elevation = self.elevation, height = self.height, "built opening cutter");
        Ok(Outcome::Value(solid))
    }

    /// Builds the closed profile: first side, end cap, second side, start
    /// cap. Returns the reason when the marker cannot be used.
    fn profile<K: GeometryKernel>(
        &self,
        kernel: &K,
        segment: &OpeningSegment,
    ) -> std::result::Result<Profile, &'static str> {
        let curve = segment.polyline();
        let Some(start) = curve.start() else {
            return Err("marker has no vertices");
        };
        let plane = Plane::horizontal(start.z);
        let half = self.thickness / 2.0;

        let first = self.side(kernel, curve, &plane, half)?;
        let second = self.side(kernel, curve, &plane, -half)?;
        let (Some(s1), Some(e1), Some(s2), Some(e2)) =
            (first.start(), first.end(), second.start(), second.end())
        else {
            return Err("side offset has no vertices");
        };

        let pieces = vec![
            first,
            Polyline::line(e1, e2),
            second,
            Polyline::line(s1, s2),
        ];
        let mut joined = kernel
            .join(pieces, self.tolerance)
            .map_err(|_| "join failed")?;
        if joined.len() != 1 {
            return Err("outline did not join into one curve");
        }
        joined
            .pop()
            .and_then(Profile::new)
            .ok_or("outline is not closed")
    }

    fn side<K: GeometryKernel>(
        &self,
        kernel: &K,
        curve: &Polyline,
        plane: &Plane,
        distance: f64,
    ) -> std::result::Result<Polyline, &'static str> {
        kernel
            .offset(curve, plane, distance, self.tolerance, CornerStyle::Sharp)
            .map_err(|_| "offset failed")?
            .into_iter()
            .next()
            .ok_or("offset collapsed")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConstructionError, Error};
    use crate::kernel::testing::{Failure, FailingKernel};
    use crate::kernel::PrismKernel;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn marker(points: &[(f64, f64)]) -> OpeningSegment {
        OpeningSegment::new(Polyline::new(
            points.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect(),
            false,
        ))
        .unwrap()
    }

    #[test]
    fn door_cutter_is_a_box_around_the_marker() {
        let params = OpeningParams {
            thickness: 300.0,
            height: 2100.0,
        };
        let solid = OpeningCutter::door(&params, 0.01)
            .execute(&PrismKernel, &marker(&[(0.0, 0.0), (900.0, 0.0)]), &Subject::Door(0))
            .unwrap()
            .into_option()
            .unwrap();
        assert_relative_eq!(solid.volume(), 900.0 * 300.0 * 2100.0, max_relative = 1e-9);
        let (min, max) = solid.bounding_box().unwrap();
        assert_relative_eq!(min.y, -150.0, epsilon = 1e-6);
        assert_relative_eq!(max.y, 150.0, epsilon = 1e-6);
        assert_relative_eq!(max.z, 2100.0, epsilon = 1e-6);
    }

    #[test]
    fn window_cutter_sits_on_its_sill() {
        let params = WindowParams {
            thickness: 300.0,
            height: 1200.0,
            height_from_floor: 900.0,
        };
        let solid = OpeningCutter::window(&params, 0.01)
            .execute(&PrismKernel, &marker(&[(0.0, 0.0), (0.0, 1000.0)]), &Subject::Window(0))
            .unwrap()
            .into_option()
            .unwrap();
        assert_eq!(solid.z_range(), Some((900.0, 2100.0)));
    }

    #[test]
    fn bent_marker_gives_a_bent_cutter() {
        let solid = OpeningCutter::new(2.0, 1.0, 0.0, 0.01)
            .execute(
                &PrismKernel,
                &marker(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
                &Subject::Door(1),
            )
            .unwrap()
            .into_option()
            .unwrap();
        // Two 2-wide legs along a 20-long centerline, mitred at the bend.
        assert_relative_eq!(solid.volume(), 40.0, epsilon = 1e-6);
    }

    #[test]
    fn marker_too_short_for_its_thickness_is_skipped() {
        let result = OpeningCutter::new(300.0, 2100.0, 0.0, 0.01)
            .execute(
                &PrismKernel,
                &marker(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]),
                &Subject::Door(2),
            )
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn valid_profile_that_fails_to_extrude_is_fatal() {
        let kernel = FailingKernel {
            failure: Failure::ExtrudeNothing,
        };
        let err = OpeningCutter::new(300.0, 2100.0, 0.0, 0.01)
            .execute(&kernel, &marker(&[(0.0, 0.0), (900.0, 0.0)]), &Subject::Door(4))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::ExtrusionFailed {
                subject: Subject::Door(4)
            })
        ));
    }

    #[test]
    fn kernel_offset_failure_only_skips_the_opening() {
        let kernel = FailingKernel {
            failure: Failure::Offset,
        };
        let result = OpeningCutter::new(300.0, 2100.0, 0.0, 0.01)
            .execute(&kernel, &marker(&[(0.0, 0.0), (900.0, 0.0)]), &Subject::Window(1))
            .unwrap();
        assert!(result.is_empty());
    }
}
