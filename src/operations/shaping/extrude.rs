use crate::error::{ConstructionError, Result, Stage, Subject};
use crate::geometry::Profile;
use crate::kernel::GeometryKernel;
use crate::operations::Outcome;

/// Extrudes a closed profile into a capped prism.
///
/// A negative height extrudes against the profile's plane normal.
#[derive(Debug, Clone, Copy)]
pub struct ExtrudeProfile {
    height: f64,
}

impl ExtrudeProfile {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ExtrusionFailed`] if there is no profile
    /// or the kernel produces no solid, and [`ConstructionError::Kernel`] if
    /// the kernel rejects the profile.
    pub fn execute<K: GeometryKernel>(
        &self,
        kernel: &K,
        profile: Outcome<&Profile>,
        subject: &Subject,
    ) -> Result<K::Solid> {
        let Outcome::Value(profile) = profile else {
            return Err(ConstructionError::ExtrusionFailed {
                subject: subject.clone(),
            }
            .into());
        };
        let solid = kernel
            .extrude(profile.polyline(), self.height, true)
            .map_err(|source| ConstructionError::Kernel {
                stage: Stage::Extrude,
                subject: subject.clone(),
                source,
            })?;
        solid.ok_or_else(|| {
            ConstructionError::ExtrusionFailed {
                subject: subject.clone(),
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
    use crate::geometry::Polyline;
    use crate::kernel::PrismKernel;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn square() -> Profile {
        Profile::new(Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(3.0, 3.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
            ],
            true,
        ))
        .unwrap()
    }

    #[test]
    fn extrudes_up_and_down() {
        let subject = Subject::FloorSlab;
        let profile = square();
        let up = ExtrudeProfile::new(2.0)
            .execute(&PrismKernel, Outcome::Value(&profile), &subject)
            .unwrap();
        assert_relative_eq!(up.volume(), 18.0, epsilon = 1e-9);

        let down = ExtrudeProfile::new(-2.0)
            .execute(&PrismKernel, Outcome::Value(&profile), &subject)
            .unwrap();
        assert_eq!(down.z_range(), Some((-2.0, 0.0)));
    }

    #[test]
    fn missing_profile_is_fatal() {
        let err = ExtrudeProfile::new(1.0)
            .execute(&PrismKernel, Outcome::Empty, &Subject::Door(3))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::ExtrusionFailed {
                subject: Subject::Door(3)
            })
        ));
    }

    #[test]
    fn zero_height_is_fatal() {
        let profile = square();
        let err = ExtrudeProfile::new(0.0)
            .execute(&PrismKernel, Outcome::Value(&profile), &Subject::WallNetwork)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::ExtrusionFailed { .. })
        ));
    }
}
