use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space, defined by an origin and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// Returns `None` if the normal is zero-length.
    #[must_use]
    pub fn new(origin: Point3, normal: Vector3) -> Option<Self> {
        let normal = normal.try_normalize(TOLERANCE)?;
        Some(Self { origin, normal })
    }

    /// The world XY plane: origin at zero, normal along +Z.
    #[must_use]
    pub fn world_xy() -> Self {
        Self::horizontal(0.0)
    }

    /// A horizontal plane at elevation `z` with its normal pointing up.
    #[must_use]
    pub fn horizontal(z: f64) -> Self {
        Self {
            origin: Point3::new(0.0, 0.0, z),
            normal: Vector3::z(),
        }
    }

    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns `true` if the normal is parallel to the Z axis within `tol`.
    #[must_use]
    pub fn is_horizontal(&self, tol: f64) -> bool {
        self.normal.z.abs() >= 1.0 - tol
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_xy_is_horizontal() {
        let plane = Plane::world_xy();
        assert!(plane.is_horizontal(1e-9));
        assert!((plane.signed_distance(&Point3::new(3.0, 4.0, 2.5)) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane::new(Point3::origin(), Vector3::zeros()).is_none());
    }

    #[test]
    fn vertical_plane_is_not_horizontal() {
        let plane = Plane::new(Point3::origin(), Vector3::x()).unwrap_or_else(Plane::world_xy);
        assert!(!plane.is_horizontal(1e-6));
    }
}
