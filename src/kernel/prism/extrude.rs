use crate::error::KernelError;
use crate::geometry::Polyline;
use crate::math::TOLERANCE;

use super::region::Region;
use super::solid::{PrismSolid, Slab};

/// Maximum elevation spread for a profile to count as horizontal.
const PLANAR_Z_TOLERANCE: f64 = 1e-6;

/// Sweeps a closed horizontal profile vertically by `height`.
///
/// Returns `Ok(None)` when the profile is open or encloses no area, or the
/// height is zero.
///
/// # Errors
///
/// Returns [`KernelError::InvalidInput`] for uncapped extrusions, non-finite
/// heights and profiles that are not horizontal.
pub fn extrude(
    profile: &Polyline,
    height: f64,
    capped: bool,
) -> Result<Option<PrismSolid>, KernelError> {
    if !capped {
        return Err(KernelError::InvalidInput(
            "an uncapped extrusion does not bound a volume".to_owned(),
        ));
    }
    if !height.is_finite() {
        return Err(KernelError::InvalidInput(format!(
            "extrusion height must be finite, got {height}"
        )));
    }
    if !profile.closed || profile.points.len() < 3 || height.abs() < TOLERANCE {
        return Ok(None);
    }

    let z = profile.points[0].z;
    if profile
        .points
        .iter()
        .any(|p| (p.z - z).abs() > PLANAR_Z_TOLERANCE)
    {
        return Err(KernelError::InvalidInput(
            "only horizontal profiles can be extruded".to_owned(),
        ));
    }

    let contour = profile.points.iter().map(|p| [p.x, p.y]).collect();
    let region = Region::from_contour(contour, TOLERANCE);
    if region.is_empty() {
        return Ok(None);
    }

    let (bottom, top) = if height > 0.0 {
        (z, z + height)
    } else {
        (z + height, z)
    };
    Ok(Some(PrismSolid::from_slabs(vec![Slab {
        bottom,
        top,
        region,
    }])))
}
