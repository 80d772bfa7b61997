use crate::geometry::Polyline;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point3;

use super::slice::Slice;

/// Keeps slices that stay far enough from the source curve.
///
/// A slice is sampled at the midpoint of its middle segment. Pieces closer
/// than half the offset distance belong to loops that the offset folded back
/// over the source and are discarded.
#[must_use]
pub fn apply<'a>(slices: &'a [Slice], source: &Polyline, distance: f64) -> Vec<&'a Slice> {
    let threshold = distance.abs() * 0.5;
    slices
        .iter()
        .filter(|s| {
            if s.points.len() < 2 {
                return false;
            }
            let k = (s.points.len() - 1) / 2;
            let mid = Point3::from((s.points[k].coords + s.points[k + 1].coords) * 0.5);
            min_dist(&mid, source) >= threshold
        })
        .collect()
}

/// Smallest XY distance from `p` to any segment of `curve`.
pub(super) fn min_dist(p: &Point3, curve: &Polyline) -> f64 {
    curve
        .segments()
        .map(|(a, b)| point_to_segment_dist(p, &a, &b))
        .fold(f64::MAX, f64::min)
}
