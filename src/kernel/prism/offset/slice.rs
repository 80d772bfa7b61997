use crate::math::Point3;

use super::self_intersect::Intersection;

/// A piece of a closed polyline between two consecutive split points.
#[derive(Debug, Clone)]
pub struct Slice {
    pub points: Vec<Point3>,
}

/// Cuts a closed polyline at every intersection point.
///
/// Each intersection splits both of the segments it lies on, and both
/// slices meeting there share the intersection point exactly. Slices run
/// from one split point to the next in travel order; the last one wraps
/// around to the first.
#[must_use]
pub fn build(points: &[Point3], intersections: &[Intersection]) -> Vec<Slice> {
    if intersections.is_empty() || points.is_empty() {
        return Vec::new();
    }
    let seg_count = points.len();

    let mut splits: Vec<Split> = Vec::with_capacity(intersections.len() * 2);
    for ix in intersections {
        splits.push((ix.seg_i, ix.t_i, ix.point));
        splits.push((ix.seg_j, ix.t_j, ix.point));
    }
    splits.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let total = splits.len();
    let mut slices = Vec::with_capacity(total);
    for k in 0..total {
        let from = splits[k];
        let to = splits[(k + 1) % total];
        let slice_points = walk(points, seg_count, from, to);
        if slice_points.len() >= 2 {
            slices.push(Slice {
                points: slice_points,
            });
        }
    }
    slices
}

/// Segment index, parameter and position of a split point.
type Split = (usize, f64, Point3);

/// Collects the points from split `from` to split `to`.
fn walk(
    points: &[Point3],
    seg_count: usize,
    (seg_start, t_start, start): Split,
    (seg_end, t_end, end): Split,
) -> Vec<Point3> {
    if seg_start == seg_end && t_end >= t_start {
        return vec![start, end];
    }

    let mut out = vec![start];
    let mut seg = (seg_start + 1) % seg_count;
    while seg != seg_end {
        out.push(points[seg]);
        seg = (seg + 1) % seg_count;
    }
    out.push(points[seg_end]);
    out.push(end);
    out
}
