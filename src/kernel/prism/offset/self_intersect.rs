use crate::geometry::Polyline;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Point3, TOLERANCE};

/// A crossing between two segments of the same polyline.
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Index of the first segment.
    pub seg_i: usize,
    /// Index of the second segment (always > `seg_i`).
    pub seg_j: usize,
    /// Parameter on segment i (0..1).
    pub t_i: f64,
    /// Parameter on segment j (0..1).
    pub t_j: f64,
    /// Crossing position.
    pub point: Point3,
}

/// Finds all crossings between non-adjacent segments of a polyline.
///
/// Touches at a segment endpoint are not crossings and are skipped.
#[must_use]
pub fn find_all(polyline: &Polyline) -> Vec<Intersection> {
    let seg_count = polyline.segment_count();
    if seg_count < 3 {
        return Vec::new();
    }

    let segs: Vec<(Point3, Point3)> = polyline.segments().collect();
    let eps = TOLERANCE * 100.0;
    let mut results = Vec::new();

    for i in 0..seg_count {
        for j in (i + 2)..seg_count {
            if polyline.closed && i == 0 && j == seg_count - 1 {
                continue;
            }
            let (a0, a1) = &segs[i];
            let (b0, b1) = &segs[j];
            let Some((point, t, u)) = segment_segment_intersect_2d(a0, a1, b0, b1) else {
                continue;
            };
            let t_at_end = t < eps || t > 1.0 - eps;
            let u_at_end = u < eps || u > 1.0 - eps;
            if t_at_end || u_at_end {
                continue;
            }
            results.push(Intersection {
                seg_i: i,
                seg_j: j,
                t_i: t,
                t_j: u,
                point,
            });
        }
    }

    results.sort_by(|a, b| a.seg_i.cmp(&b.seg_i).then(a.t_i.total_cmp(&b.t_i)));
    results
}
