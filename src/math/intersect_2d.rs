use super::{Point3, Vector3, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector3,
    p2: &Point3,
    d2: &Vector3,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in the XY plane.
///
/// Returns `(point, t, u)` with `t` on `a0→a1` and `u` on `b0→b1`, both
/// clamped to `[0, 1]`. Parallel and collinear segments report no crossing.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<(Point3, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    let eps = TOLERANCE;
    if (-eps..=1.0 + eps).contains(&t) && (-eps..=1.0 + eps).contains(&u) {
        let t = t.clamp(0.0, 1.0);
        let pt = Point3::new(a0.x + da.x * t, a0.y + da.y * t, a0.z);
        Some((pt, t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_meet_in_the_middle() {
        let (pt, t, u) = segment_segment_intersect_2d(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(2.0, 2.0, 0.0),
            &Point3::new(0.0, 2.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn disjoint_segments_do_not_meet() {
        let hit = segment_segment_intersect_2d(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, -1.0, 0.0),
            &Point3::new(2.0, 1.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let d = Vector3::new(1.0, 0.0, 0.0);
        let hit = line_line_intersect_2d(
            &Point3::new(0.0, 0.0, 0.0),
            &d,
            &Point3::new(0.0, 1.0, 0.0),
            &d,
        );
        assert!(hit.is_none());
    }
}
