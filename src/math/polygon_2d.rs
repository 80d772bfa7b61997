use super::{Point3, Vector3, TOLERANCE};

/// Computes the signed area of a polygon projected onto the XY plane
/// (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_xy(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Signed area of an `[x, y]` contour, same convention as [`signed_area_xy`].
#[must_use]
pub fn contour_signed_area(contour: &[[f64; 2]]) -> f64 {
    let n = contour.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += contour[i][0] * contour[j][1] - contour[j][0] * contour[i][1];
    }
    sum * 0.5
}

/// Computes the unit normal of a closed polygon using Newell's method.
///
/// Returns `None` when the polygon encloses no area in any projection.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal.try_normalize(TOLERANCE)
}

/// Normalized XY direction from point `a` to point `b`, or `None` if the
/// segment has no extent in the XY plane.
#[must_use]
pub fn segment_direction(a: &Point3, b: &Point3) -> Option<Vector3> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < TOLERANCE {
        return None;
    }
    Some(Vector3::new(dx / len, dy / len, 0.0))
}

/// Returns the left-pointing normal of a direction vector in the XY plane.
#[must_use]
pub fn left_normal(dir: Vector3) -> Vector3 {
    Vector3::new(-dir.y, dir.x, 0.0)
}
