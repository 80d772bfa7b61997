use super::Point3;

/// Returns the minimum XY distance from `p` to the segment `a→b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point3, a: &Point3, b: &Point3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    // Project onto the infinite line, clamp to the segment.
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;

    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

/// XY distance between two points.
#[must_use]
pub fn point_dist_xy(a: &Point3, b: &Point3) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_segment_interior_and_ends() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, 0.0, 0.0);
        assert!((point_to_segment_dist(&Point3::new(5.0, 3.0, 0.0), &a, &b) - 3.0).abs() < 1e-12);
        assert!((point_to_segment_dist(&Point3::new(13.0, 4.0, 0.0), &a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let a = Point3::new(1.0, 1.0, 0.0);
        let d = point_to_segment_dist(&Point3::new(4.0, 5.0, 0.0), &a, &a);
        assert!((d - 5.0).abs() < 1e-12);
    }
}
