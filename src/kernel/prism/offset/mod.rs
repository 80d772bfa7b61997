//! Planar polyline offset using the slice-and-filter approach.
//!
//! 1. Offset every segment and connect neighbours at corners (raw offset).
//! 2. Find the raw offset's self-intersections.
//! 3. Slice it at those points and drop slices that fold back towards the
//!    source curve.
//! 4. Stitch the remaining slices into loops.

mod filter;
mod raw_offset;
mod self_intersect;
mod slice;
mod stitch;

use crate::error::KernelError;
use crate::geometry::Polyline;
use crate::kernel::CornerStyle;
use crate::math::polygon_2d::signed_area_xy;
use crate::math::TOLERANCE;

/// Offsets `curve` by `distance` to the left of its direction of travel in
/// the XY plane (negative distances offset to the right).
///
/// Closed curves may split into several loops; loops whose winding flipped
/// are discarded, so an empty result means the offset collapsed. An open
/// curve yields at most one curve and collapses if any segment would run
/// backwards or the result would cross itself.
///
/// # Errors
///
/// Returns `KernelError::InvalidInput` if the curve has too few distinct
/// vertices.
pub fn offset(
    curve: &Polyline,
    distance: f64,
    tol: f64,
    corner: CornerStyle,
) -> Result<Vec<Polyline>, KernelError> {
    let curve = curve.deduplicated(tol);
    let min_points = if curve.closed { 3 } else { 2 };
    if curve.points.len() < min_points {
        return Err(KernelError::InvalidInput(format!(
            "at least {min_points} distinct vertices required for offset"
        )));
    }

    if distance.abs() < TOLERANCE {
        return Ok(vec![curve]);
    }

    if curve.closed {
        offset_closed(&curve, distance, tol, corner)
    } else {
        offset_open(&curve, distance, corner)
    }
}

fn offset_closed(
    curve: &Polyline,
    distance: f64,
    tol: f64,
    corner: CornerStyle,
) -> Result<Vec<Polyline>, KernelError> {
    let raw = raw_offset::build(curve, distance, corner)?;

    let intersections = self_intersect::find_all(&raw.polyline);
    let loops = if intersections.is_empty() {
        // Inverted segments without any crossing mean the whole loop flipped
        // through itself.
        if raw.inverted {
            return Ok(Vec::new());
        }
        vec![raw.polyline]
    } else {
        let slices = slice::build(&raw.polyline.points, &intersections);
        let valid = filter::apply(&slices, curve, distance);
        stitch::connect(&valid)
    };

    let source_sign = signed_area_xy(&curve.points).signum();
    let min_area = tol * tol;
    let clearance = distance.abs() - tol;
    Ok(loops
        .into_iter()
        .filter(|l| {
            let area = signed_area_xy(&l.points);
            area.signum() == source_sign && area.abs() > min_area
        })
        .filter(|l| l.points.iter().all(|p| filter::min_dist(p, curve) >= clearance))
        .collect())
}

fn offset_open(
    curve: &Polyline,
    distance: f64,
    corner: CornerStyle,
) -> Result<Vec<Polyline>, KernelError> {
    let raw = raw_offset::build(curve, distance, corner)?;
    if raw.inverted || raw.polyline.is_self_intersecting() {
        return Ok(Vec::new());
    }
    Ok(vec![raw.polyline])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn square_ccw(size: f64) -> Polyline {
        Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(size, 0.0, 0.0),
                Point3::new(size, size, 0.0),
                Point3::new(0.0, size, 0.0),
            ],
            true,
        )
    }

    fn area(p: &Polyline) -> f64 {
        signed_area_xy(&p.points)
    }

    #[test]
    fn square_inward_and_outward() {
        let inner = offset(&square_ccw(10.0), 1.0, 0.01, CornerStyle::Sharp).unwrap();
        assert_eq!(inner.len(), 1);
        assert!((area(&inner[0]) - 64.0).abs() < 1e-9);

        let outer = offset(&square_ccw(10.0), -1.0, 0.01, CornerStyle::Sharp).unwrap();
        assert_eq!(outer.len(), 1);
        assert!((area(&outer[0]) - 144.0).abs() < 1e-9);
    }

    #[test]
    fn clockwise_loop_keeps_its_winding() {
        let cw = square_ccw(10.0).reversed();
        // Left of a clockwise loop is outside.
        let grown = offset(&cw, 1.0, 0.01, CornerStyle::Sharp).unwrap();
        assert_eq!(grown.len(), 1);
        assert!((area(&grown[0]) + 144.0).abs() < 1e-9);
    }

    #[test]
    fn inward_offset_past_half_width_collapses() {
        let result = offset(&square_ccw(10.0), 6.0, 0.01, CornerStyle::Sharp).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn inward_offset_past_half_width_of_a_rectangle_collapses() {
        let strip = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(20.0, 0.0, 0.0),
                Point3::new(20.0, 4.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
            true,
        );
        assert!(offset(&strip, 3.0, 0.01, CornerStyle::Sharp).unwrap().is_empty());
        assert!(offset(&strip, 3.0, 0.01, CornerStyle::Chamfer).unwrap().is_empty());
        assert_eq!(offset(&strip, 1.0, 0.01, CornerStyle::Sharp).unwrap().len(), 1);
    }

    #[test]
    fn narrow_neck_splits_into_two_loops() {
        // Two blobs joined by a neck narrower than twice the offset.
        let dumbbell = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 1.5, 0.0),
                Point3::new(6.0, 1.5, 0.0),
                Point3::new(6.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(10.0, 4.0, 0.0),
                Point3::new(5.5, 4.0, 0.0),
                Point3::new(5.5, 2.3, 0.0),
                Point3::new(4.5, 2.3, 0.0),
                Point3::new(4.5, 4.0, 0.0),
                Point3::new(0.0, 4.0, 0.0),
            ],
            true,
        );
        let loops = offset(&dumbbell, 1.0, 0.01, CornerStyle::Sharp).unwrap();
        assert_eq!(loops.len(), 2);
        for l in &loops {
            assert!(l.closed);
            assert!(!l.is_self_intersecting());
            assert!((area(l) - 4.25).abs() < 1e-9, "area {}", area(l));
        }
    }

    #[test]
    fn open_line_offsets_to_the_left() {
        let line = Polyline::line(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let result = offset(&line, 1.0, 0.01, CornerStyle::Sharp).unwrap();
        assert_eq!(result.len(), 1);
        assert!(!result[0].closed);
        assert!(result[0].points.iter().all(|p| (p.y - 1.0).abs() < 1e-12));
    }

    #[test]
    fn open_corner_collapses_only_on_the_short_side() {
        let corner = Polyline::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            false,
        );
        assert!(offset(&corner, 1.5, 0.01, CornerStyle::Sharp).unwrap().is_empty());
        assert_eq!(offset(&corner, -1.5, 0.01, CornerStyle::Sharp).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_vertices_are_ignored() {
        let mut square = square_ccw(10.0);
        square.points.insert(1, Point3::new(0.0, 0.0, 0.0));
        let result = offset(&square, 1.0, 0.01, CornerStyle::Sharp).unwrap();
        assert_eq!(result[0].points.len(), 4);
    }

    #[test]
    fn too_few_vertices_is_an_error() {
        let point = Polyline::new(vec![Point3::origin(), Point3::origin()], false);
        assert!(offset(&point, 1.0, 0.01, CornerStyle::Sharp).is_err());
    }
}
