use crate::math::distance_2d::point_dist_xy;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::{newell_normal, signed_area_xy};
use crate::math::{Point3, Vector3};

use super::Plane;

/// Winding of a closed planar curve as seen from a reference plane's normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveOrientation {
    Clockwise,
    CounterClockwise,
    /// The curve is open, non-planar, self-intersecting, or encloses no
    /// area in the reference plane.
    Undefined,
}

/// A piecewise-linear curve.
///
/// For closed polylines the last vertex connects back to the first; the
/// first vertex is not repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3>,
    pub closed: bool,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// A single straight segment from `a` to `b`.
    #[must_use]
    pub fn line(a: Point3, b: Point3) -> Self {
        Self {
            points: vec![a, b],
            closed: false,
        }
    }

    /// First vertex, if any.
    #[must_use]
    pub fn start(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// End of the curve. For closed polylines this is the start vertex.
    #[must_use]
    pub fn end(&self) -> Option<Point3> {
        if self.closed {
            self.start()
        } else {
            self.points.last().copied()
        }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates over `(start, end)` pairs of every segment, including the
    /// closing segment of a closed polyline.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        let n = self.points.len();
        (0..self.segment_count()).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Reverses the direction of travel in place. Shape is unchanged.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Returns a copy traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
            closed: self.closed,
        }
    }

    /// Drops consecutive vertices closer than `tol` in XY, including a
    /// repeated closing vertex on closed polylines.
    #[must_use]
    pub fn deduplicated(&self, tol: f64) -> Self {
        let mut points: Vec<Point3> = Vec::with_capacity(self.points.len());
        for &p in &self.points {
            if points.last().is_some_and(|last| point_dist_xy(last, &p) <= tol) {
                continue;
            }
            points.push(p);
        }
        if self.closed && points.len() > 1 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if point_dist_xy(first, last) <= tol {
                    points.pop();
                }
            }
        }
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Returns the plane the curve lies on, if every vertex is within `tol`
    /// of it.
    ///
    /// Only closed curves with non-zero area define a plane. For horizontal
    /// curves the returned normal always points up, independent of winding.
    #[must_use]
    pub fn try_get_plane(&self, tol: f64) -> Option<Plane> {
        if !self.closed {
            return None;
        }
        let mut normal = newell_normal(&self.points)?;
        if normal.z < 0.0 {
            normal = -normal;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.points.len() as f64;
        let centroid = self
            .points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords)
            / count;
        let plane = Plane::new(Point3::from(centroid), normal)?;
        self.points
            .iter()
            .all(|p| plane.signed_distance(p).abs() <= tol)
            .then_some(plane)
    }

    /// Returns `true` if any two non-adjacent segments touch or cross in XY.
    #[must_use]
    pub fn is_self_intersecting(&self) -> bool {
        let segs: Vec<(Point3, Point3)> = self.segments().collect();
        let count = segs.len();
        for i in 0..count {
            for j in (i + 2)..count {
                if self.closed && i == 0 && j == count - 1 {
                    continue;
                }
                let (a0, a1) = &segs[i];
                let (b0, b1) = &segs[j];
                if segment_segment_intersect_2d(a0, a1, b0, b1).is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// Determines the winding of a closed curve as seen from `reference`'s
    /// normal. Only horizontal reference planes are meaningful here.
    ///
    /// Repeated vertices (within `tol`) are ignored.
    #[must_use]
    pub fn orientation(&self, reference: &Plane, tol: f64) -> CurveOrientation {
        let curve = self.deduplicated(tol);
        if !curve.closed || curve.points.len() < 3 {
            return CurveOrientation::Undefined;
        }
        if curve.try_get_plane(tol).is_none() || curve.is_self_intersecting() {
            return CurveOrientation::Undefined;
        }
        let area = signed_area_xy(&curve.points) * reference.normal().z.signum();
        if area.abs() <= tol * tol {
            CurveOrientation::Undefined
        } else if area > 0.0 {
            CurveOrientation::CounterClockwise
        } else {
            CurveOrientation::Clockwise
        }
    }
}
