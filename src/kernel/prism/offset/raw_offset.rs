use crate::error::KernelError;
use crate::geometry::Polyline;
use crate::kernel::CornerStyle;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Maximum miter distance as a multiple of `|distance|`.
const MITER_LIMIT: f64 = 4.0;

/// Threshold for flat cap: `cos(angle) < this` → near-180° reversal.
const FLAT_CAP_COS: f64 = -0.98;

/// A source segment moved sideways by the offset distance.
struct OffsetSeg {
    start: Point3,
    end: Point3,
    dir: Vector3,
}

/// How two consecutive offset segments are connected.
enum Corner {
    /// Both segments end at one shared point.
    Miter(Point3),
    /// The previous segment ends and the next one starts at distinct points,
    /// connected by a straight cap.
    Split(Point3, Point3),
}

/// The untrimmed offset of a polyline.
pub struct RawOffset {
    pub polyline: Polyline,
    /// `true` if any offset segment ended up running against its source
    /// segment after corner trimming.
    pub inverted: bool,
}

/// Builds the raw offset polyline by moving each segment `distance` to its
/// left and connecting neighbours at corners.
///
/// # Errors
///
/// Returns `KernelError::InvalidInput` for zero-length segments and
/// `KernelError::Failed` if there is nothing to offset.
pub fn build(
    curve: &Polyline,
    distance: f64,
    corner: CornerStyle,
) -> Result<RawOffset, KernelError> {
    let seg_count = curve.segment_count();
    if seg_count == 0 {
        return Err(KernelError::Failed("no segments to offset".to_owned()));
    }

    // Phase A: offset every segment.
    let mut segs: Vec<OffsetSeg> = Vec::with_capacity(seg_count);
    for (p0, p1) in curve.segments() {
        let dir = segment_direction(&p0, &p1).ok_or_else(|| {
            KernelError::InvalidInput("zero-length segment in offset input".to_owned())
        })?;
        let shift = left_normal(dir) * distance;
        segs.push(OffsetSeg {
            start: p0 + shift,
            end: p1 + shift,
            dir,
        });
    }

    // Phase B: connect consecutive segments, remembering where each one
    // actually starts and ends after trimming.
    let mut points = Vec::with_capacity(seg_count * 2);
    let mut trimmed_starts: Vec<Point3> = segs.iter().map(|s| s.start).collect();
    let mut trimmed_ends: Vec<Point3> = segs.iter().map(|s| s.end).collect();

    let first_corner = if curve.closed { 0 } else { 1 };
    if !curve.closed {
        points.push(segs[0].start);
    }
    for i in first_corner..seg_count {
        let prev = if i == 0 { seg_count - 1 } else { i - 1 };
        match connect(&segs[prev], &segs[i], &curve.points[i], distance, corner) {
            Corner::Miter(p) => {
                trimmed_ends[prev] = p;
                trimmed_starts[i] = p;
                points.push(p);
            }
            Corner::Split(a, b) => {
                trimmed_ends[prev] = a;
                trimmed_starts[i] = b;
                points.push(a);
                points.push(b);
            }
        }
    }
    if !curve.closed {
        points.push(segs[seg_count - 1].end);
    }

    let inverted = segs
        .iter()
        .zip(trimmed_starts.iter().zip(&trimmed_ends))
        .any(|(seg, (start, end))| (end - start).dot(&seg.dir) < -TOLERANCE);

    Ok(RawOffset {
        polyline: Polyline::new(points, curve.closed),
        inverted,
    })
}

/// Decides the corner between two consecutive offset segments.
///
/// 1. Near-antiparallel (>~169°): flat cap
/// 2. Chamfered outside corner, or miter too long: bevel
/// 3. Otherwise: single miter intersection point
fn connect(
    prev: &OffsetSeg,
    next: &OffsetSeg,
    source: &Point3,
    distance: f64,
    corner: CornerStyle,
) -> Corner {
    let cos_angle = prev.dir.dot(&next.dir);
    if cos_angle < FLAT_CAP_COS {
        return Corner::Split(prev.end, next.start);
    }

    let Some((t, _)) = line_line_intersect_2d(&prev.end, &prev.dir, &next.start, &next.dir)
    else {
        // Parallel continuation.
        return Corner::Miter(next.start);
    };

    // t > 0 means the offset lines must be extended past the segment ends
    // to meet, i.e. the corner is on the outside.
    if corner == CornerStyle::Chamfer && t > TOLERANCE {
        return Corner::Split(prev.end, next.start);
    }

    let miter = prev.end + prev.dir * t;
    let dx = miter.x - source.x;
    let dy = miter.y - source.y;
    let limit = MITER_LIMIT * distance.abs();
    if dx * dx + dy * dy > limit * limit {
        return Corner::Split(prev.end, next.start);
    }
    Corner::Miter(Point3::new(miter.x, miter.y, source.z))
}
