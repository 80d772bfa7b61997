use crate::geometry::Polyline;
use crate::math::Point3;

use super::slice::Slice;

const STITCH_TOL_SQ: f64 = 1e-8;

/// Stitches slices back into closed loops by matching endpoints.
///
/// Greedy: each chain is extended with the closest unused slice whose start
/// meets the chain's end. Chains with fewer than three points are dropped.
#[must_use]
pub fn connect(slices: &[&Slice]) -> Vec<Polyline> {
    let n = slices.len();
    let mut used = vec![false; n];
    let mut results = Vec::new();

    for start in 0..n {
        if used[start] {
            continue;
        }
        used[start] = true;
        let mut chain: Vec<Point3> = slices[start].points.clone();

        while let Some(end) = chain.last().copied() {
            let mut best: Option<usize> = None;
            let mut best_dist_sq = STITCH_TOL_SQ;
            for (candidate, slice) in slices.iter().enumerate() {
                if used[candidate] {
                    continue;
                }
                let dist_sq = dist_sq_xy(&slice.points[0], &end);
                if dist_sq < best_dist_sq {
                    best_dist_sq = dist_sq;
                    best = Some(candidate);
                }
            }
            let Some(next) = best else {
                break;
            };
            used[next] = true;
            chain.extend_from_slice(&slices[next].points[1..]);
        }

        if let (Some(first), Some(last)) = (chain.first(), chain.last()) {
            if dist_sq_xy(first, last) < STITCH_TOL_SQ {
                chain.pop();
            }
        }
        if chain.len() >= 3 {
            results.push(Polyline::new(chain, true));
        }
    }

    results
}

fn dist_sq_xy(a: &Point3, b: &Point3) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
