use crate::geometry::Polyline;
use crate::math::distance_2d::point_dist_xy;
use crate::math::Point3;

/// Chains curves whose endpoints meet within `tol`.
///
/// Closed inputs pass through unchanged. Open curves are appended or
/// prepended to the current chain (reversing them when needed) until no
/// candidate meets either end; a chain whose ends meet is closed.
#[must_use]
pub fn join(curves: Vec<Polyline>, tol: f64) -> Vec<Polyline> {
    let mut results = Vec::new();
    let mut open: Vec<Option<Polyline>> = Vec::new();
    for curve in curves {
        if curve.points.len() < 2 {
            continue;
        }
        if curve.closed {
            results.push(curve);
        } else {
            open.push(Some(curve));
        }
    }

    for start in 0..open.len() {
        let Some(first) = open[start].take() else {
            continue;
        };
        let mut chain = first.points;

        loop {
            let (Some(&head), Some(&tail)) = (chain.first(), chain.last()) else {
                break;
            };
            if chain.len() > 2 && point_dist_xy(&head, &tail) <= tol {
                break;
            }
            let Some((index, attach)) = find_attachment(&open, &head, &tail, tol) else {
                break;
            };
            let Some(next) = open[index].take() else {
                break;
            };
            let mut points = next.points;
            match attach {
                Attach::TailToStart => chain.extend(points.drain(1..)),
                Attach::TailToEnd => {
                    points.reverse();
                    chain.extend(points.drain(1..));
                }
                Attach::HeadToEnd => {
                    points.pop();
                    points.extend(chain);
                    chain = points;
                }
                Attach::HeadToStart => {
                    points.reverse();
                    points.pop();
                    points.extend(chain);
                    chain = points;
                }
            }
        }

        let closes = chain.len() > 2
            && matches!(
                (chain.first(), chain.last()),
                (Some(a), Some(b)) if point_dist_xy(a, b) <= tol
            );
        if closes {
            chain.pop();
        }
        results.push(Polyline::new(chain, closes));
    }

    results
}

#[derive(Debug, Clone, Copy)]
enum Attach {
    TailToStart,
    TailToEnd,
    HeadToEnd,
    HeadToStart,
}

fn find_attachment(
    open: &[Option<Polyline>],
    head: &Point3,
    tail: &Point3,
    tol: f64,
) -> Option<(usize, Attach)> {
    for (index, candidate) in open.iter().enumerate() {
        let Some(candidate) = candidate else {
            continue;
        };
        let (Some(start), Some(end)) = (candidate.start(), candidate.end()) else {
            continue;
        };
        if point_dist_xy(tail, &start) <= tol {
            return Some((index, Attach::TailToStart));
        }
        if point_dist_xy(tail, &end) <= tol {
            return Some((index, Attach::TailToEnd));
        }
        if point_dist_xy(head, &end) <= tol {
            return Some((index, Attach::HeadToEnd));
        }
        if point_dist_xy(head, &start) <= tol {
            return Some((index, Attach::HeadToStart));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn four_sides_in_mixed_directions_close_into_one_loop() {
        // Same layout as an opening outline: side, end cap, opposite side
        // (running the same way as the first), start cap.
        let curves = vec![
            Polyline::line(p(0.0, 1.0), p(4.0, 1.0)),
            Polyline::line(p(4.0, 1.0), p(4.0, -1.0)),
            Polyline::line(p(0.0, -1.0), p(4.0, -1.0)),
            Polyline::line(p(0.0, 1.0), p(0.0, -1.0)),
        ];
        let joined = join(curves, 0.01);
        assert_eq!(joined.len(), 1);
        assert!(joined[0].closed);
        assert_eq!(joined[0].points.len(), 4);
    }

    #[test]
    fn disconnected_pieces_stay_separate() {
        let curves = vec![
            Polyline::line(p(0.0, 0.0), p(1.0, 0.0)),
            Polyline::line(p(5.0, 0.0), p(6.0, 0.0)),
        ];
        let joined = join(curves, 0.01);
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|c| !c.closed));
    }

    #[test]
    fn gaps_within_tolerance_are_bridged() {
        let curves = vec![
            Polyline::line(p(0.0, 0.0), p(1.0, 0.0)),
            Polyline::line(p(1.005, 0.0), p(1.0, 1.0)),
        ];
        let joined = join(curves, 0.01);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].points.len(), 3);
    }

    #[test]
    fn closed_input_passes_through() {
        let square = Polyline::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)], true);
        let joined = join(vec![square.clone()], 0.01);
        assert_eq!(joined, vec![square]);
    }
}
