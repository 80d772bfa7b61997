use std::collections::{HashMap, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{Result, TessellationError};
use crate::kernel::prism::Region;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// A planar triangle, counter-clockwise.
pub(crate) type Triangle2 = [[f64; 2]; 3];

/// Triangulates a planar region, holes excluded.
pub(crate) fn triangulate_region(region: &Region) -> Result<Vec<Triangle2>> {
    if region.is_empty() {
        return Ok(Vec::new());
    }

    let mut cdt = Cdt::new();
    for contour in region.shapes().iter().flatten() {
        insert_constraint_loop(&mut cdt, contour)?;
    }

    let interior = classify_interior_faces(&cdt);
    let triangles = cdt
        .inner_faces()
        .filter(|face| interior.get(&face.fix().index()).is_some_and(|depth| depth % 2 == 1))
        .map(|face| {
            face.vertices().map(|v| {
                let p = v.position();
                [p.x, p.y]
            })
        })
        .collect();
    Ok(triangles)
}

/// Inserts a closed contour as constraint edges into the CDT.
fn insert_constraint_loop(cdt: &mut Cdt, contour: &[[f64; 2]]) -> Result<()> {
    if contour.len() < 3 {
        return Err(
            TessellationError::Failed("constraint loop needs at least 3 points".into()).into(),
        );
    }

    let mut handles = Vec::with_capacity(contour.len());
    for &[x, y] in contour {
        let h = cdt
            .insert(SpadePoint2::new(x, y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed("contour edges cross".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Flood-fills constraint-crossing depth from the outer face.
///
/// Faces adjacent to the outer face start at depth 0; crossing a constraint
/// edge increments depth. Odd depth is interior.
fn classify_interior_faces(cdt: &Cdt) -> HashMap<usize, u32> {
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();
    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let crossed = cdt.is_constraint_edge(edge.as_undirected().fix());
            let new_depth = depth + u32::from(crossed);
            depth_map.insert(n_idx, new_depth);
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    depth_map
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn area(triangles: &[Triangle2]) -> f64 {
        triangles
            .iter()
            .map(|[a, b, c]| ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])) / 2.0)
            .sum()
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<[f64; 2]> {
        vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }

    #[test]
    fn square_produces_two_triangles() {
        let region = Region::from_contour(rect(0.0, 0.0, 2.0, 2.0), 0.0);
        let triangles = triangulate_region(&region).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(area(&triangles), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn concave_outline_is_covered_exactly() {
        let l_shape = vec![[0.0, 0.0], [4.0, 0.0], [4.0, 1.0], [1.0, 1.0], [1.0, 3.0], [0.0, 3.0]];
        let triangles = triangulate_region(&Region::from_contour(l_shape, 0.0)).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(area(&triangles), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn holes_are_excluded() {
        let ring = Region::from_contour(rect(0.0, 0.0, 10.0, 10.0), 0.0)
            .difference(&Region::from_contour(rect(2.0, 2.0, 8.0, 8.0), 0.0), 0.0);
        let triangles = triangulate_region(&ring).unwrap();
        assert_relative_eq!(area(&triangles), 64.0, epsilon = 1e-9);
        // Triangles are counter-clockwise, so no triangle has negative area.
        assert!(triangles.iter().all(|t| area(std::slice::from_ref(t)) > 0.0));
    }

    #[test]
    fn empty_region_has_no_triangles() {
        assert!(triangulate_region(&Region::default()).unwrap().is_empty());
    }
}
