use crate::error::Result;
use crate::kernel::prism::{Region, Slab};
use crate::kernel::PrismSolid;
use crate::math::polygon_2d::contour_signed_area;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::tessellate_face::triangulate_region;
use super::TriangleMesh;

/// Tessellates a prism solid into a closed triangle mesh.
///
/// Each slab contributes its side walls and the parts of its top and bottom
/// faces not covered by the slab stacked directly on it.
pub struct TessellateSolid<'a> {
    solid: &'a PrismSolid,
    /// Slivers at or below this area are dropped from exposed caps.
    min_area: f64,
}

impl<'a> TessellateSolid<'a> {
    #[must_use]
    pub fn new(solid: &'a PrismSolid, min_area: f64) -> Self {
        Self { solid, min_area }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if a cap cannot be triangulated.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let slabs = self.solid.slabs();
        let mut mesh = TriangleMesh::default();
        for (i, slab) in slabs.iter().enumerate() {
            let below = i
                .checked_sub(1)
                .and_then(|j| slabs.get(j))
                .filter(|s| (s.top - slab.bottom).abs() <= TOLERANCE);
            let above = slabs
                .get(i + 1)
                .filter(|s| (s.bottom - slab.top).abs() <= TOLERANCE);

            let top = self.exposed(&slab.region, above);
            add_cap(&mut mesh, &top, slab.top, true)?;
            let bottom = self.exposed(&slab.region, below);
            add_cap(&mut mesh, &bottom, slab.bottom, false)?;
            add_sides(&mut mesh, slab)?;
        }
        Ok(mesh)
    }

    fn exposed(&self, region: &Region, neighbor: Option<&Slab>) -> Region {
        match neighbor {
            Some(neighbor) => region.difference(&neighbor.region, self.min_area),
            None => region.clone(),
        }
    }
}

fn add_cap(mesh: &mut TriangleMesh, region: &Region, z: f64, upward: bool) -> Result<()> {
    let normal = Vector3::new(0.0, 0.0, if upward { 1.0 } else { -1.0 });
    for [a, b, c] in triangulate_region(region)? {
        let ia = mesh.push_vertex(Point3::new(a[0], a[1], z), normal)?;
        let ib = mesh.push_vertex(Point3::new(b[0], b[1], z), normal)?;
        let ic = mesh.push_vertex(Point3::new(c[0], c[1], z), normal)?;
        mesh.indices.push(if upward { [ia, ib, ic] } else { [ia, ic, ib] });
    }
    Ok(())
}

/// One quad per contour edge, facing away from the material.
fn add_sides(mesh: &mut TriangleMesh, slab: &Slab) -> Result<()> {
    for shape in slab.region.shapes() {
        for (k, contour) in shape.iter().enumerate() {
            // Material to the left: outer contour counter-clockwise, holes clockwise.
            let counter_clockwise = contour_signed_area(contour) > 0.0;
            let reverse = counter_clockwise != (k == 0);
            let n = contour.len();
            for e in 0..n {
                let (mut a, mut b) = (contour[e], contour[(e + 1) % n]);
                if reverse {
                    std::mem::swap(&mut a, &mut b);
                }
                let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
                let length = dx.hypot(dy);
                if length <= TOLERANCE {
                    continue;
                }
                let normal = Vector3::new(dy / length, -dx / length, 0.0);
                let a0 = mesh.push_vertex(Point3::new(a[0], a[1], slab.bottom), normal)?;
                let b0 = mesh.push_vertex(Point3::new(b[0], b[1], slab.bottom), normal)?;
                let b1 = mesh.push_vertex(Point3::new(b[0], b[1], slab.top), normal)?;
                let a1 = mesh.push_vertex(Point3::new(a[0], a[1], slab.top), normal)?;
                mesh.indices.push([a0, b0, b1]);
                mesh.indices.push([a0, b1, a1]);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polyline;
    use crate::kernel::{GeometryKernel, PrismKernel};
    use approx::assert_relative_eq;

    fn block(x0: f64, y0: f64, x1: f64, y1: f64, z0: f64, h: f64) -> PrismSolid {
        let rect = Polyline::new(
            vec![
                Point3::new(x0, y0, z0),
                Point3::new(x1, y0, z0),
                Point3::new(x1, y1, z0),
                Point3::new(x0, y1, z0),
            ],
            true,
        );
        PrismKernel.extrude(&rect, h, true).unwrap().unwrap()
    }

    #[test]
    fn box_has_twelve_outward_triangles() {
        let solid = block(0.0, 0.0, 2.0, 3.0, 0.0, 4.0);
        let mesh = TessellateSolid::new(&solid, 0.0).execute().unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert_relative_eq!(mesh.signed_volume(), 24.0, epsilon = 1e-9);
        assert_eq!(mesh.normals.len(), mesh.vertices.len());
    }

    #[test]
    fn stacked_slabs_hide_shared_faces() {
        // A step: wide base with a narrow block on top.
        let solid = PrismKernel
            .boolean_union(
                vec![
                    block(0.0, 0.0, 4.0, 2.0, 0.0, 1.0),
                    block(0.0, 0.0, 2.0, 2.0, 1.0, 1.0),
                ],
                0.001,
            )
            .unwrap()
            .remove(0);
        let mesh = TessellateSolid::new(&solid, 0.0).execute().unwrap();
        assert_relative_eq!(mesh.signed_volume(), 12.0, epsilon = 1e-9);
        let top_area: f64 = mesh
            .indices
            .iter()
            .filter(|[a, _, _]| mesh.normals[*a as usize].z > 0.5)
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    mesh.vertices[a as usize],
                    mesh.vertices[b as usize],
                    mesh.vertices[c as usize],
                );
                (b - a).cross(&(c - a)).norm() / 2.0
            })
            .sum();
        // Upper block top (4) plus the exposed step (4).
        assert_relative_eq!(top_area, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn hollow_ring_is_closed() {
        let ring = PrismKernel
            .boolean_difference(
                &block(0.0, 0.0, 10.0, 10.0, 0.0, 3.0),
                vec![block(1.0, 1.0, 9.0, 9.0, 0.0, 3.0)],
                0.001,
            )
            .unwrap()
            .remove(0);
        let mesh = TessellateSolid::new(&ring, 0.0).execute().unwrap();
        assert_relative_eq!(mesh.signed_volume(), ring.volume(), epsilon = 1e-6);
    }
}
