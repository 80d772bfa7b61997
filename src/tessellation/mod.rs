//! Triangle meshes for rendering and export.

mod obj;
mod tessellate_face;
mod tessellate_solid;

pub use obj::{export_obj, write_obj, ObjGroup};
pub use tessellate_solid::TessellateSolid;

use crate::error::{Result, TessellationError};
use crate::math::{Point3, Vector3};

/// A triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices, counter-clockwise seen from outside.
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends `other`, shifting its indices past the existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::Failed`] if the combined vertex count
    /// does not fit a `u32` index.
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        let base = vertex_index(self.vertices.len())?;
        vertex_index(self.vertices.len() + other.vertices.len())?;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
        Ok(())
    }

    /// Adds a vertex and returns its index.
    pub(crate) fn push_vertex(&mut self, position: Point3, normal: Vector3) -> Result<u32> {
        let index = vertex_index(self.vertices.len())?;
        self.vertices.push(position);
        self.normals.push(normal);
        Ok(index)
    }

    /// Signed enclosed volume by the divergence theorem. Positive for a
    /// closed mesh with outward-facing triangles.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (
                    self.vertices[a as usize].coords,
                    self.vertices[b as usize].coords,
                    self.vertices[c as usize].coords,
                );
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }
}

fn vertex_index(count: usize) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        TessellationError::Failed(format!("{count} vertices exceed u32 indexing")).into()
    })
}
