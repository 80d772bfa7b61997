//! Wavefront OBJ export.
//!
//! Writes one named group (`g`) per mesh, with vertex positions (`v`),
//! vertex normals (`vn`) and faces (`f`) referencing both.

use std::io::{BufWriter, Write};

use crate::error::Result;

use super::TriangleMesh;

/// A named mesh written as one OBJ group.
#[derive(Debug, Clone)]
pub struct ObjGroup<'a> {
    pub name: &'a str,
    pub mesh: &'a TriangleMesh,
}

/// Writes `groups` as Wavefront OBJ text. Indices are global and 1-based.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if writing fails.
pub fn write_obj<W: Write>(writer: &mut W, groups: &[ObjGroup<'_>]) -> Result<()> {
    let vertices: usize = groups.iter().map(|g| g.mesh.vertices.len()).sum();
    let triangles: usize = groups.iter().map(|g| g.mesh.triangle_count()).sum();
    writeln!(writer, "# planshell building shell")?;
    writeln!(writer, "# Vertices: {vertices}, Triangles: {triangles}")?;

    let mut base = 1_usize;
    for group in groups {
        writeln!(writer, "g {}", group.name)?;
        for v in &group.mesh.vertices {
            writeln!(writer, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
        }
        for n in &group.mesh.normals {
            writeln!(writer, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        }
        for &[a, b, c] in &group.mesh.indices {
            let (i0, i1, i2) = (base + a as usize, base + b as usize, base + c as usize);
            writeln!(writer, "f {i0}//{i0} {i1}//{i1} {i2}//{i2}")?;
        }
        base += group.mesh.vertices.len();
    }
    Ok(())
}

/// Writes `groups` through a buffer into `sink` and hands `sink` back once
/// every byte has reached it.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if writing or the final
/// flush fails.
pub fn export_obj<W: Write>(sink: W, groups: &[ObjGroup<'_>]) -> Result<W> {
    let mut writer = BufWriter::new(sink);
    write_obj(&mut writer, groups)?;
    let mut sink = writer
        .into_inner()
        .map_err(std::io::IntoInnerError::into_error)?;
    sink.flush()?;
    Ok(sink)
}
