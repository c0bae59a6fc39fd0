//! Minimal Wavefront OBJ export.
//!
//! ```text
//! v x y z        one per vertex
//! vn nx ny nz    one per vertex, same order
//! f a//a b//b c//c   1-based, position and normal share the index
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use web_time::Instant;

use crate::error::ExtractResult;
use crate::types::MeshOutput;

/// Serialize `mesh` as OBJ text into `out`.
pub fn write_obj<W: Write>(mesh: &MeshOutput, mut out: W) -> ExtractResult<()> {
  for v in &mesh.vertices {
    let [x, y, z] = v.position;
    writeln!(out, "v {x} {y} {z}")?;
  }
  for v in &mesh.vertices {
    let [x, y, z] = v.normal;
    writeln!(out, "vn {x} {y} {z}")?;
  }
  for [a, b, c] in mesh.triangles() {
    let (a, b, c) = (a + 1, b + 1, c + 1);
    writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
  }
  out.flush()?;
  Ok(())
}

/// Write `mesh` to the file at `path`, replacing it.
pub fn save_obj(mesh: &MeshOutput, path: impl AsRef<Path>) -> ExtractResult<()> {
  let path = path.as_ref();
  let start = Instant::now();
  let file = File::create(path)?;
  write_obj(mesh, BufWriter::new(file))?;
  info!(
    path = %path.display(),
    vertices = mesh.vertices.len(),
    triangles = mesh.triangle_count(),
    ms = start.elapsed().as_secs_f64() * 1000.0,
    "saved obj"
  );
  Ok(())
}

#[cfg(test)]
#[path = "obj_test.rs"]
mod obj_test;
