//! Thread-safe mesh accumulation.
//!
//! Workers append vertices and triangles in whatever order rayon schedules
//! them. Each vertex remembers the lattice key it came from so
//! [`MeshAccumulator::finish`] can optionally rebuild a canonical order that
//! does not depend on scheduling.

use std::sync::{Mutex, PoisonError};

use crate::edge_cache::{CenterKey, EdgeKey};
use crate::types::{MeshOutput, MinMaxAABB, Vertex};

/// Lattice origin of an output vertex. Edge vertices sort before centres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexKey {
  Edge(EdgeKey),
  Center(CenterKey),
}

#[derive(Default)]
struct MeshInner {
  vertices: Vec<Vertex>,
  keys: Vec<VertexKey>,
  indices: Vec<u32>,
  bounds: MinMaxAABB,
}

/// Append-only vertex and index buffers behind a lock.
#[derive(Default)]
pub struct MeshAccumulator {
  inner: Mutex<MeshInner>,
}

impl MeshAccumulator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a vertex and return its index.
  pub fn push_vertex(&self, key: VertexKey, vertex: Vertex) -> u32 {
    let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
    let index = inner.vertices.len() as u32;
    inner.bounds.encapsulate(vertex.position);
    inner.vertices.push(vertex);
    inner.keys.push(key);
    index
  }

  /// Append a cube's triangles as one contiguous block.
  pub fn push_triangles(&self, triangles: &[[u32; 3]]) {
    if triangles.is_empty() {
      return;
    }
    let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
    inner.indices.extend(triangles.iter().flatten());
  }

  /// Number of vertices so far.
  pub fn len(&self) -> usize {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner).vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Take the buffers out as a [`MeshOutput`].
  ///
  /// With `canonical`, vertices are sorted by lattice key, every triangle is
  /// rotated (winding kept) so its smallest index comes first, and triangles
  /// are sorted. Two runs over the same input then produce identical output.
  pub fn finish(self, canonical: bool) -> MeshOutput {
    let inner = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
    if canonical {
      canonicalize(inner)
    } else {
      MeshOutput {
        vertices: inner.vertices,
        indices: inner.indices,
        bounds: inner.bounds,
      }
    }
  }
}

fn canonicalize(inner: MeshInner) -> MeshOutput {
  let MeshInner {
    vertices,
    keys,
    indices,
    bounds,
  } = inner;

  let mut order: Vec<u32> = (0..vertices.len() as u32).collect();
  order.sort_unstable_by_key(|&i| keys[i as usize]);

  let mut remap = vec![0u32; vertices.len()];
  for (new, &old) in order.iter().enumerate() {
    remap[old as usize] = new as u32;
  }
  let vertices = order.iter().map(|&old| vertices[old as usize]).collect();

  let mut triangles: Vec<[u32; 3]> = indices
    .chunks_exact(3)
    .map(|t| {
      let tri = [remap[t[0] as usize], remap[t[1] as usize], remap[t[2] as usize]];
      rotate_min_first(tri)
    })
    .collect();
  triangles.sort_unstable();

  MeshOutput {
    vertices,
    indices: triangles.into_iter().flatten().collect(),
    bounds,
  }
}

/// Cyclic rotation putting the smallest index first.
#[inline]
fn rotate_min_first([a, b, c]: [u32; 3]) -> [u32; 3] {
  if a <= b && a <= c {
    [a, b, c]
  } else if b <= a && b <= c {
    [b, c, a]
  } else {
    [c, a, b]
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
