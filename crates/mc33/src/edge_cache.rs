//! Deduplicated edge-crossing vertices.
//!
//! Neighbouring cubes share lattice edges; each crossing must become a
//! single vertex or the mesh cracks along cube boundaries. Keys pack the
//! lattice edge into one `u64`, and the map's `entry` API makes the
//! check-then-insert atomic per key without serializing whole cubes.
//!
//! Centre vertices (edge id 12) are keyed per cube and never shared.

use dashmap::DashMap;

use crate::edge_table::{edge_origin, EDGE_AXIS};
use crate::error::{ExtractError, ExtractResult};
use crate::field::{Sample, ScalarField};
use crate::mesh::{MeshAccumulator, VertexKey};
use crate::types::{Axis, RVec3, Real, Vertex};

const COORD_BITS: u32 = 20;
const COORD_MASK: u64 = (1 << COORD_BITS) - 1;

/// Largest lattice extent per axis that keys can address.
pub const MAX_DIM: usize = 1 << COORD_BITS;

#[inline]
fn pack(p: [usize; 3]) -> u64 {
  ((p[0] as u64) << (2 * COORD_BITS)) | ((p[1] as u64) << COORD_BITS) | p[2] as u64
}

#[inline]
fn unpack(bits: u64) -> [usize; 3] {
  [
    ((bits >> (2 * COORD_BITS)) & COORD_MASK) as usize,
    ((bits >> COORD_BITS) & COORD_MASK) as usize,
    (bits & COORD_MASK) as usize,
  ]
}

/// Lattice edge from `origin` one step along `axis`.
///
/// Ordering is lexicographic in `(i, j, k, axis)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(u64);

impl EdgeKey {
  /// Coordinates must be below [`MAX_DIM`].
  #[inline]
  pub fn new(origin: [usize; 3], axis: Axis) -> Self {
    debug_assert!(origin.iter().all(|&c| c < MAX_DIM));
    Self((pack(origin) << 2) | axis as u64)
  }

  /// Key of cube-local edge `edge` (0..12) of the cube at `cube`.
  #[inline]
  pub fn of_cube_edge(cube: [usize; 3], edge: u8) -> Self {
    Self::new(edge_origin(cube, edge), EDGE_AXIS[edge as usize])
  }

  pub fn origin(self) -> [usize; 3] {
    unpack(self.0 >> 2)
  }

  pub fn axis(self) -> Axis {
    match self.0 & 3 {
      0 => Axis::X,
      1 => Axis::Y,
      _ => Axis::Z,
    }
  }

  /// Far endpoint of the edge.
  pub fn end(self) -> [usize; 3] {
    let [i, j, k] = self.origin();
    let [di, dj, dk] = self.axis().step();
    [i + di, j + dj, k + dk]
  }
}

/// Cube whose centre vertex is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CenterKey(u64);

impl CenterKey {
  #[inline]
  pub fn new(cube: [usize; 3]) -> Self {
    debug_assert!(cube.iter().all(|&c| c < MAX_DIM));
    Self(pack(cube))
  }

  pub fn cube(self) -> [usize; 3] {
    unpack(self.0)
  }
}

/// Cached vertex data; position and normal are kept for centre averaging.
#[derive(Clone, Copy, Debug)]
struct CachedVertex {
  index: u32,
  position: RVec3,
  normal: RVec3,
}

fn to_f32(v: RVec3) -> [f32; 3] {
  [v.x as f32, v.y as f32, v.z as f32]
}

/// Concurrent map from lattice edges (and cube centres) to vertex indices.
#[derive(Default)]
pub struct EdgeCache {
  edges: DashMap<EdgeKey, CachedVertex>,
  centers: DashMap<CenterKey, u32>,
}

impl EdgeCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of edge vertices created so far.
  pub fn len(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }

  /// Number of centre vertices created so far.
  pub fn center_count(&self) -> usize {
    self.centers.len()
  }

  /// Cached index for `key`, without creating anything.
  pub fn get(&self, key: EdgeKey) -> Option<u32> {
    self.edges.get(&key).map(|v| v.index)
  }

  /// Vertex index of the zero crossing on `key`, created on first request.
  ///
  /// Repeated calls return the same index. Fails when the edge leaves the
  /// lattice or its endpoints have the same sign.
  pub fn vertex_for_edge<S: Sample>(
    &self,
    field: &ScalarField<'_, S>,
    key: EdgeKey,
    mesh: &MeshAccumulator,
  ) -> ExtractResult<u32> {
    if let Some(cached) = self.edges.get(&key) {
      return Ok(cached.index);
    }

    let p0 = key.origin();
    let p1 = key.end();
    let s0 = field.sample(p0[0], p0[1], p0[2])?;
    let s1 = field.sample(p1[0], p1[1], p1[2])?;
    if !(s0 * s1 < 0.0) {
      return Err(ExtractError::inconsistency(format!(
        "edge {:?} along {:?} has no crossing ({s0}, {s1})",
        p0,
        key.axis()
      )));
    }

    let entry = self.edges.entry(key).or_insert_with(|| {
      let t = s0 / (s0 - s1);
      let x0 = field.position(p0);
      let x1 = field.position(p1);
      let position = x0 + (x1 - x0) * t;

      let n0 = field.normal_at(p0);
      let n1 = field.normal_at(p1);
      let normal = (n0 + (n1 - n0) * t)
        .try_normalize()
        .unwrap_or_else(|| axis_fallback(field, key, s1 > 0.0));

      let index = mesh.push_vertex(
        VertexKey::Edge(key),
        Vertex {
          position: to_f32(position),
          normal: to_f32(normal),
        },
      );
      CachedVertex {
        index,
        position,
        normal,
      }
    });
    Ok(entry.index)
  }

  /// Vertex index of the centre of the cube at `cube`, created on first
  /// request from the average of the cube's existing edge vertices.
  pub fn center_vertex_for_cube<S: Sample>(
    &self,
    field: &ScalarField<'_, S>,
    cube: [usize; 3],
    mesh: &MeshAccumulator,
  ) -> ExtractResult<u32> {
    let key = CenterKey::new(cube);
    if let Some(index) = self.centers.get(&key) {
      return Ok(*index);
    }

    let mut position = RVec3::ZERO;
    let mut normal = RVec3::ZERO;
    let mut first_normal = None;
    let mut count = 0usize;
    for edge in 0..12u8 {
      if let Some(v) = self.edges.get(&EdgeKey::of_cube_edge(cube, edge)) {
        position += v.position;
        normal += v.normal;
        first_normal.get_or_insert(v.normal);
        count += 1;
      }
    }
    let Some(first_normal) = first_normal else {
      return Err(ExtractError::inconsistency(format!(
        "cube {cube:?} needs a centre vertex but has no edge vertices"
      )));
    };

    let position = position / count as Real;
    let normal = (normal / count as Real)
      .try_normalize()
      .unwrap_or(first_normal);

    let entry = self.centers.entry(key).or_insert_with(|| {
      mesh.push_vertex(
        VertexKey::Center(key),
        Vertex {
          position: to_f32(position),
          normal: to_f32(normal),
        },
      )
    });
    debug_assert!(field.contains(cube));
    Ok(*entry)
  }

  /// Drop every cached vertex.
  pub fn clear(&mut self) {
    self.edges.clear();
    self.centers.clear();
  }
}

/// Normal for an edge whose endpoint gradients cancel: the edge direction,
/// pointed at the non-negative end and oriented like the field's normals.
fn axis_fallback<S: Sample>(field: &ScalarField<'_, S>, key: EdgeKey, end_positive: bool) -> RVec3 {
  let mut dir = [0.0 as Real; 3];
  dir[key.axis().index()] = if end_positive { 1.0 } else { -1.0 };
  field.orient(RVec3::from_array(dir))
}

#[cfg(test)]
#[path = "edge_cache_test.rs"]
mod edge_cache_test;
