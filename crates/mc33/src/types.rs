//! Core data types shared by every stage of the extractor.

/// Working precision of the whole pipeline.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;
#[cfg(feature = "single-precision")]
pub type Real = f32;

#[cfg(not(feature = "single-precision"))]
pub type RVec3 = glam::DVec3;
#[cfg(feature = "single-precision")]
pub type RVec3 = glam::Vec3;

/// Default magnitude samples are nudged to when they land on the isovalue.
pub const DEFAULT_EPSILON: Real = 1e-6;

/// Lattice axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Axis {
  X = 0,
  Y = 1,
  Z = 2,
}

impl Axis {
  pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  /// Unit step along this axis.
  #[inline]
  pub fn step(self) -> [usize; 3] {
    match self {
      Axis::X => [1, 0, 0],
      Axis::Y => [0, 1, 0],
      Axis::Z => [0, 0, 1],
    }
  }
}

/// Output vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// Position in physical units (lattice coordinate times spacing).
  pub position: [f32; 3],

  /// Surface normal (unit vector).
  pub normal: [f32; 3],
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 0.0, 1.0],
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }

  /// Midpoint of the box, origin when empty.
  pub fn center(&self) -> [f32; 3] {
    if !self.is_valid() {
      return [0.0; 3];
    }
    [
      0.5 * (self.min[0] + self.max[0]),
      0.5 * (self.min[1] + self.max[1]),
      0.5 * (self.min[2] + self.max[2]),
    ]
  }

  /// Largest half-extent over the three axes, 0 when empty.
  pub fn max_extent(&self) -> f32 {
    if !self.is_valid() {
      return 0.0;
    }
    (0..3)
      .map(|a| 0.5 * (self.max[a] - self.min[a]))
      .fold(0.0, f32::max)
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extracted isosurface.
#[derive(Clone, Debug, Default)]
pub struct MeshOutput {
  /// Vertices with positions and normals.
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 indices per triangle, counter-clockwise seen from
  /// the non-negative side of the field).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Index triples, one per triangle.
  pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|t| [t[0], t[1], t[2]])
  }

  pub fn bmin(&self) -> [f32; 3] {
    self.bounds.min
  }

  pub fn bmax(&self) -> [f32; 3] {
    self.bounds.max
  }

  /// Bounding-box midpoint.
  pub fn center(&self) -> [f32; 3] {
    self.bounds.center()
  }

  /// Half of the largest bounding-box side.
  pub fn max_extent(&self) -> f32 {
    self.bounds.max_extent()
  }

  /// Copy centred on the origin and scaled so the largest half-extent is 1.
  ///
  /// This is the model transform a viewer applies to fit the surface in a
  /// unit view volume. Normals are unchanged by a uniform scale.
  pub fn normalized(&self) -> MeshOutput {
    let extent = self.max_extent();
    if extent <= 0.0 {
      return self.clone();
    }
    let center = self.center();
    let scale = extent.recip();

    let mut out = MeshOutput {
      vertices: Vec::with_capacity(self.vertices.len()),
      indices: self.indices.clone(),
      bounds: MinMaxAABB::empty(),
    };
    for v in &self.vertices {
      let p = [
        (v.position[0] - center[0]) * scale,
        (v.position[1] - center[1]) * scale,
        (v.position[2] - center[2]) * scale,
      ];
      out.bounds.encapsulate(p);
      out.vertices.push(Vertex {
        position: p,
        normal: v.normal,
      });
    }
    out
  }
}

/// Per-run extraction settings.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
  /// Physical size of one lattice step along each axis.
  pub spacing: [Real; 3],

  /// Flip normals so they point toward lower field values.
  pub reverse_gradient: bool,

  /// Re-sort vertices and triangles after the run so the output does not
  /// depend on thread scheduling.
  pub canonical_order: bool,

  /// Samples closer than this to the isovalue are pushed to `±epsilon`.
  pub epsilon: Real,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      spacing: [1.0; 3],
      reverse_gradient: false,
      canonical_order: false,
      epsilon: DEFAULT_EPSILON,
    }
  }
}

impl ExtractConfig {
  pub fn with_spacing(mut self, spacing: [Real; 3]) -> Self {
    self.spacing = spacing;
    self
  }

  pub fn with_reverse_gradient(mut self, reverse: bool) -> Self {
    self.reverse_gradient = reverse;
    self
  }

  pub fn with_canonical_order(mut self, canonical: bool) -> Self {
    self.canonical_order = canonical;
    self
  }

  pub fn with_epsilon(mut self, epsilon: Real) -> Self {
    self.epsilon = epsilon;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
