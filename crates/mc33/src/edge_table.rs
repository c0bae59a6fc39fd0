//! Cube geometry: corner, edge and face numbering.
//!
//! Every table in the crate (case tilings, face tests, interior tests) is
//! written against the numbering below. Changing it invalidates all of them.
//!
//! # Cube Topology
//!
//! ```text
//!          7──────────6
//!         /│         /│
//!        / │        / │          +J
//!       3──────────2  │           │  +K
//!       │  │       │  │           │ /
//!       │  4───────│──5           └────+I
//!       │ /        │ /
//!       │/         │/
//!       0──────────1
//!
//!   Corners (i, j, k offsets):
//!     0=(0,0,0)  1=(1,0,0)  2=(1,1,0)  3=(0,1,0)
//!     4=(0,0,1)  5=(1,0,1)  6=(1,1,1)  7=(0,1,1)
//! ```
//!
//! The bottom face (k = 0) runs 0→1→2→3 around its perimeter and the top
//! face repeats it with +4, so `offset(l) = ((l ^ l >> 1) & 1, l >> 1 & 1, l >> 2 & 1)`.
//!
//! # Edge Layout
//!
//! ```text
//! I-axis edges:  0:[0,1] k=0 j=0   2:[3,2] k=0 j=1   4:[4,5] k=1 j=0   6:[7,6] k=1 j=1
//! J-axis edges:  1:[1,2] k=0 i=1   3:[0,3] k=0 i=0   5:[5,6] k=1 i=1   7:[4,7] k=1 i=0
//! K-axis edges:  8:[0,4] i=0 j=0   9:[1,5] i=1 j=0  10:[2,6] i=1 j=1  11:[3,7] i=0 j=1
//! ```
//!
//! The first corner of every edge is its low end, so the edge belongs to the
//! lattice point at that corner. Edge id 12 names the cube centre.
//!
//! # Faces
//!
//! Face `f` (1..=6) lists its corners `A, B, C, D` in cyclic order with `A`
//! and `C` diagonal: 1 is j=0, 2 is i=1, 3 is j=1, 4 is i=0, 5 is k=0,
//! 6 is k=1.

use crate::types::Axis;

/// Cube-centre pseudo edge used by ambiguous tilings.
pub const CENTER_EDGE: u8 = 12;

/// Lattice offset of each cube corner.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [1, 1, 0],
  [0, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [1, 1, 1],
  [0, 1, 1],
];

/// Edge endpoint corner indices, low end first.
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1], // Edge 0:  I axis at j=0, k=0
  [1, 2], // Edge 1:  J axis at i=1, k=0
  [3, 2], // Edge 2:  I axis at j=1, k=0
  [0, 3], // Edge 3:  J axis at i=0, k=0
  [4, 5], // Edge 4:  I axis at j=0, k=1
  [5, 6], // Edge 5:  J axis at i=1, k=1
  [7, 6], // Edge 6:  I axis at j=1, k=1
  [4, 7], // Edge 7:  J axis at i=0, k=1
  [0, 4], // Edge 8:  K axis at i=0, j=0
  [1, 5], // Edge 9:  K axis at i=1, j=0
  [2, 6], // Edge 10: K axis at i=1, j=1
  [3, 7], // Edge 11: K axis at i=0, j=1
];

/// Direction of each cube edge.
pub const EDGE_AXIS: [Axis; 12] = [
  Axis::X,
  Axis::Y,
  Axis::X,
  Axis::Y,
  Axis::X,
  Axis::Y,
  Axis::X,
  Axis::Y,
  Axis::Z,
  Axis::Z,
  Axis::Z,
  Axis::Z,
];

/// Corners `A, B, C, D` of faces 1..=6 (index `face - 1`).
pub const FACE_CORNERS: [[u8; 4]; 6] = [
  [0, 4, 5, 1],
  [1, 5, 6, 2],
  [2, 6, 7, 3],
  [3, 7, 4, 0],
  [0, 3, 2, 1],
  [4, 7, 6, 5],
];

/// Lattice axis normal to faces 1..=6 (index `face - 1`).
pub const FACE_AXIS: [Axis; 6] = [Axis::Y, Axis::X, Axis::Y, Axis::X, Axis::Z, Axis::Z];

/// Precomputed crossing table.
/// Index: 8-bit configuration (which corners are non-negative)
/// Value: 12-bit edge mask (which edges change sign)
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut config = 0usize;

  while config < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < 12 {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      if (config >> c0) & 1 != (config >> c1) & 1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[config] = edge_mask;
    config += 1;
  }

  table
}

/// Lattice point owning cube edge `edge` of the cube at `cube`.
#[inline]
pub fn edge_origin(cube: [usize; 3], edge: u8) -> [usize; 3] {
  let o = CORNER_OFFSETS[EDGE_CORNERS[edge as usize][0] as usize];
  [cube[0] + o[0], cube[1] + o[1], cube[2] + o[2]]
}

/// Lattice point of corner `corner` of the cube at `cube`.
#[inline]
pub fn corner_point(cube: [usize; 3], corner: usize) -> [usize; 3] {
  let o = CORNER_OFFSETS[corner];
  [cube[0] + o[0], cube[1] + o[1], cube[2] + o[2]]
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
