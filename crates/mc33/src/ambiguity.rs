//! Asymptotic-decider tests for ambiguous cubes.
//!
//! Both tests look at the trilinear interpolant of the 8 corner values.
//! The face test decides whether the two non-negative corners of a face
//! with alternating signs are connected across it (the bilinear saddle of
//! that face). The interior test decides whether the cube body contains a
//! tunnel connecting two components that no face connects.
//!
//! Signs are what matter; magnitudes are not comparable across cubes.

use crate::edge_table::FACE_CORNERS;
use crate::error::{ExtractError, ExtractResult};
use crate::types::{Axis, Real};

/// Interior test reference data, one row per cube edge:
/// `[p, q, b0, b1, c0, c1, d0, d1]` where `(p, q)` is the edge itself and
/// `(b0, b1)`, `(c0, c1)`, `(d0, d1)` are the three parallel edges, walked in
/// the same direction, around the opposite face cycle.
const INTERIOR_EDGES: [[u8; 8]; 12] = [
  [0, 1, 3, 2, 7, 6, 4, 5],
  [1, 2, 0, 3, 4, 7, 5, 6],
  [2, 3, 1, 0, 5, 4, 6, 7],
  [3, 0, 2, 1, 6, 5, 7, 4],
  [4, 5, 7, 6, 3, 2, 0, 1],
  [5, 6, 4, 7, 0, 3, 1, 2],
  [6, 7, 5, 4, 1, 0, 2, 3],
  [7, 4, 6, 5, 2, 1, 3, 0],
  [0, 4, 3, 7, 2, 6, 1, 5],
  [1, 5, 0, 4, 3, 7, 2, 6],
  [2, 6, 1, 5, 0, 4, 3, 7],
  [3, 7, 2, 6, 1, 5, 0, 4],
];

/// Face cycles `A, B, C, D` at both ends of each axis; the section at `t`
/// interpolates corner by corner between the two.
const SADDLE_SECTIONS: [[[u8; 4]; 2]; 3] = [
  [[0, 3, 7, 4], [1, 2, 6, 5]],
  [[0, 1, 5, 4], [3, 2, 6, 7]],
  [[0, 3, 2, 1], [4, 7, 6, 5]],
];

/// Where the interior test looks inside the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cut {
  /// Sections normal to the axis, at the extremum of their `A*C - B*D`.
  Saddle(Axis),
  /// The section through the zero crossing of a cube edge.
  Edge(i8),
}

/// Face test for signed face id `face` (±1..=±6).
///
/// With `A, B, C, D` the face corners, returns `face * A * (A*C - B*D)`.
/// For a positive id the result is positive exactly when the non-negative
/// corners of the face are joined through its saddle. A flat saddle
/// (`A*C == B*D`) counts as joined, so the two cubes sharing the face
/// always agree.
#[inline]
pub fn face_test(cube: &[Real; 8], face: i8) -> Real {
  debug_assert!((1..=6).contains(&face.unsigned_abs()));
  let corners = FACE_CORNERS[(face.unsigned_abs() - 1) as usize];
  let [a, b, c, d] = corners.map(|l| cube[l as usize]);
  let det = a * c - b * d;
  let raw = a * det;
  let raw = if raw != 0.0 {
    raw
  } else if det == 0.0 {
    Real::MIN_POSITIVE
  } else {
    // underflow
    a.signum() * det.signum() * Real::MIN_POSITIVE
  };
  Real::from(face) * raw
}

/// Interior test for the cases that need one.
///
/// Cases 4 and 10 slide a section along an axis and look at it where its
/// saddle is extremal ([`Cut::Saddle`]); `sign` names the side that may
/// tunnel (`1` non-negative, `-1` negative) and no extremum strictly inside
/// the cube means no tunnel. Cases 6, 7, 12 and 13 cut the cube where a
/// reference edge crosses zero ([`Cut::Edge`]) and `sign` is the table's
/// `alongEdgeSign`. A positive result selects the tunnel tiling for cases
/// 4, 6, 10, 12 and 13; case 7 reads the sign the other way round.
pub fn interior_test(cube: &[Real; 8], case: u8, sign: i8, cut: Cut) -> ExtractResult<Real> {
  let s = Real::from(sign);

  let (at, bt, ct, dt) = match (case, cut) {
    (4 | 10, Cut::Saddle(axis)) => {
      let [[a0, b0, c0, d0], [a1, b1, c1, d1]] =
        SADDLE_SECTIONS[axis.index()].map(|face| face.map(|l| cube[l as usize]));
      let a = (a1 - a0) * (c1 - c0) - (b1 - b0) * (d1 - d0);
      let b = c0 * (a1 - a0) + a0 * (c1 - c0) - d0 * (b1 - b0) - b0 * (d1 - d0);
      if a == 0.0 {
        return Ok(-1.0);
      }
      let t = -b / (2.0 * a);
      // extremum outside the cube (NaN included)
      if !(t > 0.0 && t < 1.0) {
        return Ok(-1.0);
      }
      (
        a0 + (a1 - a0) * t,
        b0 + (b1 - b0) * t,
        c0 + (c1 - c0) * t,
        d0 + (d1 - d0) * t,
      )
    }
    (6 | 7 | 12 | 13, Cut::Edge(edge)) => {
      let row = usize::try_from(edge)
        .ok()
        .and_then(|e| INTERIOR_EDGES.get(e))
        .ok_or_else(|| {
          ExtractError::inconsistency(format!("case {case} interior test on edge {edge}"))
        })?;
      let v = |n: usize| cube[row[n] as usize];
      let t = v(0) / (v(0) - v(1));
      (
        0.0,
        v(2) + (v(3) - v(2)) * t,
        v(4) + (v(5) - v(4)) * t,
        v(6) + (v(7) - v(6)) * t,
      )
    }
    _ => {
      return Err(ExtractError::inconsistency(format!(
        "case {case} has no interior test through {cut:?}"
      )))
    }
  };

  let mut code = 0u8;
  if at >= 0.0 {
    code |= 1;
  }
  if bt >= 0.0 {
    code |= 2;
  }
  if ct >= 0.0 {
    code |= 4;
  }
  if dt >= 0.0 {
    code |= 8;
  }

  Ok(match code {
    0..=4 => -s,
    5 => (at * ct - bt * dt) * s,
    6 => -s,
    7 => s,
    8 | 9 => -s,
    10 => -(at * ct - bt * dt) * s,
    11 => s,
    12 => -s,
    _ => s,
  })
}

#[cfg(test)]
#[path = "ambiguity_test.rs"]
mod ambiguity_test;
