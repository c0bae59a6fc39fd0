//! Per-cube classification and tiling resolution.
//!
//! A cube goes through three steps:
//!
//! ```text
//! corner values ──classify──► configuration (u8)
//!                                 │ case table
//!                                 ▼
//!                             CaseKind ──resolve_subcase──► Subcase
//!                                 (face/interior tests)        │ tiling table
//!                                                              ▼
//!                                         edge-id triangles ──► vertex indices
//! ```
//!
//! The first two steps are pure functions of the 8 corner values. Only
//! [`process_cube`] touches shared state (edge cache, mesh accumulator).

use smallvec::SmallVec;

use crate::ambiguity::{face_test, interior_test, Cut};
use crate::edge_cache::{EdgeCache, EdgeKey};
use crate::edge_table::{CENTER_EDGE, EDGE_TABLE, FACE_AXIS};
use crate::error::{ExtractError, ExtractResult};
use crate::field::{Sample, ScalarField};
use crate::mesh::MeshAccumulator;
use crate::tables::{self, case_entry, Subcase};
use crate::types::{Axis, Real};

/// Configuration index: bit `l` set iff corner `l` is non-negative.
#[inline]
pub fn classify(cube: &[Real; 8]) -> u8 {
  let mut config = 0u8;
  for (l, &v) in cube.iter().enumerate() {
    if v >= 0.0 {
      config |= 1 << l;
    }
  }
  config
}

/// A configuration's case together with its row in the case tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseKind {
  /// Configurations 0 and 255.
  Empty,
  /// Cases 1, 2, 5, 8, 9, 11 and 14: one tiling, no test.
  Simple { case: u8, index: u8 },
  /// One face test.
  Case3 { index: u8 },
  /// One interior test.
  Case4 { index: u8 },
  /// Face test, then an interior test when the face is not joined.
  Case6 { index: u8 },
  /// Three face tests, interior test when all three join.
  Case7 { index: u8 },
  /// Two face tests, interior test when both or neither join.
  Case10 { index: u8 },
  /// Same shape as case 10 with edge-based interior tests.
  Case12 { index: u8 },
  /// Six face tests mapped through the subconfiguration table.
  Case13 { index: u8 },
}

impl CaseKind {
  pub fn from_config(config: u8) -> ExtractResult<Self> {
    let entry = case_entry(config);
    let index = entry.index;
    Ok(match entry.case {
      0 => CaseKind::Empty,
      1 | 2 | 5 | 8 | 9 | 11 | 14 => CaseKind::Simple {
        case: entry.case,
        index,
      },
      3 => CaseKind::Case3 { index },
      4 => CaseKind::Case4 { index },
      6 => CaseKind::Case6 { index },
      7 => CaseKind::Case7 { index },
      10 => CaseKind::Case10 { index },
      12 => CaseKind::Case12 { index },
      13 => CaseKind::Case13 { index },
      case => {
        return Err(ExtractError::inconsistency(format!(
          "configuration {config} maps to unknown case {case}"
        )))
      }
    })
  }

  /// Topological case number, 0..=14.
  pub fn case(self) -> u8 {
    match self {
      CaseKind::Empty => 0,
      CaseKind::Simple { case, .. } => case,
      CaseKind::Case3 { .. } => 3,
      CaseKind::Case4 { .. } => 4,
      CaseKind::Case6 { .. } => 6,
      CaseKind::Case7 { .. } => 7,
      CaseKind::Case10 { .. } => 10,
      CaseKind::Case12 { .. } => 12,
      CaseKind::Case13 { .. } => 13,
    }
  }

  /// Row inside the case tables.
  pub fn index(self) -> u8 {
    match self {
      CaseKind::Empty => 0,
      CaseKind::Simple { index, .. }
      | CaseKind::Case3 { index }
      | CaseKind::Case4 { index }
      | CaseKind::Case6 { index }
      | CaseKind::Case7 { index }
      | CaseKind::Case10 { index }
      | CaseKind::Case12 { index }
      | CaseKind::Case13 { index } => index,
    }
  }
}

/// Two face tests packed as bits, set when the face test is positive.
#[inline]
fn face_pair(cube: &[Real; 8], f1: i8, f2: i8) -> u8 {
  let mut bits = 0;
  if face_test(cube, f1) > 0.0 {
    bits |= 1;
  }
  if face_test(cube, f2) > 0.0 {
    bits |= 2;
  }
  bits
}

/// Pick the tiling family for a classified cube. `None` for empty cubes.
pub fn resolve_subcase(cube: &[Real; 8], kind: CaseKind) -> ExtractResult<Option<Subcase>> {
  use Subcase::*;

  let subcase = match kind {
    CaseKind::Empty => return Ok(None),

    CaseKind::Simple { case, .. } => match case {
      1 => Case1,
      2 => Case2,
      5 => Case5,
      8 => Case8,
      9 => Case9,
      11 => Case11,
      14 => Case14,
      _ => {
        return Err(ExtractError::inconsistency(format!(
          "case {case} is not a simple case"
        )))
      }
    },

    CaseKind::Case3 { index } => {
      if face_test(cube, tables::test3(index)?) < 0.0 {
        Case3_1
      } else {
        Case3_2
      }
    }

    CaseKind::Case4 { index } => {
      if interior_test(cube, 4, tables::test4(index)?, Cut::Saddle(Axis::Z))? < 0.0 {
        Case4_1
      } else {
        Case4_2
      }
    }

    CaseKind::Case6 { index } => {
      let [face, sign, edge] = tables::test6(index)?;
      if face_test(cube, face) < 0.0 {
        if interior_test(cube, 6, sign, Cut::Edge(edge))? < 0.0 {
          Case6_1_1
        } else {
          Case6_1_2
        }
      } else {
        Case6_2
      }
    }

    CaseKind::Case7 { index } => {
      let test = tables::test7(index)?;
      let mut sub = 0u8;
      for (bit, &face) in test[..3].iter().enumerate() {
        if face_test(cube, face) < 0.0 {
          sub |= 1 << bit;
        }
      }
      match sub {
        0 => Case7_1,
        1 => Case7_2(0),
        2 => Case7_2(1),
        4 => Case7_2(2),
        3 => Case7_3(0),
        5 => Case7_3(1),
        6 => Case7_3(2),
        _ => {
          if interior_test(cube, 7, test[3], Cut::Edge(test[4]))? > 0.0 {
            Case7_4_1
          } else {
            Case7_4_2
          }
        }
      }
    }

    CaseKind::Case10 { index } => {
      let [f1, f2, sign0, sign3] = tables::test10(index)?;
      // both tested faces are normal to the tunnel axis
      let cut = Cut::Saddle(FACE_AXIS[(f1.unsigned_abs() - 1) as usize]);
      match face_pair(cube, f1, f2) {
        0 => {
          if interior_test(cube, 10, sign0, cut)? < 0.0 {
            Case10_1_1
          } else {
            Case10_1_2
          }
        }
        1 => Case10_2,
        2 => Case10_2Prime,
        _ => {
          if interior_test(cube, 10, sign3, cut)? < 0.0 {
            Case10_1_1Prime
          } else {
            Case10_1_2Prime
          }
        }
      }
    }

    CaseKind::Case12 { index } => {
      let [f1, f2, sign0, edge0, sign3, edge3] = tables::test12(index)?;
      match face_pair(cube, f1, f2) {
        0 => {
          if interior_test(cube, 12, sign0, Cut::Edge(edge0))? < 0.0 {
            Case12_1_1
          } else {
            Case12_1_2
          }
        }
        1 => Case12_2,
        2 => Case12_2Prime,
        _ => {
          if interior_test(cube, 12, sign3, Cut::Edge(edge3))? < 0.0 {
            Case12_1_1Prime
          } else {
            Case12_1_2Prime
          }
        }
      }
    }

    CaseKind::Case13 { index } => {
      let test = tables::test13(index)?;
      let mut bits = 0u8;
      for (bit, &face) in test[..6].iter().enumerate() {
        if face_test(cube, face) > 0.0 {
          bits |= 1 << bit;
        }
      }
      match tables::subconfig13(bits)? {
        0 => Case13_1,
        v @ 1..=6 => Case13_2(v - 1),
        v @ 7..=18 => Case13_3(v - 7),
        v @ 19..=22 => Case13_4(v - 19),
        v @ 23..=26 => {
          let alt = v - 23;
          let edge = tables::tiling(Case13_5_1(alt), index)?
            .first()
            .map(|tri| tri[0])
            .ok_or_else(|| ExtractError::inconsistency("empty 13.5.1 tiling"))?;
          if interior_test(cube, 13, test[6], Cut::Edge(edge as i8))? < 0.0 {
            Case13_5_1(alt)
          } else {
            Case13_5_2(alt)
          }
        }
        v @ 27..=38 => Case13_3Prime(v - 27),
        v @ 39..=44 => Case13_2Prime(v - 39),
        45 => Case13_1Prime,
        v => {
          return Err(ExtractError::inconsistency(format!(
            "case 13 subconfiguration value {v}"
          )))
        }
      }
    }
  };

  Ok(Some(subcase))
}

/// Edge-id triangles for a classified cube; empty for configurations 0/255.
pub fn resolve_tiling(cube: &[Real; 8], kind: CaseKind) -> ExtractResult<&'static [[u8; 3]]> {
  match resolve_subcase(cube, kind)? {
    Some(subcase) => tables::tiling(subcase, kind.index()),
    None => Ok(&[]),
  }
}

/// What one cube contributed to the mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CubeOutcome {
  pub case: u8,
  pub triangles: u8,
  pub center: bool,
}

/// Shared state a cube writes into.
pub(crate) struct CubeContext<'r, 'a, S: Sample> {
  pub field: &'r ScalarField<'a, S>,
  pub cache: &'r EdgeCache,
  pub mesh: &'r MeshAccumulator,
}

/// Classify the cube at `cube`, resolve its tiling and append the triangles.
pub(crate) fn process_cube<S: Sample>(
  ctx: &CubeContext<'_, '_, S>,
  cube: [usize; 3],
) -> ExtractResult<CubeOutcome> {
  let values = ctx.field.cube_values(cube);
  let config = classify(&values);
  let kind = CaseKind::from_config(config)?;
  let tiling = resolve_tiling(&values, kind)?;

  let mut outcome = CubeOutcome {
    case: kind.case(),
    ..CubeOutcome::default()
  };
  if tiling.is_empty() {
    return Ok(outcome);
  }

  let crossing = EDGE_TABLE[config as usize];
  let mut center = None;
  let mut triangles: SmallVec<[[u32; 3]; 12]> = SmallVec::new();

  for tri in tiling {
    let mut ids = [0u32; 3];
    for (slot, &edge) in ids.iter_mut().zip(tri) {
      *slot = if edge == CENTER_EDGE {
        match center {
          Some(index) => index,
          None => {
            let index = ctx.cache.center_vertex_for_cube(ctx.field, cube, ctx.mesh)?;
            center = Some(index);
            index
          }
        }
      } else {
        if crossing & (1 << edge) == 0 {
          return Err(ExtractError::inconsistency(format!(
            "cube {cube:?} config {config} tiles flat edge {edge}"
          )));
        }
        ctx
          .cache
          .vertex_for_edge(ctx.field, EdgeKey::of_cube_edge(cube, edge), ctx.mesh)?
      };
    }

    if ids[0] == ids[1] || ids[1] == ids[2] || ids[0] == ids[2] {
      return Err(ExtractError::inconsistency(format!(
        "cube {cube:?} config {config} produced degenerate triangle {ids:?}"
      )));
    }
    triangles.push(ids);
  }

  ctx.mesh.push_triangles(&triangles);
  outcome.triangles = triangles.len() as u8;
  outcome.center = center.is_some();
  Ok(outcome)
}

#[cfg(test)]
#[path = "cube_test.rs"]
mod cube_test;
