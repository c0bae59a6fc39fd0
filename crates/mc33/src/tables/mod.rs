//! Case and tiling tables for the 33-configuration Marching Cubes.
//!
//! The 256 corner-sign configurations reduce to 15 cases. Each case keeps
//! one row per configuration it covers; ambiguous cases carry extra rows of
//! face/interior tests and one tiling per topological subcase. The raw rows
//! live in [`data`]; everything outside this module goes through the typed
//! accessors below.
//!
//! All tilings wind counter-clockwise when seen from the non-negative side
//! of the field.

mod data;

use data::*;

use crate::error::{ExtractError, ExtractResult};

/// Position of a configuration in the reduced table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaseEntry {
  /// Topological case, 0..=14.
  pub case: u8,
  /// Row inside that case's tables.
  pub index: u8,
}

/// Look up the case of an 8-bit configuration.
#[inline]
pub fn case_entry(config: u8) -> CaseEntry {
  let [case, index] = CASES[config as usize];
  CaseEntry { case, index }
}

/// Every tiling family of the extended case table.
///
/// Variants with a payload select one of several rotated alternatives of
/// the same family (which faces are joined). `Prime` variants are the
/// mirrored families of cases 10, 12 and 13 where the complementary set of
/// faces is joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subcase {
  Case1,
  Case2,
  Case3_1,
  Case3_2,
  Case4_1,
  Case4_2,
  Case5,
  Case6_1_1,
  Case6_1_2,
  Case6_2,
  Case7_1,
  Case7_2(u8),
  Case7_3(u8),
  Case7_4_1,
  Case7_4_2,
  Case8,
  Case9,
  Case10_1_1,
  Case10_1_2,
  Case10_2,
  Case10_2Prime,
  Case10_1_1Prime,
  Case10_1_2Prime,
  Case11,
  Case12_1_1,
  Case12_1_2,
  Case12_2,
  Case12_2Prime,
  Case12_1_1Prime,
  Case12_1_2Prime,
  Case13_1,
  Case13_2(u8),
  Case13_3(u8),
  Case13_4(u8),
  Case13_5_1(u8),
  Case13_5_2(u8),
  Case13_3Prime(u8),
  Case13_2Prime(u8),
  Case13_1Prime,
  Case14,
}

impl Subcase {
  /// Whether the family's tiling references the cube-centre vertex.
  pub fn uses_center(self) -> bool {
    matches!(
      self,
      Subcase::Case6_1_2
        | Subcase::Case7_3(_)
        | Subcase::Case10_2
        | Subcase::Case10_2Prime
        | Subcase::Case12_2
        | Subcase::Case12_2Prime
        | Subcase::Case13_3(_)
        | Subcase::Case13_4(_)
        | Subcase::Case13_3Prime(_)
    )
  }
}

fn missing(table: &str, index: u8) -> ExtractError {
  ExtractError::inconsistency(format!("table {table} has no row {index}"))
}

fn row<const N: usize>(
  table: &'static [[[u8; 3]; N]],
  index: u8,
  name: &str,
) -> ExtractResult<&'static [[u8; 3]]> {
  table
    .get(index as usize)
    .map(|r| r.as_slice())
    .ok_or_else(|| missing(name, index))
}

fn variant<const N: usize, const V: usize>(
  table: &'static [[[[u8; 3]; N]; V]],
  index: u8,
  alt: u8,
  name: &str,
) -> ExtractResult<&'static [[u8; 3]]> {
  table
    .get(index as usize)
    .and_then(|r| r.get(alt as usize))
    .map(|t| t.as_slice())
    .ok_or_else(|| missing(name, index))
}

fn entry<T: Copy>(table: &'static [T], index: u8, name: &str) -> ExtractResult<T> {
  table
    .get(index as usize)
    .copied()
    .ok_or_else(|| missing(name, index))
}

/// Edge-id triangles of `subcase` for row `index` of its case.
pub fn tiling(subcase: Subcase, index: u8) -> ExtractResult<&'static [[u8; 3]]> {
  use Subcase::*;

  match subcase {
    Case1 => row(&TILING1, index, "1"),
    Case2 => row(&TILING2, index, "2"),
    Case3_1 => row(&TILING3_1, index, "3.1"),
    Case3_2 => row(&TILING3_2, index, "3.2"),
    Case4_1 => row(&TILING4_1, index, "4.1"),
    Case4_2 => row(&TILING4_2, index, "4.2"),
    Case5 => row(&TILING5, index, "5"),
    Case6_1_1 => row(&TILING6_1_1, index, "6.1.1"),
    Case6_1_2 => row(&TILING6_1_2, index, "6.1.2"),
    Case6_2 => row(&TILING6_2, index, "6.2"),
    Case7_1 => row(&TILING7_1, index, "7.1"),
    Case7_2(alt) => variant(&TILING7_2, index, alt, "7.2"),
    Case7_3(alt) => variant(&TILING7_3, index, alt, "7.3"),
    Case7_4_1 => row(&TILING7_4_1, index, "7.4.1"),
    Case7_4_2 => row(&TILING7_4_2, index, "7.4.2"),
    Case8 => row(&TILING8, index, "8"),
    Case9 => row(&TILING9, index, "9"),
    Case10_1_1 => row(&TILING10_1_1, index, "10.1.1"),
    Case10_1_2 => row(&TILING10_1_2, index, "10.1.2"),
    Case10_2 => row(&TILING10_2, index, "10.2"),
    Case10_2Prime => row(&TILING10_2_, index, "10.2'"),
    Case10_1_1Prime => row(&TILING10_1_1_, index, "10.1.1'"),
    Case10_1_2Prime => row(&TILING10_1_2_, index, "10.1.2'"),
    Case11 => row(&TILING11, index, "11"),
    Case12_1_1 => row(&TILING12_1_1, index, "12.1.1"),
    Case12_1_2 => row(&TILING12_1_2, index, "12.1.2"),
    Case12_2 => row(&TILING12_2, index, "12.2"),
    Case12_2Prime => row(&TILING12_2_, index, "12.2'"),
    Case12_1_1Prime => row(&TILING12_1_1_, index, "12.1.1'"),
    Case12_1_2Prime => row(&TILING12_1_2_, index, "12.1.2'"),
    Case13_1 => row(&TILING13_1, index, "13.1"),
    Case13_2(alt) => variant(&TILING13_2, index, alt, "13.2"),
    Case13_3(alt) => variant(&TILING13_3, index, alt, "13.3"),
    Case13_4(alt) => variant(&TILING13_4, index, alt, "13.4"),
    Case13_5_1(alt) => variant(&TILING13_5_1, index, alt, "13.5.1"),
    Case13_5_2(alt) => variant(&TILING13_5_2, index, alt, "13.5.2"),
    Case13_3Prime(alt) => variant(&TILING13_3_, index, alt, "13.3'"),
    Case13_2Prime(alt) => variant(&TILING13_2_, index, alt, "13.2'"),
    Case13_1Prime => row(&TILING13_1_, index, "13.1'"),
    Case14 => row(&TILING14, index, "14"),
  }
}

/// Case 3: signed id of the ambiguous face.
pub fn test3(index: u8) -> ExtractResult<i8> {
  entry(&TEST3, index, "test3")
}

/// Case 4: side of the two isolated corners (`1` non-negative).
pub fn test4(index: u8) -> ExtractResult<i8> {
  entry(&TEST4, index, "test4")
}

/// Case 6: `[face, interior sign, reference edge]`.
pub fn test6(index: u8) -> ExtractResult<[i8; 3]> {
  entry(&TEST6, index, "test6")
}

/// Case 7: `[face, face, face, interior sign, reference edge]`.
pub fn test7(index: u8) -> ExtractResult<[i8; 5]> {
  entry(&TEST7, index, "test7")
}

/// Case 10: `[face, face, tunnel side for subconfig 0, tunnel side for subconfig 3]`.
pub fn test10(index: u8) -> ExtractResult<[i8; 4]> {
  entry(&TEST10, index, "test10")
}

/// Case 12: `[face, face, sign, edge (subconfig 0), sign, edge (subconfig 3)]`.
pub fn test12(index: u8) -> ExtractResult<[i8; 6]> {
  entry(&TEST12, index, "test12")
}

/// Case 13: six signed faces followed by the 13.5 interior sign.
pub fn test13(index: u8) -> ExtractResult<[i8; 7]> {
  entry(&TEST13, index, "test13")
}

/// Case 13: canonical subcase value (0..=45) for a 6-bit face-test pattern.
pub fn subconfig13(bits: u8) -> ExtractResult<u8> {
  let value = entry(&SUBCONFIG13, bits, "subconfig13")?;
  u8::try_from(value).map_err(|_| {
    ExtractError::inconsistency(format!(
      "case 13 face pattern {bits:06b} cannot come from a trilinear field"
    ))
  })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
