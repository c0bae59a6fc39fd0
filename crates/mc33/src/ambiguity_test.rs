use super::*;
use crate::edge_table::CORNER_OFFSETS;
use crate::tables::{case_entry, test3};

/// Small deterministic generator for cube values in [-1, 1).
struct Lcg(u64);

impl Lcg {
  fn next(&mut self) -> Real {
    self.0 = self
      .0
      .wrapping_mul(6364136223846793005)
      .wrapping_add(1442695040888963407);
    ((self.0 >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0) as Real
  }

  fn cube(&mut self) -> [Real; 8] {
    std::array::from_fn(|_| self.next())
  }
}

fn config_of(cube: &[Real; 8]) -> u8 {
  (0..8).fold(0u8, |acc, l| if cube[l] >= 0.0 { acc | 1 << l } else { acc })
}

#[test]
fn test_face_test_formula() {
  // face 5 is corners 0, 3, 2, 1
  let cube = [2.0, -1.0, 3.0, -4.0, 0.0, 0.0, 0.0, 0.0];
  let expected = 2.0 * (2.0 * 3.0 - (-4.0) * (-1.0));
  assert_eq!(face_test(&cube, 5), 5.0 * expected);
  assert_eq!(face_test(&cube, -5), -5.0 * expected);
}

#[test]
fn test_face_test_negation_flips_raw_sign() {
  let mut rng = Lcg(7);
  for _ in 0..200 {
    let cube = rng.cube();
    let negated = cube.map(|v| -v);
    for face in 1..=6i8 {
      let a = face_test(&cube, face);
      let b = face_test(&negated, face);
      assert_eq!(a, -b);
    }
  }
}

#[test]
fn test_face_decision_survives_complement() {
  // Negating every corner swaps the configuration with its complement; the
  // table's signed face for the complement must make the same decision.
  let mut rng = Lcg(42);
  let mut checked = 0;
  while checked < 500 {
    let cube = rng.cube();
    let config = config_of(&cube);
    let entry = case_entry(config);
    if entry.case != 3 {
      continue;
    }
    let negated = cube.map(|v| -v);
    let complement = case_entry(config_of(&negated));
    assert_eq!(complement.case, 3);

    let here = face_test(&cube, test3(entry.index).unwrap());
    let there = face_test(&negated, test3(complement.index).unwrap());
    assert_eq!(
      here < 0.0,
      there < 0.0,
      "config {} decided differently from its complement",
      config
    );
    checked += 1;
  }
}

#[test]
fn test_face_saddle_joins_positive_corners() {
  // corners 0 and 2 positive on face 5 (0, 3, 2, 1), strong positive values
  let mut cube = [-1.0; 8];
  cube[0] = 3.0;
  cube[2] = 3.0;
  assert!(face_test(&cube, 5) > 0.0);

  cube[0] = 0.2;
  cube[2] = 0.2;
  assert!(face_test(&cube, 5) < 0.0);
}

#[test]
fn test_flat_face_saddle_counts_as_joined() {
  // face 5 (0, 3, 2, 1) with A*C == B*D
  let cube = [1.0, -1.0, 1.0, -1.0, 0.5, 0.5, 0.5, 0.5];
  assert!(face_test(&cube, 5) > 0.0);
  assert!(face_test(&cube, -5) < 0.0);
  assert!(face_test(&cube.map(|v| -v), 5) > 0.0);
}

#[test]
fn test_neighbours_agree_on_shared_faces() {
  // integer corners make flat saddles common
  let mut rng = Lcg(11);
  let corner_at = |p: [usize; 3]| CORNER_OFFSETS.iter().position(|&o| o == p).unwrap();
  let alternates = |cube: &[Real; 8], face: i8| {
    let [a, b, c, d] = FACE_CORNERS[(face - 1) as usize].map(|l| cube[l as usize] >= 0.0);
    a == c && b == d && a != b
  };
  let mut flat = 0;
  for _ in 0..4000 {
    let cube = rng.cube().map(|v| {
      let v = (v * 2.5).round();
      if v == 0.0 {
        1e-6
      } else {
        v
      }
    });
    // (face here, face in the neighbour, axis)
    for (here, there, axis) in [(2i8, 4i8, 0usize), (3, 1, 1), (6, 5, 2)] {
      if !alternates(&cube, here) {
        continue;
      }
      let [a, b, c, d] = FACE_CORNERS[(here - 1) as usize].map(|l| cube[l as usize]);
      if a * c == b * d {
        flat += 1;
      }
      let mut neighbour = [-1.0; 8];
      for (l, o) in CORNER_OFFSETS.iter().enumerate() {
        if o[axis] == 1 {
          let mut p = *o;
          p[axis] = 0;
          neighbour[corner_at(p)] = cube[l];
        }
      }
      assert_eq!(
        face_test(&cube, here) > 0.0,
        face_test(&neighbour, there) > 0.0,
        "face {here} of {cube:?}"
      );
    }
  }
  assert!(flat > 0);
}

#[test]
fn test_symmetric_flat_cube_has_no_saddle() {
  let cube = [1.0; 8];
  assert_eq!(interior_test(&cube, 4, 1, Cut::Saddle(Axis::Z)).unwrap(), -1.0);
  assert_eq!(interior_test(&cube, 10, -1, Cut::Saddle(Axis::X)).unwrap(), -1.0);
}

#[test]
fn test_symmetric_tunnel_detected() {
  // case 4: corners 0 and 6 positive
  let mut cube = [-1.0; 8];
  cube[0] = 5.0;
  cube[6] = 5.0;
  // saddle at t = 0.5: At = Ct = 2, Bt = Dt = -1
  assert_eq!(interior_test(&cube, 4, 1, Cut::Saddle(Axis::Z)).unwrap(), 3.0);
  // the complement tunnels through its two negative corners
  let negated = cube.map(|v| -v);
  assert_eq!(interior_test(&negated, 4, -1, Cut::Saddle(Axis::Z)).unwrap(), 3.0);

  cube[0] = 1.0;
  cube[6] = 1.0;
  assert!(interior_test(&cube, 4, 1, Cut::Saddle(Axis::Z)).unwrap() < 0.0);
  let negated = cube.map(|v| -v);
  assert!(interior_test(&negated, 4, -1, Cut::Saddle(Axis::Z)).unwrap() < 0.0);
}

#[test]
fn test_symmetric_saddle_outside_cube() {
  // a = 1, b = 1, so t = -0.5: no tunnel on either side
  let cube = [1.0, -1.0, 1.0, -1.0, 3.0, -2.0, 2.0, -2.0];
  assert_eq!(interior_test(&cube, 10, 1, Cut::Saddle(Axis::Z)).unwrap(), -1.0);
  assert_eq!(interior_test(&cube, 10, -1, Cut::Saddle(Axis::Z)).unwrap(), -1.0);
}

#[test]
fn test_saddle_follows_the_requested_axis() {
  // config 60: the non-negative edges (3, 2) and (4, 5) run along x. On the
  // x sections B and D are non-negative, B*D peaks at 4 mid-way while
  // A*C stays 3.61, so they join there and nowhere on the end faces.
  let cube = [-1.9, -1.9, 3.0, 1.0, 3.0, 1.0, -1.9, -1.9];
  assert!(interior_test(&cube, 10, 1, Cut::Saddle(Axis::X)).unwrap() > 0.0);
  let cube = [-2.1, -2.1, 3.0, 1.0, 3.0, 1.0, -2.1, -2.1];
  assert!(interior_test(&cube, 10, 1, Cut::Saddle(Axis::X)).unwrap() < 0.0);

  // negative corners stay apart along x; a z section wrongly joins them
  let cube = [-3.0, -3.0, 3.0, 3.0, 3.0, 3.0, -1.0, -1.0];
  assert!(interior_test(&cube, 10, -1, Cut::Saddle(Axis::X)).unwrap() < 0.0);
  assert!(interior_test(&cube, 10, -1, Cut::Saddle(Axis::Z)).unwrap() > 0.0);
}

#[test]
fn test_edge_regime_codes() {
  // edge 0 crosses at t = 0.5, B on edge (3,2), C on (7,6), D on (4,5)
  let mut cube = [-1.0, 1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0];
  // At = 0 (bit 1), Bt = 1, Ct = 1, Dt = -1 -> code 7
  assert_eq!(interior_test(&cube, 6, 1, Cut::Edge(0)).unwrap(), 1.0);
  assert_eq!(interior_test(&cube, 6, -1, Cut::Edge(0)).unwrap(), -1.0);

  // everything non-negative -> code 15
  cube[4] = 1.0;
  cube[5] = 1.0;
  assert_eq!(interior_test(&cube, 12, 1, Cut::Edge(0)).unwrap(), 1.0);

  // B, C, D negative -> code 1
  let cube = [-1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0];
  assert_eq!(interior_test(&cube, 13, 1, Cut::Edge(0)).unwrap(), -1.0);
}

#[test]
fn test_edge_regime_code_five_uses_saddle_value() {
  // edge 8 (0, 4): B on (3, 7), C on (2, 6), D on (1, 5)
  // At = 0, Bt < 0, Ct > 0, Dt < 0 -> code 5, value (At*Ct - Bt*Dt) * s
  let cube = [-1.0, -2.0, 2.0, -2.0, 1.0, -2.0, 2.0, -2.0];
  let value = interior_test(&cube, 7, 1, Cut::Edge(8)).unwrap();
  assert_eq!(value, -4.0);
}

#[test]
fn test_interior_rejects_unknown_case_or_edge() {
  let cube = [1.0; 8];
  assert!(interior_test(&cube, 3, 1, Cut::Edge(0)).is_err());
  assert!(interior_test(&cube, 6, 1, Cut::Edge(12)).is_err());
  assert!(interior_test(&cube, 6, 1, Cut::Edge(-1)).is_err());
  assert!(interior_test(&cube, 4, 1, Cut::Edge(0)).is_err());
  assert!(interior_test(&cube, 12, 1, Cut::Saddle(Axis::X)).is_err());
}
