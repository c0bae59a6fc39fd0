use std::collections::HashSet;

use super::*;
use crate::edge_table::{CENTER_EDGE, EDGE_TABLE};

/// Every tiling family a case can resolve to, with its triangle count.
fn families(case: u8) -> Vec<(Subcase, usize)> {
  use Subcase::*;
  match case {
    1 => vec![(Case1, 1)],
    2 => vec![(Case2, 2)],
    3 => vec![(Case3_1, 2), (Case3_2, 4)],
    4 => vec![(Case4_1, 2), (Case4_2, 6)],
    5 => vec![(Case5, 3)],
    6 => vec![(Case6_1_1, 3), (Case6_1_2, 9), (Case6_2, 5)],
    7 => {
      let mut v = vec![(Case7_1, 3), (Case7_4_1, 5), (Case7_4_2, 9)];
      for alt in 0..3 {
        v.push((Case7_2(alt), 5));
        v.push((Case7_3(alt), 9));
      }
      v
    }
    8 => vec![(Case8, 2)],
    9 => vec![(Case9, 4)],
    10 => vec![
      (Case10_1_1, 4),
      (Case10_1_2, 8),
      (Case10_2, 8),
      (Case10_2Prime, 8),
      (Case10_1_1Prime, 4),
      (Case10_1_2Prime, 8),
    ],
    11 => vec![(Case11, 4)],
    12 => vec![
      (Case12_1_1, 4),
      (Case12_1_2, 8),
      (Case12_2, 8),
      (Case12_2Prime, 8),
      (Case12_1_1Prime, 4),
      (Case12_1_2Prime, 8),
    ],
    13 => {
      let mut v = vec![(Case13_1, 4), (Case13_1Prime, 4)];
      for alt in 0..6 {
        v.push((Case13_2(alt), 6));
        v.push((Case13_2Prime(alt), 6));
      }
      for alt in 0..12 {
        v.push((Case13_3(alt), 10));
        v.push((Case13_3Prime(alt), 10));
      }
      for alt in 0..4 {
        v.push((Case13_4(alt), 12));
        v.push((Case13_5_1(alt), 6));
        v.push((Case13_5_2(alt), 10));
      }
      v
    }
    14 => vec![(Case14, 4)],
    _ => vec![],
  }
}

fn configs_of(case: u8) -> Vec<u8> {
  (0..=255u8).filter(|&c| case_entry(c).case == case).collect()
}

#[test]
fn test_case_sizes() {
  let expected = [2, 16, 24, 24, 8, 48, 48, 16, 6, 8, 6, 12, 24, 2, 12];
  for (case, &count) in expected.iter().enumerate() {
    let configs = configs_of(case as u8);
    assert_eq!(configs.len(), count, "case {}", case);
    // rows are numbered densely in configuration order
    for (row, &config) in configs.iter().enumerate() {
      if case != 0 {
        assert_eq!(case_entry(config).index as usize, row, "config {}", config);
      }
    }
  }
}

#[test]
fn test_trivial_configs() {
  assert_eq!(case_entry(0).case, 0);
  assert_eq!(case_entry(255).case, 0);
}

#[test]
fn test_complement_shares_case() {
  for config in 0..=255u8 {
    assert_eq!(
      case_entry(config).case,
      case_entry(!config).case,
      "config {} and its complement differ",
      config
    );
  }
}

#[test]
fn test_triangle_counts() {
  for case in 1..=14u8 {
    for config in configs_of(case) {
      let index = case_entry(config).index;
      for (subcase, count) in families(case) {
        let tris = tiling(subcase, index).unwrap();
        assert_eq!(tris.len(), count, "{:?} for config {}", subcase, config);
      }
    }
  }
}

#[test]
fn test_tilings_only_use_crossing_edges() {
  for case in 1..=14u8 {
    for config in configs_of(case) {
      let index = case_entry(config).index;
      let crossing = EDGE_TABLE[config as usize];
      for (subcase, _) in families(case) {
        for tri in tiling(subcase, index).unwrap() {
          assert!(
            tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2],
            "{:?} config {} has degenerate {:?}",
            subcase,
            config,
            tri
          );
          for &e in tri {
            assert!(
              e == CENTER_EDGE || crossing & (1 << e) != 0,
              "{:?} config {} uses flat edge {}",
              subcase,
              config,
              e
            );
          }
        }
      }
    }
  }
}

#[test]
fn test_tilings_cover_every_crossing_edge() {
  for case in 1..=14u8 {
    for config in configs_of(case) {
      let index = case_entry(config).index;
      let crossing = EDGE_TABLE[config as usize];
      for (subcase, _) in families(case) {
        let mut used = 0u16;
        for tri in tiling(subcase, index).unwrap() {
          for &e in tri {
            if e != CENTER_EDGE {
              used |= 1 << e;
            }
          }
        }
        assert_eq!(used, crossing, "{:?} config {}", subcase, config);
      }
    }
  }
}

#[test]
fn test_tilings_are_locally_manifold() {
  // each directed edge at most once inside a cube
  for case in 1..=14u8 {
    for config in configs_of(case) {
      let index = case_entry(config).index;
      for (subcase, _) in families(case) {
        let mut seen = HashSet::new();
        for tri in tiling(subcase, index).unwrap() {
          for n in 0..3 {
            let directed = (tri[n], tri[(n + 1) % 3]);
            assert!(
              seen.insert(directed),
              "{:?} config {} repeats {:?}",
              subcase,
              config,
              directed
            );
          }
        }
      }
    }
  }
}

#[test]
fn test_center_flag_matches_tables() {
  for case in 1..=14u8 {
    let index = case_entry(configs_of(case)[0]).index;
    for (subcase, _) in families(case) {
      let uses = tiling(subcase, index)
        .unwrap()
        .iter()
        .any(|t| t.contains(&CENTER_EDGE));
      assert_eq!(uses, subcase.uses_center(), "{:?}", subcase);
    }
  }
}

#[test]
fn test_face_tests_name_ambiguous_faces() {
  for index in 0..24 {
    let face = test3(index).unwrap();
    assert!((1..=6).contains(&face.abs()));
  }
  for index in 0..48 {
    let [face, sign, edge] = test6(index).unwrap();
    assert!((1..=6).contains(&face.abs()));
    assert_eq!(sign.abs(), 1);
    assert!((0..12).contains(&edge));
  }
  for index in 0..16 {
    let t = test7(index).unwrap();
    for face in &t[..3] {
      assert!((1..=6).contains(&face.abs()));
    }
    assert_eq!(t[3].abs(), 1);
    assert!((0..12).contains(&t[4]));
  }
  for index in 0..6 {
    let t = test10(index).unwrap();
    assert!((1..=6).contains(&t[0].abs()) && (1..=6).contains(&t[1].abs()));
  }
  for index in 0..24 {
    let t = test12(index).unwrap();
    assert!((1..=6).contains(&t[0].abs()) && (1..=6).contains(&t[1].abs()));
    assert!((0..12).contains(&t[3]) && (0..12).contains(&t[5]));
  }
  for index in 0..2 {
    let t = test13(index).unwrap();
    let faces: HashSet<_> = t[..6].iter().map(|f| f.abs()).collect();
    assert_eq!(faces.len(), 6);
  }
}

#[test]
fn test_interior_reference_edges_cross() {
  for config in configs_of(6) {
    let index = case_entry(config).index;
    let edge = test6(index).unwrap()[2];
    assert_ne!(EDGE_TABLE[config as usize] & (1 << edge), 0);
  }
  for config in configs_of(12) {
    let t = test12(case_entry(config).index).unwrap();
    assert_ne!(EDGE_TABLE[config as usize] & (1 << t[3]), 0);
    assert_ne!(EDGE_TABLE[config as usize] & (1 << t[5]), 0);
  }
}

#[test]
fn test_saddle_tunnel_sides() {
  // case 4 tunnels through its two isolated corners
  for config in configs_of(4) {
    let isolated = if config.count_ones() == 2 { 1 } else { -1 };
    assert_eq!(test4(case_entry(config).index).unwrap(), isolated, "config {config}");
  }
  // case 10: face ids are signed by the inside corners, which may tunnel
  // while both faces separate them and the other side may once both join
  for config in configs_of(10) {
    let [f1, f2, sub0, sub3] = test10(case_entry(config).index).unwrap();
    assert_eq!(f1.signum(), f2.signum());
    assert_eq!(sub0, f1.signum(), "config {config}");
    assert_eq!(sub3, -sub0, "config {config}");
  }
}

#[test]
fn test_subconfig13_is_bijective() {
  let mut seen = HashSet::new();
  let mut impossible = 0;
  for bits in 0..64u8 {
    match subconfig13(bits) {
      Ok(v) => {
        assert!(v <= 45);
        assert!(seen.insert(v), "value {} repeated", v);
      }
      Err(_) => impossible += 1,
    }
  }
  assert_eq!(seen.len(), 46);
  assert_eq!(impossible, 18);
  assert_eq!(subconfig13(0).unwrap(), 0);
  assert_eq!(subconfig13(63).unwrap(), 45);
}

#[test]
fn test_missing_row_is_inconsistency() {
  let err = tiling(Subcase::Case13_1, 2).unwrap_err();
  assert!(matches!(err, ExtractError::InternalInconsistency(_)));
  assert!(tiling(Subcase::Case7_2(3), 0).is_err());
}
