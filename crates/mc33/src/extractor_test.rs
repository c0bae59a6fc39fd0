use std::collections::HashMap;

use super::*;
use crate::types::Vertex;

fn lattice(dims: [usize; 3], f: impl Fn(usize, usize, usize) -> f64) -> Vec<f64> {
  let mut out = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
  for i in 0..dims[0] {
    for j in 0..dims[1] {
      for k in 0..dims[2] {
        out.push(f(i, j, k));
      }
    }
  }
  out
}

const SPHERE_CENTER: [f64; 3] = [5.5, 5.2, 5.4];
const SPHERE_DIMS: [usize; 3] = [12, 12, 12];

fn sphere() -> Vec<f64> {
  let [cx, cy, cz] = SPHERE_CENTER;
  lattice(SPHERE_DIMS, |i, j, k| {
    let (x, y, z) = (i as f64 - cx, j as f64 - cy, k as f64 - cz);
    x * x + y * y + z * z - 3.7 * 3.7
  })
}

/// Directed edge multiplicities of every triangle.
fn directed_edges(mesh: &MeshOutput) -> HashMap<(u32, u32), usize> {
  let mut edges = HashMap::new();
  for [a, b, c] in mesh.triangles() {
    for edge in [(a, b), (b, c), (c, a)] {
      *edges.entry(edge).or_insert(0) += 1;
    }
  }
  edges
}

/// Directed edges used more than once or missing their reverse.
fn open_edges(mesh: &MeshOutput) -> usize {
  let edges = directed_edges(mesh);
  edges
    .iter()
    .filter(|&(&(a, b), &count)| count != 1 || !edges.contains_key(&(b, a)))
    .count()
}

fn xorshift(seed: u64) -> impl FnMut() -> u64 {
  let mut state = seed;
  move || {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
  }
}

/// Lattice with a one-sample `border` around values drawn from `interior`.
fn padded<T: Copy>(dims: [usize; 3], border: T, mut interior: impl FnMut() -> T) -> Vec<T> {
  let mut out = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
  for i in 0..dims[0] {
    for j in 0..dims[1] {
      for k in 0..dims[2] {
        let outer = [i, j, k].iter().zip(dims).any(|(&p, n)| p == 0 || p == n - 1);
        out.push(if outer { border } else { interior() });
      }
    }
  }
  out
}

fn length(v: [f32; 3]) -> f32 {
  (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn test_sphere_is_closed_and_consistently_wound() {
  let data = sphere();
  let (mesh, stats) = extract(&data, SPHERE_DIMS, 0.0, ExtractConfig::default()).unwrap();
  assert!(stats.triangle_count > 100);

  // every edge appears once in each direction
  let edges = directed_edges(&mesh);
  for (&(a, b), &count) in &edges {
    assert_eq!(count, 1, "edge ({a}, {b}) used {count} times one way");
    assert_eq!(edges.get(&(b, a)), Some(&1), "edge ({a}, {b}) has no twin");
  }
}

#[test]
fn test_sphere_normals_and_winding_point_outward() {
  let data = sphere();
  let (mesh, _) = extract(&data, SPHERE_DIMS, 0.0, ExtractConfig::default()).unwrap();
  let radial = |v: &Vertex| {
    [
      v.position[0] as f64 - SPHERE_CENTER[0],
      v.position[1] as f64 - SPHERE_CENTER[1],
      v.position[2] as f64 - SPHERE_CENTER[2],
    ]
  };

  for v in &mesh.vertices {
    assert!((length(v.normal) - 1.0).abs() < 1e-5);
    let r = radial(v);
    let dot = r[0] * v.normal[0] as f64 + r[1] * v.normal[1] as f64 + r[2] * v.normal[2] as f64;
    assert!(dot > 0.0);
  }

  for [a, b, c] in mesh.triangles() {
    let [p, q, r] = [a, b, c].map(|n| mesh.vertices[n as usize].position);
    let u = [q[0] - p[0], q[1] - p[1], q[2] - p[2]];
    let w = [r[0] - p[0], r[1] - p[1], r[2] - p[2]];
    let n = [
      u[1] * w[2] - u[2] * w[1],
      u[2] * w[0] - u[0] * w[2],
      u[0] * w[1] - u[1] * w[0],
    ];
    let centroid = Vertex {
      position: [
        (p[0] + q[0] + r[0]) / 3.0,
        (p[1] + q[1] + r[1]) / 3.0,
        (p[2] + q[2] + r[2]) / 3.0,
      ],
      ..Vertex::default()
    };
    let d = radial(&centroid);
    assert!(d[0] * n[0] as f64 + d[1] * n[1] as f64 + d[2] * n[2] as f64 > 0.0);
  }
}

#[test]
fn test_reverse_gradient_flips_normals_only() {
  let data = sphere();
  let config = ExtractConfig::default().with_canonical_order(true);
  let (forward, _) = extract(&data, SPHERE_DIMS, 0.0, config.clone()).unwrap();
  let (reversed, _) = extract(&data, SPHERE_DIMS, 0.0, config.with_reverse_gradient(true)).unwrap();

  assert_eq!(forward.indices, reversed.indices);
  for (a, b) in forward.vertices.iter().zip(&reversed.vertices) {
    assert_eq!(a.position, b.position);
    assert_eq!(a.normal, b.normal.map(|c| -c));
  }
}

#[test]
fn test_indices_valid_and_distinct() {
  let data = sphere();
  let (mesh, stats) = extract(&data, SPHERE_DIMS, 2.0, ExtractConfig::default()).unwrap();
  let n = mesh.vertices.len() as u32;
  for [a, b, c] in mesh.triangles() {
    assert!(a < n && b < n && c < n);
    assert!(a != b && b != c && a != c);
  }
  assert_eq!(stats.vertex_count, stats.crossing_edges + stats.centre_vertices);
  assert_eq!(stats.case_histogram.iter().sum::<usize>(), stats.cube_count);
  assert_eq!(stats.cube_count, 11 * 11 * 11);
}

#[test]
fn test_random_field_has_no_interior_cracks() {
  let dims = [8, 8, 8];
  let mut state = 0x2545_f491_4f6c_dd1du64;
  let data: Vec<f64> = (0..dims[0] * dims[1] * dims[2])
    .map(|_| {
      state ^= state << 13;
      state ^= state >> 7;
      state ^= state << 17;
      (state >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    })
    .collect();
  let (mesh, stats) = extract(&data, dims, 0.0, ExtractConfig::default()).unwrap();
  assert!(stats.case_histogram[1..].iter().filter(|&&n| n > 0).count() > 8);

  let on_boundary = |n: u32| {
    let p = mesh.vertices[n as usize].position;
    (0..3).any(|a| p[a] == 0.0 || p[a] == (dims[a] - 1) as f32)
  };
  let edges = directed_edges(&mesh);
  for (&(a, b), &count) in &edges {
    assert_eq!(count, 1);
    if !edges.contains_key(&(b, a)) {
      assert!(on_boundary(a) && on_boundary(b), "open edge ({a}, {b}) inside the lattice");
    }
  }
}

#[test]
fn test_two_level_u16_volume_is_closed() {
  // +-10 around the isovalue: many faces have A*C == B*D exactly
  let dims = [9, 9, 9];
  for seed in 1..=8u64 {
    let mut next = xorshift(0x9e37_79b9_7f4a_7c15 ^ seed);
    let data: Vec<u16> = padded(dims, 1000, || if (next() >> 40) & 1 == 0 { 1190 } else { 1210 });
    let (mesh, _) = extract(&data, dims, 1200.0, ExtractConfig::default()).unwrap();
    assert!(mesh.triangle_count() > 0);
    assert_eq!(open_edges(&mesh), 0, "volume {seed} has cracks");
  }
}

#[test]
fn test_small_integer_lattice_is_closed() {
  // zeros land on the isovalue and are nudged
  let dims = [7, 7, 7];
  for seed in 1..=8u64 {
    let mut next = xorshift(0x2545_f491_4f6c_dd1d ^ seed);
    let data: Vec<i8> = padded(dims, -3, || ((next() >> 40) % 5) as i8 - 2);
    let (mesh, _) = extract(&data, dims, 0.0, ExtractConfig::default()).unwrap();
    assert!(mesh.triangle_count() > 0);
    assert_eq!(open_edges(&mesh), 0, "lattice {seed} has cracks");
  }
}

#[test]
fn test_split_cube_emits_two_triangles() {
  let data = [1.0f32, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0];
  let (mesh, stats) = extract(&data, [2, 2, 2], 0.0, ExtractConfig::default()).unwrap();

  assert_eq!(stats.case_histogram[8], 1);
  assert_eq!(mesh.triangle_count(), 2);
  assert_eq!(mesh.vertices.len(), 4);
  // the split runs across the first axis
  for v in &mesh.vertices {
    assert_eq!(v.position[0], 0.5);
    assert_eq!(v.normal, [-1.0, 0.0, 0.0]);
  }
}

#[test]
fn test_uniform_cube_emits_nothing() {
  for value in [5u16, 200] {
    let data = [value; 8];
    let (mesh, stats) = extract(&data, [2, 2, 2], 100.0, ExtractConfig::default()).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.triangle_count(), 0);
    assert_eq!(stats.case_histogram[0], 1);
  }
}

#[test]
fn test_plane_lies_at_scaled_height() {
  let dims = [3, 3, 3];
  let data = lattice(dims, |_, _, k| k as f64 - 1.0);
  let config = ExtractConfig::default().with_spacing([1.0, 1.0, 0.5]);
  let (mesh, stats) = extract(&data, dims, 0.0, config).unwrap();

  assert_eq!(mesh.triangle_count(), 8);
  assert_eq!(mesh.vertices.len(), 9);
  assert_eq!(stats.case_histogram[8], 4);
  assert_eq!(stats.case_histogram[0], 4);
  for v in &mesh.vertices {
    assert!((v.position[2] - 0.5).abs() < 1e-5, "z = {}", v.position[2]);
  }
  assert!((mesh.bmax()[0] - 2.0).abs() < 1e-6);
}

#[test]
fn test_checkerboard_is_four_corner_triangles() {
  let data = lattice([2, 2, 2], |i, j, k| if (i + j + k) % 2 == 0 { 1.0 } else { -1.0 });
  for canonical in [false, true] {
    let config = ExtractConfig::default().with_canonical_order(canonical);
    let (mesh, stats) = extract(&data, [2, 2, 2], 0.0, config).unwrap();
    assert_eq!(stats.case_histogram[13], 1);
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.vertices.len(), 12);
    assert_eq!(stats.centre_vertices, 0);
  }
}

#[test]
fn test_canonical_order_is_thread_count_independent() {
  let data = sphere();
  let config = ExtractConfig::default().with_canonical_order(true);
  let (parallel, _) = extract(&data, SPHERE_DIMS, 0.5, config.clone()).unwrap();

  let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
  let (serial, _) = pool
    .install(|| extract(&data, SPHERE_DIMS, 0.5, config))
    .unwrap();

  assert_eq!(parallel.vertices, serial.vertices);
  assert_eq!(parallel.indices, serial.indices);
}

#[test]
fn test_extractor_reruns_at_new_isovalues() {
  let data = sphere();
  let extractor = Extractor::new(&data, SPHERE_DIMS, ExtractConfig::default()).unwrap();
  let (small, _) = extractor.run(-4.0).unwrap();
  let (large, _) = extractor.run(6.0).unwrap();
  assert!(large.max_extent() > small.max_extent());
}

#[test]
fn test_progress_reports_every_slice() {
  let (sender, receiver) = crossbeam_channel::unbounded();
  let data = sphere();
  let extractor = Extractor::new(&data, SPHERE_DIMS, ExtractConfig::default())
    .unwrap()
    .with_progress(sender);
  extractor.run(0.0).unwrap();
  drop(extractor);

  let events: Vec<Progress> = receiver.iter().collect();
  let interpolate: Vec<_> = events.iter().filter(|e| e.stage == Stage::Interpolate).collect();
  let march: Vec<_> = events.iter().filter(|e| e.stage == Stage::March).collect();
  assert_eq!(interpolate.len(), 12);
  assert_eq!(march.len(), 11);
  assert!(interpolate.iter().any(|e| e.completed == e.total));
  assert!(march.iter().all(|e| e.total == 11));
}

#[test]
fn test_flat_lattice_is_empty() {
  let data = vec![0.0f64; 25];
  let (mesh, stats) = extract(&data, [1, 5, 5], 0.5, ExtractConfig::default()).unwrap();
  assert!(mesh.is_empty());
  assert_eq!(stats.cube_count, 0);
}

#[test]
fn test_invalid_lattice_rejected() {
  let data = vec![0u8; 7];
  assert!(matches!(
    Extractor::new(&data, [2, 2, 2], ExtractConfig::default()),
    Err(ExtractError::InvalidLattice(_))
  ));

  let empty: [u8; 0] = [];
  assert!(matches!(
    Extractor::new(&empty, [MAX_DIM + 1, 0, 1], ExtractConfig::default()),
    Err(ExtractError::InvalidLattice(_))
  ));
}
