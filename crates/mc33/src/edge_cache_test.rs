use super::*;
use crate::error::ExtractError;
use crate::types::ExtractConfig;

/// f = 4i - 1 on a 2x2x2 lattice.
fn ramp() -> Vec<f32> {
  let mut data = Vec::new();
  for i in 0..2 {
    for _ in 0..4 {
      data.push(4.0 * i as f32 - 1.0);
    }
  }
  data
}

#[test]
fn test_key_round_trip() {
  let key = EdgeKey::new([7, 1 << 19, 3], Axis::Y);
  assert_eq!(key.origin(), [7, 1 << 19, 3]);
  assert_eq!(key.axis(), Axis::Y);
  assert_eq!(key.end(), [7, (1 << 19) + 1, 3]);

  let center = CenterKey::new([4, 5, 6]);
  assert_eq!(center.cube(), [4, 5, 6]);
}

#[test]
fn test_key_order_is_lexicographic() {
  let a = EdgeKey::new([0, 9, 9], Axis::Z);
  let b = EdgeKey::new([1, 0, 0], Axis::X);
  let c = EdgeKey::new([1, 0, 0], Axis::Y);
  assert!(a < b && b < c);
}

#[test]
fn test_neighbouring_cubes_share_edge_keys() {
  // edge 2 of cube (1, 2, 3) is edge 0 of cube (1, 3, 3)
  let shared = EdgeKey::of_cube_edge([1, 2, 3], 2);
  assert_eq!(shared, EdgeKey::of_cube_edge([1, 3, 3], 0));
  assert_eq!(shared.origin(), [1, 3, 3]);
  assert_eq!(shared.axis(), Axis::X);

  // edge 10 of cube (0, 0, 0) is edge 11 of cube (1, 0, 0)
  assert_eq!(
    EdgeKey::of_cube_edge([0, 0, 0], 10),
    EdgeKey::of_cube_edge([1, 0, 0], 11)
  );
}

#[test]
fn test_vertex_interpolates_and_is_idempotent() {
  let data = ramp();
  let field = ScalarField::new(&data, [2, 2, 2], 0.0, &ExtractConfig::default()).unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();

  let key = EdgeKey::new([0, 1, 0], Axis::X);
  let first = cache.vertex_for_edge(&field, key, &mesh).unwrap();
  let again = cache.vertex_for_edge(&field, key, &mesh).unwrap();
  assert_eq!(first, again);
  assert_eq!(cache.get(key), Some(first));
  assert_eq!(mesh.len(), 1);

  let out = mesh.finish(false);
  let v = out.vertices[first as usize];
  assert!((v.position[0] - 0.25).abs() < 1e-6);
  assert_eq!(v.position[1], 1.0);
  assert_eq!(v.normal, [1.0, 0.0, 0.0]);
}

#[test]
fn test_spacing_scales_positions() {
  let data = ramp();
  let config = ExtractConfig::default().with_spacing([2.0, 3.0, 1.0]);
  let field = ScalarField::new(&data, [2, 2, 2], 0.0, &config).unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();

  let index = cache
    .vertex_for_edge(&field, EdgeKey::new([0, 1, 1], Axis::X), &mesh)
    .unwrap();
  let v = mesh.finish(false).vertices[index as usize];
  assert!((v.position[0] - 0.5).abs() < 1e-6);
  assert_eq!(v.position[1], 3.0);
  assert_eq!(v.position[2], 1.0);
}

#[test]
fn test_edge_without_crossing_fails() {
  let data = ramp();
  let field = ScalarField::new(&data, [2, 2, 2], 0.0, &ExtractConfig::default()).unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();

  let err = cache
    .vertex_for_edge(&field, EdgeKey::new([0, 0, 0], Axis::Y), &mesh)
    .unwrap_err();
  assert!(matches!(err, ExtractError::InternalInconsistency(_)));
  assert!(cache.is_empty());
  assert!(mesh.is_empty());
}

#[test]
fn test_edge_leaving_lattice_fails() {
  let data = ramp();
  let field = ScalarField::new(&data, [2, 2, 2], 0.0, &ExtractConfig::default()).unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();

  let err = cache
    .vertex_for_edge(&field, EdgeKey::new([1, 0, 0], Axis::X), &mesh)
    .unwrap_err();
  assert!(matches!(err, ExtractError::InputRange { i: 2, .. }));
}

#[test]
fn test_cancelled_gradient_falls_back_to_edge_direction() {
  // central differences vanish at i = 1 and i = 2
  let data = [1.0f64, -1.0, 1.0, -1.0];
  let cache = EdgeCache::new();

  let forward = ScalarField::new(&data, [4, 1, 1], 0.0, &ExtractConfig::default()).unwrap();
  let mesh = MeshAccumulator::new();
  let index = cache
    .vertex_for_edge(&forward, EdgeKey::new([1, 0, 0], Axis::X), &mesh)
    .unwrap();
  assert_eq!(mesh.finish(false).vertices[index as usize].normal, [1.0, 0.0, 0.0]);

  let reversed = ScalarField::new(
    &data,
    [4, 1, 1],
    0.0,
    &ExtractConfig::default().with_reverse_gradient(true),
  )
  .unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();
  let index = cache
    .vertex_for_edge(&reversed, EdgeKey::new([1, 0, 0], Axis::X), &mesh)
    .unwrap();
  assert_eq!(mesh.finish(false).vertices[index as usize].normal, [-1.0, 0.0, 0.0]);
}

#[test]
fn test_center_vertex_averages_cube_edges() {
  let data = ramp();
  let field = ScalarField::new(&data, [2, 2, 2], 0.0, &ExtractConfig::default()).unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();

  assert!(cache.center_vertex_for_cube(&field, [0, 0, 0], &mesh).is_err());

  // the four x edges of the cube cross at x = 0.25
  for edge in [0u8, 2, 4, 6] {
    cache
      .vertex_for_edge(&field, EdgeKey::of_cube_edge([0, 0, 0], edge), &mesh)
      .unwrap();
  }
  let center = cache.center_vertex_for_cube(&field, [0, 0, 0], &mesh).unwrap();
  assert_eq!(center, 4);
  assert_eq!(cache.center_vertex_for_cube(&field, [0, 0, 0], &mesh).unwrap(), 4);
  assert_eq!(cache.center_count(), 1);

  let v = mesh.finish(false).vertices[center as usize];
  assert!((v.position[0] - 0.25).abs() < 1e-6);
  assert!((v.position[1] - 0.5).abs() < 1e-6);
  assert!((v.position[2] - 0.5).abs() < 1e-6);
  assert_eq!(v.normal, [1.0, 0.0, 0.0]);
}

#[test]
fn test_concurrent_requests_create_one_vertex() {
  use rayon::prelude::*;

  let data = ramp();
  let field = ScalarField::new(&data, [2, 2, 2], 0.0, &ExtractConfig::default()).unwrap();
  let cache = EdgeCache::new();
  let mesh = MeshAccumulator::new();
  let key = EdgeKey::new([0, 0, 1], Axis::X);

  let indices: Vec<u32> = (0..256)
    .into_par_iter()
    .map(|_| cache.vertex_for_edge(&field, key, &mesh).unwrap())
    .collect();
  assert!(indices.iter().all(|&i| i == indices[0]));
  assert_eq!(mesh.len(), 1);
}
