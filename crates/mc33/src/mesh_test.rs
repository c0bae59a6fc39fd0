use super::*;
use crate::types::Axis;

fn vertex(x: f32) -> Vertex {
  Vertex {
    position: [x, 2.0 * x, -x],
    normal: [0.0, 0.0, 1.0],
  }
}

#[test]
fn test_push_returns_sequential_indices_and_tracks_bounds() {
  let mesh = MeshAccumulator::new();
  assert!(mesh.is_empty());
  let a = mesh.push_vertex(VertexKey::Edge(EdgeKey::new([0, 0, 0], Axis::X)), vertex(1.0));
  let b = mesh.push_vertex(VertexKey::Edge(EdgeKey::new([0, 0, 0], Axis::Y)), vertex(-2.0));
  assert_eq!((a, b), (0, 1));
  assert_eq!(mesh.len(), 2);

  let out = mesh.finish(false);
  assert_eq!(out.bmin(), [-2.0, -4.0, -1.0]);
  assert_eq!(out.bmax(), [1.0, 2.0, 2.0]);
}

#[test]
fn test_edge_keys_sort_before_centers() {
  let edge = VertexKey::Edge(EdgeKey::new([9, 9, 9], Axis::Z));
  let center = VertexKey::Center(CenterKey::new([0, 0, 0]));
  assert!(edge < center);
}

#[test]
fn test_rotate_keeps_winding() {
  assert_eq!(rotate_min_first([3, 1, 2]), [1, 2, 3]);
  assert_eq!(rotate_min_first([2, 3, 1]), [1, 2, 3]);
  assert_eq!(rotate_min_first([1, 3, 2]), [1, 3, 2]);
}

#[test]
fn test_canonical_order_is_insertion_independent() {
  let keys = [
    VertexKey::Edge(EdgeKey::new([0, 0, 0], Axis::X)),
    VertexKey::Edge(EdgeKey::new([0, 1, 0], Axis::Z)),
    VertexKey::Edge(EdgeKey::new([1, 0, 0], Axis::Y)),
    VertexKey::Center(CenterKey::new([0, 0, 0])),
  ];

  // same geometry, pushed in two different orders
  let forward = MeshAccumulator::new();
  for (n, &key) in keys.iter().enumerate() {
    forward.push_vertex(key, vertex(n as f32));
  }
  forward.push_triangles(&[[0, 1, 3], [1, 2, 3]]);

  let backward = MeshAccumulator::new();
  for (n, &key) in keys.iter().enumerate().rev() {
    backward.push_vertex(key, vertex(n as f32));
  }
  // index of key n is 3 - n
  backward.push_triangles(&[[3, 2, 0], [2, 1, 0]]);

  let a = forward.finish(true);
  let b = backward.finish(true);
  assert_eq!(a.vertices, b.vertices);
  assert_eq!(a.indices, b.indices);
  assert_eq!(a.indices, vec![0, 1, 3, 1, 2, 3]);
}

#[test]
fn test_concurrent_pushes_keep_triangles_whole() {
  use rayon::prelude::*;

  let mesh = MeshAccumulator::new();
  (0..64u32).into_par_iter().for_each(|n| {
    let base = n * 3;
    mesh.push_triangles(&[[base, base + 1, base + 2]]);
  });
  let out = mesh.finish(false);
  assert_eq!(out.triangle_count(), 64);
  for tri in out.triangles() {
    assert_eq!(tri[0] % 3, 0);
    assert_eq!(tri[1], tri[0] + 1);
    assert_eq!(tri[2], tri[0] + 2);
  }
}
