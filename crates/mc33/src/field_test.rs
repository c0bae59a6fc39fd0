use super::*;

fn lattice<T>(dims: [usize; 3], f: impl Fn(usize, usize, usize) -> T) -> Vec<T> {
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

fn approx(a: Real, b: Real) -> bool {
  (a - b).abs() < 1e-9
}

#[test]
fn test_sample_is_relative_to_iso() {
  let data = lattice([2, 3, 4], |i, j, k| (100 * i + 10 * j + k) as u16);
  let field = ScalarField::new(&data, [2, 3, 4], 50.0, &ExtractConfig::default()).unwrap();

  assert_eq!(field.sample(0, 0, 0).unwrap(), -50.0);
  assert_eq!(field.sample(1, 2, 3).unwrap(), 73.0);
}

#[test]
fn test_sample_never_zero() {
  let data = vec![7u8; 8];
  let config = ExtractConfig::default().with_epsilon(1e-3);
  let field = ScalarField::new(&data, [2, 2, 2], 7.0, &config).unwrap();

  assert_eq!(field.sample(1, 1, 1).unwrap(), 1e-3);
  assert_eq!(nudge(-1e-5, 1e-3), -1e-3);
  assert_eq!(nudge(2e-4, 1e-3), 1e-3);
  assert_eq!(nudge(-0.5, 1e-3), -0.5);
}

#[test]
fn test_out_of_range_fails() {
  let data = vec![0u16; 8];
  let field = ScalarField::new(&data, [2, 2, 2], 0.5, &ExtractConfig::default()).unwrap();

  let err = field.sample(2, 0, 0).unwrap_err();
  assert!(matches!(err, ExtractError::InputRange { i: 2, .. }));
  assert!(field.gradient(0, 0, 5).is_err());
}

#[test]
fn test_length_mismatch_rejected() {
  let data = vec![0u16; 7];
  let result = ScalarField::new(&data, [2, 2, 2], 0.5, &ExtractConfig::default());
  assert!(matches!(result, Err(ExtractError::InvalidLattice(_))));
}

#[test]
fn test_bad_spacing_rejected() {
  let data = vec![0u16; 8];
  let config = ExtractConfig::default().with_spacing([1.0, 0.0, 1.0]);
  assert!(ScalarField::new(&data, [2, 2, 2], 0.5, &config).is_err());
}

#[test]
fn test_gradient_of_linear_field_is_exact_everywhere() {
  let dims = [4, 3, 5];
  let data = lattice(dims, |i, j, k| 2.0 * i as f64 + 3.0 * j as f64 - k as f64);
  let config = ExtractConfig::default().with_spacing([1.0, 0.5, 2.0]);
  let field = ScalarField::new(&data, dims, 0.25, &config).unwrap();

  for i in 0..dims[0] {
    for j in 0..dims[1] {
      for k in 0..dims[2] {
        let g = field.gradient(i, j, k).unwrap();
        assert!(approx(g.x, 2.0), "x at {:?}", (i, j, k));
        assert!(approx(g.y, 6.0), "y at {:?}", (i, j, k));
        assert!(approx(g.z, -0.5), "z at {:?}", (i, j, k));
      }
    }
  }
}

#[test]
fn test_gradient_one_sided_on_boundary() {
  // f = i^2 along i, constant elsewhere
  let dims = [4, 2, 2];
  let data = lattice(dims, |i, _, _| (i * i) as i32);
  let field = ScalarField::new(&data, dims, 0.5, &ExtractConfig::default()).unwrap();

  assert!(approx(field.gradient(0, 0, 0).unwrap().x, 1.0));
  assert!(approx(field.gradient(1, 0, 0).unwrap().x, 2.0));
  assert!(approx(field.gradient(2, 1, 1).unwrap().x, 4.0));
  assert!(approx(field.gradient(3, 1, 0).unwrap().x, 5.0));
  assert!(approx(field.gradient(3, 1, 0).unwrap().y, 0.0));
}

#[test]
fn test_reverse_gradient_flips_normal() {
  let dims = [3, 3, 3];
  let data = lattice(dims, |i, j, k| (i + 2 * j + 3 * k) as f32);
  let forward = ScalarField::new(&data, dims, 0.5, &ExtractConfig::default()).unwrap();
  let reversed = ScalarField::new(
    &data,
    dims,
    0.5,
    &ExtractConfig::default().with_reverse_gradient(true),
  )
  .unwrap();

  let a = forward.normal(1, 1, 1).unwrap();
  let b = reversed.normal(1, 1, 1).unwrap();
  assert!(approx(a.x, 1.0) && approx(a.y, 2.0) && approx(a.z, 3.0));
  assert_eq!(a, -b);
}

#[test]
fn test_cube_values_follow_corner_numbering() {
  let dims = [2, 2, 2];
  let data = lattice(dims, |i, j, k| (4 * i + 2 * j + k) as u8);
  let field = ScalarField::new(&data, dims, 0.5, &ExtractConfig::default()).unwrap();

  let values = field.cube_values([0, 0, 0]);
  // corner l at (i, j, k) = ((l ^ l >> 1) & 1, l >> 1 & 1, l >> 2 & 1)
  assert_eq!(values, [-0.5, 3.5, 5.5, 1.5, 0.5, 4.5, 6.5, 2.5]);
  assert_eq!(field.cube_count(), 1);
}
