//! Scalar field accessor over a flat sample lattice.
//!
//! # Memory Layout
//!
//! ```text
//! Samples are row-major with the last axis innermost:
//!
//! index = (i * Nj + j) * Nk + k
//!
//! Address:  0       1       ...  Nk-1      Nk      ...
//! Content: [0,0,0] [0,0,1]  ... [0,0,Nk-1] [0,1,0] ...
//! ```
//!
//! A raw scan stored slice by slice therefore maps its slice axis to `i`.
//! Values are reported relative to the isovalue and never as exact zero.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractConfig, RVec3, Real};

/// Numeric sample type readable by the extractor.
pub trait Sample: Copy + Send + Sync + 'static {
  fn to_real(self) -> Real;
}

macro_rules! impl_sample {
  ($($t:ty),*) => {
    $(
      impl Sample for $t {
        #[inline(always)]
        fn to_real(self) -> Real {
          self as Real
        }
      }
    )*
  };
}

impl_sample!(u8, u16, u32, i8, i16, i32, f32, f64);

/// Push `value` away from zero by at least `epsilon`, keeping its sign.
/// Exact zero goes to the non-negative side.
#[inline(always)]
pub fn nudge(value: Real, epsilon: Real) -> Real {
  if value.abs() < epsilon {
    if value < 0.0 {
      -epsilon
    } else {
      epsilon
    }
  } else {
    value
  }
}

/// Read-only view of a lattice at one isovalue.
#[derive(Clone, Copy)]
pub struct ScalarField<'a, S: Sample> {
  data: &'a [S],
  dims: [usize; 3],
  spacing: [Real; 3],
  iso: Real,
  epsilon: Real,
  reverse_gradient: bool,
}

impl<'a, S: Sample> ScalarField<'a, S> {
  /// Wrap `data` (length `dims[0] * dims[1] * dims[2]`).
  pub fn new(data: &'a [S], dims: [usize; 3], iso: Real, config: &ExtractConfig) -> ExtractResult<Self> {
    let expected = dims
      .iter()
      .try_fold(1usize, |acc, &d| acc.checked_mul(d))
      .ok_or_else(|| ExtractError::InvalidLattice(format!("dims {dims:?} overflow")))?;
    if data.len() != expected {
      return Err(ExtractError::InvalidLattice(format!(
        "{} samples for dims {:?} (expected {})",
        data.len(),
        dims,
        expected
      )));
    }
    if config.spacing.iter().any(|&s| !(s > 0.0)) {
      return Err(ExtractError::InvalidLattice(format!(
        "spacing {:?} must be positive",
        config.spacing
      )));
    }
    if !(config.epsilon > 0.0) {
      return Err(ExtractError::InvalidLattice(format!(
        "epsilon {} must be positive",
        config.epsilon
      )));
    }

    Ok(Self {
      data,
      dims,
      spacing: config.spacing,
      iso,
      epsilon: config.epsilon,
      reverse_gradient: config.reverse_gradient,
    })
  }

  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  pub fn spacing(&self) -> [Real; 3] {
    self.spacing
  }

  pub fn iso(&self) -> Real {
    self.iso
  }

  /// Number of cubes, `(Ni-1)(Nj-1)(Nk-1)`, zero for a flat lattice.
  pub fn cube_count(&self) -> usize {
    self.dims.iter().map(|&d| d.saturating_sub(1)).product()
  }

  #[inline]
  pub fn contains(&self, p: [usize; 3]) -> bool {
    p[0] < self.dims[0] && p[1] < self.dims[1] && p[2] < self.dims[2]
  }

  #[inline(always)]
  fn index(&self, p: [usize; 3]) -> usize {
    (p[0] * self.dims[1] + p[1]) * self.dims[2] + p[2]
  }

  /// Signed, nudged sample at `(i, j, k)`.
  pub fn sample(&self, i: usize, j: usize, k: usize) -> ExtractResult<Real> {
    let p = [i, j, k];
    if !self.contains(p) {
      return Err(ExtractError::InputRange {
        i,
        j,
        k,
        dims: self.dims,
      });
    }
    Ok(self.value(p))
  }

  /// Signed, nudged sample; `p` must be inside the lattice.
  #[inline(always)]
  pub(crate) fn value(&self, p: [usize; 3]) -> Real {
    nudge(self.data[self.index(p)].to_real() - self.iso, self.epsilon)
  }

  /// The 8 corner values of the cube whose low corner is `cube`.
  #[inline]
  pub(crate) fn cube_values(&self, cube: [usize; 3]) -> [Real; 8] {
    std::array::from_fn(|l| self.value(crate::edge_table::corner_point(cube, l)))
  }

  /// Finite-difference gradient at a lattice point.
  ///
  /// Central difference inside, one-sided `(f(n-1) - f(n-2)) / s` or
  /// `(f(1) - f(0)) / s` on the boundary planes. An axis with a single
  /// sample has zero derivative.
  pub fn gradient(&self, i: usize, j: usize, k: usize) -> ExtractResult<RVec3> {
    let p = [i, j, k];
    if !self.contains(p) {
      return Err(ExtractError::InputRange {
        i,
        j,
        k,
        dims: self.dims,
      });
    }
    Ok(self.gradient_at(p))
  }

  pub(crate) fn gradient_at(&self, p: [usize; 3]) -> RVec3 {
    let mut g = [0.0 as Real; 3];
    for (axis, out) in g.iter_mut().enumerate() {
      let n = self.dims[axis];
      if n < 2 {
        continue;
      }
      let mut lo = p;
      let mut hi = p;
      if p[axis] > 0 {
        lo[axis] -= 1;
      }
      if p[axis] + 1 < n {
        hi[axis] += 1;
      }
      let steps = (hi[axis] - lo[axis]) as Real;
      *out = (self.value(hi) - self.value(lo)) / (steps * self.spacing[axis]);
    }
    RVec3::from_array(g)
  }

  /// Unnormalized normal: the gradient, negated when the field is
  /// configured with a reversed gradient direction.
  pub fn normal(&self, i: usize, j: usize, k: usize) -> ExtractResult<RVec3> {
    self.gradient(i, j, k).map(|g| self.orient(g))
  }

  #[inline]
  pub(crate) fn normal_at(&self, p: [usize; 3]) -> RVec3 {
    self.orient(self.gradient_at(p))
  }

  #[inline]
  pub(crate) fn orient(&self, g: RVec3) -> RVec3 {
    if self.reverse_gradient {
      -g
    } else {
      g
    }
  }

  /// Physical position of a lattice point.
  #[inline]
  pub(crate) fn position(&self, p: [usize; 3]) -> RVec3 {
    RVec3::new(
      p[0] as Real * self.spacing[0],
      p[1] as Real * self.spacing[1],
      p[2] as Real * self.spacing[2],
    )
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
