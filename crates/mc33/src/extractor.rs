//! Extraction run orchestration.
//!
//! # Flow
//!
//! ```text
//! run(iso)
//!   │
//!   ├─ interpolate   par over i-slices: every lattice edge whose endpoints
//!   │                straddle zero gets its vertex in the edge cache
//!   │
//!   ├─ march         par over i-slices of cubes: classify, resolve the
//!   │                tiling, append triangles (centre vertices on demand)
//!   │
//!   └─ finish        drain the accumulator, optionally in canonical order
//! ```
//!
//! Both passes write only through [`EdgeCache`] and [`MeshAccumulator`], so
//! slices can run in any order. Any error aborts the run; no partial mesh is
//! returned.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::Sender;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use web_time::Instant;

use crate::cube::{process_cube, CubeContext};
use crate::edge_cache::{EdgeCache, EdgeKey, MAX_DIM};
use crate::error::{ExtractError, ExtractResult};
use crate::field::{Sample, ScalarField};
use crate::mesh::MeshAccumulator;
use crate::types::{Axis, ExtractConfig, MeshOutput, Real};

/// Number of topological cases, including the empty one.
pub const CASE_COUNT: usize = 15;

/// Pass of a run that a [`Progress`] event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
  Interpolate,
  March,
}

/// One slice of the first axis finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
  pub stage: Stage,
  /// Slices finished so far in this stage (1-based, unordered across events).
  pub completed: usize,
  pub total: usize,
}

/// Counters and timings of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionStats {
  /// Cubes visited, `(Ni-1)(Nj-1)(Nk-1)`.
  pub cube_count: usize,
  /// Lattice edges with a sign change (one vertex each).
  pub crossing_edges: usize,
  pub vertex_count: usize,
  pub triangle_count: usize,
  /// Interior vertices created for edge id 12.
  pub centre_vertices: usize,
  /// Cubes per topological case, index 0 counting configurations 0/255.
  pub case_histogram: [usize; CASE_COUNT],
  pub interpolate_us: u64,
  pub march_us: u64,
  pub total_us: u64,
}

/// Isosurface extractor over a borrowed lattice.
///
/// The lattice and configuration are validated once; [`run`](Self::run) can
/// then be called for any number of isovalues.
pub struct Extractor<'a, S: Sample> {
  data: &'a [S],
  dims: [usize; 3],
  config: ExtractConfig,
  progress: Option<Sender<Progress>>,
}

impl<'a, S: Sample> Extractor<'a, S> {
  pub fn new(data: &'a [S], dims: [usize; 3], config: ExtractConfig) -> ExtractResult<Self> {
    if dims.iter().any(|&d| d > MAX_DIM) {
      return Err(ExtractError::InvalidLattice(format!(
        "dims {dims:?} exceed the addressable {MAX_DIM} per axis"
      )));
    }
    // validates length, spacing and epsilon
    ScalarField::new(data, dims, 0.0, &config)?;
    Ok(Self {
      data,
      dims,
      config,
      progress: None,
    })
  }

  /// Report per-slice progress on `sender`. Events are dropped when the
  /// channel is full or disconnected.
  pub fn with_progress(mut self, sender: Sender<Progress>) -> Self {
    self.progress = Some(sender);
    self
  }

  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  pub fn config(&self) -> &ExtractConfig {
    &self.config
  }

  fn report(&self, stage: Stage, counter: &AtomicUsize, total: usize) {
    let completed = counter.fetch_add(1, Ordering::Relaxed) + 1;
    if let Some(sender) = &self.progress {
      let _ = sender.try_send(Progress {
        stage,
        completed,
        total,
      });
    }
  }

  /// Extract the surface where the field equals `iso`.
  #[tracing::instrument(skip_all, name = "mc33::run", fields(iso = iso as f64, dims = ?self.dims))]
  pub fn run(&self, iso: Real) -> ExtractResult<(MeshOutput, ExtractionStats)> {
    let total_start = Instant::now();
    let field = ScalarField::new(self.data, self.dims, iso, &self.config)?;
    let mut stats = ExtractionStats {
      cube_count: field.cube_count(),
      ..Default::default()
    };

    if stats.cube_count == 0 {
      warn!(dims = ?self.dims, "lattice has no cubes, nothing to extract");
      return Ok((MeshOutput::new(), stats));
    }

    let cache = EdgeCache::new();
    let mesh = MeshAccumulator::new();

    let start = Instant::now();
    stats.crossing_edges = self.interpolate(&field, &cache, &mesh)?;
    stats.interpolate_us = start.elapsed().as_micros() as u64;
    debug!(
      crossing_edges = stats.crossing_edges,
      us = stats.interpolate_us,
      "interpolation pass done"
    );

    let start = Instant::now();
    stats.case_histogram = self.march(&field, &cache, &mesh)?;
    stats.march_us = start.elapsed().as_micros() as u64;
    debug!(us = stats.march_us, "march pass done");

    stats.centre_vertices = cache.center_count();
    let output = mesh.finish(self.config.canonical_order);
    stats.vertex_count = output.vertices.len();
    stats.triangle_count = output.triangle_count();
    stats.total_us = total_start.elapsed().as_micros() as u64;

    info!(
      vertices = stats.vertex_count,
      triangles = stats.triangle_count,
      centres = stats.centre_vertices,
      total_ms = stats.total_us as f64 / 1000.0,
      "extraction finished"
    );
    Ok((output, stats))
  }

  /// Create the vertex of every crossing edge; returns how many there are.
  fn interpolate(
    &self,
    field: &ScalarField<'_, S>,
    cache: &EdgeCache,
    mesh: &MeshAccumulator,
  ) -> ExtractResult<usize> {
    let _span = tracing::debug_span!("interpolate").entered();
    let [ni, nj, nk] = self.dims;
    let done = AtomicUsize::new(0);

    (0..ni)
      .into_par_iter()
      .map(|i| -> ExtractResult<usize> {
        let mut crossings = 0;
        for j in 0..nj {
          for k in 0..nk {
            let p = [i, j, k];
            let here = field.value(p);
            for axis in Axis::ALL {
              let mut q = p;
              q[axis.index()] += 1;
              if !field.contains(q) || here * field.value(q) >= 0.0 {
                continue;
              }
              cache.vertex_for_edge(field, EdgeKey::new(p, axis), mesh)?;
              crossings += 1;
            }
          }
        }
        self.report(Stage::Interpolate, &done, ni);
        Ok(crossings)
      })
      .try_reduce(|| 0, |a, b| Ok(a + b))
  }

  /// Process every cube; returns the case histogram.
  fn march(
    &self,
    field: &ScalarField<'_, S>,
    cache: &EdgeCache,
    mesh: &MeshAccumulator,
  ) -> ExtractResult<[usize; CASE_COUNT]> {
    let _span = tracing::debug_span!("march").entered();
    let [ni, nj, nk] = self.dims;
    let ctx = CubeContext { field, cache, mesh };
    let done = AtomicUsize::new(0);

    (0..ni - 1)
      .into_par_iter()
      .map(|i| -> ExtractResult<[usize; CASE_COUNT]> {
        let mut histogram = [0; CASE_COUNT];
        for j in 0..nj - 1 {
          for k in 0..nk - 1 {
            let outcome = process_cube(&ctx, [i, j, k])?;
            histogram[outcome.case as usize] += 1;
          }
        }
        self.report(Stage::March, &done, ni - 1);
        Ok(histogram)
      })
      .try_reduce(
        || [0; CASE_COUNT],
        |mut a, b| {
          for (x, y) in a.iter_mut().zip(b) {
            *x += y;
          }
          Ok(a)
        },
      )
  }
}

/// One-shot extraction: validate, run once at `iso`.
pub fn extract<S: Sample>(
  data: &[S],
  dims: [usize; 3],
  iso: Real,
  config: ExtractConfig,
) -> ExtractResult<(MeshOutput, ExtractionStats)> {
  Extractor::new(data, dims, config)?.run(iso)
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod extractor_test;
