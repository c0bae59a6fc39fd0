//! Non-blocking re-extraction for interactive isovalue changes.
//!
//! # Flow
//!
//! ```text
//! Caller                          rayon pool
//! ┌──────────────┐
//! │ request(iso) │──spawn──────► run(iso) ──► send(result)
//! └──────┬───────┘                                 │
//!        │ request(iso') drops the old receiver:   │
//!        │ the in-flight run finishes, its send    │
//!        │ fails and the result is discarded.      │
//!        ▼                                         │
//! ┌──────────────┐                                 │
//! │ poll()       │◄────────────────────────────────┘
//! └──────────────┘
//! ```
//!
//! Runs are never interrupted mid-cube.

use std::sync::Arc;

use crossbeam_channel::{self as channel, Receiver, TryRecvError};
use tracing::debug;

use crate::error::ExtractResult;
use crate::extractor::{ExtractionStats, Extractor};
use crate::field::Sample;
use crate::types::{ExtractConfig, MeshOutput, Real};

/// A finished background run.
#[derive(Debug)]
pub struct AsyncResult {
  pub iso: Real,
  pub mesh: MeshOutput,
  pub stats: ExtractionStats,
}

/// Background extractor over a shared lattice.
pub struct AsyncExtractor<S: Sample> {
  data: Arc<[S]>,
  dims: [usize; 3],
  config: ExtractConfig,
  receiver: Option<Receiver<ExtractResult<AsyncResult>>>,
  last_iso: Option<Real>,
}

impl<S: Sample> AsyncExtractor<S> {
  /// Validates the lattice up front so background runs only fail on
  /// internal errors.
  pub fn new(data: impl Into<Arc<[S]>>, dims: [usize; 3], config: ExtractConfig) -> ExtractResult<Self> {
    let data = data.into();
    Extractor::new(&data, dims, config.clone())?;
    Ok(Self {
      data,
      dims,
      config,
      receiver: None,
      last_iso: None,
    })
  }

  /// Check if a run is pending.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Isovalue of the most recent request.
  pub fn last_iso(&self) -> Option<Real> {
    self.last_iso
  }

  /// Start extracting at `iso`, superseding any pending run.
  ///
  /// Returns `false` without doing anything when `iso` equals the last
  /// requested isovalue.
  pub fn request(&mut self, iso: Real) -> bool {
    if self.last_iso == Some(iso) {
      return false;
    }
    if self.receiver.take().is_some() {
      debug!(iso, "superseding pending extraction");
    }
    self.last_iso = Some(iso);

    let (sender, receiver) = channel::bounded(1);
    self.receiver = Some(receiver);

    let data = Arc::clone(&self.data);
    let dims = self.dims;
    let config = self.config.clone();
    rayon::spawn(move || {
      let result = Extractor::new(&data, dims, config)
        .and_then(|extractor| extractor.run(iso))
        .map(|(mesh, stats)| AsyncResult { iso, mesh, stats });
      // receiver dropped = superseded
      let _ = sender.send(result);
    });

    true
  }

  /// Poll for the latest requested result (non-blocking).
  pub fn poll(&mut self) -> Option<ExtractResult<AsyncResult>> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(result) => {
        self.receiver = None;
        Some(result)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.receiver = None;
        None
      }
    }
  }

  /// Discard the pending run. The next `request` runs even for the same
  /// isovalue.
  pub fn cancel(&mut self) {
    self.receiver = None;
    self.last_iso = None;
  }
}

#[cfg(test)]
#[path = "async_extract_test.rs"]
mod async_extract_test;
