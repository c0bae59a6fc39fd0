//! Error types for extraction runs.

use thiserror::Error;

/// Everything that can stop an extraction run.
///
/// `InputRange` and `InvalidLattice` are caller mistakes. `InternalInconsistency`
/// means the case tables or the classification produced something impossible;
/// the run is aborted rather than emitting a mesh with a hole in it.
#[derive(Debug, Error)]
pub enum ExtractError {
  #[error("lattice coordinate ({i}, {j}, {k}) outside dims {dims:?}")]
  InputRange {
    i: usize,
    j: usize,
    k: usize,
    dims: [usize; 3],
  },

  #[error("invalid lattice: {0}")]
  InvalidLattice(String),

  #[error("internal inconsistency: {0}")]
  InternalInconsistency(String),

  #[error("mesh export failed")]
  Io(#[from] std::io::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

impl ExtractError {
  pub(crate) fn inconsistency(msg: impl Into<String>) -> Self {
    Self::InternalInconsistency(msg.into())
  }
}
