//! Raw volume loading.
//!
//! Scans are stored as consecutive little-endian `u16` samples, slice by
//! slice, so the slice axis is the slowest one:
//!
//! ```text
//! offset = ((i * Nj + j) * Nk + k) * 2
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Bytes per sample.
const SAMPLE_BYTES: usize = 2;

/// Read a raw u16 volume of extent `dims`, keeping only the first `slices`
/// slices when given.
pub fn load_raw_u16(path: &Path, dims: [usize; 3], slices: Option<usize>) -> Result<Vec<u16>> {
	let bytes = std::fs::read(path)
		.with_context(|| format!("Failed to read volume: {}", path.display()))?;
	decode_raw_u16(&bytes, dims, slices).with_context(|| format!("Invalid volume: {}", path.display()))
}

/// Decode little-endian u16 samples; the byte count must match `dims` exactly.
pub fn decode_raw_u16(bytes: &[u8], dims: [usize; 3], slices: Option<usize>) -> Result<Vec<u16>> {
	let [ni, nj, nk] = dims;
	let Some(expected) = ni
		.checked_mul(nj)
		.and_then(|n| n.checked_mul(nk))
		.and_then(|n| n.checked_mul(SAMPLE_BYTES))
	else {
		anyhow::bail!("dims {:?} overflow the addressable volume size", dims);
	};
	if bytes.len() != expected {
		anyhow::bail!(
			"expected {} bytes for dims {:?}, found {}",
			expected,
			dims,
			bytes.len()
		);
	}

	// bounded by `expected`
	let kept = slices.unwrap_or(ni).min(ni) * nj * nk * SAMPLE_BYTES;
	Ok(bytes[..kept]
		.chunks_exact(SAMPLE_BYTES)
		.map(|b| u16::from_le_bytes([b[0], b[1]]))
		.collect())
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
