//! Configuration parsing for mesh baking.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for a bake.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Raw little-endian u16 volume, relative to the config file.
	pub volume: PathBuf,
	/// Lattice extent, slowest axis first.
	pub dims: [usize; 3],
	/// Physical size of one step along each axis.
	#[serde(default = "default_spacing")]
	pub spacing: [f64; 3],
	/// One mesh is written per isovalue.
	pub isovalues: Vec<f64>,
	/// Output directory relative to the config file.
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	/// Treat lower values as outside (flips normals).
	#[serde(default)]
	pub reverse_gradient: bool,
	/// Write vertices and triangles in a reproducible order.
	#[serde(default)]
	pub canonical_order: bool,
	/// Only mesh the first N slices of the slowest axis.
	#[serde(default)]
	pub slices: Option<usize>,
}

fn default_spacing() -> [f64; 3] {
	[1.0, 1.0, 1.0]
}

fn default_output_dir() -> PathBuf {
	PathBuf::from(".")
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.dims.iter().any(|&d| d == 0) {
			anyhow::bail!("dims must be non-zero, got {:?}", config.dims);
		}
		if config.spacing.iter().any(|&s| !(s > 0.0)) {
			anyhow::bail!("spacing must be positive, got {:?}", config.spacing);
		}
		if config.isovalues.is_empty() {
			anyhow::bail!("Config must have at least one isovalue");
		}
		if let Some(slices) = config.slices {
			if slices < 2 || slices > config.dims[0] {
				anyhow::bail!(
					"slices must be between 2 and {}, got {}",
					config.dims[0],
					slices
				);
			}
		}

		Ok(config)
	}

	/// Lattice extent after the slice limit.
	pub fn effective_dims(&self) -> [usize; 3] {
		let [ni, nj, nk] = self.dims;
		[self.slices.unwrap_or(ni), nj, nk]
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
