//! Isosurface mesh baker.
//!
//! Loads a raw u16 volume described by a TOML config, extracts the
//! topology-preserving Marching Cubes surface at each configured isovalue
//! and writes one Wavefront OBJ per isovalue.
//!
//! Set `RUST_LOG=info` (or `debug`) to see extraction timings.

mod config;
mod volume;

use anyhow::{Context, Result};
use clap::Parser;
use mc33::{ExtractConfig, Extractor, Real};
use std::path::{Path, PathBuf};

use config::Config;

/// Isosurface mesh baker for raw volume scans.
#[derive(Parser, Debug)]
#[command(name = "bake_mesh")]
#[command(about = "Extracts isosurface meshes from raw volumes into OBJ files")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Extract only this isovalue instead of the configured list.
	#[arg(short, long)]
	iso: Option<f64>,

	/// Output directory (default: from config, relative to the config file).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Center the mesh on the origin and scale it into the unit cube.
	#[arg(short, long)]
	normalize: bool,
}

fn main() -> Result<()> {
	env_logger::init();
	let args = Args::parse();

	// Paths in the config are relative to the config file
	let base_dir = args
		.config
		.parent()
		.unwrap_or(Path::new("."))
		.to_path_buf();

	println!("Loading config from: {}", args.config.display());
	let config = Config::load(&args.config)?;

	let volume_path = base_dir.join(&config.volume);
	let dims = config.effective_dims();
	println!(
		"Loading volume {} ({} x {} x {})",
		volume_path.display(),
		dims[0],
		dims[1],
		dims[2]
	);
	let samples = volume::load_raw_u16(&volume_path, config.dims, config.slices)?;

	let output_dir = args
		.output
		.unwrap_or_else(|| base_dir.join(&config.output_dir));
	std::fs::create_dir_all(&output_dir)
		.with_context(|| format!("Failed to create output dir: {}", output_dir.display()))?;

	let extract_config = ExtractConfig::default()
		.with_spacing(config.spacing.map(|s| s as Real))
		.with_reverse_gradient(config.reverse_gradient)
		.with_canonical_order(config.canonical_order);
	let extractor =
		Extractor::new(&samples, dims, extract_config).context("Volume does not match dims")?;

	let isovalues = match args.iso {
		Some(iso) => vec![iso],
		None => config.isovalues.clone(),
	};

	println!("\nExtracting {} isosurface(s)...", isovalues.len());
	for iso in isovalues {
		let (mesh, stats) = extractor
			.run(iso as Real)
			.with_context(|| format!("Extraction failed at isovalue {iso}"))?;
		let mesh = if args.normalize { mesh.normalized() } else { mesh };

		let path = output_dir.join(format!("iso_{iso}.obj"));
		mc33::obj::save_obj(&mesh, &path)
			.with_context(|| format!("Failed to write: {}", path.display()))?;
		println!(
			"  ✓ {} ({} vertices, {} triangles, {:.1} ms)",
			path.display(),
			stats.vertex_count,
			stats.triangle_count,
			stats.total_us as f64 / 1000.0
		);
	}

	println!("\nDone! Output written to: {}", output_dir.display());

	Ok(())
}
