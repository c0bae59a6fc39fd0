use super::*;

const MINIMAL: &str = r#"
volume = "head.raw"
dims = [4, 8, 8]
isovalues = [1200.0]
"#;

#[test]
fn test_defaults_fill_optional_fields() {
	let config = Config::parse(MINIMAL).unwrap();
	assert_eq!(config.volume, PathBuf::from("head.raw"));
	assert_eq!(config.spacing, [1.0, 1.0, 1.0]);
	assert_eq!(config.output_dir, PathBuf::from("."));
	assert!(!config.reverse_gradient);
	assert!(!config.canonical_order);
	assert_eq!(config.effective_dims(), [4, 8, 8]);
}

#[test]
fn test_full_config() {
	let config = Config::parse(
		r#"
volume = "scan.raw"
dims = [507, 512, 512]
spacing = [1.0, 0.5, 0.5]
isovalues = [900.0, 1200.0]
output_dir = "meshes"
reverse_gradient = true
canonical_order = true
slices = 5
"#,
	)
	.unwrap();
	assert_eq!(config.isovalues, vec![900.0, 1200.0]);
	assert!(config.reverse_gradient);
	assert_eq!(config.effective_dims(), [5, 512, 512]);
}

#[test]
fn test_rejects_zero_dims() {
	let err = Config::parse(&MINIMAL.replace("[4, 8, 8]", "[4, 0, 8]")).unwrap_err();
	assert!(err.to_string().contains("dims"));
}

#[test]
fn test_rejects_bad_spacing() {
	let text = format!("{MINIMAL}spacing = [1.0, -0.5, 1.0]\n");
	assert!(Config::parse(&text).is_err());
}

#[test]
fn test_rejects_empty_isovalues() {
	let text = MINIMAL.replace("[1200.0]", "[]");
	assert!(Config::parse(&text).is_err());
}

#[test]
fn test_rejects_slices_beyond_dims() {
	let text = format!("{MINIMAL}slices = 5\n");
	assert!(Config::parse(&text).is_err());
	let text = format!("{MINIMAL}slices = 3\n");
	assert_eq!(Config::parse(&text).unwrap().effective_dims(), [3, 8, 8]);
}

#[test]
fn test_missing_file_has_context() {
	let err = Config::load(Path::new("/nonexistent/bake.toml")).unwrap_err();
	assert!(format!("{err:#}").contains("Failed to read config file"));
}
