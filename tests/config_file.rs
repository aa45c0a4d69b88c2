//! Config file loading tests.

use fake_db_seed::SeedConfig;
use std::path::Path;

#[test]
fn test_example_config_matches_defaults() {
    let config = SeedConfig::from_file(Path::new("seed.example.toml")).unwrap();

    let expected = SeedConfig {
        seed: Some(42),
        ..SeedConfig::default()
    };
    assert_eq!(config, expected);
    config.seed_options().validate().unwrap();
}

#[test]
fn test_invalid_toml_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "batch_size = \"lots\"").unwrap();

    let err = SeedConfig::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}
