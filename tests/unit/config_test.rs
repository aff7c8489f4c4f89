//! Unit tests for configuration loading

use std::fs;

use mtreplay::Config;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = write_config("[playback]\nmax_speed_multiplier = 4\n");
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.playback.max_speed_multiplier, 4);
    assert_eq!(config.playback.frame_rate, 120);
    assert_eq!(config.device.x_resolution, 17280);
    assert_eq!(config.display.trail_fade_ms, 1000);
}

#[test]
fn empty_file_is_default_config() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn invalid_value_is_rejected() {
    let (_dir, path) = write_config("[device]\nx_resolution = 1\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn unparseable_file_is_rejected() {
    let (_dir, path) = write_config("[playback\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn toml_output_reloads_to_same_config() {
    let mut config = Config::default();
    config.display.trail_fade_ms = 250;
    let (_dir, path) = write_config(&config.to_toml().unwrap());

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn resolution_overrides_apply_and_validate() {
    let config = Config::default().with_resolution(Some(4096), None).unwrap();
    assert_eq!(config.device.x_resolution, 4096);
    assert_eq!(config.device.y_resolution, 38400);

    assert!(Config::default().with_resolution(None, Some(0)).is_err());
}

#[test]
fn config_path_is_under_config_dir() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with(".config/mtreplay/config.toml"));
    assert_eq!(path.parent().unwrap(), Config::config_dir().unwrap());
}
