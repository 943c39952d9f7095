// ABOUTME: Integration tests for artifact loading and fail-fast startup behavior
// ABOUTME: Exercises ServerResources::load against real files on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use common::init_test_logging;
use runwithit::config::ServerConfig;
use runwithit::model::DurationModel;
use runwithit::resources::ServerResources;
use std::fs;
use std::path::Path;

fn config_with_artifacts(dir: &Path) -> ServerConfig {
    let mut config = ServerConfig::from_env().unwrap();
    config.artifacts.model_path = dir.join("model.json");
    config.artifacts.insight_table_path = dir.join("table.json");
    config.artifacts.headshot_path = dir.join("headshot.png");
    config.artifacts.animation_path = dir.join("running.gif");
    config
}

fn write_valid_artifacts(dir: &Path) {
    fs::write(
        dir.join("model.json"),
        r#"{"coefficients": [0.003, 0.2, 0.05, -0.3, 2.0, 0.0], "intercept": 12.0}"#,
    )
    .unwrap();
    fs::write(
        dir.join("table.json"),
        r#"{"columns": ["A"], "rows": [["x"], [1.5]]}"#,
    )
    .unwrap();
}

#[test]
fn test_load_with_valid_artifacts() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());

    let resources = ServerResources::load(config_with_artifacts(dir.path())).unwrap();

    // Sample metrics through the loaded model: 30 + 15 + 7.75 - 6 + 16 + 12
    let raw = resources
        .model
        .predict(&[10_000.0, 75.0, 155.0, 20.0, 8.0, 0.0]);
    assert!((raw - 74.75).abs() < 1e-9);
    assert_eq!(resources.insights.rows.len(), 2);
}

#[test]
fn test_missing_model_is_fatal() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    fs::remove_file(dir.path().join("model.json")).unwrap();

    let err = ServerResources::load(config_with_artifacts(dir.path())).unwrap_err();
    assert!(err.to_string().contains("cannot serve predictions"));
}

#[test]
fn test_missing_insight_table_is_fatal() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    fs::remove_file(dir.path().join("table.json")).unwrap();

    assert!(ServerResources::load(config_with_artifacts(dir.path())).is_err());
}

#[test]
fn test_missing_images_are_not_fatal() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());

    let resources = ServerResources::load(config_with_artifacts(dir.path())).unwrap();
    assert!(resources.assets.headshot.is_none());
    assert!(resources.assets.animation.is_none());
}

#[test]
fn test_present_images_are_inlined() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_valid_artifacts(dir.path());
    fs::write(dir.path().join("headshot.png"), b"\x89PNG fake").unwrap();
    fs::write(dir.path().join("running.gif"), b"GIF89a fake").unwrap();

    let resources = ServerResources::load(config_with_artifacts(dir.path())).unwrap();
    assert!(resources
        .assets
        .headshot
        .as_deref()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert!(resources
        .assets
        .animation
        .as_deref()
        .unwrap()
        .starts_with("data:image/gif;base64,"));
}
