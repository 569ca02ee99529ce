//! Tests for paver.toml loading and path resolution.

use std::fs;
use std::path::PathBuf;

use paver_core::config::{ConfigStore, DeployMode};

#[test]
fn absent_config_loads_defaults() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    let store = ConfigStore::from_project_root(temp.path().to_path_buf());

    let config = store.load().expect("load should succeed");
    assert_eq!(config.app_root, PathBuf::from("htdocs"));
    assert_eq!(config.vendor_dir, PathBuf::from("vendor"));
    assert_eq!(config.modes.core, DeployMode::Copy);
}

#[test]
fn config_file_overrides_defaults() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    fs::write(
        temp.path().join("paver.toml"),
        r#"
        app-root = "web"
        vendor-dir = "deps"

        [modes]
        core = "symlink"
        "#,
    )
    .expect("write config");
    let store = ConfigStore::from_project_root(temp.path().to_path_buf());

    let config = store.load().expect("load should succeed");
    assert_eq!(config.app_root, PathBuf::from("web"));
    assert_eq!(config.modes.core, DeployMode::Symlink);
    assert_eq!(config.modes.module, DeployMode::Symlink);

    assert_eq!(store.resolve_app_root(&config), temp.path().join("web"));
    assert_eq!(store.resolve_vendor_dir(&config), temp.path().join("deps"));
}

#[test]
fn absolute_paths_are_kept_as_is() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    fs::write(
        temp.path().join("paver.toml"),
        r#"app-root = "/srv/app""#,
    )
    .expect("write config");
    let store = ConfigStore::from_project_root(temp.path().to_path_buf());

    let config = store.load().expect("load should succeed");
    assert_eq!(store.resolve_app_root(&config), PathBuf::from("/srv/app"));
}

#[test]
fn malformed_config_is_an_error() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    fs::write(temp.path().join("paver.toml"), "app-root = [").expect("write config");
    let store = ConfigStore::from_project_root(temp.path().to_path_buf());

    let err = store.load().expect_err("load should fail");
    assert!(err.to_string().contains("Failed to parse config"));
}
