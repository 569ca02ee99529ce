//! Tests for strategy resolution and path computation.

use std::fs;
use std::path::PathBuf;

use semver::Version;

use paver_core::config::{ConfigStore, DeployMode, PaverConfig, RoleModes};
use paver_core::error::DeployError;
use paver_core::package::Package;
use paver_core::strategy::StrategyResolver;
use paver_core::types::Action;

fn pkg(name: &str, package_type: &str) -> Package {
    Package::new(name, Version::new(1, 0, 0), package_type)
}

#[test]
fn source_dir_joins_vendor_base_and_package_name() {
    let resolver = StrategyResolver::new(
        PathBuf::from("/project/vendor"),
        PathBuf::from("/project/htdocs"),
        RoleModes::default(),
    );

    let package = pkg("acme/blog", "platform-module");
    assert_eq!(
        resolver.source_dir(&package),
        PathBuf::from("/project/vendor/acme/blog")
    );
}

#[test]
fn source_dir_honors_target_dir_hint() {
    let resolver = StrategyResolver::new(
        PathBuf::from("/project/vendor"),
        PathBuf::from("/project/htdocs"),
        RoleModes::default(),
    );

    let mut package = pkg("acme/platform", "platform-core");
    package.target_dir = Some("dist".to_string());
    assert_eq!(
        resolver.source_dir(&package),
        PathBuf::from("/project/vendor/acme/platform/dist")
    );
}

#[test]
fn unsupported_type_fails_resolution() {
    let resolver = StrategyResolver::new(
        PathBuf::from("vendor"),
        PathBuf::from("htdocs"),
        RoleModes::default(),
    );

    let err = resolver
        .resolve(&pkg("acme/tool", "library"), Action::Update)
        .expect_err("resolution should fail");
    match err {
        DeployError::UnsupportedPackageType { name, package_type } => {
            assert_eq!(name, "acme/tool");
            assert_eq!(package_type, "library");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolution_does_no_filesystem_work() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    let vendor = temp.path().join("vendor");
    let app_root = temp.path().join("htdocs");
    let resolver = StrategyResolver::new(vendor, app_root.clone(), RoleModes::default());

    // Nothing under the temp dir exists yet; resolving must not care.
    resolver
        .resolve(&pkg("acme/blog", "platform-module"), Action::Install)
        .expect("resolution should succeed");
    assert!(!app_root.exists());
}

#[test]
fn configured_mode_selects_the_strategy() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    let vendor = temp.path().join("vendor");
    let app_root = temp.path().join("htdocs");
    let src = vendor.join("acme/dark-theme");
    fs::create_dir_all(&src).expect("create vendor dir");
    fs::write(src.join("style.css"), "body {}\n").expect("write vendor file");

    let modes = RoleModes {
        theme: DeployMode::Copy,
        ..RoleModes::default()
    };
    let resolver = StrategyResolver::new(vendor, app_root.clone(), modes);

    resolver
        .resolve(&pkg("acme/dark-theme", "platform-theme"), Action::Install)
        .expect("resolution should succeed")
        .deploy()
        .expect("deploy should succeed");

    // Copy mode: a real file lands in the target, not a symlink.
    let deployed = app_root.join("style.css");
    assert!(deployed.is_file());
    assert!(!deployed.is_symlink());
}

#[test]
fn from_config_resolves_paths_against_project_root() {
    let store = ConfigStore::from_project_root(PathBuf::from("/project"));
    let config = PaverConfig::default();

    let resolver = StrategyResolver::from_config(&store, &config);
    assert_eq!(resolver.vendor_dir(), PathBuf::from("/project/vendor"));
    assert_eq!(resolver.app_root(), PathBuf::from("/project/htdocs"));
}
