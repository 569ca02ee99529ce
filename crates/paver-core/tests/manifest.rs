//! Tests for the installed-package manifest provider.

use std::fs;

use semver::Version;

use paver_core::package::{ManifestProvider, PackageProvider};
use paver_core::types::PackageRole;

#[test]
fn parses_packages_from_installed_json() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    let vendor = temp.path().join("vendor");
    fs::create_dir_all(&vendor).expect("create vendor dir");
    fs::write(
        vendor.join("installed.json"),
        r#"{
            "packages": [
                {"name": "acme/platform", "version": "2.4.8", "type": "platform-core", "target-dir": "dist"},
                {"name": "acme/blog", "version": "1.0.0", "type": "platform-module"}
            ]
        }"#,
    )
    .expect("write manifest");

    let packages = ManifestProvider::from_vendor_dir(&vendor)
        .installed_packages()
        .expect("manifest should parse");

    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0].name, "acme/platform");
    assert_eq!(packages[0].version, Version::new(2, 4, 8));
    assert_eq!(packages[0].role(), Some(PackageRole::Core));
    assert_eq!(packages[0].target_dir.as_deref(), Some("dist"));
    assert_eq!(packages[1].role(), Some(PackageRole::Module));
    assert_eq!(packages[1].target_dir, None);
}

#[test]
fn missing_manifest_yields_empty_list() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    let packages = ManifestProvider::from_vendor_dir(temp.path())
        .installed_packages()
        .expect("missing manifest should not be an error");
    assert!(packages.is_empty());
}

#[test]
fn malformed_manifest_is_an_error() {
    let temp = tempfile::tempdir().expect("tempdir should succeed");
    let vendor = temp.path().join("vendor");
    fs::create_dir_all(&vendor).expect("create vendor dir");
    fs::write(vendor.join("installed.json"), "{not json").expect("write manifest");

    let err = ManifestProvider::from_vendor_dir(&vendor)
        .installed_packages()
        .expect_err("malformed manifest should fail");
    assert!(err.to_string().contains("Failed to parse manifest"));
}
