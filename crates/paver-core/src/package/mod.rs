//! Package descriptors and the installed-package source.

pub mod manifest;

use semver::Version;
use serde::{Deserialize, Serialize};

pub use manifest::ManifestProvider;

use crate::types::PackageRole;

/// A named, versioned unit of deployable content with a declared type.
///
/// Mirrors what the dependency-resolution engine already knows about an
/// installed package; paver computes nothing beyond the role
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Package {
    /// Fully qualified package name, e.g. `acme/checkout`.
    pub name: String,
    pub version: Version,
    /// Declared type string, e.g. `platform-module`.
    #[serde(rename = "type")]
    pub package_type: String,
    /// Optional subdirectory of the package's cache dir that holds the
    /// deployable tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, version: Version, package_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version,
            package_type: package_type.into(),
            target_dir: None,
        }
    }

    /// Role classification; `None` for types paver does not deploy.
    pub fn role(&self) -> Option<PackageRole> {
        PackageRole::from_package_type(&self.package_type)
    }
}

/// Source of the canonical installed-package list.
///
/// Supplied by the surrounding tool; production code reads the engine's
/// manifest from the vendor directory, tests serve a static list.
pub trait PackageProvider {
    /// Every package currently known to the engine: flat, deduplicated,
    /// no ordering guarantee.
    fn installed_packages(&self) -> anyhow::Result<Vec<Package>>;
}

/// Fixed list provider, for tests and ad-hoc callers.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    packages: Vec<Package>,
}

impl StaticProvider {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }
}

impl PackageProvider for StaticProvider {
    fn installed_packages(&self) -> anyhow::Result<Vec<Package>> {
        Ok(self.packages.clone())
    }
}
