//! Installed-package manifest written by the dependency engine.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{Package, PackageProvider};

/// On-disk shape of `installed.json` in the vendor directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default)]
    packages: Vec<Package>,
}

/// Reads the engine's `installed.json` from the vendor directory.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    manifest_path: PathBuf,
}

impl ManifestProvider {
    /// Conventional manifest location under a vendor directory.
    pub fn from_vendor_dir(vendor_dir: &Path) -> Self {
        Self {
            manifest_path: vendor_dir.join("installed.json"),
        }
    }

    pub fn from_path(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    fn load(&self) -> anyhow::Result<Manifest> {
        if !self.manifest_path.exists() {
            return Ok(Manifest::default());
        }
        let content = std::fs::read_to_string(&self.manifest_path).with_context(|| {
            format!("Failed to read manifest: {}", self.manifest_path.display())
        })?;
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse manifest: {}", self.manifest_path.display())
        })
    }
}

impl PackageProvider for ManifestProvider {
    fn installed_packages(&self) -> anyhow::Result<Vec<Package>> {
        Ok(self.load()?.packages)
    }
}
