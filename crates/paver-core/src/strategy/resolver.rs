//! Strategy selection and per-package path computation.

use std::path::{Path, PathBuf};

use crate::config::{ConfigStore, DeployMode, PaverConfig, RoleModes};
use crate::error::DeployError;
use crate::package::Package;
use crate::strategy::{CopyStrategy, DeployStrategy, SymlinkStrategy};
use crate::types::Action;

/// Maps (package type, action) to a concrete strategy with its source and
/// target directories computed.
///
/// Pure selection plus path joins; resolution performs no filesystem work.
#[derive(Debug, Clone)]
pub struct StrategyResolver {
    vendor_dir: PathBuf,
    app_root: PathBuf,
    modes: RoleModes,
}

impl StrategyResolver {
    pub fn new(vendor_dir: PathBuf, app_root: PathBuf, modes: RoleModes) -> Self {
        Self {
            vendor_dir,
            app_root,
            modes,
        }
    }

    pub fn from_config(store: &ConfigStore, config: &PaverConfig) -> Self {
        Self::new(
            store.resolve_vendor_dir(config),
            store.resolve_app_root(config),
            config.modes,
        )
    }

    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    /// Cache directory holding the package's deployable tree: the vendor
    /// base joined with the package name, plus its target-dir hint if any.
    pub fn source_dir(&self, package: &Package) -> PathBuf {
        let base = self.vendor_dir.join(&package.name);
        match &package.target_dir {
            Some(sub) => base.join(sub),
            None => base,
        }
    }

    /// Resolve the strategy for one package and action.
    ///
    /// A package type with no role classification has no registered
    /// strategy and fails resolution.
    pub fn resolve(
        &self,
        package: &Package,
        action: Action,
    ) -> Result<Box<dyn DeployStrategy>, DeployError> {
        let role = package
            .role()
            .ok_or_else(|| DeployError::UnsupportedPackageType {
                name: package.name.clone(),
                package_type: package.package_type.clone(),
            })?;

        let source_dir = self.source_dir(package);
        let target_dir = self.app_root.clone();

        Ok(match self.modes.for_role(role) {
            DeployMode::Copy => Box::new(CopyStrategy::new(source_dir, target_dir, action)),
            DeployMode::Symlink => Box::new(SymlinkStrategy::new(source_dir, target_dir, action)),
        })
    }
}
