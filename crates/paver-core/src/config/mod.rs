//! Project configuration: `paver.toml` at the project root.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::types::PackageRole;

/// How a role's packages are materialized into the application root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
    Copy,
    Symlink,
}

impl DeployMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DeployMode::Copy => "copy",
            DeployMode::Symlink => "symlink",
        }
    }
}

/// Per-role deploy modes.
///
/// Core defaults to copy (the platform tree usually needs to be writable in
/// place); modules and themes default to symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RoleModes {
    pub core: DeployMode,
    pub module: DeployMode,
    pub theme: DeployMode,
}

impl Default for RoleModes {
    fn default() -> Self {
        Self {
            core: DeployMode::Copy,
            module: DeployMode::Symlink,
            theme: DeployMode::Symlink,
        }
    }
}

impl RoleModes {
    pub fn for_role(&self, role: PackageRole) -> DeployMode {
        match role {
            PackageRole::Core => self.core,
            PackageRole::Module => self.module,
            PackageRole::Theme => self.theme,
        }
    }
}

/// Configuration from paver.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PaverConfig {
    /// Application root the packages are deployed into, relative to the
    /// project root unless absolute.
    pub app_root: PathBuf,

    /// Package cache directory, relative to the project root unless
    /// absolute.
    pub vendor_dir: PathBuf,

    /// Deploy mode per package role.
    pub modes: RoleModes,
}

impl Default for PaverConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("htdocs"),
            vendor_dir: PathBuf::from("vendor"),
            modes: RoleModes::default(),
        }
    }
}

/// Loads `paver.toml` and resolves its paths against the project root.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
    project_root: PathBuf,
}

impl ConfigStore {
    pub fn from_project_root(project_root: PathBuf) -> Self {
        let config_path = project_root.join("paver.toml");
        Self {
            config_path,
            project_root,
        }
    }

    pub fn from_paths(config_path: PathBuf, project_root: PathBuf) -> Self {
        Self {
            config_path,
            project_root,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load(&self) -> anyhow::Result<PaverConfig> {
        if !self.config_path.exists() {
            return Ok(PaverConfig::default());
        }
        let content = std::fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", self.config_path.display()))
    }

    /// Application root as an absolute-or-project-relative path.
    pub fn resolve_app_root(&self, config: &PaverConfig) -> PathBuf {
        self.resolve(&config.app_root)
    }

    /// Vendor directory as an absolute-or-project-relative path.
    pub fn resolve_vendor_dir(&self, config: &PaverConfig) -> PathBuf {
        self.resolve(&config.vendor_dir)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_modes_copy_core_symlink_rest() {
        let modes = RoleModes::default();
        assert_eq!(modes.for_role(PackageRole::Core), DeployMode::Copy);
        assert_eq!(modes.for_role(PackageRole::Module), DeployMode::Symlink);
        assert_eq!(modes.for_role(PackageRole::Theme), DeployMode::Symlink);
    }

    #[test]
    fn config_parses_partial_toml() {
        let config: PaverConfig = toml::from_str(
            r#"
            app-root = "web"

            [modes]
            theme = "copy"
            "#,
        )
        .unwrap();
        assert_eq!(config.app_root, PathBuf::from("web"));
        assert_eq!(config.vendor_dir, PathBuf::from("vendor"));
        assert_eq!(config.modes.theme, DeployMode::Copy);
        assert_eq!(config.modes.module, DeployMode::Symlink);
    }
}
