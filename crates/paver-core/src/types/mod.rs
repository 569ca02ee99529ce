//! Shared core types used across configuration and deploy layers.

use serde::{Deserialize, Serialize};

/// Deployment role of a package, derived from its declared type.
///
/// Exactly one `Core` package is meaningful per run; `Module` and `Theme`
/// are unbounded collections. Roles determine dispatch order: core first,
/// then modules, then themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageRole {
    Core,
    Module,
    Theme,
}

impl PackageRole {
    /// Classify a declared package type string.
    ///
    /// Returns `None` for types paver does not deploy; classification is
    /// total over the recognized types.
    pub fn from_package_type(package_type: &str) -> Option<Self> {
        match package_type {
            "platform-core" => Some(PackageRole::Core),
            "platform-module" => Some(PackageRole::Module),
            "platform-theme" => Some(PackageRole::Theme),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PackageRole::Core => "core",
            PackageRole::Module => "module",
            PackageRole::Theme => "theme",
        }
    }
}

/// Why a package is being processed. Passed through to the strategy
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Install,
    Update,
    Uninstall,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Install => "install",
            Action::Update => "update",
            Action::Uninstall => "uninstall",
        }
    }
}
