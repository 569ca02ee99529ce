//! Paver Core Library
//!
//! Provides the domain logic for deploying platform packages (core, modules,
//! themes) from a dependency manager's vendor directory into an application
//! root, with per-role copy/symlink strategies and role-ordered dispatch.

pub mod config;
pub mod deploy;
pub mod error;
pub mod fs;
pub mod package;
pub mod strategy;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{ConfigStore, DeployMode, PaverConfig, RoleModes};

    // Deploy orchestration
    pub use crate::deploy::{DeployEntry, DeployManager, DeployReport, Registration};

    // Errors
    pub use crate::error::{DeployError, StrategyError};

    // Packages
    pub use crate::package::{ManifestProvider, Package, PackageProvider};

    // Strategies
    pub use crate::strategy::{CopyStrategy, DeployStrategy, StrategyResolver, SymlinkStrategy};

    // Core types
    pub use crate::types::{Action, PackageRole};
}
