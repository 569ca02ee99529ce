//! Error taxonomy for deploy orchestration.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the deploy manager and strategy resolver.
///
/// Nothing is caught and suppressed inside the registry: every variant
/// propagates to the caller of `deploy_all` / `on_package_uninstalled`.
#[derive(Debug, Error)]
pub enum DeployError {
    /// A package's declared type has no registered strategy.
    #[error("package '{name}' has unsupported type '{package_type}'")]
    UnsupportedPackageType { name: String, package_type: String },

    /// A strategy's deploy operation failed. Entries dispatched before the
    /// failing one are not rolled back; later entries are not attempted.
    #[error("deploy failed for package '{name}'")]
    Strategy {
        name: String,
        #[source]
        source: StrategyError,
    },

    /// The installed-package source could not be enumerated.
    #[error("failed to enumerate installed packages")]
    Provider(#[source] anyhow::Error),
}

/// Failures from a concrete deploy strategy's filesystem work.
///
/// All variants are fatal for the current dispatch phase; the manager never
/// retries locally.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// The package's cache directory does not exist or is not a directory.
    #[error("source directory missing: {0}")]
    SourceMissing(PathBuf),

    /// The target path holds content this package does not own.
    #[error("target occupied by foreign content: {0}")]
    TargetOccupied(PathBuf),

    /// Permission or other I/O failure, with the offending path.
    #[error("{op} failed for {path}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StrategyError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StrategyError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
