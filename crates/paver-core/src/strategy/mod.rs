//! Deploy strategies: how one package's content reaches the app root.

pub mod copy;
pub mod resolver;
pub mod symlink;

use std::fmt;

use crate::error::StrategyError;

pub use copy::CopyStrategy;
pub use resolver::StrategyResolver;
pub use symlink::SymlinkStrategy;

/// The concrete filesystem transformation for one package.
///
/// A strategy is constructed with its source directory, target directory,
/// and action, and must not touch the filesystem until `deploy` is called.
/// `deploy` is idempotent for install/update; for uninstall it removes what
/// a prior deploy of the same package created at the target.
pub trait DeployStrategy: fmt::Debug {
    fn deploy(&self) -> Result<(), StrategyError>;
}
