//! One package paired with its resolved strategy, queued for dispatch.

use crate::error::DeployError;
use crate::package::Package;
use crate::strategy::{DeployStrategy, StrategyResolver};
use crate::types::Action;

/// Immutable binding of a package to its resolved deploy strategy.
///
/// Created once per registration and consumed exactly once on dispatch;
/// `dispatch` takes ownership so an entry cannot run twice.
#[derive(Debug)]
pub struct DeployEntry {
    package: Package,
    action: Action,
    strategy: Box<dyn DeployStrategy>,
}

impl DeployEntry {
    pub fn new(package: Package, action: Action, strategy: Box<dyn DeployStrategy>) -> Self {
        Self {
            package,
            action,
            strategy,
        }
    }

    /// Build an entry through the resolver. No filesystem work happens
    /// here; strategies stay inert until dispatch.
    pub fn resolve(
        resolver: &StrategyResolver,
        package: &Package,
        action: Action,
    ) -> Result<Self, DeployError> {
        let strategy = resolver.resolve(package, action)?;
        Ok(Self::new(package.clone(), action, strategy))
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Run the strategy's deploy operation for this entry.
    pub fn dispatch(self) -> Result<(), DeployError> {
        tracing::debug!(
            package = %self.package.name,
            action = self.action.as_str(),
            "dispatching deploy entry"
        );
        self.strategy
            .deploy()
            .map_err(|source| DeployError::Strategy {
                name: self.package.name.clone(),
                source,
            })
    }
}
