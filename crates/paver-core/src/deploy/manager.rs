//! The deploy registry: classifies entries by role and dispatches them in
//! core, modules, themes order.

use crate::deploy::DeployEntry;
use crate::error::DeployError;
use crate::package::{Package, PackageProvider};
use crate::strategy::StrategyResolver;
use crate::types::{Action, PackageRole};

/// Where a registered entry ended up.
///
/// A role-less package stores nothing; it reports as `Ignored` so callers
/// can tell "stored" from "skipped".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Stored in the single core slot; `replaced` reports last-writer-wins
    /// over a previously registered core entry.
    Core { replaced: bool },
    Module,
    Theme,
    /// Package type has no deployment role; nothing was stored.
    Ignored,
}

/// One successfully dispatched entry, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    pub name: String,
    pub role: PackageRole,
    pub action: Action,
}

/// Result of a full `deploy_all` run.
#[derive(Debug, Default)]
pub struct DeployReport {
    pub dispatched: Vec<DispatchRecord>,
}

/// Orchestration core: collects deploy entries per role and executes them
/// in a fixed role order.
///
/// Constructed over its package source and resolver, so it is usable from
/// the moment it exists; there is no separate initialization step. All
/// methods take `&mut self` — registration and dispatch never overlap.
pub struct DeployManager {
    provider: Box<dyn PackageProvider>,
    resolver: StrategyResolver,
    core_entry: Option<DeployEntry>,
    module_entries: Vec<DeployEntry>,
    theme_entries: Vec<DeployEntry>,
}

impl DeployManager {
    pub fn new(provider: Box<dyn PackageProvider>, resolver: StrategyResolver) -> Self {
        Self {
            provider,
            resolver,
            core_entry: None,
            module_entries: Vec::new(),
            theme_entries: Vec::new(),
        }
    }

    pub fn resolver(&self) -> &StrategyResolver {
        &self.resolver
    }

    /// Whether a core entry is currently queued.
    pub fn has_core_entry(&self) -> bool {
        self.core_entry.is_some()
    }

    pub fn pending_modules(&self) -> usize {
        self.module_entries.len()
    }

    pub fn pending_themes(&self) -> usize {
        self.theme_entries.len()
    }

    /// Store an entry in the bucket for its package's role.
    ///
    /// A second core entry overwrites the first; module and theme entries
    /// append. Cannot fail — resolution failures happen upstream.
    pub fn register(&mut self, entry: DeployEntry) -> Registration {
        match entry.package().role() {
            Some(PackageRole::Core) => {
                let replaced = self.core_entry.replace(entry).is_some();
                Registration::Core { replaced }
            }
            Some(PackageRole::Module) => {
                self.module_entries.push(entry);
                Registration::Module
            }
            Some(PackageRole::Theme) => {
                self.theme_entries.push(entry);
                Registration::Theme
            }
            None => {
                tracing::warn!(
                    package = %entry.package().name,
                    package_type = %entry.package().package_type,
                    "ignoring package with no deployment role"
                );
                Registration::Ignored
            }
        }
    }

    /// React to the engine's uninstall lifecycle event.
    ///
    /// Registers exactly one entry with `Action::Uninstall`; nothing is
    /// dispatched until the next `deploy_all`.
    pub fn on_package_uninstalled(&mut self, package: &Package) -> Result<Registration, DeployError> {
        let entry = DeployEntry::resolve(&self.resolver, package, Action::Uninstall)?;
        Ok(self.register(entry))
    }

    /// Enumerate every installed package, register it for update, then
    /// dispatch core, modules, themes in that order.
    ///
    /// Module and theme phases drain their queues last-registered-first.
    /// The first failing entry aborts the whole call; entries already
    /// dispatched are not rolled back, remaining entries stay untouched
    /// on disk but their queues keep whatever was not yet popped.
    pub fn deploy_all(&mut self) -> Result<DeployReport, DeployError> {
        self.register_all_packages()?;

        let mut report = DeployReport::default();

        if let Some(entry) = self.core_entry.take() {
            Self::dispatch_into(entry, PackageRole::Core, &mut report)?;
        }

        while let Some(entry) = self.module_entries.pop() {
            Self::dispatch_into(entry, PackageRole::Module, &mut report)?;
        }

        while let Some(entry) = self.theme_entries.pop() {
            Self::dispatch_into(entry, PackageRole::Theme, &mut report)?;
        }

        tracing::info!(dispatched = report.dispatched.len(), "deploy run complete");
        Ok(report)
    }

    fn register_all_packages(&mut self) -> Result<(), DeployError> {
        let packages = self
            .provider
            .installed_packages()
            .map_err(DeployError::Provider)?;
        for package in packages {
            let entry = DeployEntry::resolve(&self.resolver, &package, Action::Update)?;
            self.register(entry);
        }
        Ok(())
    }

    fn dispatch_into(
        entry: DeployEntry,
        role: PackageRole,
        report: &mut DeployReport,
    ) -> Result<(), DeployError> {
        let record = DispatchRecord {
            name: entry.package().name.clone(),
            role,
            action: entry.action(),
        };
        entry.dispatch()?;
        report.dispatched.push(record);
        Ok(())
    }
}
