//! Copy deployment: package trees are overlaid into the target directory.

use std::fs;
use std::path::PathBuf;

use crate::error::StrategyError;
use crate::fs::{copy_entry_merge, remove_path_if_exists, source_entries};
use crate::strategy::DeployStrategy;
use crate::types::Action;

/// Merge-copies each top-level entry of the package's source directory into
/// the target directory. Re-running converges to the same target state.
#[derive(Debug)]
pub struct CopyStrategy {
    source_dir: PathBuf,
    target_dir: PathBuf,
    action: Action,
}

impl CopyStrategy {
    pub fn new(source_dir: PathBuf, target_dir: PathBuf, action: Action) -> Self {
        Self {
            source_dir,
            target_dir,
            action,
        }
    }

    fn overlay(&self) -> Result<(), StrategyError> {
        let entries = source_entries(&self.source_dir)?;
        fs::create_dir_all(&self.target_dir)
            .map_err(|e| StrategyError::io("create directory", &self.target_dir, e))?;

        for entry in entries {
            let name = entry.file_name().unwrap_or_default();
            copy_entry_merge(&entry, &self.target_dir.join(name))?;
        }
        Ok(())
    }

    fn remove_overlay(&self) -> Result<(), StrategyError> {
        for entry in source_entries(&self.source_dir)? {
            let name = entry.file_name().unwrap_or_default();
            let dst = self.target_dir.join(name);
            remove_path_if_exists(&dst)
                .map_err(|e| StrategyError::io("remove target entry", &dst, e))?;
        }
        Ok(())
    }
}

impl DeployStrategy for CopyStrategy {
    fn deploy(&self) -> Result<(), StrategyError> {
        match self.action {
            Action::Install | Action::Update => self.overlay(),
            Action::Uninstall => self.remove_overlay(),
        }
    }
}
