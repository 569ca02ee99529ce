//! Symlink deployment: the target holds links back into the package cache.

use std::fs;
use std::path::PathBuf;

use crate::error::StrategyError;
use crate::fs::{
    create_entry_symlink, link_resolves_into, remove_path_if_exists, source_entries,
};
use crate::strategy::DeployStrategy;
use crate::types::Action;

/// Places a symlink in the target directory for each top-level entry of the
/// package's source directory.
#[derive(Debug)]
pub struct SymlinkStrategy {
    source_dir: PathBuf,
    target_dir: PathBuf,
    action: Action,
}

impl SymlinkStrategy {
    pub fn new(source_dir: PathBuf, target_dir: PathBuf, action: Action) -> Self {
        Self {
            source_dir,
            target_dir,
            action,
        }
    }

    fn place_links(&self) -> Result<(), StrategyError> {
        let entries = source_entries(&self.source_dir)?;
        fs::create_dir_all(&self.target_dir)
            .map_err(|e| StrategyError::io("create directory", &self.target_dir, e))?;

        for entry in entries {
            // read_dir entries always carry a file name
            let name = entry.file_name().unwrap_or_default();
            let dst = self.target_dir.join(name);

            match fs::symlink_metadata(&dst) {
                Ok(meta) if meta.file_type().is_symlink() => {
                    if fs::read_link(&dst).is_ok_and(|t| t == entry) {
                        // Already linked to this package entry.
                        continue;
                    }
                    if !link_resolves_into(&dst, &self.source_dir) {
                        return Err(StrategyError::TargetOccupied(dst));
                    }
                    // Stale link into our own source; replace it.
                    remove_path_if_exists(&dst)
                        .map_err(|e| StrategyError::io("remove stale link", &dst, e))?;
                }
                Ok(_) => return Err(StrategyError::TargetOccupied(dst)),
                Err(_) => {}
            }

            create_entry_symlink(&entry, &dst)?;
        }
        Ok(())
    }

    fn remove_links(&self) -> Result<(), StrategyError> {
        for entry in source_entries(&self.source_dir)? {
            let name = entry.file_name().unwrap_or_default();
            let dst = self.target_dir.join(name);

            match fs::symlink_metadata(&dst) {
                Ok(meta) if meta.file_type().is_symlink() => {
                    if link_resolves_into(&dst, &self.source_dir) {
                        remove_path_if_exists(&dst)
                            .map_err(|e| StrategyError::io("remove link", &dst, e))?;
                    } else {
                        tracing::warn!(
                            path = %dst.display(),
                            "leaving symlink not owned by this package"
                        );
                    }
                }
                Ok(_) => {
                    tracing::warn!(
                        path = %dst.display(),
                        "leaving non-symlink target during uninstall"
                    );
                }
                Err(_) => {}
            }
        }
        Ok(())
    }
}

impl DeployStrategy for SymlinkStrategy {
    fn deploy(&self) -> Result<(), StrategyError> {
        match self.action {
            Action::Install | Action::Update => self.place_links(),
            Action::Uninstall => self.remove_links(),
        }
    }
}
