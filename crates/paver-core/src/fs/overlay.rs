//! Overlaying package trees onto an application root.
//!
//! A package deploys as its top-level entries placed into the target
//! directory, either as merge-copies or as symlinks back into the package
//! cache. These are the primitives the strategies build on; policy (what
//! counts as foreign content, when to skip) lives in the strategy layer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StrategyError;

/// Top-level entries of a package's source directory, sorted by name.
///
/// Fails with `SourceMissing` when the directory does not exist, which is
/// also how a too-early uninstall dispatch surfaces.
pub fn source_entries(src_dir: &Path) -> Result<Vec<PathBuf>, StrategyError> {
    let meta = match fs::metadata(src_dir) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StrategyError::SourceMissing(src_dir.to_path_buf()));
        }
        Err(err) => return Err(StrategyError::io("stat", src_dir, err)),
    };
    if !meta.is_dir() {
        return Err(StrategyError::SourceMissing(src_dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    let iter = fs::read_dir(src_dir).map_err(|e| StrategyError::io("read dir", src_dir, e))?;
    for entry in iter {
        let entry = entry.map_err(|e| StrategyError::io("read dir entry", src_dir, e))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}

/// Merge-copy one source entry into the target path.
///
/// Directories are merged into existing directories, files overwrite files.
/// A kind mismatch (file over directory or vice versa) or a symlink already
/// at the target is foreign content.
pub fn copy_entry_merge(from: &Path, to: &Path) -> Result<(), StrategyError> {
    let from_ty = fs::symlink_metadata(from)
        .map_err(|e| StrategyError::io("stat", from, e))?
        .file_type();

    if let Ok(existing) = fs::symlink_metadata(to) {
        if existing.file_type().is_symlink() {
            return Err(StrategyError::TargetOccupied(to.to_path_buf()));
        }
        if existing.is_dir() != from_ty.is_dir() {
            return Err(StrategyError::TargetOccupied(to.to_path_buf()));
        }
    }

    if from_ty.is_dir() {
        fs::create_dir_all(to).map_err(|e| StrategyError::io("create directory", to, e))?;
        let iter = fs::read_dir(from).map_err(|e| StrategyError::io("read dir", from, e))?;
        for entry in iter {
            let entry = entry.map_err(|e| StrategyError::io("read dir entry", from, e))?;
            copy_entry_merge(&entry.path(), &to.join(entry.file_name()))?;
        }
        Ok(())
    } else if from_ty.is_file() {
        fs::copy(from, to).map_err(|e| StrategyError::io("copy file", to, e))?;
        Ok(())
    } else {
        Err(StrategyError::io(
            "copy",
            from,
            io::Error::other("unsupported filesystem entry type"),
        ))
    }
}

/// Create a symlink to `src` at `dst`, via a temp name renamed into place.
///
/// The caller is responsible for ensuring `dst` is free.
pub fn create_entry_symlink(src: &Path, dst: &Path) -> Result<(), StrategyError> {
    let tmp = unique_temp_path(dst)?;
    if let Err(err) = create_symlink(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(StrategyError::io("create symlink", dst, err));
    }
    if let Err(err) = fs::rename(&tmp, dst) {
        let _ = fs::remove_file(&tmp);
        return Err(StrategyError::io("replace target", dst, err));
    }
    Ok(())
}

/// Whether `link` is a symlink whose target lies inside `dir`.
///
/// Relative link targets are resolved against the link's parent. Dangling
/// links still count if their recorded target is inside `dir`.
pub fn link_resolves_into(link: &Path, dir: &Path) -> bool {
    let Ok(target) = fs::read_link(link) else {
        return false;
    };
    let resolved = if target.is_absolute() {
        target
    } else {
        match link.parent() {
            Some(parent) => parent.join(target),
            None => return false,
        }
    };
    resolved.starts_with(dir)
}

/// Remove a path of any kind; returns whether anything was removed.
pub fn remove_path_if_exists(path: &Path) -> io::Result<bool> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Allocate an unused dotfile name next to the destination.
pub fn unique_temp_path(dst: &Path) -> Result<PathBuf, StrategyError> {
    let parent = dst.parent().ok_or_else(|| {
        StrategyError::io(
            "resolve parent",
            dst,
            io::Error::other("destination path has no parent"),
        )
    })?;
    let base = dst.file_name().ok_or_else(|| {
        StrategyError::io(
            "resolve filename",
            dst,
            io::Error::other("destination path has no filename"),
        )
    })?;

    for attempt in 0u32..1000 {
        let name = if attempt == 0 {
            format!(".{}.tmp.{}", base.to_string_lossy(), std::process::id())
        } else {
            format!(
                ".{}.tmp.{}.{}",
                base.to_string_lossy(),
                std::process::id(),
                attempt
            )
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(StrategyError::io(
        "allocate temp path",
        dst,
        io::Error::other("no unused temp name available"),
    ))
}

#[cfg(unix)]
fn create_symlink(src: &Path, dst_link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst_link)
}

#[cfg(windows)]
fn create_symlink(src: &Path, dst_link: &Path) -> io::Result<()> {
    if src.is_dir() {
        std::os::windows::fs::symlink_dir(src, dst_link)
    } else {
        std::os::windows::fs::symlink_file(src, dst_link)
    }
}
