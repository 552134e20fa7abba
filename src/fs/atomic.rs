//! Atomic file writes for mirrored destinations.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the destination directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file over the destination
//!
//! Unlike a plain `fs::write`, an interrupted copy never leaves a truncated
//! destination behind; at worst a `.{filename}.syncsave.tmp` file remains.
//!
//! The parent directory is NOT created here. Whether missing directories may be
//! created is a per-target decision (`createDir`) made by the sync executor.

use crate::error::{Result, SyncError};
use std::ffi::OsString;
use std::fs::{self, File, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file whose parent directory already exists.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(SyncError::UserError)` - On write or rename failure, with the reason
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    write_with_permissions(path.as_ref(), content, None)
}

/// Atomically write bytes and give the result `permissions` (for example the
/// mode of the file being mirrored).
pub fn atomic_write_with_permissions<P: AsRef<Path>>(
    path: P,
    content: &[u8],
    permissions: Permissions,
) -> Result<()> {
    write_with_permissions(path.as_ref(), content, Some(permissions))
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn write_with_permissions(
    path: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> Result<()> {
    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    if let Some(permissions) = permissions
        && let Err(e) = fs::set_permissions(&temp_path, permissions)
    {
        let _ = fs::remove_file(&temp_path);
        return Err(SyncError::UserError(format!(
            "failed to set permissions on '{}': {}",
            temp_path.display(),
            e
        )));
    }

    atomic_replace(&temp_path, path)
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().ok_or_else(|| {
        SyncError::UserError(format!("invalid destination path '{}'", target.display()))
    })?;

    let mut temp_name = OsString::from(".");
    temp_name.push(filename);
    temp_name.push(".syncsave.tmp");
    Ok(parent.join(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SyncError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        SyncError::UserError(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        SyncError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(unix)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        SyncError::UserError(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(not(unix))]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // rename() refuses to overwrite on some platforms; drop the old file first.
    if let Err(first) = fs::rename(source, target) {
        if target.exists() {
            fs::remove_file(target)
                .and_then(|_| fs::rename(source, target))
                .map_err(|e| {
                    let _ = fs::remove_file(source);
                    SyncError::UserError(format!(
                        "failed to replace '{}': {}",
                        target.display(),
                        e
                    ))
                })?;
        } else {
            let _ = fs::remove_file(source);
            return Err(SyncError::UserError(format!(
                "failed to replace '{}': {}",
                target.display(),
                first
            )));
        }
    }
    Ok(())
}
