//! Per-target sync execution.
//!
//! For each target of the governing configuration, in order:
//! 1. skip disabled targets
//! 2. pick the source root (editor root or the config's directory)
//! 3. resolve the destination root; skip when it is the source root
//! 4. map the saved file to its destination path
//! 5. create missing destination directories when `createDir` is set
//! 6. consult the include/exclude rules
//! 7. copy, rewriting line endings when asked
//!
//! Every failure is caught at the target boundary: it is reported, recorded in
//! the target's outcome, and the next target is attempted.

use super::line_endings::normalize_line_endings;
use super::outcome::{TargetOutcome, TargetReport};
use super::state::ConfigSnapshot;
use crate::config::{LineEndingMode, TargetFolder};
use crate::error::{Result, SyncError};
use crate::fs::{
    atomic_write_with_permissions, normalize_lexically, relative_to, to_forward_slashes,
};
use crate::notifier::Notifier;
use crate::rules::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What processing a target would do, computed without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPlan {
    Disabled,
    SelfCopy,
    Mirror(MirrorPlan),
}

/// Where a saved file maps to for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorPlan {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    /// Saved path relative to `source_root`, `/`-separated.
    pub relative_path: String,
    pub destination: PathBuf,
    /// Result of the include/exclude rules.
    pub matched: bool,
}

/// Resolve source root, destination and rule decision for one target.
///
/// `saved`, `editor_root` and `config_dir` must be absolute and normalized.
///
/// # Errors
///
/// `SyncError::UserError` if `saved` does not lie under the target's source root.
pub fn plan_target(
    saved: &Path,
    editor_root: &Path,
    config_dir: &Path,
    target: &TargetFolder,
    rules: &RuleSet,
) -> Result<TargetPlan> {
    if !target.sync_switcher {
        return Ok(TargetPlan::Disabled);
    }

    let source_root = if target.copy_from_workspace {
        editor_root
    } else {
        config_dir
    };

    if target.path.is_empty() {
        return Ok(TargetPlan::SelfCopy);
    }
    let destination_root = normalize_lexically(&source_root.join(&target.path));
    if destination_root == source_root {
        return Ok(TargetPlan::SelfCopy);
    }

    let relative = relative_to(saved, source_root).ok_or_else(|| {
        SyncError::UserError(format!(
            "'{}' is not under source root '{}'",
            saved.display(),
            source_root.display()
        ))
    })?;
    let destination = destination_root.join(&relative);
    let relative_path = to_forward_slashes(&relative);
    let matched = rules.should_sync(&relative_path);

    Ok(TargetPlan::Mirror(MirrorPlan {
        source_root: source_root.to_path_buf(),
        destination_root,
        relative_path,
        destination,
        matched,
    }))
}

/// Process every target of `snapshot` for one saved file.
pub fn run_targets(
    snapshot: &ConfigSnapshot,
    saved: &Path,
    editor_root: &Path,
    notifier: &dyn Notifier,
) -> Vec<TargetReport> {
    snapshot
        .targets()
        .enumerate()
        .map(|(index, (target, rules))| {
            let outcome =
                process_target(saved, editor_root, snapshot.config_dir(), target, rules, notifier);
            tracing::debug!(index, target = %target.path, ?outcome, "target processed");
            TargetReport { index, outcome }
        })
        .collect()
}

fn process_target(
    saved: &Path,
    editor_root: &Path,
    config_dir: &Path,
    target: &TargetFolder,
    rules: &RuleSet,
    notifier: &dyn Notifier,
) -> TargetOutcome {
    let plan = match plan_target(saved, editor_root, config_dir, target, rules) {
        Ok(TargetPlan::Mirror(plan)) => plan,
        Ok(TargetPlan::Disabled) => return TargetOutcome::Disabled,
        Ok(TargetPlan::SelfCopy) => return TargetOutcome::SelfCopy,
        Err(e) => return report_failure(notifier, e),
    };

    // Directories are prepared before the rules are consulted.
    if target.create_dir
        && let Err(e) = ensure_parent_dir(&plan.destination)
    {
        return report_failure(notifier, e);
    }

    if !plan.matched {
        return TargetOutcome::Filtered {
            relative_path: plan.relative_path,
        };
    }

    let result = target
        .line_ending_mode()
        .and_then(|mode| copy_file(saved, &plan.destination, mode));

    match result {
        Ok(()) => {
            notifier.status(&format!(
                "Synced {} to {}",
                saved.display(),
                plan.destination.display()
            ));
            TargetOutcome::Copied {
                from: saved.to_path_buf(),
                to: plan.destination,
            }
        }
        Err(e) => report_failure(notifier, e),
    }
}

fn report_failure(notifier: &dyn Notifier, error: SyncError) -> TargetOutcome {
    tracing::warn!(%error, "target failed");
    notifier.error(&error.to_string());
    TargetOutcome::Failed(error)
}

/// Create the parent directory of `destination` and its ancestors if missing.
pub fn ensure_parent_dir(destination: &Path) -> Result<()> {
    let Some(parent) = destination.parent() else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|e| SyncError::DirectoryCreate {
        path: parent.to_path_buf(),
        message: e.to_string(),
    })
}

/// Copy `from` over `to`, rewriting line endings for `mode`.
///
/// The destination is fully replaced and takes the source's permissions; its
/// parent directory must exist.
pub fn copy_file(from: &Path, to: &Path, mode: LineEndingMode) -> Result<()> {
    let copy_error = |message: String| SyncError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message,
    };

    let permissions = fs::metadata(from)
        .map_err(|e| copy_error(e.to_string()))?
        .permissions();
    let content = fs::read(from).map_err(|e| copy_error(e.to_string()))?;
    let content = normalize_line_endings(&content, mode);

    atomic_write_with_permissions(to, &content, permissions)
        .map_err(|e| copy_error(e.to_string()))
}
