//! Implementation of the `syncsave save` and `syncsave check` commands.
//!
//! `save` delivers a single save event, exactly as an editor integration
//! would. `check` computes the same per-target decisions and prints them
//! without writing anything.

use super::console_session;
use crate::cli::SaveArgs;
use crate::context::EditorContext;
use crate::error::{Result, SyncError};
use crate::sync::{SaveOutcome, SkipReason, TargetPlan};
use std::path::Path;

/// Execute the `syncsave save` command.
pub fn cmd_save(args: SaveArgs) -> Result<()> {
    let ctx = EditorContext::resolve(args.root.root.as_deref())?;
    let file = ctx.resolve_file(&args.file)?;
    let session = console_session();

    match session.on_file_saved(&file, &ctx.root) {
        SaveOutcome::Skipped(reason) => {
            eprintln!("{}", describe_skip(reason, &file));
            Ok(())
        }
        SaveOutcome::ConfigReloaded { .. } => Ok(()),
        SaveOutcome::ConfigFailed(e) => Err(match e {
            SyncError::ConfigParse { path, .. } => SyncError::ConfigNotLoaded(path),
            other => other,
        }),
        outcome @ SaveOutcome::Processed(_) => match outcome.failure_count() {
            0 => Ok(()),
            failed => Err(SyncError::TargetsFailed(failed)),
        },
    }
}

/// Execute the `syncsave check` command.
pub fn cmd_check(args: SaveArgs) -> Result<()> {
    let ctx = EditorContext::resolve(args.root.root.as_deref())?;
    let file = ctx.resolve_file(&args.file)?;
    let session = console_session();

    let (config_path, plans) = session.preview(&file, &ctx.root)?;

    println!("Configuration: {}", config_path.display());
    if plans.is_empty() {
        println!("  (no targets)");
    }
    for (index, plan) in plans.iter().enumerate() {
        println!("  [{}] {}", index, describe_plan(plan));
    }

    Ok(())
}

pub(crate) fn describe_skip(reason: SkipReason, file: &Path) -> String {
    match reason {
        SkipReason::SyncDisabled => "Syncing is stopped.".to_string(),
        SkipReason::OutsideEditorRoot => {
            format!("'{}' is outside the editor root; nothing to do.", file.display())
        }
        SkipReason::NoConfig => format!("No sync.json governs '{}'.", file.display()),
    }
}

fn describe_plan(plan: &TargetPlan) -> String {
    match plan {
        TargetPlan::Disabled => "disabled".to_string(),
        TargetPlan::SelfCopy => "skipped: destination is the source root".to_string(),
        TargetPlan::Mirror(mirror) if mirror.matched => {
            format!("sync -> {}", mirror.destination.display())
        }
        TargetPlan::Mirror(mirror) => {
            format!("filtered: '{}' not selected by include/exclude", mirror.relative_path)
        }
    }
}
