//! Outcome values for save events and individual targets.

use crate::error::SyncError;
use std::path::PathBuf;

/// Why a save event was ignored without looking at any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The global latch is off.
    SyncDisabled,
    /// The saved file is not under the editor root.
    OutsideEditorRoot,
    /// No `sync.json` exists where discovery ended.
    NoConfig,
}

/// What one save event did.
#[derive(Debug)]
pub enum SaveOutcome {
    Skipped(SkipReason),
    /// The saved file was the configuration itself and it was reloaded.
    ConfigReloaded { path: PathBuf, version: u64 },
    /// The configuration could not be loaded; no target was processed.
    ConfigFailed(SyncError),
    /// Targets were processed; one report per configured target, in order.
    Processed(Vec<TargetReport>),
}

impl SaveOutcome {
    /// Per-target reports, empty unless targets were processed.
    pub fn reports(&self) -> &[TargetReport] {
        match self {
            SaveOutcome::Processed(reports) => reports,
            _ => &[],
        }
    }

    /// Destination files written during this event.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.reports()
            .iter()
            .filter_map(|r| match &r.outcome {
                TargetOutcome::Copied { to, .. } => Some(to.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of targets that failed.
    pub fn failure_count(&self) -> usize {
        self.reports()
            .iter()
            .filter(|r| matches!(r.outcome, TargetOutcome::Failed(_)))
            .count()
    }
}

/// What happened for one target of a save event.
#[derive(Debug)]
pub struct TargetReport {
    /// Position of the target in `targetFolders`.
    pub index: usize,
    pub outcome: TargetOutcome,
}

#[derive(Debug)]
pub enum TargetOutcome {
    /// `syncSwitcher` is off.
    Disabled,
    /// Destination root is empty or resolves to the source root.
    SelfCopy,
    /// Include/exclude rules rejected the file.
    Filtered { relative_path: String },
    Copied { from: PathBuf, to: PathBuf },
    Failed(SyncError),
}
