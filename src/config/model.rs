//! SyncConfig and TargetFolder definitions.

use super::types::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Contents of a `sync.json` file.
///
/// Unknown fields are ignored for forward compatibility; missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// UI language of the configuration editor. Informational only.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Destination trees, processed in order on every save.
    pub target_folders: Vec<TargetFolder>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            target_folders: Vec::new(),
        }
    }
}

impl SyncConfig {
    /// The configuration `init` writes when no `sync.json` exists.
    ///
    /// Its single target points at `./`, which the self-copy guard skips, so
    /// the template is inert until the user edits the destination.
    pub fn template() -> Self {
        Self {
            lang: default_lang(),
            target_folders: vec![TargetFolder {
                path: "./".to_string(),
                include: default_include_patterns(),
                exclude: default_exclude_patterns(),
                sync_switcher: true,
                create_dir: true,
                copy_from_workspace: true,
                file_encoder_selector: default_file_encoder_selector(),
            }],
        }
    }
}

/// One destination tree and the rules that decide what is mirrored into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetFolder {
    /// Destination root, absolute or relative to the source root.
    pub path: String,

    /// Glob patterns; a file syncs if any of them matches.
    pub include: Vec<String>,

    /// Glob patterns; a file is skipped if any of them matches.
    pub exclude: Vec<String>,

    /// Per-target enable switch.
    pub sync_switcher: bool,

    /// Create missing destination directories before copying.
    pub create_dir: bool,

    /// Resolve paths against the editor root instead of the directory holding
    /// the `sync.json` that declares this target.
    pub copy_from_workspace: bool,

    /// `"nochange"`, `"lf"` or `"crlf"`. Kept verbatim so that an unknown value
    /// only fails the target that uses it.
    #[serde(default = "default_file_encoder_selector")]
    pub file_encoder_selector: String,
}

impl Default for TargetFolder {
    fn default() -> Self {
        Self {
            path: String::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            sync_switcher: false,
            create_dir: false,
            copy_from_workspace: false,
            file_encoder_selector: default_file_encoder_selector(),
        }
    }
}

impl TargetFolder {
    pub fn line_ending_mode(&self) -> Result<LineEndingMode> {
        LineEndingMode::parse(&self.file_encoder_selector)
    }
}
