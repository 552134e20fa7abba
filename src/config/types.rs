//! Configuration types and defaults for syncsave.

use crate::error::{Result, SyncError};

/// File name of a sync configuration. One may live in any directory of the
/// editor root; the nearest one above a saved file governs it.
pub const CONFIG_FILE_NAME: &str = "sync.json";

/// How line terminators are treated when a file is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndingMode {
    /// Copy bytes as-is (`"nochange"`).
    #[default]
    Unchanged,
    /// Collapse `\r\n` to `\n`.
    Lf,
    /// Expand bare `\n` to `\r\n`.
    Crlf,
}

impl LineEndingMode {
    /// Parse a mode from its `fileEncoderSelector` spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "nochange" => Some(Self::Unchanged),
            "lf" => Some(Self::Lf),
            "crlf" => Some(Self::Crlf),
            _ => None,
        }
    }

    /// Parse a mode, failing with [`SyncError::InvalidLineEndingMode`].
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| SyncError::InvalidLineEndingMode(s.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "nochange",
            Self::Lf => "lf",
            Self::Crlf => "crlf",
        }
    }
}

impl std::fmt::Display for LineEndingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Include patterns of the template target: common C/C++, CMake and script sources.
pub fn default_include_patterns() -> Vec<String> {
    [
        "**/*.h",
        "**/*.hpp",
        "**/*.cc",
        "**/*.cxx",
        "**/*.cpp",
        "**/*.ui",
        "**/*.cmake",
        "**/CMakeLists.txt",
        "**/*.ts",
        "**/*.js",
        "**/*.py",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Exclude patterns of the template target: VCS and package directories.
pub fn default_exclude_patterns() -> Vec<String> {
    ["node_modules/**", ".git/**", "github/**", "gitlab/**"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// Default value functions for serde
pub(crate) fn default_lang() -> String {
    "en".to_string()
}
pub(crate) fn default_file_encoder_selector() -> String {
    LineEndingMode::Unchanged.as_str().to_string()
}
