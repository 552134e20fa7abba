//! Error types for syncsave.
//!
//! Uses thiserror for derive macros. Every failure the sync engine can hit is a
//! variant here so it can be carried inside an outcome value and shown to the
//! user without aborting the rest of a save event.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for syncsave operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// User provided invalid arguments or a path that cannot be used.
    #[error("{0}")]
    UserError(String),

    /// No configuration file exists at the resolved location.
    #[error("no sync configuration found at '{}'", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file could not be read or parsed.
    #[error("failed to load sync configuration '{}': {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A destination directory could not be created.
    #[error("failed to create destination directory '{}': {message}", .path.display())]
    DirectoryCreate { path: PathBuf, message: String },

    /// A file could not be copied to its destination.
    #[error("failed to sync '{}' to '{}': {message}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// A target names a line-ending mode this build does not know.
    #[error("invalid line ending mode '{0}' (expected \"nochange\", \"lf\" or \"crlf\")")]
    InvalidLineEndingMode(String),

    /// A save event ran but some targets failed. Details were already reported.
    #[error("{0} target(s) failed to sync")]
    TargetsFailed(usize),

    /// A save event was aborted because its configuration failed to load.
    /// Details were already reported.
    #[error("sync configuration '{}' was not loaded", .0.display())]
    ConfigNotLoaded(PathBuf),
}

impl SyncError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::UserError(_) => exit_codes::USER_ERROR,
            SyncError::ConfigNotFound(_)
            | SyncError::ConfigParse { .. }
            | SyncError::ConfigNotLoaded(_) => exit_codes::CONFIG_FAILURE,
            SyncError::DirectoryCreate { .. }
            | SyncError::Copy { .. }
            | SyncError::InvalidLineEndingMode(_)
            | SyncError::TargetsFailed(_) => exit_codes::SYNC_FAILURE,
        }
    }
}

/// Result type alias for syncsave operations.
pub type Result<T> = std::result::Result<T, SyncError>;
