//! Command implementations for syncsave.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command builds a [`SyncSession`] that reports to the
//! console, so per-target failures are printed as they happen and the command
//! only returns a summary error for the exit code.

mod init;
mod save;
mod watch;

use crate::cli::Command;
use crate::error::Result;
use crate::notifier::ConsoleNotifier;
use crate::sync::SyncSession;
use std::sync::Arc;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(args),
        Command::Save(args) => save::cmd_save(args),
        Command::Check(args) => save::cmd_check(args),
        Command::Watch(args) => watch::cmd_watch(args),
    }
}

fn console_session() -> SyncSession {
    SyncSession::new(Arc::new(ConsoleNotifier::default()))
}
