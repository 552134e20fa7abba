//! CLI argument parsing for syncsave.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// syncsave: mirror saved files into destination trees.
///
/// Rules live in `sync.json` files inside the editor root. The nearest
/// `sync.json` above a saved file decides which destinations receive a copy.
#[derive(Parser, Debug)]
#[command(name = "syncsave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for syncsave.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default sync.json at the editor root if none exists.
    Init(RootArgs),

    /// Deliver one save event for a file.
    ///
    /// Mirrors the file into every matching destination of the governing
    /// sync.json. Saving a sync.json reloads it instead.
    Save(SaveArgs),

    /// Show what saving a file would do, without writing anything.
    Check(SaveArgs),

    /// Watch the editor root and deliver a save event for every modified file.
    ///
    /// While running, type `stop`, `start`, `init` or `status` on stdin.
    Watch(WatchArgs),
}

/// Editor root selection shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct RootArgs {
    /// Editor root; saves outside it are ignored. Defaults to the current directory.
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the `save` and `check` commands.
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// The saved file.
    pub file: PathBuf,

    #[command(flatten)]
    pub root: RootArgs,
}

/// Arguments for the `watch` command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Poll interval in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Run a single scan and exit.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_default_root() {
        let cli = Cli::try_parse_from(["syncsave", "init"]).unwrap();
        match cli.command {
            Command::Init(args) => assert!(args.root.is_none()),
            other => panic!("Expected Init command, got {:?}", other),
        }
    }

    #[test]
    fn parse_save_with_root() {
        let cli =
            Cli::try_parse_from(["syncsave", "save", "src/app.cpp", "--root", "/ws"]).unwrap();
        if let Command::Save(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("src/app.cpp"));
            assert_eq!(args.root.root, Some(PathBuf::from("/ws")));
        } else {
            panic!("Expected Save command");
        }
    }

    #[test]
    fn parse_save_requires_file() {
        assert!(Cli::try_parse_from(["syncsave", "save"]).is_err());
    }

    #[test]
    fn parse_watch_defaults() {
        let cli = Cli::try_parse_from(["syncsave", "watch"]).unwrap();
        if let Command::Watch(args) = cli.command {
            assert_eq!(args.interval_ms, 500);
            assert!(!args.once);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn parse_verbose_is_global() {
        let cli = Cli::try_parse_from(["syncsave", "check", "a.cpp", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Check(_)));
    }
}
