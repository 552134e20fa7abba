//! syncsave: mirror saved files into one or more destination trees.
//!
//! A `sync.json` inside the editor root lists destination folders, each with
//! include/exclude globs and a line-ending policy. When a file is saved, the
//! nearest `sync.json` above it decides where copies go. Saving the
//! `sync.json` itself reloads it.
//!
//! The engine lives in [`sync`]; [`rules`] holds the glob matcher and
//! [`config`] the configuration model. The `syncsave` binary drives the engine
//! through [`commands`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod notifier;
pub mod rules;
pub mod sync;

#[cfg(test)]
mod test_support;
