//! Configuration model for syncsave.
//!
//! This module defines the `SyncConfig` struct that represents a `sync.json`
//! file. It supports forward-compatible JSON parsing (unknown fields are
//! ignored), defaults for missing fields, discovery of the nearest
//! configuration file for a saved path, and the template written by `init`.

mod model;
mod operations;
pub mod types;


pub use model::{SyncConfig, TargetFolder};
pub use operations::{find_config_path, write_template_if_missing};
pub use types::{CONFIG_FILE_NAME, LineEndingMode};
