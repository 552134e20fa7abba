//! Filesystem utilities for syncsave.
//!
//! Destination writes go through [`atomic_write`] so a reader of a mirrored
//! file sees either the previous content or the new content. Path helpers do
//! purely lexical work; nothing here resolves symlinks.

pub mod atomic;
pub mod paths;

pub use atomic::{atomic_write, atomic_write_file, atomic_write_with_permissions};
pub use paths::{is_within, normalize_lexically, relative_to, to_forward_slashes};
