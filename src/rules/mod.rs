//! Include/exclude rule matching for sync targets.
//!
//! A relative path syncs when:
//! - it matches at least one `include` glob, and
//! - it matches none of the `exclude` globs.
//!
//! An empty `include` list therefore never syncs anything, and an empty
//! `exclude` list never blocks anything. Paths are matched in `/` form and
//! `*`/`?` never cross a `/`, so `*.cpp` only matches at the top level while
//! `**/*.cpp` matches at any depth. Wildcards also match names starting with
//! `.`; hidden directories are kept out with an exclude such as `.git/**`.
//!
//! A pattern that fails to compile is dropped from its list and reported as a
//! [`PatternError`]; it never aborts matching for the remaining patterns.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};


/// Which list a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternList {
    Include,
    Exclude,
}

impl std::fmt::Display for PatternList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternList::Include => write!(f, "include"),
            PatternList::Exclude => write!(f, "exclude"),
        }
    }
}

/// A glob that could not be compiled and is treated as never-matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub list: PatternList,
    pub pattern: String,
    pub message: String,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} pattern '{}' ignored: {}",
            self.list, self.pattern, self.message
        )
    }
}

/// Compiled include/exclude globs for one sync target.
///
/// Build once per loaded configuration and reuse across save events.
#[derive(Debug, Clone)]
pub struct RuleSet {
    include: GlobSet,
    exclude: GlobSet,
    errors: Vec<PatternError>,
}

impl RuleSet {
    /// Compile include and exclude pattern lists.
    ///
    /// Never fails: malformed patterns are collected in [`RuleSet::errors`].
    pub fn compile(include: &[String], exclude: &[String]) -> Self {
        let mut errors = Vec::new();
        let include = build_globset(include, PatternList::Include, &mut errors);
        let exclude = build_globset(exclude, PatternList::Exclude, &mut errors);
        Self {
            include,
            exclude,
            errors,
        }
    }

    /// Decide whether a `/`-separated relative path should sync.
    pub fn should_sync(&self, relative_path: &str) -> bool {
        self.include.is_match(relative_path) && !self.exclude.is_match(relative_path)
    }

    /// Patterns that were dropped because they failed to compile.
    pub fn errors(&self) -> &[PatternError] {
        &self.errors
    }
}

/// One-shot form of [`RuleSet::should_sync`].
pub fn should_sync(relative_path: &str, include: &[String], exclude: &[String]) -> bool {
    RuleSet::compile(include, exclude).should_sync(relative_path)
}

fn build_globset(patterns: &[String], list: PatternList, errors: &mut Vec<PatternError>) -> GlobSet {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => {
                tracing::warn!(%list, pattern = %pattern, error = %e, "skipping malformed glob");
                errors.push(PatternError {
                    list,
                    pattern: pattern.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    // Globs were validated one by one above; an empty set never matches.
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(%list, error = %e, "failed to build glob set");
        GlobSet::empty()
    })
}
