//! Grammar source discovery.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use grist_core::{DEFAULT_INCLUDE, IMPORTS_EXCLUDE, PatternSet};
use walkdir::WalkDir;

use crate::config::BuildConfig;

/// VCS metadata and editor leftovers, excluded unless disabled.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Editor backups and lock files
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    "**/.DS_Store",
    // CVS
    "**/CVS",
    "**/CVS/**",
    "**/.cvsignore",
    // Subversion
    "**/.svn",
    "**/.svn/**",
    // Git
    "**/.git",
    "**/.git/**",
    "**/.gitattributes",
    "**/.gitignore",
    "**/.gitmodules",
    // Mercurial
    "**/.hg",
    "**/.hg/**",
    "**/.hgignore",
    // Bazaar
    "**/.bzr",
    "**/.bzr/**",
    "**/.bzrignore",
];

/// Failure while walking the source tree.
#[derive(Debug, thiserror::Error)]
#[error("failed to walk source directory '{}'", root.display())]
pub struct ScanError {
    root: PathBuf,
    #[source]
    source: walkdir::Error,
}

impl ScanError {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Include patterns actually applied: the configured set, or `**/*.g`.
pub fn effective_includes(includes: &PatternSet) -> PatternSet {
    if includes.is_empty() {
        return [DEFAULT_INCLUDE].into_iter().collect();
    }
    includes.clone()
}

/// Exclude patterns actually applied. Always contains `imports/**`.
///
/// Returns a new set; the caller's set is not modified.
pub fn effective_excludes(excludes: &PatternSet, default_excludes: bool) -> PatternSet {
    let mut effective = excludes.with(IMPORTS_EXCLUDE);
    if default_excludes {
        for pattern in DEFAULT_EXCLUDES {
            effective.insert(pattern);
        }
    }
    effective
}

/// Finds grammar files under a source root.
#[derive(Clone, Debug)]
pub struct Scanner {
    includes: PatternSet,
    excludes: PatternSet,
}

impl Scanner {
    pub fn new(includes: &PatternSet, excludes: &PatternSet, default_excludes: bool) -> Self {
        Self {
            includes: effective_includes(includes),
            excludes: effective_excludes(excludes, default_excludes),
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(
            &config.includes,
            &config.excludes,
            config.default_excludes,
        )
    }

    pub fn includes(&self) -> &PatternSet {
        &self.includes
    }

    pub fn excludes(&self) -> &PatternSet {
        &self.excludes
    }

    /// Whether a root-relative path is a compilation candidate.
    pub fn is_candidate(&self, relative: &str) -> bool {
        self.includes.matches(relative) && !self.excludes.matches(relative)
    }

    /// Every regular file under `root` that passes the filters.
    ///
    /// Returned paths are `root` joined with the relative path, so they
    /// always relativize back against `root`. The root itself is never a
    /// candidate. Symlinks are followed.
    pub fn scan(&self, root: &Path) -> Result<BTreeSet<PathBuf>, ScanError> {
        let mut found = BTreeSet::new();

        for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|source| ScanError {
                root: root.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if self.is_candidate(&relative.to_string_lossy()) {
                found.insert(entry.into_path());
            }
        }

        Ok(found)
    }
}
