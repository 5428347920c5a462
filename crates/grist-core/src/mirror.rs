//! Root-relative grammar paths.
//!
//! A grammar discovered under a source root is handed to the grammar tool as
//! a path relative to that root. The same relative subdirectory decides where
//! the generated artifacts land under the output root, so the output tree
//! mirrors the input tree.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use crate::invariants;

/// A grammar file expressed relative to its source root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativeGrammarPath {
    subdir: PathBuf,
    file_name: OsString,
}

impl RelativeGrammarPath {
    /// Relativize `file` against `root`.
    ///
    /// Returns `None` unless `file` lies strictly under `root` (the root
    /// itself, siblings, and paths escaping through `..` are rejected).
    pub fn from_paths(root: &Path, file: &Path) -> Option<Self> {
        let rest = file.strip_prefix(root).ok()?;

        let mut parts = Vec::new();
        for component in rest.components() {
            match component {
                Component::Normal(part) => parts.push(part),
                _ => return None,
            }
        }

        let (file_name, dirs) = parts.split_last()?;
        Some(Self {
            subdir: dirs.iter().copied().collect(),
            file_name: file_name.to_os_string(),
        })
    }

    /// Directory part below the root; empty for a file at the root.
    pub fn subdir(&self) -> &Path {
        &self.subdir
    }

    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    pub fn is_at_root(&self) -> bool {
        self.subdir.as_os_str().is_empty()
    }

    /// The mirrored subdirectory followed by a separator, or `""` at the root.
    pub fn subdir_prefix(&self) -> String {
        if self.is_at_root() {
            return String::new();
        }
        format!("{}{}", self.subdir.display(), MAIN_SEPARATOR)
    }

    /// Subdirectory joined with the file name: the key handed to the tool.
    pub fn to_path_buf(&self) -> PathBuf {
        self.subdir.join(&self.file_name)
    }

    /// The absolute file this path was derived from, given the same root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.to_path_buf())
    }

    /// Where generated artifacts for this grammar go under `output_root`.
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        if self.is_at_root() {
            return output_root.to_path_buf();
        }
        output_root.join(&self.subdir)
    }
}

impl fmt::Display for RelativeGrammarPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.subdir_prefix(),
            self.file_name.to_string_lossy()
        )
    }
}

/// Relativize a file the scanner found under `root`.
///
/// # Panics
/// If `file` is not strictly under `root`. The scanner only yields files
/// below the root it walked, so this means discovery and relativization
/// disagree about the root.
pub fn relativize(root: &Path, file: &Path) -> RelativeGrammarPath {
    RelativeGrammarPath::from_paths(root, file)
        .unwrap_or_else(|| invariants::file_outside_root(root, file))
}
