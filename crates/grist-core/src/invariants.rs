//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::path::Path;

#[cold]
pub(crate) fn file_outside_root(root: &Path, file: &Path) -> ! {
    panic!(
        "expected '{}' to be prefixed with '{}' \
         (scanner must only yield files under the root it walked)",
        file.display(),
        root.display()
    )
}
