#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core path algebra for grist.
//!
//! Two pieces, both free of I/O:
//! - **Patterns** (`Pattern`, `PatternSet`): Ant-style include/exclude globs
//! - **Mirroring** (`RelativeGrammarPath`): root-relative grammar paths and
//!   the output subdirectory they map to

mod invariants;
pub mod mirror;
pub mod pattern;

#[cfg(test)]
mod mirror_tests;

pub use mirror::{RelativeGrammarPath, relativize};
pub use pattern::{Pattern, PatternSet};

/// Subdirectory of the source root holding imported grammars.
pub const IMPORTS_DIR: &str = "imports";

/// Exclusion that keeps the imports subtree out of direct compilation.
pub const IMPORTS_EXCLUDE: &str = "imports/**";

/// Include pattern used when none is configured.
pub const DEFAULT_INCLUDE: &str = "**/*.g";
