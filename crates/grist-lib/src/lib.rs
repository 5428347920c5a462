//! grist: batch grammar compilation with a mirrored output layout.
//!
//! A pass discovers grammar files under a source directory (Ant-style
//! include/exclude patterns, `imports/` always excluded), hands them to the
//! grammar tool as root-relative paths in one dependency-aware batch, and
//! turns the tool's error tally into success or failure.
//!
//! # Example
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     grist_lib::Build::new()
//!         .source_dir("src/grammars")
//!         .exclude("experimental/**")
//!         .compile()
//!         .expect("grammar compilation failed");
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cargo;
pub mod config;
pub mod host;
pub mod orchestrator;
pub mod scan;
pub mod tool;

#[cfg(test)]
mod cargo_tests;
#[cfg(test)]
mod config_tests;

use std::path::PathBuf;

pub use cargo::Build;
pub use config::{BuildConfig, ConfigError, MessageFormat, ToolCommand, ToolOptions};
pub use host::{BuildHost, CargoHost, NoopHost};
pub use orchestrator::{Outcome, run};
pub use scan::{ScanError, Scanner};
pub use tool::{Batch, CommandToolchain, Engine, EngineBinding, EngineError, RunReport, Toolchain};

/// Errors that fail a build pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create output directory '{}'", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The grammar tool could not be created; no grammar was looked at.
    #[error("grammar tool unavailable")]
    ToolUnavailable(#[source] EngineError),

    #[error("fatal error while evaluating the names of the grammar files to analyze")]
    Discovery(#[from] ScanError),

    /// The tool was created but could not run the batch.
    #[error("grammar tool failed to run")]
    ToolRun(#[source] EngineError),

    #[error("grammar tool caught {count} build errors")]
    GrammarErrors { count: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("environment variable {var} is not set (is this running from a build script?)")]
    Env { var: &'static str },
}

impl Error {
    /// Number of grammar errors, when the failure came from the grammars.
    pub fn grammar_error_count(&self) -> Option<usize> {
        match self {
            Error::GrammarErrors { count } => Some(*count),
            _ => None,
        }
    }
}

/// Result type for build passes.
pub type Result<T> = std::result::Result<T, Error>;
