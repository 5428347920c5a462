//! The grammar tool seam.
//!
//! The grammar compiler is opaque to grist. A `Toolchain` builds an `Engine`
//! from an immutable `EngineBinding`; the engine then processes exactly one
//! `Batch` holding every grammar of the pass and reports an error tally.
//! `CommandToolchain` runs an ANTLR 3 style command-line tool; tests plug in
//! their own implementations.

mod command;


use std::path::PathBuf;

use grist_core::RelativeGrammarPath;

use crate::config::{BuildConfig, ToolOptions};

pub use command::{CommandEngine, CommandToolchain, LineKind, classify_line, tool_args};

/// Directories and options fixed before any grammar is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineBinding {
    pub output_dir: PathBuf,
    pub lib_dir: PathBuf,
    /// Place output at the same relative path as the input grammar.
    pub force_relative_output: bool,
    pub options: ToolOptions,
}

impl EngineBinding {
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            lib_dir: config.lib_dir(),
            force_relative_output: true,
            options: config.options.clone(),
        }
    }
}

/// All grammars of one pass, processed in a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    /// Working directory; grammar paths are relative to it.
    pub input_dir: PathBuf,
    /// Dependency-aware mode: the tool orders grammars by their imports.
    pub make: bool,
    pub grammars: Vec<RelativeGrammarPath>,
}

/// Tally of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub errors: usize,
    pub warnings: usize,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Failures of the tool itself, as opposed to errors in grammars.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("grammar tool '{program}' not found")]
    NotFound { program: String },

    #[error("failed to launch grammar tool '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Nonzero exit without a single recognized error line.
    #[error("grammar tool '{program}' exited with {status} without reporting errors")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("{0}")]
    Other(String),
}

/// Creates engines.
pub trait Toolchain {
    type Engine: Engine;

    fn create(&self, binding: &EngineBinding) -> Result<Self::Engine, EngineError>;
}

/// One configured grammar tool instance.
pub trait Engine {
    /// Process every grammar in `batch` in one run.
    ///
    /// `Err` means the tool could not run at all; grammar problems are
    /// reported through `RunReport::errors`.
    fn process(&mut self, batch: &Batch) -> Result<RunReport, EngineError>;
}
