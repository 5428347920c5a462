//! Build configuration.
//!
//! A `BuildConfig` is an immutable value built once per pass. It can be
//! assembled in code, or loaded from a JSON file whose keys are kebab-case:
//!
//! ```json
//! {
//!   "source-dir": "src/grammars",
//!   "output-dir": "target/generated-sources/grammars",
//!   "excludes": ["experimental/**"],
//!   "options": { "report": true, "message-format": "gnu" }
//! }
//! ```
//!
//! Relative paths in a file are resolved against the file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use grist_core::{IMPORTS_DIR, PatternSet};
use serde::{Deserialize, Serialize};

/// Errors from reading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot resolve path '{}'", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Diagnostic layout requested from the grammar tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    #[default]
    Antlr,
    Gnu,
    Vs2005,
}

impl MessageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageFormat::Antlr => "antlr",
            MessageFormat::Gnu => "gnu",
            MessageFormat::Vs2005 => "vs2005",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "antlr" => Some(MessageFormat::Antlr),
            "gnu" => Some(MessageFormat::Gnu),
            "vs2005" => Some(MessageFormat::Vs2005),
            _ => None,
        }
    }
}

/// Options passed through to the grammar tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToolOptions {
    /// Report statistics about each parser (cyclic DFAs, backtracking rules).
    pub report: bool,
    /// Print each grammar with embedded actions stripped.
    pub print_grammar: bool,
    /// Generate parsers that wait for a debugger connection.
    pub debug: bool,
    /// Generate parsers that collect profiling information.
    pub profile: bool,
    /// Emit the NFA of each rule in Graphviz dot format.
    pub nfa: bool,
    /// Emit the DFA of each decision in Graphviz dot format.
    pub dfa: bool,
    /// Generate parsers that trace rule entry and exit.
    pub trace: bool,
    pub message_format: MessageFormat,
    pub verbose: bool,
    /// Largest decision still generated as a switch statement.
    pub max_switch_case_labels: u32,
    /// Smallest decision generated as a switch instead of if/else.
    pub min_switch_alts: u32,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            report: false,
            print_grammar: false,
            debug: false,
            profile: false,
            nfa: false,
            dfa: false,
            trace: false,
            message_format: MessageFormat::Antlr,
            verbose: true,
            max_switch_case_labels: 300,
            min_switch_alts: 3,
        }
    }
}

/// The external program that compiles grammars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolCommand {
    pub program: String,
    /// Arguments placed before the generated ones (e.g. `-jar antlr.jar`).
    pub args: Vec<String>,
}

impl Default for ToolCommand {
    fn default() -> Self {
        Self {
            program: "antlr3".to_owned(),
            args: Vec::new(),
        }
    }
}

/// Everything one build pass needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Where imported grammars and token vocabularies live.
    /// Defaults to the `imports` directory under `source_dir`.
    pub lib_dir: Option<PathBuf>,
    /// Empty means "every `.g` file at any depth".
    pub includes: PatternSet,
    pub excludes: PatternSet,
    /// Also exclude VCS metadata and editor backup files.
    pub default_excludes: bool,
    pub options: ToolOptions,
    pub tool: ToolCommand,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new("src/grammars", "target/generated-sources/grammars")
    }
}

impl BuildConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            lib_dir: None,
            includes: PatternSet::new(),
            excludes: PatternSet::new(),
            default_excludes: true,
            options: ToolOptions::default(),
            tool: ToolCommand::default(),
        }
    }

    /// Parse a JSON config. Paths are kept as written.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a JSON config file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.rooted_at(base))
    }

    /// Resolve relative directories against `base`; absolute ones are kept.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.source_dir = base.join(&self.source_dir);
        self.output_dir = base.join(&self.output_dir);
        self.lib_dir = self.lib_dir.map(|dir| base.join(dir));
        self
    }

    /// Every directory made absolute against the current directory.
    ///
    /// The tool runs from `source_dir`; the directories it is given must not
    /// depend on that.
    pub fn absolute(&self) -> Result<Self, ConfigError> {
        let mut config = self.clone();
        config.source_dir = absolute_dir(&self.source_dir)?;
        config.output_dir = absolute_dir(&self.output_dir)?;
        config.lib_dir = self.lib_dir.as_deref().map(absolute_dir).transpose()?;
        Ok(config)
    }

    /// The library directory handed to the tool.
    pub fn lib_dir(&self) -> PathBuf {
        match &self.lib_dir {
            Some(dir) => dir.clone(),
            None => self.source_dir.join(IMPORTS_DIR),
        }
    }
}

fn absolute_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}
