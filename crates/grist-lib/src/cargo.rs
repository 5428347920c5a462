//! Build-script front end.

use std::env;
use std::path::{Path, PathBuf};

use grist_core::PatternSet;

use crate::config::{BuildConfig, ToolCommand, ToolOptions};
use crate::host::{CargoHost, DEFAULT_OUT_DIR_VAR};
use crate::orchestrator::{self, Outcome};
use crate::tool::CommandToolchain;
use crate::{Error, Result};

/// Grammar compilation from `build.rs`.
///
/// Directories default to `<CARGO_MANIFEST_DIR>/src/grammars` for sources
/// and `<OUT_DIR>/grammars` for output; relative directories given to the
/// setters are taken relative to the manifest directory.
#[derive(Clone, Debug)]
pub struct Build {
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    lib_dir: Option<PathBuf>,
    includes: PatternSet,
    excludes: PatternSet,
    default_excludes: bool,
    options: ToolOptions,
    tool: ToolCommand,
    env_var: String,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            source_dir: None,
            output_dir: None,
            lib_dir: None,
            includes: PatternSet::new(),
            excludes: PatternSet::new(),
            default_excludes: true,
            options: ToolOptions::default(),
            tool: ToolCommand::default(),
            env_var: DEFAULT_OUT_DIR_VAR.to_owned(),
        }
    }
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn lib_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.lib_dir = Some(dir.into());
        self
    }

    pub fn include(mut self, pattern: &str) -> Self {
        self.includes.insert(pattern);
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.excludes.insert(pattern);
        self
    }

    pub fn default_excludes(mut self, enabled: bool) -> Self {
        self.default_excludes = enabled;
        self
    }

    pub fn options(mut self, options: ToolOptions) -> Self {
        self.options = options;
        self
    }

    pub fn tool(mut self, tool: ToolCommand) -> Self {
        self.tool = tool;
        self
    }

    /// Name of the variable that receives the output directory.
    pub fn env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// The configuration this builder describes for the given Cargo dirs.
    pub fn config_for(&self, manifest_dir: &Path, out_dir: &Path) -> BuildConfig {
        let source_dir = match &self.source_dir {
            Some(dir) => manifest_dir.join(dir),
            None => manifest_dir.join("src").join("grammars"),
        };
        let output_dir = match &self.output_dir {
            Some(dir) => manifest_dir.join(dir),
            None => out_dir.join("grammars"),
        };

        BuildConfig {
            source_dir,
            output_dir,
            lib_dir: self.lib_dir.as_ref().map(|dir| manifest_dir.join(dir)),
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
            default_excludes: self.default_excludes,
            options: self.options.clone(),
            tool: self.tool.clone(),
        }
    }

    /// Compile the grammars. Must run inside a build script.
    pub fn compile(&self) -> Result<Outcome> {
        let manifest_dir = cargo_dir("CARGO_MANIFEST_DIR")?;
        let out_dir = cargo_dir("OUT_DIR")?;
        let config = self.config_for(&manifest_dir, &out_dir);

        let mut host = CargoHost::new(&self.env_var);
        host.rerun_if_changed(&config.source_dir);

        let toolchain = CommandToolchain::from_command(&config.tool);
        orchestrator::run(&config, &toolchain, &mut host)
    }
}

fn cargo_dir(var: &'static str) -> Result<PathBuf> {
    env::var_os(var)
        .map(PathBuf::from)
        .ok_or(Error::Env { var })
}
