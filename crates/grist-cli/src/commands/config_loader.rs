use std::path::{Path, PathBuf};

use grist_lib::{BuildConfig, ConfigError, MessageFormat};

/// Command-line values layered over the config file.
///
/// `None`/`false`/empty leaves the configured value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub lib_dir: Option<PathBuf>,
    /// Replaces the configured includes when non-empty.
    pub includes: Vec<String>,
    /// Added to the configured excludes.
    pub excludes: Vec<String>,
    pub no_default_excludes: bool,
    pub report: bool,
    pub print_grammar: bool,
    pub debug: bool,
    pub profile: bool,
    pub nfa: bool,
    pub dfa: bool,
    pub trace: bool,
    pub message_format: Option<MessageFormat>,
    pub quiet_tool: bool,
    pub max_switch_case_labels: Option<u32>,
    pub min_switch_alts: Option<u32>,
    pub tool: Option<String>,
    /// Replaces the configured tool arguments when non-empty.
    pub tool_args: Vec<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: BuildConfig) -> BuildConfig {
        if let Some(dir) = &self.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(dir) = &self.lib_dir {
            config.lib_dir = Some(dir.clone());
        }
        if !self.includes.is_empty() {
            config.includes = self.includes.iter().collect();
        }
        for pattern in &self.excludes {
            config.excludes.insert(pattern);
        }
        if self.no_default_excludes {
            config.default_excludes = false;
        }

        let options = &mut config.options;
        options.report |= self.report;
        options.print_grammar |= self.print_grammar;
        options.debug |= self.debug;
        options.profile |= self.profile;
        options.nfa |= self.nfa;
        options.dfa |= self.dfa;
        options.trace |= self.trace;
        if let Some(format) = self.message_format {
            options.message_format = format;
        }
        if self.quiet_tool {
            options.verbose = false;
        }
        if let Some(n) = self.max_switch_case_labels {
            options.max_switch_case_labels = n;
        }
        if let Some(n) = self.min_switch_alts {
            options.min_switch_alts = n;
        }

        if let Some(program) = &self.tool {
            config.tool.program = program.clone();
        }
        if !self.tool_args.is_empty() {
            config.tool.args = self.tool_args.clone();
        }
        config
    }
}

/// Load the config file (or defaults), apply overrides, and make every
/// directory absolute against the current directory.
pub fn load_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<BuildConfig, ConfigError> {
    let base = match config_path {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    overrides.apply(base).absolute()
}
