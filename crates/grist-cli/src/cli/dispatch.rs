//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use grist_lib::MessageFormat;

use crate::commands::build::BuildArgs;
use crate::commands::config_loader::ConfigOverrides;
use crate::commands::scan::ScanArgs;

/// Flags accepted before or after any subcommand.
pub struct GlobalParams {
    pub verbosity: u8,
    pub quiet: bool,
}

impl GlobalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbosity: m.get_count("verbose"),
            quiet: m.get_flag("quiet"),
        }
    }
}

pub struct BuildParams {
    pub config: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub lib_dir: Option<PathBuf>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub no_default_excludes: bool,
    pub report: bool,
    pub print_grammar: bool,
    pub debug_codegen: bool,
    pub profile: bool,
    pub nfa: bool,
    pub dfa: bool,
    pub trace: bool,
    pub message_format: Option<MessageFormat>,
    pub quiet_tool: bool,
    pub max_switch_case_labels: Option<u32>,
    pub min_switch_alts: Option<u32>,
    pub tool: Option<String>,
    pub tool_args: Vec<String>,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            source_dir: m.get_one::<PathBuf>("source_dir").cloned(),
            output_dir: m.get_one::<PathBuf>("output_dir").cloned(),
            lib_dir: m.get_one::<PathBuf>("lib_dir").cloned(),
            includes: strings(m, "include"),
            excludes: strings(m, "exclude"),
            no_default_excludes: m.get_flag("no_default_excludes"),
            report: m.get_flag("report"),
            print_grammar: m.get_flag("print_grammar"),
            debug_codegen: m.get_flag("debug_codegen"),
            profile: m.get_flag("profile"),
            nfa: m.get_flag("nfa"),
            dfa: m.get_flag("dfa"),
            trace: m.get_flag("trace"),
            message_format: m
                .get_one::<String>("message_format")
                .and_then(|name| MessageFormat::from_name(name)),
            quiet_tool: m.get_flag("quiet_tool"),
            max_switch_case_labels: m.get_one::<u32>("max_switch_case_labels").copied(),
            min_switch_alts: m.get_one::<u32>("min_switch_alts").copied(),
            tool: m.get_one::<String>("tool").cloned(),
            tool_args: strings(m, "tool_arg"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            config: p.config,
            overrides: ConfigOverrides {
                source_dir: p.source_dir,
                output_dir: p.output_dir,
                lib_dir: p.lib_dir,
                includes: p.includes,
                excludes: p.excludes,
                no_default_excludes: p.no_default_excludes,
                report: p.report,
                print_grammar: p.print_grammar,
                debug: p.debug_codegen,
                profile: p.profile,
                nfa: p.nfa,
                dfa: p.dfa,
                trace: p.trace,
                message_format: p.message_format,
                quiet_tool: p.quiet_tool,
                max_switch_case_labels: p.max_switch_case_labels,
                min_switch_alts: p.min_switch_alts,
                tool: p.tool,
                tool_args: p.tool_args,
            },
        }
    }
}

pub struct ScanParams {
    pub config: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub no_default_excludes: bool,
    pub json: bool,
}

impl ScanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            source_dir: m.get_one::<PathBuf>("source_dir").cloned(),
            includes: strings(m, "include"),
            excludes: strings(m, "exclude"),
            no_default_excludes: m.get_flag("no_default_excludes"),
            json: m.get_flag("json"),
        }
    }
}

impl From<ScanParams> for ScanArgs {
    fn from(p: ScanParams) -> Self {
        Self {
            config: p.config,
            overrides: ConfigOverrides {
                source_dir: p.source_dir,
                includes: p.includes,
                excludes: p.excludes,
                no_default_excludes: p.no_default_excludes,
                ..ConfigOverrides::default()
            },
            json: p.json,
        }
    }
}

/// Collect a repeatable string flag, keeping command-line order.
fn strings(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
