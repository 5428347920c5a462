//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! `build` and `scan` share the discovery arguments; only `build` takes the
//! tool options.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON config file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON config file (relative paths resolve against its directory)")
}

/// Grammar source root (--source-dir).
pub fn source_dir_arg() -> Arg {
    Arg::new("source_dir")
        .long("source-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar source root [default: src/grammars]")
}

/// Generated source root (--output-dir).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .long("output-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Generated source root [default: target/generated-sources/grammars]")
}

/// Imported grammars and token vocabularies (--lib-dir).
pub fn lib_dir_arg() -> Arg {
    Arg::new("lib_dir")
        .long("lib-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Imported grammars and .tokens files [default: <source-dir>/imports]")
}

/// Include pattern (-i/--include), repeatable.
pub fn include_arg() -> Arg {
    Arg::new("include")
        .short('i')
        .long("include")
        .value_name("PATTERN")
        .action(ArgAction::Append)
        .help("Include pattern relative to the source root [default: **/*.g]")
}

/// Exclude pattern (-e/--exclude), repeatable.
pub fn exclude_arg() -> Arg {
    Arg::new("exclude")
        .short('e')
        .long("exclude")
        .value_name("PATTERN")
        .action(ArgAction::Append)
        .help("Exclude pattern relative to the source root (imports/** is always excluded)")
}

/// Don't skip VCS metadata and editor backups (--no-default-excludes).
pub fn no_default_excludes_arg() -> Arg {
    Arg::new("no_default_excludes")
        .long("no-default-excludes")
        .action(ArgAction::SetTrue)
        .help("Don't skip VCS metadata and editor backup files")
}

/// Boolean tool flag, e.g. `--report`.
fn tool_flag(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(long).action(ArgAction::SetTrue).help(help)
}

pub fn report_arg() -> Arg {
    tool_flag("report", "report", "Have the tool print a grammar report")
}

pub fn print_grammar_arg() -> Arg {
    tool_flag("print_grammar", "print-grammar", "Print grammars without actions")
}

pub fn debug_codegen_arg() -> Arg {
    tool_flag(
        "debug_codegen",
        "debug-codegen",
        "Generate parsers that emit debugging events",
    )
}

pub fn profile_arg() -> Arg {
    tool_flag("profile", "profile", "Generate parsers that compute profiling data")
}

pub fn nfa_arg() -> Arg {
    tool_flag("nfa", "nfa", "Emit NFA diagrams")
}

pub fn dfa_arg() -> Arg {
    tool_flag("dfa", "dfa", "Emit DFA diagrams")
}

pub fn trace_arg() -> Arg {
    tool_flag("trace", "trace", "Generate parsers that trace rule entry and exit")
}

/// Tool diagnostic format (--message-format).
pub fn message_format_arg() -> Arg {
    Arg::new("message_format")
        .long("message-format")
        .value_name("FORMAT")
        .value_parser(["antlr", "gnu", "vs2005"])
        .help("Diagnostic format used by the tool [default: antlr]")
}

/// Turn off the tool's own verbose output (--quiet-tool).
pub fn quiet_tool_arg() -> Arg {
    tool_flag("quiet_tool", "quiet-tool", "Don't pass -verbose to the tool")
}

pub fn max_switch_case_labels_arg() -> Arg {
    Arg::new("max_switch_case_labels")
        .long("max-switch-case-labels")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum case labels in a generated switch [default: 300]")
}

pub fn min_switch_alts_arg() -> Arg {
    Arg::new("min_switch_alts")
        .long("min-switch-alts")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Minimum alternatives before a switch is generated [default: 3]")
}

/// Grammar tool program (--tool).
pub fn tool_arg() -> Arg {
    Arg::new("tool")
        .long("tool")
        .value_name("PROGRAM")
        .help("Grammar tool to run [default: antlr3]")
}

/// Extra tool argument placed before the generated ones (--tool-arg), repeatable.
pub fn tool_args_arg() -> Arg {
    Arg::new("tool_arg")
        .long("tool-arg")
        .value_name("ARG")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Argument passed to the tool before the generated ones")
}

/// Print the scan result as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print discovered grammars as JSON")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}

/// Only report errors (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .global(true)
        .conflicts_with("verbose")
        .help("Only report errors")
}
