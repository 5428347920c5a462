//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! `build` and `scan` share discovery flags so a `scan` invocation can be
//! turned into a `build` by changing the subcommand name.

use clap::Command;

use super::args::*;

/// Add the flags that decide which grammars are found.
fn with_discovery_args(cmd: Command) -> Command {
    cmd.arg(config_arg())
        .arg(source_dir_arg())
        .arg(include_arg())
        .arg(exclude_arg())
        .arg(no_default_excludes_arg())
}

/// Add the flags forwarded to the grammar tool.
fn with_tool_args(cmd: Command) -> Command {
    cmd.arg(report_arg())
        .arg(print_grammar_arg())
        .arg(debug_codegen_arg())
        .arg(profile_arg())
        .arg(nfa_arg())
        .arg(dfa_arg())
        .arg(trace_arg())
        .arg(message_format_arg())
        .arg(quiet_tool_arg())
        .arg(max_switch_case_labels_arg())
        .arg(min_switch_alts_arg())
        .arg(tool_arg())
        .arg(tool_args_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("grist")
        .about("Batch grammar compilation with a mirrored output layout")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .arg(quiet_arg())
        .subcommand(build_command())
        .subcommand(scan_command())
}

/// Compile every discovered grammar in one tool run.
pub fn build_command() -> Command {
    let cmd = Command::new("build")
        .about("Compile all grammars under the source root")
        .override_usage(
            "\
  grist build [OPTIONS]
  grist build -c grist.json [OPTIONS]",
        )
        .after_help(
            r#"EXAMPLES:
  grist build                                   # src/grammars -> target/generated-sources/grammars
  grist build --source-dir grammar -e 'wip/**'  # skip work in progress
  grist build -c grist.json --report            # config file plus an override
  grist build --tool java --tool-arg -jar --tool-arg antlr-3.5.3-complete.jar

Grammars under <source-dir>/imports are never compiled directly; they are
found by the tool through --lib-dir. On success the output root is printed."#,
        )
        .arg(output_dir_arg())
        .arg(lib_dir_arg());

    with_tool_args(with_discovery_args(cmd))
}

/// List the grammars a build would compile.
pub fn scan_command() -> Command {
    let cmd = Command::new("scan")
        .about("List the grammars a build would compile")
        .after_help(
            r#"EXAMPLES:
  grist scan                          # one relative path per line
  grist scan -i '**/*.g3' --json      # other extension, JSON output"#,
        )
        .arg(json_arg());

    with_discovery_args(cmd)
}
