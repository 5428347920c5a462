//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Params convert into the overrides the commands apply
//! 3. Help text lists the visible flags

use std::path::PathBuf;

use grist_lib::MessageFormat;

use super::*;
use crate::cli::commands::{build_command, scan_command};
use crate::commands::build::BuildArgs;
use crate::commands::scan::ScanArgs;

#[test]
fn build_without_flags_overrides_nothing() {
    let m = build_command().try_get_matches_from(["build"]).unwrap();
    let args: BuildArgs = BuildParams::from_matches(&m).into();

    assert_eq!(args.config, None);
    assert_eq!(args.overrides, Default::default());
}

#[test]
fn build_extracts_dirs_and_patterns() {
    let m = build_command()
        .try_get_matches_from([
            "build",
            "-c",
            "grist.json",
            "--source-dir",
            "grammar",
            "--output-dir",
            "gen",
            "--lib-dir",
            "shared",
            "-i",
            "**/*.g",
            "-i",
            "**/*.g3",
            "-e",
            "wip/**",
            "--no-default-excludes",
        ])
        .unwrap();
    let params = BuildParams::from_matches(&m);

    assert_eq!(params.config, Some(PathBuf::from("grist.json")));
    assert_eq!(params.source_dir, Some(PathBuf::from("grammar")));
    assert_eq!(params.output_dir, Some(PathBuf::from("gen")));
    assert_eq!(params.lib_dir, Some(PathBuf::from("shared")));
    assert_eq!(params.includes, ["**/*.g", "**/*.g3"]);
    assert_eq!(params.excludes, ["wip/**"]);
    assert!(params.no_default_excludes);
}

#[test]
fn build_extracts_tool_options() {
    let m = build_command()
        .try_get_matches_from([
            "build",
            "--report",
            "--print-grammar",
            "--debug-codegen",
            "--profile",
            "--nfa",
            "--dfa",
            "--trace",
            "--message-format",
            "vs2005",
            "--quiet-tool",
            "--max-switch-case-labels",
            "120",
            "--min-switch-alts",
            "4",
            "--tool",
            "java",
            "--tool-arg",
            "-jar",
            "--tool-arg",
            "antlr.jar",
        ])
        .unwrap();
    let args: BuildArgs = BuildParams::from_matches(&m).into();
    let o = &args.overrides;

    assert!(o.report && o.print_grammar && o.debug && o.profile);
    assert!(o.nfa && o.dfa && o.trace && o.quiet_tool);
    assert_eq!(o.message_format, Some(MessageFormat::Vs2005));
    assert_eq!(o.max_switch_case_labels, Some(120));
    assert_eq!(o.min_switch_alts, Some(4));
    assert_eq!(o.tool.as_deref(), Some("java"));
    assert_eq!(o.tool_args, ["-jar", "antlr.jar"]);
}

#[test]
fn build_rejects_unknown_message_format() {
    let result = build_command().try_get_matches_from(["build", "--message-format", "msvc"]);
    assert!(result.is_err());
}

#[test]
fn build_rejects_non_numeric_switch_limit() {
    let result =
        build_command().try_get_matches_from(["build", "--max-switch-case-labels", "many"]);
    assert!(result.is_err());
}

#[test]
fn scan_extracts_discovery_flags() {
    let m = scan_command()
        .try_get_matches_from(["scan", "--source-dir", "g", "-e", "a/**", "-e", "b/**", "--json"])
        .unwrap();
    let args: ScanArgs = ScanParams::from_matches(&m).into();

    assert!(args.json);
    assert_eq!(args.overrides.source_dir, Some(PathBuf::from("g")));
    assert_eq!(args.overrides.excludes, ["a/**", "b/**"]);
    assert_eq!(args.overrides.output_dir, None);
    assert!(!args.overrides.report);
}

#[test]
fn scan_does_not_take_tool_flags() {
    let result = scan_command().try_get_matches_from(["scan", "--report"]);
    assert!(result.is_err());
}

#[test]
fn global_verbosity_after_subcommand() {
    let m = build_cli()
        .try_get_matches_from(["grist", "build", "-vv"])
        .unwrap();
    let global = GlobalParams::from_matches(&m);

    assert_eq!(global.verbosity, 2);
    assert!(!global.quiet);
}

#[test]
fn quiet_conflicts_with_verbose() {
    let result = build_cli().try_get_matches_from(["grist", "-q", "-v", "scan"]);
    assert!(result.is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["grist"]).is_err());
}

#[test]
fn build_help_lists_tool_flags() {
    let help = build_command().render_help().to_string();

    for flag in ["--source-dir", "--lib-dir", "--no-default-excludes", "--message-format"] {
        assert!(help.contains(flag), "missing {flag} in:\n{help}");
    }
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn verbosity_flags_pick_log_level() {
    use log::LevelFilter;

    use crate::logger::level_for;

    let level = |argv: &[&str]| {
        let m = build_cli().try_get_matches_from(argv).unwrap();
        let global = GlobalParams::from_matches(&m);
        level_for(global.verbosity, global.quiet)
    };

    assert_eq!(level(&["grist", "scan"]), LevelFilter::Warn);
    assert_eq!(level(&["grist", "-v", "scan"]), LevelFilter::Info);
    assert_eq!(level(&["grist", "build", "-vv"]), LevelFilter::Debug);
    assert_eq!(level(&["grist", "-vvv", "build"]), LevelFilter::Trace);
    assert_eq!(level(&["grist", "scan", "-q"]), LevelFilter::Error);
}
