use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;

use crate::config::{BuildConfig, ConfigError, MessageFormat, ToolCommand, ToolOptions};

#[test]
fn option_defaults() {
    let opts = ToolOptions::default();

    assert!(!opts.report);
    assert!(!opts.print_grammar);
    assert!(!opts.debug);
    assert!(!opts.profile);
    assert!(!opts.nfa);
    assert!(!opts.dfa);
    assert!(!opts.trace);
    assert!(opts.verbose);
    assert_eq!(opts.message_format, MessageFormat::Antlr);
    assert_eq!(opts.max_switch_case_labels, 300);
    assert_eq!(opts.min_switch_alts, 3);
}

#[test]
fn config_defaults() {
    let config = BuildConfig::default();

    assert_eq!(config.source_dir, PathBuf::from("src/grammars"));
    assert_eq!(config.lib_dir(), Path::new("src/grammars").join("imports"));
    assert!(config.includes.is_empty());
    assert!(config.excludes.is_empty());
    assert!(config.default_excludes);
    assert_eq!(config.tool, ToolCommand::default());
    assert_eq!(config.tool.program, "antlr3");
}

#[test]
fn empty_json_is_all_defaults() {
    assert_eq!(BuildConfig::from_json("{}").unwrap(), BuildConfig::default());
}

#[test]
fn full_json() {
    let config = BuildConfig::from_json(indoc! {r#"
        {
          "source-dir": "grammar",
          "output-dir": "/tmp/out",
          "lib-dir": "shared",
          "includes": ["**/*.g", "**/*.g3"],
          "excludes": ["wip/**"],
          "default-excludes": false,
          "options": {
            "report": true,
            "message-format": "vs2005",
            "max-switch-case-labels": 100
          },
          "tool": { "program": "java", "args": ["-jar", "antlr-3.5.3-complete.jar"] }
        }
    "#})
    .unwrap();

    assert_eq!(config.source_dir, PathBuf::from("grammar"));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(config.lib_dir(), PathBuf::from("shared"));
    assert_eq!(config.includes.len(), 2);
    assert!(config.excludes.contains("wip/**"));
    assert!(!config.default_excludes);
    assert!(config.options.report);
    assert!(config.options.verbose);
    assert_eq!(config.options.message_format, MessageFormat::Vs2005);
    assert_eq!(config.options.max_switch_case_labels, 100);
    assert_eq!(config.options.min_switch_alts, 3);
    assert_eq!(config.tool.program, "java");
    assert_eq!(config.tool.args, ["-jar", "antlr-3.5.3-complete.jar"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = BuildConfig::from_json(r#"{ "sourceDirectory": "x" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("unknown field `sourceDirectory`"));

    let err = BuildConfig::from_json(r#"{ "options": { "verbos": true } }"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `verbos`"));
}

#[test]
fn unknown_message_format_is_rejected() {
    let err = BuildConfig::from_json(r#"{ "options": { "message-format": "msvc" } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("unknown variant `msvc`"));
}

#[test]
fn message_format_names() {
    for format in [MessageFormat::Antlr, MessageFormat::Gnu, MessageFormat::Vs2005] {
        assert_eq!(MessageFormat::from_name(format.as_str()), Some(format));
    }
    assert_eq!(MessageFormat::from_name("ANTLR"), None);
}

#[test]
fn load_resolves_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grist.json");
    fs::write(
        &path,
        r#"{ "source-dir": "src/grammars", "output-dir": "/abs/out" }"#,
    )
    .unwrap();

    let config = BuildConfig::load(&path).unwrap();

    assert_eq!(config.source_dir, dir.path().join("src/grammars"));
    assert_eq!(config.output_dir, PathBuf::from("/abs/out"));
    assert_eq!(
        config.lib_dir(),
        dir.path().join("src/grammars").join("imports")
    );
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = BuildConfig::load(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read config"));
}

#[test]
fn rooted_at_keeps_absolute_dirs() {
    let config = BuildConfig {
        lib_dir: Some(PathBuf::from("/opt/grammars/lib")),
        ..BuildConfig::new("g", "/out")
    }
    .rooted_at(Path::new("/work"));

    assert_eq!(config.source_dir, PathBuf::from("/work/g"));
    assert_eq!(config.output_dir, PathBuf::from("/out"));
    assert_eq!(config.lib_dir(), PathBuf::from("/opt/grammars/lib"));
}

#[test]
fn absolute_resolves_against_current_dir() {
    let cwd = std::env::current_dir().unwrap();
    let config = BuildConfig::default().absolute().unwrap();

    assert_eq!(config.source_dir, cwd.join("src/grammars"));
    assert_eq!(
        config.output_dir,
        cwd.join("target/generated-sources/grammars")
    );
    assert_eq!(config.lib_dir, None);
    assert_eq!(config.lib_dir(), cwd.join("src/grammars").join("imports"));
}

#[test]
fn absolute_keeps_absolute_dirs() {
    let config = BuildConfig {
        lib_dir: Some(PathBuf::from("shared")),
        ..BuildConfig::new("/g", "/out")
    }
    .absolute()
    .unwrap();

    assert_eq!(config.source_dir, PathBuf::from("/g"));
    assert_eq!(config.output_dir, PathBuf::from("/out"));
    assert!(config.lib_dir.unwrap().is_absolute());
}
