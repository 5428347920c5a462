use std::path::{Path, PathBuf};

use crate::config::{MessageFormat, ToolCommand, ToolOptions};
use crate::host::{BuildHost, CargoHost};
use crate::Build;

fn dirs() -> (PathBuf, PathBuf) {
    (
        PathBuf::from("/work/my-parser"),
        PathBuf::from("/work/target/debug/build/my-parser-1234/out"),
    )
}

#[test]
fn defaults_follow_cargo_layout() {
    let (manifest, out) = dirs();
    let config = Build::new().config_for(&manifest, &out);

    assert_eq!(config.source_dir, manifest.join("src").join("grammars"));
    assert_eq!(config.output_dir, out.join("grammars"));
    assert_eq!(
        config.lib_dir(),
        manifest.join("src").join("grammars").join("imports")
    );
    assert!(config.includes.is_empty());
    assert!(config.default_excludes);
}

#[test]
fn setters_resolve_against_manifest() {
    let (manifest, out) = dirs();
    let config = Build::new()
        .source_dir("grammar")
        .lib_dir("/usr/share/antlr3/lib")
        .include("**/*.g")
        .exclude("wip/**")
        .exclude("wip/**")
        .default_excludes(false)
        .options(ToolOptions {
            message_format: MessageFormat::Gnu,
            ..ToolOptions::default()
        })
        .tool(ToolCommand {
            program: "java".to_owned(),
            args: vec!["org.antlr.Tool".to_owned()],
        })
        .config_for(&manifest, &out);

    assert_eq!(config.source_dir, manifest.join("grammar"));
    assert_eq!(config.output_dir, out.join("grammars"));
    assert_eq!(config.lib_dir(), Path::new("/usr/share/antlr3/lib"));
    assert_eq!(config.includes.len(), 1);
    assert_eq!(config.excludes.len(), 1);
    assert!(!config.default_excludes);
    assert_eq!(config.options.message_format, MessageFormat::Gnu);
    assert_eq!(config.tool.program, "java");
}

#[test]
fn explicit_output_dir() {
    let (manifest, out) = dirs();
    let config = Build::new()
        .output_dir("generated")
        .config_for(&manifest, &out);

    assert_eq!(config.output_dir, manifest.join("generated"));
}

#[test]
fn cargo_host_emits_directives() {
    let mut host = CargoHost::with_writer("EXPR_GRAMMAR_DIR", Vec::new());
    host.rerun_if_changed(Path::new("/work/my-parser/src/grammars"));
    host.add_source_root(Path::new("/work/out/grammars"));

    let written = String::from_utf8(host.into_inner()).unwrap();
    insta::assert_snapshot!(written, @r"
    cargo::rerun-if-changed=/work/my-parser/src/grammars
    cargo::rustc-env=EXPR_GRAMMAR_DIR=/work/out/grammars
    ");
}
