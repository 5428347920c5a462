//! Engine backed by an external ANTLR 3 style command.
//!
//! The command line is `<program> <prefix args> <tool flags> <grammars>`, run
//! from the batch's input directory:
//!
//! | binding / option          | flag                          |
//! |---------------------------|-------------------------------|
//! | output dir (relative)     | `-o <dir>`                    |
//! | output dir (flat)         | `-fo <dir>`                   |
//! | lib dir                   | `-lib <dir>`                  |
//! | report, print_grammar ... | `-report`, `-print`, ...      |
//! | message_format            | `-message-format <name>`      |
//! | switch thresholds         | `-Xmaxswitchcaselabels <n>`, `-Xminswitchalts <n>` |
//! | batch.make                | `-make`                       |

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{Batch, Engine, EngineBinding, EngineError, RunReport, Toolchain};
use crate::config::ToolCommand;

/// Creates `CommandEngine`s for a program found on disk or on `PATH`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandToolchain {
    program: String,
    args: Vec<String>,
}

impl Default for CommandToolchain {
    fn default() -> Self {
        Self::from_command(&ToolCommand::default())
    }
}

impl CommandToolchain {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn from_command(command: &ToolCommand) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args.clone(),
        }
    }

    /// Append an argument placed before the generated flags.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Toolchain for CommandToolchain {
    type Engine = CommandEngine;

    fn create(&self, binding: &EngineBinding) -> Result<CommandEngine, EngineError> {
        let program = resolve_program(&self.program).ok_or_else(|| EngineError::NotFound {
            program: self.program.clone(),
        })?;
        log::debug!("grammar tool resolved to {}", program.display());

        Ok(CommandEngine {
            program,
            prefix: self.args.clone(),
            binding: binding.clone(),
        })
    }
}

/// A resolved tool program bound to one pass.
#[derive(Debug)]
pub struct CommandEngine {
    program: PathBuf,
    prefix: Vec<String>,
    binding: EngineBinding,
}

impl CommandEngine {
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Engine for CommandEngine {
    fn process(&mut self, batch: &Batch) -> Result<RunReport, EngineError> {
        let args = tool_args(&self.binding, batch);
        log::debug!(
            "running {} {} {}",
            self.program.display(),
            self.prefix.join(" "),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.program)
            .args(&self.prefix)
            .args(&args)
            .current_dir(&batch.input_dir)
            .output()
            .map_err(|source| EngineError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let mut report = RunReport::default();
        tally_output(&String::from_utf8_lossy(&output.stdout), &mut report);
        tally_output(&String::from_utf8_lossy(&output.stderr), &mut report);

        if !output.status.success() && report.errors == 0 {
            return Err(EngineError::Failed {
                program: self.program.display().to_string(),
                status: output.status,
            });
        }

        Ok(report)
    }
}

/// Generated command-line arguments for one batch.
pub fn tool_args(binding: &EngineBinding, batch: &Batch) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    let output_flag = if binding.force_relative_output {
        "-o"
    } else {
        "-fo"
    };
    args.push(output_flag.into());
    args.push(binding.output_dir.clone().into());
    args.push("-lib".into());
    args.push(binding.lib_dir.clone().into());

    let opts = &binding.options;
    let flags = [
        (opts.report, "-report"),
        (opts.print_grammar, "-print"),
        (opts.debug, "-debug"),
        (opts.profile, "-profile"),
        (opts.nfa, "-nfa"),
        (opts.dfa, "-dfa"),
        (opts.trace, "-trace"),
        (opts.verbose, "-verbose"),
    ];
    for (enabled, flag) in flags {
        if enabled {
            args.push(flag.into());
        }
    }

    args.push("-message-format".into());
    args.push(opts.message_format.as_str().into());
    args.push("-Xmaxswitchcaselabels".into());
    args.push(opts.max_switch_case_labels.to_string().into());
    args.push("-Xminswitchalts".into());
    args.push(opts.min_switch_alts.to_string().into());

    if batch.make {
        args.push("-make".into());
    }

    for grammar in &batch.grammars {
        args.push(grammar.to_path_buf().into());
    }

    args
}

/// How a line of tool output counts towards the tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Error,
    Warning,
    Info,
}

/// Classify a tool output line in any of the supported message formats.
///
/// - antlr: `error(100): T.g:3:4: ...`
/// - gnu: `T.g:3:4: error 100: ...`
/// - vs2005: `T.g(3,4) : error 100: ...`
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim_start().to_ascii_lowercase();
    let leads_with = |word: &str| line.starts_with(&format!("{word}("));
    let tagged =
        |word: &str| line.contains(&format!(": {word} ")) || line.contains(&format!(": {word}:"));

    // Leading tags first: message text after them may mention either word.
    // A bare `Error:` prefix is the JVM launcher, not a grammar diagnostic.
    if leads_with("error") {
        LineKind::Error
    } else if leads_with("warning") {
        LineKind::Warning
    } else if tagged("error") {
        LineKind::Error
    } else if tagged("warning") {
        LineKind::Warning
    } else {
        LineKind::Info
    }
}

fn tally_output(text: &str, report: &mut RunReport) {
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match classify_line(line) {
            LineKind::Error => {
                report.errors += 1;
                log::error!("{line}");
            }
            LineKind::Warning => {
                report.warnings += 1;
                log::warn!("{line}");
            }
            LineKind::Info => log::info!("{line}"),
        }
    }
}

/// Find `program` as a path (when it has a directory part) or on `PATH`.
fn resolve_program(program: &str) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }
    which::which(program).ok()
}
