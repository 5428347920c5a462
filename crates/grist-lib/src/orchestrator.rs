//! One build pass: discover, relativize, run once, decide.
//!
//! The pass is strictly sequential. Discovery completes before any grammar
//! is added to the batch, and the engine runs exactly once with the whole
//! batch so it can resolve imports and token vocabularies across files.

use std::fs;
use std::path::PathBuf;

use grist_core::{RelativeGrammarPath, relativize};

use crate::config::BuildConfig;
use crate::host::BuildHost;
use crate::scan::Scanner;
use crate::tool::{Batch, Engine, EngineBinding, Toolchain};
use crate::{Error, Result};

/// Successful result of a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The source directory does not exist. Not an error: a module may
    /// simply have no grammars.
    NoSources { source_dir: PathBuf },
    /// The source directory exists but nothing matched the filters.
    NoGrammars,
    /// Every grammar compiled without errors.
    Compiled {
        grammars: Vec<RelativeGrammarPath>,
        warnings: usize,
    },
}

impl Outcome {
    pub fn grammar_count(&self) -> usize {
        match self {
            Outcome::Compiled { grammars, .. } => grammars.len(),
            Outcome::NoSources { .. } | Outcome::NoGrammars => 0,
        }
    }
}

/// Run one pass over `config`.
///
/// Directories are made absolute first. On success the output directory is
/// registered with `host`, except when the source directory is missing (or
/// is not a directory). Grammar errors reported by the tool
/// become `Error::GrammarErrors` and nothing is registered.
pub fn run<T, H>(config: &BuildConfig, toolchain: &T, host: &mut H) -> Result<Outcome>
where
    T: Toolchain,
    H: BuildHost + ?Sized,
{
    let config = &config.absolute()?;
    log_parameters(config);

    fs::create_dir_all(&config.output_dir).map_err(|source| Error::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let binding = EngineBinding::from_config(config);
    log::debug!(
        "output directory base will be {}",
        binding.output_dir.display()
    );
    let mut engine = toolchain.create(&binding).map_err(|e| {
        log::error!("the attempt to create the grammar tool failed: {e}");
        Error::ToolUnavailable(e)
    })?;

    if !config.source_dir.is_dir() {
        log::info!(
            "no grammars to compile in {}",
            config.source_dir.display()
        );
        return Ok(Outcome::NoSources {
            source_dir: config.source_dir.clone(),
        });
    }
    log::info!(
        "processing source directory {}",
        config.source_dir.display()
    );

    let batch = collect_batch(config)?;
    if batch.grammars.is_empty() {
        log::info!("no grammars to process");
        host.add_source_root(&config.output_dir);
        return Ok(Outcome::NoGrammars);
    }

    let report = engine.process(&batch).map_err(Error::ToolRun)?;
    if !report.is_success() {
        return Err(Error::GrammarErrors {
            count: report.errors,
        });
    }

    host.add_source_root(&config.output_dir);
    Ok(Outcome::Compiled {
        grammars: batch.grammars,
        warnings: report.warnings,
    })
}

/// Scan the source directory and build the make-mode batch.
pub fn collect_batch(config: &BuildConfig) -> Result<Batch> {
    let scanner = Scanner::from_config(config);
    let files = scanner.scan(&config.source_dir)?;

    let grammars = files
        .iter()
        .map(|file| {
            log::debug!("grammar file '{}' detected", file.display());
            let relative = relativize(&config.source_dir, file);
            log::debug!("  ... relative path is: {relative}");
            relative
        })
        .collect();

    Ok(Batch {
        input_dir: config.source_dir.clone(),
        make: true,
        grammars,
    })
}

fn log_parameters(config: &BuildConfig) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    for pattern in config.excludes.iter() {
        log::debug!("exclude: {pattern}");
    }
    for pattern in config.includes.iter() {
        log::debug!("include: {pattern}");
    }
    log::debug!("source: {}", config.source_dir.display());
    log::debug!("output: {}", config.output_dir.display());
    log::debug!("library: {}", config.lib_dir().display());

    let opts = &config.options;
    log::debug!("report                 : {}", opts.report);
    log::debug!("print-grammar          : {}", opts.print_grammar);
    log::debug!("debug                  : {}", opts.debug);
    log::debug!("profile                : {}", opts.profile);
    log::debug!("nfa                    : {}", opts.nfa);
    log::debug!("dfa                    : {}", opts.dfa);
    log::debug!("trace                  : {}", opts.trace);
    log::debug!("message-format         : {}", opts.message_format.as_str());
    log::debug!("max-switch-case-labels : {}", opts.max_switch_case_labels);
    log::debug!("min-switch-alts        : {}", opts.min_switch_alts);
    log::debug!("verbose                : {}", opts.verbose);
}
