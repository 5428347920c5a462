use std::path::{Path, PathBuf};

use grist_lib::{BuildHost, CommandToolchain, Outcome};

use super::config_loader::{ConfigOverrides, load_config};
use crate::util::fail;

pub struct BuildArgs {
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Prints each registered source root on stdout.
struct StdoutHost;

impl BuildHost for StdoutHost {
    fn add_source_root(&mut self, dir: &Path) {
        println!("{}", dir.display());
    }
}

pub fn run(args: BuildArgs) {
    let config = load_config(args.config.as_deref(), &args.overrides).unwrap_or_else(|e| fail(&e));
    let toolchain = CommandToolchain::from_command(&config.tool);

    match grist_lib::run(&config, &toolchain, &mut StdoutHost) {
        Ok(Outcome::Compiled { grammars, warnings }) => {
            log::info!(
                "compiled {} grammar(s) with {} warning(s)",
                grammars.len(),
                warnings
            );
        }
        Ok(Outcome::NoGrammars) => log::warn!("no grammars to process"),
        Ok(Outcome::NoSources { source_dir }) => {
            log::warn!("no grammar directory at '{}'", source_dir.display());
        }
        Err(e) => fail(&e),
    }
}
