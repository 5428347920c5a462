use std::path::PathBuf;

use grist_core::relativize;
use grist_lib::Scanner;
use serde::Serialize;

use super::config_loader::{ConfigOverrides, load_config};
use crate::util::fail;

pub struct ScanArgs {
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Found {
    path: String,
    subdir: String,
}

pub fn run(args: ScanArgs) {
    let config = load_config(args.config.as_deref(), &args.overrides).unwrap_or_else(|e| fail(&e));

    if !config.source_dir.is_dir() {
        log::warn!("no grammar directory at '{}'", config.source_dir.display());
        if args.json {
            println!("[]");
        }
        return;
    }

    let files = Scanner::from_config(&config)
        .scan(&config.source_dir)
        .unwrap_or_else(|e| fail(&e));
    let found: Vec<Found> = files
        .iter()
        .map(|file| {
            let grammar = relativize(&config.source_dir, file);
            Found {
                path: grammar.to_string(),
                subdir: grammar.subdir().to_string_lossy().into_owned(),
            }
        })
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&found) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&e),
        }
        return;
    }
    for grammar in &found {
        println!("{}", grammar.path);
    }
}
