//! Hand-off of generated sources to the enclosing build.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Environment variable `CargoHost` exports by default.
pub const DEFAULT_OUT_DIR_VAR: &str = "GRIST_OUT_DIR";

/// Receives the output directory after a successful pass.
pub trait BuildHost {
    /// Register `dir` as a root of generated, compilable sources.
    fn add_source_root(&mut self, dir: &Path);
}

/// Ignores registration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl BuildHost for NoopHost {
    fn add_source_root(&mut self, _dir: &Path) {}
}

/// Collects registered roots.
impl BuildHost for Vec<PathBuf> {
    fn add_source_root(&mut self, dir: &Path) {
        self.push(dir.to_path_buf());
    }
}

/// Speaks the Cargo build-script protocol.
///
/// A registered root becomes `cargo::rustc-env=<VAR>=<dir>`, so crate code
/// can pull generated files in with `include!(concat!(env!("GRIST_OUT_DIR"), "/Expr.rs"))`.
#[derive(Debug)]
pub struct CargoHost<W: Write = io::Stdout> {
    env_var: String,
    out: W,
}

impl CargoHost {
    pub fn new(env_var: impl Into<String>) -> Self {
        Self::with_writer(env_var, io::stdout())
    }
}

impl Default for CargoHost {
    fn default() -> Self {
        Self::new(DEFAULT_OUT_DIR_VAR)
    }
}

impl<W: Write> CargoHost<W> {
    pub fn with_writer(env_var: impl Into<String>, out: W) -> Self {
        Self {
            env_var: env_var.into(),
            out,
        }
    }

    /// Ask Cargo to rerun the build script when `path` changes.
    pub fn rerun_if_changed(&mut self, path: &Path) {
        self.directive(&format!("rerun-if-changed={}", path.display()));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn directive(&mut self, directive: &str) {
        if let Err(e) = writeln!(self.out, "cargo::{directive}") {
            log::warn!("failed to write cargo directive '{directive}': {e}");
        }
    }
}

impl<W: Write> BuildHost for CargoHost<W> {
    fn add_source_root(&mut self, dir: &Path) {
        let directive = format!("rustc-env={}={}", self.env_var, dir.display());
        self.directive(&directive);
    }
}
