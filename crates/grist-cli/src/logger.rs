//! Stderr logging for the `log` facade.
//!
//! The library logs its progress and forwards tool diagnostics through
//! `log`. Default level is `warn` so a clean build is silent apart from the
//! output root on stdout.

use std::io::Write;

use log::{Level, LevelFilter};

pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8, quiet: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbosity, quiet))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        })
        .try_init();
}
