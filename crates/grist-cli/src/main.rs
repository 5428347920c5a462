mod cli;
mod commands;
mod logger;
mod util;


use cli::{BuildParams, GlobalParams, ScanParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let global = GlobalParams::from_matches(&matches);
    logger::init(global.verbosity, global.quiet);

    match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        Some(("scan", m)) => {
            let params = ScanParams::from_matches(m);
            commands::scan::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
