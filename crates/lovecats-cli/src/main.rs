mod cli;
mod commands;
mod logging;

use cli::{DebugParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_flag("quiet"));

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("debug", m)) => {
            let params = DebugParams::from_matches(m);
            commands::debug::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
