use std::path::PathBuf;

use lovecats_compiler::{Config, debug_summary};
use lovecats_core::Colors;

use super::api_loader::load_api;

pub struct DebugArgs {
    pub api_path: PathBuf,
    pub namespace: String,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: DebugArgs) {
    let api = load_api(&args.api_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let config = Config::new().namespace(args.namespace);
    let summary = debug_summary(&api, &config);

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", summary.render(Colors::new(args.color)));
}
