use std::path::PathBuf;

use lovecats_compiler::{Config, generate};

use super::api_loader::load_api;

pub struct GenerateArgs {
    pub api_path: PathBuf,
    pub output: PathBuf,
    pub namespace: String,
    pub doc_url: String,
    pub skip_malformed: bool,
}

pub fn run(args: GenerateArgs) {
    let api = load_api(&args.api_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let config = Config::new()
        .namespace(args.namespace)
        .doc_base_url(args.doc_url)
        .skip_malformed(args.skip_malformed);

    match generate(&api, &args.output, &config) {
        Ok(written) => {
            tracing::info!(
                "generated {} files in {}",
                written.len(),
                args.output.display()
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
