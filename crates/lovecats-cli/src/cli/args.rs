//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use lovecats_compiler::emit::{DEFAULT_DOC_BASE_URL, DEFAULT_NAMESPACE};

/// API description JSON (positional, `-` for stdin).
pub fn api_path_arg() -> Arg {
    Arg::new("api_path")
        .value_name("API")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("API description JSON file, or '-' for stdin")
}

/// Output directory (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .default_value("library")
        .value_parser(value_parser!(PathBuf))
        .help("Directory that receives one .lua file per module")
}

/// Namespace token (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .long("namespace")
        .value_name("NAME")
        .default_value(DEFAULT_NAMESPACE)
        .help("Namespace prefixed to framework type names")
}

/// Documentation base URL (--doc-url).
pub fn doc_url_arg() -> Arg {
    Arg::new("doc_url")
        .long("doc-url")
        .value_name("URL")
        .default_value(DEFAULT_DOC_BASE_URL)
        .help("Base URL of documentation links")
}

/// Skip functions without variants (--skip-malformed).
pub fn skip_malformed_arg() -> Arg {
    Arg::new("skip_malformed")
        .long("skip-malformed")
        .action(ArgAction::SetTrue)
        .help("Skip functions without variants instead of failing")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the report as JSON")
}

/// Only log warnings and errors (--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .long("quiet")
        .global(true)
        .action(ArgAction::SetTrue)
        .help("Only log warnings and errors")
}
