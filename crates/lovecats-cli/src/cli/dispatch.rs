//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::debug::DebugArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub api_path: PathBuf,
    pub output: PathBuf,
    pub namespace: String,
    pub doc_url: String,
    pub skip_malformed: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            api_path: required(m, "api_path"),
            output: required(m, "output"),
            namespace: required(m, "namespace"),
            doc_url: required(m, "doc_url"),
            skip_malformed: m.get_flag("skip_malformed"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            api_path: p.api_path,
            output: p.output,
            namespace: p.namespace,
            doc_url: p.doc_url,
            skip_malformed: p.skip_malformed,
        }
    }
}

pub struct DebugParams {
    pub api_path: PathBuf,
    pub namespace: String,
    pub json: bool,
    pub color: ColorChoice,
}

impl DebugParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            api_path: required(m, "api_path"),
            namespace: required(m, "namespace"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<DebugParams> for DebugArgs {
    fn from(p: DebugParams) -> Self {
        Self {
            api_path: p.api_path,
            namespace: p.namespace,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Required or defaulted args are always present after clap validation.
fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> T {
    m.get_one::<T>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap guarantees `{id}`"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
