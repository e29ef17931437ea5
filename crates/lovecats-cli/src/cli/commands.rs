//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("lovecats")
        .about("LuaCATS annotations for the LÖVE API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(quiet_arg())
        .subcommand(generate_command())
        .subcommand(debug_command())
}

/// Write one annotation file per module.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate annotation files from an API description")
        .override_usage(
            "\
  lovecats generate <API> [-o <DIR>]
  lovecats generate - < api.json",
        )
        .after_help(
            r#"EXAMPLES:
  lovecats generate api.json                   # writes ./library/love*.lua
  lovecats generate api.json -o meta           # custom output directory
  lovecats generate api.json --skip-malformed  # warn on functions without variants"#,
        )
        .arg(api_path_arg())
        .arg(output_arg())
        .arg(namespace_arg())
        .arg(doc_url_arg())
        .arg(skip_malformed_arg())
}

/// Show how type names were classified.
pub fn debug_command() -> Command {
    Command::new("debug")
        .about("Show known, defined and descriptive type names")
        .after_help(
            r#"EXAMPLES:
  lovecats debug api.json           # colored listing
  lovecats debug api.json --json    # machine-readable report"#,
        )
        .arg(api_path_arg())
        .arg(namespace_arg())
        .arg(json_arg())
        .arg(color_arg())
}
