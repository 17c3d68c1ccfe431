//! intent-schema - interactively build and extend an intent schema file

use anyhow::{Context, Result};
use clap::Parser;
use schema_core::Config;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::cmd_build;
use logging::init_cli_logging;

#[derive(Parser)]
#[command(name = "intent-schema")]
#[command(about = "Interactively build an intent schema (intents and their typed slots)")]
#[command(after_help = "\
EXAMPLES:
  intent-schema -i intent_schema.json         # Append intents to an existing schema
  intent-schema -i intent_schema.json -o      # Start over with an empty schema

CONFIG LOCATIONS:
  Project: .intent-schema.toml
  User:    ~/.config/intent-schema/config.toml")]
struct Cli {
  /// Schema file to read, extend and write
  #[arg(short = 'i', long = "intent_schema", visible_alias = "intent-schema", value_name = "FILE")]
  intent_schema: PathBuf,

  /// Start from an empty schema instead of appending to the existing file
  #[arg(short, long)]
  overwrite: bool,

  /// Config file (default: project, then user config)
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => Config::from_file(path).context("Failed to load config")?,
    None => {
      let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
      Config::load_for_project(&cwd)
    }
  };

  init_cli_logging(&config.logging.level);

  cmd_build(&cli.intent_schema, cli.overwrite, &config)
}
