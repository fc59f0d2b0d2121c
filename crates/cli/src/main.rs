use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::GenerateArgs;
use output::OutputFormat;

/// webtrigger - Trigger manifest generator for web control surfaces
#[derive(Parser)]
#[command(name = "webtrigger")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate the trigger manifest for a scene dump
  Generate {
    /// Path to the scene dump (JSON)
    scene: PathBuf,

    /// Previously generated manifest to keep display names from
    #[arg(short, long)]
    prior: Option<PathBuf>,

    /// Ask for confirmation before firing any trigger
    #[arg(long)]
    confirm_dialog: bool,

    /// Project root (default: $WEBTRIGGER_PROJECT_DIR or the current directory)
    #[arg(long)]
    project: Option<PathBuf>,

    /// Output directory (default: $WEBTRIGGER_OUTPUT_DIR or <project>/Assets/TriggerJson)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
  },

  /// List the triggers of a manifest
  Inspect {
    /// Path to the manifest
    manifest: PathBuf,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Generate {
      scene,
      prior,
      confirm_dialog,
      project,
      output_dir,
    } => cmd::cmd_generate(GenerateArgs {
      scene: &scene,
      prior: prior.as_deref(),
      confirm_dialog,
      project: project.as_deref(),
      output_dir: output_dir.as_deref(),
      output: cli.format,
    }),
    Commands::Inspect { manifest } => cmd::cmd_inspect(&manifest, cli.format),
  }
}
