//! Implementation of the `webtrigger generate` command.
//!
//! This command scans a scene dump for trigger objects and writes the
//! resulting manifest to `<output dir>/<scene name>.json`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use webtrigger_lib::config;
use webtrigger_lib::generate::{GenerateOptions, NoAssetHost, generate};
use webtrigger_lib::scene::SceneDocument;

use crate::output::{OutputFormat, format_duration, print_json, print_stat, print_success};

/// Arguments of the generate command, resolved from the command line.
pub struct GenerateArgs<'a> {
  pub scene: &'a Path,
  pub prior: Option<&'a Path>,
  pub confirm_dialog: bool,
  pub project: Option<&'a Path>,
  pub output_dir: Option<&'a Path>,
  pub output: OutputFormat,
}

/// Execute the generate command.
///
/// Fails without writing anything if the prior manifest cannot be read or a
/// timeline in the scene has no key.
pub fn cmd_generate(args: GenerateArgs<'_>) -> Result<()> {
  let start = Instant::now();

  let project = config::project_dir(args.project);
  let options = GenerateOptions {
    prior_manifest: args.prior.map(Path::to_path_buf),
    show_confirm_dialog: args.confirm_dialog,
    output_dir: config::output_dir(args.output_dir, &project),
  };
  debug!(project = ?project, output_dir = ?options.output_dir, "resolved paths");

  let scene = SceneDocument::load(args.scene).with_context(|| format!("Failed to load scene: {}", args.scene.display()))?;

  let report = generate(&scene, &options, &NoAssetHost).context("Failed to generate trigger manifest")?;

  if args.output.is_json() {
    print_json(&serde_json::json!({
      "path": report.path,
      "triggers": report.manifest.len(),
      "grouped": report.stats.grouped,
      "ungrouped": report.stats.ungrouped,
      "skipped": report.stats.skipped,
      "names_kept": report.names_kept,
    }))?;
  } else {
    print_success(&format!("Wrote {}", report.path.display()));
    print_stat("Triggers", &report.manifest.len().to_string());
    print_stat("Grouped", &report.stats.grouped.to_string());
    print_stat("Ungrouped", &report.stats.ungrouped.to_string());
    print_stat("Names kept", &report.names_kept.to_string());
    print_stat("Duration", &format_duration(start.elapsed()));
  }

  Ok(())
}
