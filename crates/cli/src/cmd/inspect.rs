//! Inspect command implementation.
//!
//! Lists the triggers of an existing manifest, grouped by category.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use webtrigger_lib::manifest::TriggerManifest;

use crate::output::{OutputFormat, format_color, print_info, print_json, symbols};

pub fn cmd_inspect(path: &Path, output: OutputFormat) -> Result<()> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read manifest: {}", path.display()))?;
  let manifest: TriggerManifest =
    serde_json::from_str(&content).with_context(|| format!("Malformed manifest: {}", path.display()))?;

  if output.is_json() {
    return print_json(&manifest);
  }

  if manifest.is_empty() {
    print_info("Manifest contains no triggers.");
    return Ok(());
  }

  let mut categories: Vec<&str> = Vec::new();
  for trigger in &manifest.triggers {
    if !categories.contains(&trigger.category.as_str()) {
      categories.push(&trigger.category);
    }
  }

  for category in categories {
    println!("{}", category.if_supports_color(Stream::Stdout, |s| s.bold()));
    for trigger in manifest.triggers.iter().filter(|t| t.category == category) {
      let key = trigger.key().unwrap_or("?");
      let confirm = if trigger.show_confirm_dialog { " (confirm)" } else { "" };
      println!(
        "  {} {} {}{}",
        symbols::INFO,
        trigger.display_name,
        format!("[{} {}]", key, format_color(trigger.color)).if_supports_color(Stream::Stdout, |s| s.dimmed()),
        confirm
      );
    }
  }

  println!();
  println!("{} trigger(s)", manifest.len());
  Ok(())
}
