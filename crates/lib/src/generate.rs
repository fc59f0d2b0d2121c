//! Manifest generation.
//!
//! This module provides the `generate` function which runs the whole pipeline
//! for one scene: load prior display names, scan the scene, synthesize the
//! triggers, write the manifest and tell the host to pick the file up.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::manifest::{ManifestError, ManifestWriter, NameReference, TriggerManifest, WriteError, load_name_reference};
use crate::scene::{SceneError, SceneGraph, scan};
use crate::trigger::{MergeStats, Synthesizer};

/// Errors that can occur during generation. All of them abort the run.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error(transparent)]
  PriorManifest(#[from] ManifestError),

  #[error(transparent)]
  Scene(#[from] SceneError),

  #[error(transparent)]
  Write(#[from] WriteError),
}

/// Receives a notification once a manifest has been written.
///
/// Editors cache their view of the asset folder and need to be told about new
/// files. Targets without such a cache use [`NoAssetHost`].
pub trait AssetHost {
  fn refresh_assets(&self, written: &Path);
}

/// Host with nothing to refresh.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssetHost;

impl AssetHost for NoAssetHost {
  fn refresh_assets(&self, _written: &Path) {}
}

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
  /// Previously generated manifest to take display names from.
  pub prior_manifest: Option<PathBuf>,
  /// Copied into every trigger's `showConfirmDialog`.
  pub show_confirm_dialog: bool,
  /// Directory the manifest is written to.
  pub output_dir: PathBuf,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
  pub path: PathBuf,
  pub manifest: TriggerManifest,
  pub stats: MergeStats,
  /// Triggers whose key was found in the prior manifest, whether or not the
  /// stored display name differs from the key.
  pub names_kept: usize,
}

/// Scan `graph` and build its manifest in memory.
pub fn build_manifest<G: SceneGraph + ?Sized>(
  graph: &G,
  names: &NameReference,
  show_confirm_dialog: bool,
) -> Result<(TriggerManifest, MergeStats), SceneError> {
  let scan = scan(graph)?;
  let (set, stats) = Synthesizer::new(names, show_confirm_dialog).merge_scan(&scan);
  Ok((set.into_manifest(), stats))
}

/// Generate and write the manifest for `graph`.
pub fn generate<G, H>(graph: &G, options: &GenerateOptions, host: &H) -> Result<GenerateReport, GenerateError>
where
  G: SceneGraph + ?Sized,
  H: AssetHost + ?Sized,
{
  let names = load_name_reference(options.prior_manifest.as_deref())?;
  let (manifest, stats) = build_manifest(graph, &names, options.show_confirm_dialog)?;

  let names_kept = manifest
    .triggers
    .iter()
    .filter(|t| t.key().is_some_and(|key| names.resolve(key).is_some()))
    .count();

  let writer = ManifestWriter::new(&options.output_dir);
  let path = writer.write(&manifest, graph.scene_name())?;
  host.refresh_assets(&path);

  info!(
    scene = graph.scene_name(),
    triggers = manifest.len(),
    grouped = stats.grouped,
    ungrouped = stats.ungrouped,
    names_kept,
    "generated trigger manifest"
  );

  Ok(GenerateReport {
    path,
    manifest,
    stats,
    names_kept,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scene::{Component, ObjectDef, SceneDocument};
  use std::cell::RefCell;
  use std::fs;
  use tempfile::TempDir;

  #[derive(Default)]
  struct RecordingHost {
    refreshed: RefCell<Vec<PathBuf>>,
  }

  impl AssetHost for RecordingHost {
    fn refresh_assets(&self, written: &Path) {
      assert!(written.exists(), "refresh must happen after the write");
      self.refreshed.borrow_mut().push(written.to_path_buf());
    }
  }

  fn scene() -> SceneDocument {
    SceneDocument::new(
      "Lobby",
      vec![
        ObjectDef::switch("Doors").with_child(ObjectDef::timeline("Front", "door1")),
        ObjectDef::timeline("Lamp", "lamp"),
      ],
    )
  }

  fn options(temp: &TempDir) -> GenerateOptions {
    GenerateOptions {
      prior_manifest: None,
      show_confirm_dialog: false,
      output_dir: temp.path().join("Assets/TriggerJson"),
    }
  }

  #[test]
  fn writes_manifest_and_refreshes_host() {
    let temp = TempDir::new().unwrap();
    let host = RecordingHost::default();

    let report = generate(&scene(), &options(&temp), &host).unwrap();

    assert_eq!(report.path, temp.path().join("Assets/TriggerJson/Lobby.json"));
    assert_eq!(report.manifest.len(), 2);
    assert_eq!(report.names_kept, 0);
    assert_eq!(host.refreshed.borrow().as_slice(), [report.path.clone()]);
  }

  #[test]
  fn counts_names_taken_from_prior_manifest() {
    let temp = TempDir::new().unwrap();
    let prior = temp.path().join("prior.json");
    fs::write(
      &prior,
      r#"{"triggers":[{"displayName":"Front Door","state":[{"key":"door1","type":"signal"}]}]}"#,
    )
    .unwrap();

    let mut opts = options(&temp);
    opts.prior_manifest = Some(prior);

    let report = generate(&scene(), &opts, &NoAssetHost).unwrap();
    assert_eq!(report.names_kept, 1);
    assert_eq!(report.manifest.get("door1").unwrap().display_name, "Front Door");
  }

  #[test]
  fn counts_prior_names_equal_to_their_key() {
    let temp = TempDir::new().unwrap();
    let prior = temp.path().join("prior.json");
    fs::write(
      &prior,
      r#"{"triggers":[{"displayName":"door1","state":[{"key":"door1","type":"signal"}]}]}"#,
    )
    .unwrap();

    let mut opts = options(&temp);
    opts.prior_manifest = Some(prior);

    let report = generate(&scene(), &opts, &NoAssetHost).unwrap();
    assert_eq!(report.names_kept, 1);
    assert_eq!(report.manifest.get("door1").unwrap().display_name, "door1");
  }

  #[test]
  fn missing_key_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let host = RecordingHost::default();
    let broken = SceneDocument::new(
      "Broken",
      vec![ObjectDef::new("Bad").with_component(Component::PlayTimelineGimmick {
        global_gimmick_key: None,
      })],
    );

    let result = generate(&broken, &options(&temp), &host);

    assert!(matches!(result, Err(GenerateError::Scene(SceneError::MissingKey { .. }))));
    assert!(!temp.path().join("Assets").exists());
    assert!(host.refreshed.borrow().is_empty());
  }

  #[test]
  fn unreadable_prior_manifest_aborts() {
    let temp = TempDir::new().unwrap();
    let mut opts = options(&temp);
    opts.prior_manifest = Some(temp.path().join("missing.json"));

    let result = generate(&scene(), &opts, &NoAssetHost);
    assert!(matches!(
      result,
      Err(GenerateError::PriorManifest(ManifestError::Read { .. }))
    ));
  }
}
