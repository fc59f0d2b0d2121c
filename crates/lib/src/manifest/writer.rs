//! Writing the generated manifest to disk.
//!
//! # Storage Layout
//!
//! ```text
//! {output_dir}/
//! └── <scene name>.json   # One manifest per scene, overwritten on every run
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::{debug, info};

use super::types::TriggerManifest;
use crate::consts::MANIFEST_EXTENSION;

/// Indentation used by the editor's own JSON serializer.
const INDENT: &[u8] = b"    ";

/// Errors that can occur while writing a manifest.
#[derive(Debug, Error)]
pub enum WriteError {
  #[error("invalid scene name {name:?}: must be non-empty and contain no path separators")]
  InvalidSceneName { name: String },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to serialize manifest: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write manifest {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Writes manifests into a fixed output directory.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
  output_dir: PathBuf,
}

impl ManifestWriter {
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
    }
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }

  /// Destination of the manifest for `scene_name`.
  pub fn path_for(&self, scene_name: &str) -> PathBuf {
    self
      .output_dir
      .join(format!("{}.{}", scene_name, MANIFEST_EXTENSION))
  }

  /// Serialize `manifest` and write it to `<output_dir>/<scene_name>.json`.
  ///
  /// The directory is created if needed and any existing file is replaced.
  /// The content goes to a temporary file in the same directory first and is
  /// renamed into place, so a failed run never leaves a truncated manifest.
  pub fn write(&self, manifest: &TriggerManifest, scene_name: &str) -> Result<PathBuf, WriteError> {
    validate_scene_name(scene_name)?;

    let content = to_pretty_json(manifest)?;

    fs::create_dir_all(&self.output_dir).map_err(|source| WriteError::CreateDir {
      path: self.output_dir.clone(),
      source,
    })?;

    let path = self.path_for(scene_name);
    let write_err = |source: io::Error| WriteError::Write {
      path: path.clone(),
      source,
    };

    let temp_path = self
      .output_dir
      .join(format!("{}.{}.tmp", scene_name, MANIFEST_EXTENSION));
    fs::write(&temp_path, &content).map_err(write_err)?;
    debug!(temp = ?temp_path, "wrote manifest to temp file");
    if let Err(source) = fs::rename(&temp_path, &path) {
      let _ = fs::remove_file(&temp_path);
      return Err(write_err(source));
    }

    info!(path = ?path, triggers = manifest.len(), "wrote trigger manifest");
    Ok(path)
  }
}

/// Pretty-print `manifest` with four-space indentation and a trailing newline.
pub fn to_pretty_json(manifest: &TriggerManifest) -> Result<Vec<u8>, WriteError> {
  let mut buf = Vec::new();
  let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
  manifest.serialize(&mut ser).map_err(WriteError::Serialize)?;
  buf.push(b'\n');
  Ok(buf)
}

fn validate_scene_name(name: &str) -> Result<(), WriteError> {
  let invalid = name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']);
  if invalid {
    return Err(WriteError::InvalidSceneName { name: name.to_string() });
  }
  Ok(())
}
