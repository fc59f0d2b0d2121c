//! Loading a previously generated manifest.
//!
//! Users rename triggers in the generated file. The next run reads that file
//! back and reuses each display name for any key it rediscovers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::TriggerManifest;

/// Errors that can occur while reading a prior manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("malformed manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("malformed manifest {}: trigger #{index} has no state entries", path.display())]
  EmptyState { path: PathBuf, index: usize },
}

/// Display names carried over from a prior manifest, keyed by trigger key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameReference(HashMap<String, String>);

impl NameReference {
  pub fn new() -> Self {
    Self::default()
  }

  /// Previously chosen display name for `key`, if any.
  pub fn resolve(&self, key: &str) -> Option<&str> {
    self.0.get(key).map(String::as_str)
  }

  pub fn insert(&mut self, key: impl Into<String>, display_name: impl Into<String>) {
    self.0.insert(key.into(), display_name.into());
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameReference {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut names = NameReference::new();
    for (key, name) in iter {
      names.insert(key, name);
    }
    names
  }
}

/// Build the name reference from an optional prior manifest.
///
/// With no path every trigger falls back to its key as display name, so an
/// empty reference is returned. Any read or parse failure is fatal.
pub fn load_name_reference(path: Option<&Path>) -> Result<NameReference, ManifestError> {
  let Some(path) = path else {
    return Ok(NameReference::new());
  };

  let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let manifest: TriggerManifest = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  name_reference_from(&manifest, path)
}

/// Collect `state[0].key -> displayName` for every trigger in `manifest`.
///
/// `path` is only used for error reporting.
pub fn name_reference_from(manifest: &TriggerManifest, path: &Path) -> Result<NameReference, ManifestError> {
  let mut names = NameReference::new();

  for (index, trigger) in manifest.triggers.iter().enumerate() {
    let key = trigger.key().ok_or_else(|| ManifestError::EmptyState {
      path: path.to_path_buf(),
      index,
    })?;
    names.insert(key, trigger.display_name.as_str());
  }

  debug!(path = ?path, names = names.len(), "loaded prior display names");
  Ok(names)
}
