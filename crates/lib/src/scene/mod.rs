//! Scene graph access.
//!
//! The scanner never talks to an editor directly. Everything it needs from the
//! host is expressed by [`SceneGraph`]: enumerating objects (inactive ones
//! included), walking descendants, reading hide flags and capability markers,
//! and reading a timeline's global gimmick key through an explicit accessor.
//!
//! [`SceneDocument`] is the implementation used by the CLI. It reads a JSON
//! dump of a scene hierarchy exported from the editor.

mod document;
mod flags;
pub mod scan;

use std::path::PathBuf;

use thiserror::Error;

pub use document::{Component, GlobalGimmickKey, ObjectDef, SceneDocument};
pub use flags::HideFlags;
pub use scan::{Discovery, ScanResult, is_eligible, scan};

/// Errors that can occur while loading or scanning a scene.
#[derive(Debug, Error)]
pub enum SceneError {
  #[error("failed to read scene {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("malformed scene {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("timeline object '{path}' has no global gimmick key")]
  MissingKey { path: String },
}

/// Handle to an object inside a [`SceneGraph`].
///
/// Only meaningful for the graph that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub usize);

/// Capability markers the scanner looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
  /// Groups the triggers below it into one category.
  PlayableSwitch,
  /// Marks the object as a trigger source.
  PlayTimeline,
}

/// Read access to a scene's object graph.
///
/// Implementations must return objects in a stable order: the manifest keeps
/// discovery order, and regenerating an unchanged scene has to produce the
/// same file.
pub trait SceneGraph {
  /// Name of the active scene, used to name the output file.
  fn scene_name(&self) -> &str;

  /// Every object in the scene, inactive ones included.
  fn objects(&self) -> Vec<ObjectId>;

  fn name(&self, id: ObjectId) -> &str;

  /// Hierarchy path of the object, for diagnostics.
  fn path(&self, id: ObjectId) -> String {
    self.name(id).to_string()
  }

  fn is_active(&self, id: ObjectId) -> bool;

  fn hide_flags(&self, id: ObjectId) -> HideFlags;

  fn has_capability(&self, id: ObjectId, capability: Capability) -> bool;

  /// The object itself followed by all of its descendants, inactive ones
  /// included.
  fn self_and_descendants(&self, id: ObjectId) -> Vec<ObjectId>;

  /// Key stored in the timeline's global gimmick key, if one is set.
  fn timeline_key(&self, id: ObjectId) -> Option<&str>;
}
