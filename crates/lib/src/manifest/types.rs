//! Manifest types for webtrigger.
//!
//! The manifest lists every trigger discovered in a scene. It is serialized
//! in the layout the control surface expects:
//!
//! ```json
//! {
//!     "triggers": [
//!         {
//!             "displayName": "Front Door",
//!             "category": "Doors",
//!             "showConfirmDialog": false,
//!             "color": [0.25, 0.5, 0.75],
//!             "state": [{ "key": "door1", "type": "signal" }]
//!         }
//!     ]
//! }
//! ```
//!
//! # Ordering
//!
//! Triggers keep their discovery order. Nothing is sorted, so the order is as
//! stable as the scene traversal that produced it.

use serde::{Deserialize, Serialize};

use crate::consts::{CATEGORY_NONE, NEUTRAL_COLOR, STATE_TYPE_SIGNAL};

/// The complete set of triggers for one scene.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerManifest {
  pub triggers: Vec<Trigger>,
}

impl TriggerManifest {
  pub fn new(triggers: Vec<Trigger>) -> Self {
    Self { triggers }
  }

  pub fn len(&self) -> usize {
    self.triggers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triggers.is_empty()
  }

  /// Find a trigger by its key.
  pub fn get(&self, key: &str) -> Option<&Trigger> {
    self.triggers.iter().find(|t| t.key() == Some(key))
  }
}

/// One named, signalable event exposed to the control surface.
///
/// Only `displayName` and `state` are required when reading; the remaining
/// fields fall back to their defaults, the same way the editor's serializer
/// tolerates partial documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
  pub display_name: String,
  #[serde(default = "default_category")]
  pub category: String,
  #[serde(default)]
  pub show_confirm_dialog: bool,
  #[serde(default = "default_color")]
  pub color: [f32; 3],
  pub state: Vec<TriggerState>,
}

impl Trigger {
  /// The de-duplication key, taken from the first state.
  pub fn key(&self) -> Option<&str> {
    self.state.first().map(|s| s.key.as_str())
  }
}

/// A single state of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerState {
  pub key: String,
  #[serde(rename = "type")]
  pub kind: String,
}

impl TriggerState {
  pub fn signal(key: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      kind: STATE_TYPE_SIGNAL.to_string(),
    }
  }
}

fn default_category() -> String {
  CATEGORY_NONE.to_string()
}

fn default_color() -> [f32; 3] {
  NEUTRAL_COLOR
}
