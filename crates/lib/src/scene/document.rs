//! JSON scene dumps.
//!
//! A dump mirrors the editor hierarchy: root objects, each with its hide
//! flags, active state, components and children. Components the scanner does
//! not care about may be present and are ignored.
//!
//! ```json
//! {
//!   "name": "Lobby",
//!   "objects": [
//!     {
//!       "name": "Doors",
//!       "components": [{ "type": "playableSwitch" }],
//!       "children": [
//!         {
//!           "name": "Front",
//!           "active": false,
//!           "components": [
//!             { "type": "playTimelineGimmick", "globalGimmickKey": { "key": "door1" } }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Capability, HideFlags, ObjectId, SceneError, SceneGraph};

/// Serialized form of a scene dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SceneDef {
  name: String,
  #[serde(default)]
  objects: Vec<ObjectDef>,
}

/// One object of the hierarchy, as written in a scene dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDef {
  pub name: String,
  #[serde(default)]
  pub hide_flags: u32,
  #[serde(default = "default_active")]
  pub active: bool,
  #[serde(default)]
  pub components: Vec<Component>,
  #[serde(default)]
  pub children: Vec<ObjectDef>,
}

fn default_active() -> bool {
  true
}

impl ObjectDef {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      hide_flags: 0,
      active: true,
      components: Vec::new(),
      children: Vec::new(),
    }
  }

  pub fn with_hide_flags(mut self, flags: HideFlags) -> Self {
    self.hide_flags = flags.bits();
    self
  }

  pub fn inactive(mut self) -> Self {
    self.active = false;
    self
  }

  pub fn with_component(mut self, component: Component) -> Self {
    self.components.push(component);
    self
  }

  pub fn with_child(mut self, child: ObjectDef) -> Self {
    self.children.push(child);
    self
  }

  /// Shorthand for a group object.
  pub fn switch(name: impl Into<String>) -> Self {
    Self::new(name).with_component(Component::PlayableSwitch)
  }

  /// Shorthand for a timeline object carrying `key`.
  pub fn timeline(name: impl Into<String>, key: impl Into<String>) -> Self {
    Self::new(name).with_component(Component::timeline(key))
  }
}

/// Components recognised in a scene dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Component {
  PlayableSwitch,
  PlayTimelineGimmick {
    #[serde(default, rename = "globalGimmickKey", skip_serializing_if = "Option::is_none")]
    global_gimmick_key: Option<GlobalGimmickKey>,
  },
  #[serde(other)]
  Other,
}

impl Component {
  pub fn timeline(key: impl Into<String>) -> Self {
    Component::PlayTimelineGimmick {
      global_gimmick_key: Some(GlobalGimmickKey { key: Some(key.into()) }),
    }
  }

  fn capability(&self) -> Option<Capability> {
    match self {
      Component::PlayableSwitch => Some(Capability::PlayableSwitch),
      Component::PlayTimelineGimmick { .. } => Some(Capability::PlayTimeline),
      Component::Other => None,
    }
  }
}

/// Scene-independent key a timeline gimmick is addressed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalGimmickKey {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
}

#[derive(Debug, Clone)]
struct Node {
  name: String,
  path: String,
  hide_flags: HideFlags,
  active: bool,
  components: Vec<Component>,
  /// One past the last descendant in pre-order.
  subtree_end: usize,
}

/// A scene loaded from a JSON dump.
///
/// Objects are stored flattened in pre-order, so every subtree is a
/// contiguous range and enumeration order is fixed by the file.
#[derive(Debug, Clone)]
pub struct SceneDocument {
  name: String,
  nodes: Vec<Node>,
}

impl SceneDocument {
  pub fn new(name: impl Into<String>, roots: Vec<ObjectDef>) -> Self {
    let mut nodes = Vec::new();
    for root in roots {
      flatten(root, &mut nodes);
    }
    Self {
      name: name.into(),
      nodes,
    }
  }

  /// Load a scene dump from disk.
  ///
  /// The JSON parser stops at 128 levels of nesting. Every hierarchy level
  /// costs two (the `children` array and the object), so dumps deeper than
  /// about 60 levels are rejected as [`SceneError::Parse`]. Deeper trees can
  /// still be built in code with [`SceneDocument::new`].
  pub fn load(path: &Path) -> Result<Self, SceneError> {
    let content = fs::read_to_string(path).map_err(|source| SceneError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let def: SceneDef = serde_json::from_str(&content).map_err(|source| SceneError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    Ok(Self::new(def.name, def.objects))
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  fn node(&self, id: ObjectId) -> &Node {
    &self.nodes[id.0]
  }
}

enum Visit {
  Enter { def: ObjectDef, parent_path: Option<String> },
  Exit { index: usize },
}

fn flatten(root: ObjectDef, nodes: &mut Vec<Node>) {
  let mut stack = vec![Visit::Enter {
    def: root,
    parent_path: None,
  }];

  while let Some(visit) = stack.pop() {
    match visit {
      Visit::Enter { def, parent_path } => {
        let path = match parent_path {
          Some(parent) => format!("{}/{}", parent, def.name),
          None => def.name.clone(),
        };

        let index = nodes.len();
        nodes.push(Node {
          name: def.name,
          path: path.clone(),
          hide_flags: HideFlags::from_bits_retain(def.hide_flags),
          active: def.active,
          components: def.components,
          subtree_end: index + 1,
        });

        stack.push(Visit::Exit { index });
        for child in def.children.into_iter().rev() {
          stack.push(Visit::Enter {
            def: child,
            parent_path: Some(path.clone()),
          });
        }
      }
      Visit::Exit { index } => nodes[index].subtree_end = nodes.len(),
    }
  }
}

impl SceneGraph for SceneDocument {
  fn scene_name(&self) -> &str {
    &self.name
  }

  fn objects(&self) -> Vec<ObjectId> {
    (0..self.nodes.len()).map(ObjectId).collect()
  }

  fn name(&self, id: ObjectId) -> &str {
    &self.node(id).name
  }

  fn path(&self, id: ObjectId) -> String {
    self.node(id).path.clone()
  }

  fn is_active(&self, id: ObjectId) -> bool {
    self.node(id).active
  }

  fn hide_flags(&self, id: ObjectId) -> HideFlags {
    self.node(id).hide_flags
  }

  fn has_capability(&self, id: ObjectId, capability: Capability) -> bool {
    self
      .node(id)
      .components
      .iter()
      .any(|c| c.capability() == Some(capability))
  }

  fn self_and_descendants(&self, id: ObjectId) -> Vec<ObjectId> {
    (id.0..self.node(id).subtree_end).map(ObjectId).collect()
  }

  fn timeline_key(&self, id: ObjectId) -> Option<&str> {
    self.node(id).components.iter().find_map(|c| match c {
      Component::PlayTimelineGimmick { global_gimmick_key } => global_gimmick_key
        .as_ref()
        .and_then(|g| g.key.as_deref())
        .filter(|key| !key.is_empty()),
      _ => None,
    })
  }
}
