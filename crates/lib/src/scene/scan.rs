//! Trigger discovery.
//!
//! Discovery runs two passes over the scene, in a fixed order:
//!
//! 1. **Grouped**: every object with a [`Capability::PlayableSwitch`] claims
//!    the timelines on itself and below it, and names their category.
//! 2. **Ungrouped**: every object with a [`Capability::PlayTimeline`],
//!    regardless of group membership, in category `none`.
//!
//! The same key usually shows up in both passes. The scanner reports both;
//! deciding which one wins is up to the merge step in [`crate::trigger`].

use tracing::{debug, trace};

use super::{Capability, HideFlags, ObjectId, SceneError, SceneGraph};
use crate::consts::CATEGORY_NONE;

/// A trigger key found in the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
  pub key: String,
  pub category: String,
  pub source: ObjectId,
}

/// Discoveries from both passes, each in traversal order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
  pub grouped: Vec<Discovery>,
  pub ungrouped: Vec<Discovery>,
}

/// Whether an object may be used as a trigger source or group.
///
/// Engine-internal objects (not editable, or hidden and never saved) are
/// scaffolding owned by the host and must not produce triggers.
pub fn is_eligible(flags: HideFlags) -> bool {
  !flags.is_internal()
}

/// Run both discovery passes over `graph`.
///
/// Fails on the first timeline without a usable key; there is no partial
/// result.
pub fn scan<G: SceneGraph + ?Sized>(graph: &G) -> Result<ScanResult, SceneError> {
  let candidates: Vec<ObjectId> = graph
    .objects()
    .into_iter()
    .filter(|&id| {
      let eligible = is_eligible(graph.hide_flags(id));
      if !eligible {
        trace!(object = %graph.path(id), "skipping engine-internal object");
      }
      eligible
    })
    .collect();

  let grouped = scan_grouped(graph, &candidates)?;
  let ungrouped = scan_ungrouped(graph, &candidates)?;

  debug!(
    scene = graph.scene_name(),
    objects = candidates.len(),
    grouped = grouped.len(),
    ungrouped = ungrouped.len(),
    "scanned scene"
  );

  Ok(ScanResult { grouped, ungrouped })
}

fn scan_grouped<G: SceneGraph + ?Sized>(graph: &G, candidates: &[ObjectId]) -> Result<Vec<Discovery>, SceneError> {
  let mut found = Vec::new();

  for &group in candidates {
    if !graph.has_capability(group, Capability::PlayableSwitch) {
      continue;
    }

    let category = graph.name(group);
    for member in graph.self_and_descendants(group) {
      if !graph.has_capability(member, Capability::PlayTimeline) || !is_eligible(graph.hide_flags(member)) {
        continue;
      }

      let key = extract_key(graph, member)?;
      debug!(key = %key, category = %category, active = graph.is_active(member), "grouped trigger");
      found.push(Discovery {
        key,
        category: category.to_string(),
        source: member,
      });
    }
  }

  Ok(found)
}

fn scan_ungrouped<G: SceneGraph + ?Sized>(graph: &G, candidates: &[ObjectId]) -> Result<Vec<Discovery>, SceneError> {
  let mut found = Vec::new();

  for &id in candidates {
    if !graph.has_capability(id, Capability::PlayTimeline) {
      continue;
    }

    let key = extract_key(graph, id)?;
    debug!(key = %key, active = graph.is_active(id), "ungrouped trigger");
    found.push(Discovery {
      key,
      category: CATEGORY_NONE.to_string(),
      source: id,
    });
  }

  Ok(found)
}

/// Read the global gimmick key of a timeline object.
pub fn extract_key<G: SceneGraph + ?Sized>(graph: &G, id: ObjectId) -> Result<String, SceneError> {
  match graph.timeline_key(id) {
    Some(key) if !key.is_empty() => Ok(key.to_string()),
    _ => Err(SceneError::MissingKey { path: graph.path(id) }),
  }
}
