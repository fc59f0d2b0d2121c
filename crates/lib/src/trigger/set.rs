//! Keyed, insertion-ordered trigger collection.
//!
//! The two discovery passes resolve duplicate keys differently, so the merge
//! policy is passed explicitly on every insert instead of being implied by
//! which map method happens to be called.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::manifest::{Trigger, TriggerManifest};

/// How an insert treats a key that is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
  /// Replace the stored trigger, keeping its original position.
  Overwrite,
  /// Leave the stored trigger untouched.
  KeepExisting,
}

/// What an insert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
  Inserted,
  Replaced,
  Skipped,
}

/// Triggers keyed by their de-duplication key, in first-insertion order.
#[derive(Debug, Default, Clone)]
pub struct TriggerSet {
  triggers: IndexMap<String, Trigger>,
}

impl TriggerSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, key: String, trigger: Trigger, strategy: MergeStrategy) -> MergeOutcome {
    match self.triggers.entry(key) {
      Entry::Vacant(slot) => {
        slot.insert(trigger);
        MergeOutcome::Inserted
      }
      Entry::Occupied(mut slot) => match strategy {
        MergeStrategy::Overwrite => {
          slot.insert(trigger);
          MergeOutcome::Replaced
        }
        MergeStrategy::KeepExisting => MergeOutcome::Skipped,
      },
    }
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.triggers.contains_key(key)
  }

  pub fn get(&self, key: &str) -> Option<&Trigger> {
    self.triggers.get(key)
  }

  pub fn len(&self) -> usize {
    self.triggers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triggers.is_empty()
  }

  pub fn into_manifest(self) -> TriggerManifest {
    TriggerManifest::new(self.triggers.into_values().collect())
  }
}
