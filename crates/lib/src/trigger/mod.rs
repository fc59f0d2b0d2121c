//! Trigger synthesis.
//!
//! Turns scan results into manifest records: resolves the display name from
//! the prior manifest, derives the category color and stamps the run-wide
//! confirm-dialog flag. Grouped discoveries are merged first with
//! [`MergeStrategy::Overwrite`], ungrouped ones after with
//! [`MergeStrategy::KeepExisting`], so a group's claim on a key always beats
//! the same timeline seen on its own.

mod color;
mod set;

use tracing::debug;

pub use color::category_color;
pub use set::{MergeOutcome, MergeStrategy, TriggerSet};

use crate::manifest::{NameReference, Trigger, TriggerManifest, TriggerState};
use crate::scene::{Discovery, ScanResult};

/// Builds trigger records for one run.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
  names: &'a NameReference,
  show_confirm_dialog: bool,
}

/// Counters from merging a scan into a [`TriggerSet`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
  pub grouped: usize,
  pub ungrouped: usize,
  pub replaced: usize,
  pub skipped: usize,
}

impl<'a> Synthesizer<'a> {
  pub fn new(names: &'a NameReference, show_confirm_dialog: bool) -> Self {
    Self {
      names,
      show_confirm_dialog,
    }
  }

  /// Build the trigger for `key` in `category`.
  pub fn synthesize(&self, key: &str, category: &str) -> Trigger {
    let display_name = self.names.resolve(key).unwrap_or(key);

    Trigger {
      display_name: display_name.to_string(),
      category: category.to_string(),
      show_confirm_dialog: self.show_confirm_dialog,
      color: category_color(category),
      state: vec![TriggerState::signal(key)],
    }
  }

  fn merge(&self, set: &mut TriggerSet, discoveries: &[Discovery], strategy: MergeStrategy, stats: &mut MergeStats) {
    for discovery in discoveries {
      let trigger = self.synthesize(&discovery.key, &discovery.category);
      match set.insert(discovery.key.clone(), trigger, strategy) {
        MergeOutcome::Inserted => {}
        MergeOutcome::Replaced => {
          debug!(key = %discovery.key, category = %discovery.category, "trigger regrouped");
          stats.replaced += 1;
        }
        MergeOutcome::Skipped => {
          debug!(key = %discovery.key, "trigger already claimed, skipping");
          stats.skipped += 1;
        }
      }
    }
  }

  /// Merge both passes of `scan` into a single set.
  pub fn merge_scan(&self, scan: &ScanResult) -> (TriggerSet, MergeStats) {
    let mut set = TriggerSet::new();
    let mut stats = MergeStats::default();

    self.merge(&mut set, &scan.grouped, MergeStrategy::Overwrite, &mut stats);
    stats.grouped = set.len();

    self.merge(&mut set, &scan.ungrouped, MergeStrategy::KeepExisting, &mut stats);
    stats.ungrouped = set.len() - stats.grouped;

    (set, stats)
  }
}

/// Build the manifest for `scan`.
pub fn synthesize_manifest(scan: &ScanResult, names: &NameReference, show_confirm_dialog: bool) -> TriggerManifest {
  let (set, _) = Synthesizer::new(names, show_confirm_dialog).merge_scan(scan);
  set.into_manifest()
}
