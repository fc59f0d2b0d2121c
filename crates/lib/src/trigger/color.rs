use crate::consts::{CATEGORY_NONE, COLOR_BUCKETS, NEUTRAL_COLOR};

/// Deterministic grouping color for a category.
///
/// Each character's code point is added to channel `index % 3`, and each
/// channel is then folded to `(sum % 64) / 64`. Equal names always share a
/// color; different names may collide. The `none` category is neutral grey.
pub fn category_color(category: &str) -> [f32; 3] {
  if category == CATEGORY_NONE {
    return NEUTRAL_COLOR;
  }

  let mut sums = [0u64; 3];
  for (index, ch) in category.chars().enumerate() {
    sums[index % 3] += u64::from(u32::from(ch));
  }

  sums.map(|sum| (sum % u64::from(COLOR_BUCKETS)) as f32 / COLOR_BUCKETS as f32)
}
