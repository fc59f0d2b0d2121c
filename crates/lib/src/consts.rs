/// Category assigned to triggers that are not owned by a group object.
pub const CATEGORY_NONE: &str = "none";

/// State type of every synthesized trigger.
pub const STATE_TYPE_SIGNAL: &str = "signal";

/// Color used for triggers in the `none` category.
pub const NEUTRAL_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Number of buckets each color channel is folded into.
pub const COLOR_BUCKETS: u32 = 64;

/// Manifest directory relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "Assets/TriggerJson";

/// Extension of written manifests.
pub const MANIFEST_EXTENSION: &str = "json";

pub const PROJECT_DIR_ENV: &str = "WEBTRIGGER_PROJECT_DIR";
pub const OUTPUT_DIR_ENV: &str = "WEBTRIGGER_OUTPUT_DIR";
