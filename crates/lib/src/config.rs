//! Path configuration.
//!
//! Command-line values win, then environment variables, then defaults:
//!
//! | Setting        | Flag           | Environment              | Default                         |
//! |----------------|----------------|--------------------------|---------------------------------|
//! | Project root   | `--project`    | `WEBTRIGGER_PROJECT_DIR` | current directory               |
//! | Output dir     | `--output-dir` | `WEBTRIGGER_OUTPUT_DIR`  | `<project>/Assets/TriggerJson`  |

use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, PROJECT_DIR_ENV};

/// Resolve the project root.
pub fn project_dir(flag: Option<&Path>) -> PathBuf {
  let dir = flag
    .map(Path::to_path_buf)
    .or_else(|| std::env::var_os(PROJECT_DIR_ENV).map(PathBuf::from))
    .unwrap_or_else(|| PathBuf::from("."));
  dunce::canonicalize(&dir).unwrap_or(dir)
}

/// Resolve the manifest output directory.
pub fn output_dir(flag: Option<&Path>, project: &Path) -> PathBuf {
  flag
    .map(Path::to_path_buf)
    .or_else(|| std::env::var_os(OUTPUT_DIR_ENV).map(PathBuf::from))
    .unwrap_or_else(|| project.join(DEFAULT_OUTPUT_DIR))
}
