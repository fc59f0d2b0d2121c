//! Trigger manifest types and their on-disk form.
//!
//! A manifest is the JSON document consumed by the control surface. It is
//! read back on the next run to carry user-assigned display names forward,
//! and written once per run to the output directory.

pub mod prior;
mod types;
pub mod writer;

pub use prior::{ManifestError, NameReference, load_name_reference};
pub use types::*;
pub use writer::{ManifestWriter, WriteError};
