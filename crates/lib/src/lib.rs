//! webtrigger-lib: Core types and logic for webtrigger
//!
//! This crate turns a scene graph into a trigger manifest for an external
//! web-based control surface:
//! - `Trigger`: one signalable event with its display name, category and color
//! - `TriggerManifest`: every trigger found in one scene
//! - `SceneGraph`: the object graph the triggers are discovered in
//! - `generate`: the load, scan, synthesize and write pipeline

pub mod config;
pub mod consts;
pub mod generate;
pub mod manifest;
pub mod scene;
pub mod trigger;
