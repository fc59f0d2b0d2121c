//! CLI smoke tests for webtrigger.
//!
//! These tests run the binary against scene dump fixtures and check exit
//! codes, console output and the written manifest.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the webtrigger binary.
fn webtrigger_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("webtrigger");
  cmd.env_remove("WEBTRIGGER_PROJECT_DIR").env_remove("WEBTRIGGER_OUTPUT_DIR");
  cmd
}

/// Get path to a fixture file.
fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

fn read_manifest(path: &Path) -> serde_json::Value {
  serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  webtrigger_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  webtrigger_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("webtrigger"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["generate", "inspect"] {
    webtrigger_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// generate
// =============================================================================

#[test]
#[serial]
fn generate_writes_manifest_under_project() {
  let temp = TempDir::new().unwrap();

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("lobby.json"))
    .arg("--project")
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Triggers: 3"));

  let manifest = read_manifest(&temp.path().join("Assets/TriggerJson/Lobby.json"));
  let triggers = manifest["triggers"].as_array().unwrap();
  let keys: Vec<_> = triggers.iter().map(|t| t["state"][0]["key"].as_str().unwrap()).collect();
  assert_eq!(keys, ["door1", "door2", "lamp"]);
  assert_eq!(triggers[0]["category"], "Doors");
  assert_eq!(triggers[2]["category"], "none");
  assert_eq!(triggers[2]["showConfirmDialog"], false);
}

#[test]
#[serial]
fn generate_with_prior_and_confirm_dialog() {
  let temp = TempDir::new().unwrap();
  let out = temp.path().join("out");

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("lobby.json"))
    .arg("--prior")
    .arg(fixture_path("prior.json"))
    .arg("--confirm-dialog")
    .arg("--output-dir")
    .arg(&out)
    .assert()
    .success();

  let manifest = read_manifest(&out.join("Lobby.json"));
  let triggers = manifest["triggers"].as_array().unwrap();
  assert_eq!(triggers[0]["displayName"], "Front Door");
  assert_eq!(triggers[1]["displayName"], "door2");
  assert!(triggers.iter().all(|t| t["showConfirmDialog"] == true));
}

#[test]
#[serial]
fn generate_respects_output_dir_env() {
  let temp = TempDir::new().unwrap();
  let out = temp.path().join("from-env");

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("lobby.json"))
    .env("WEBTRIGGER_OUTPUT_DIR", &out)
    .assert()
    .success();

  assert!(out.join("Lobby.json").exists());
}

#[test]
#[serial]
fn generate_json_output() {
  let temp = TempDir::new().unwrap();

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("lobby.json"))
    .arg("--output-dir")
    .arg(temp.path())
    .arg("--format")
    .arg("json")
    .assert()
    .success()
    .stdout(predicate::str::contains("\"triggers\": 3"))
    .stdout(predicate::str::contains("\"skipped\": 2"));
}

#[test]
#[serial]
fn generate_missing_key_fails_without_writing() {
  let temp = TempDir::new().unwrap();

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("missing_key.json"))
    .arg("--output-dir")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Stage/Curtain"));

  assert!(!temp.path().join("Broken.json").exists());
}

#[test]
#[serial]
fn generate_with_empty_state_prior_fails() {
  let temp = TempDir::new().unwrap();

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("lobby.json"))
    .arg("--prior")
    .arg(fixture_path("empty_state.json"))
    .arg("--output-dir")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("no state entries"));
}

#[test]
#[serial]
fn generate_with_missing_prior_fails() {
  let temp = TempDir::new().unwrap();

  webtrigger_cmd()
    .arg("generate")
    .arg(fixture_path("lobby.json"))
    .arg("--prior")
    .arg(temp.path().join("nope.json"))
    .arg("--output-dir")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to read manifest"));
}

#[test]
fn generate_nonexistent_scene_fails() {
  webtrigger_cmd()
    .arg("generate")
    .arg("/nonexistent/path/scene.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load scene"));
}

// =============================================================================
// inspect
// =============================================================================

#[test]
fn inspect_lists_triggers_by_category() {
  webtrigger_cmd()
    .arg("inspect")
    .arg(fixture_path("prior.json"))
    .assert()
    .success()
    .stdout(predicate::str::contains("Doors"))
    .stdout(predicate::str::contains("Front Door"))
    .stdout(predicate::str::contains("1 trigger(s)"));
}

#[test]
fn inspect_json_roundtrips_manifest() {
  webtrigger_cmd()
    .arg("inspect")
    .arg(fixture_path("prior.json"))
    .arg("--format")
    .arg("json")
    .assert()
    .success()
    .stdout(predicate::str::contains("\"displayName\": \"Front Door\""));
}

#[test]
fn inspect_malformed_manifest_fails() {
  let temp = TempDir::new().unwrap();
  let path = temp.path().join("bad.json");
  fs::write(&path, "{ nope").unwrap();

  webtrigger_cmd()
    .arg("inspect")
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Malformed manifest"));
}
