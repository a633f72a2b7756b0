//! Integration tests for `releaserc init`

use crate::helpers::{TestProject, run_releaserc, run_releaserc_raw};
use anyhow::Result;

#[test]
fn test_init_writes_dockerized_json() -> Result<()> {
  let project = TestProject::new()?;

  run_releaserc(&project.path, &["init"])?;
  assert!(project.file_exists(".releaserc.json"));

  let written: serde_json::Value = serde_json::from_str(&project.read_file(".releaserc.json")?)?;
  assert_eq!(
    written["branches"],
    serde_json::json!(["master", "feature/semantic-release", "feature/semantic-release-build"])
  );
  assert_eq!(written["plugins"][0], "@semantic-release/commit-analyzer");
  assert_eq!(written["plugins"][2][0], "@semantic-release/github");
  assert_eq!(
    written["plugins"][2][1]["assets"][0]["name"],
    "dockerized-${nextRelease.gitTag}-win64.zip"
  );

  run_releaserc(&project.path, &["validate", "--strict"])?;
  Ok(())
}

#[test]
fn test_init_yaml_and_toml_formats() -> Result<()> {
  let project = TestProject::new()?;

  run_releaserc(&project.path, &["init", "--preset", "minimal", "--format", "yaml"])?;
  assert!(project.file_exists(".releaserc.yml"));
  run_releaserc(&project.path, &["validate"])?;

  let toml_project = TestProject::new()?;
  run_releaserc(&toml_project.path, &["init", "--format", "toml"])?;
  assert!(toml_project.file_exists(".releaserc.toml"));
  run_releaserc(&toml_project.path, &["validate", "--strict"])?;
  Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(".releaserc.json", "{\"branches\": [\"keep\"]}\n")?;

  let output = run_releaserc_raw(&project.path, &["init"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(project.read_file(".releaserc.json")?.contains("keep"));

  run_releaserc(&project.path, &["init", "--force"])?;
  assert!(project.read_file(".releaserc.json")?.contains("master"));
  Ok(())
}

#[test]
fn test_init_unknown_preset() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_releaserc_raw(&project.path, &["init", "--preset", "kitchen-sink"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(!project.file_exists(".releaserc.json"));
  Ok(())
}
