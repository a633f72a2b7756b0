//! Integration tests for `releaserc convert` and `releaserc show`

use crate::helpers::{DOCKERIZED_RC, TestProject, run_releaserc, run_releaserc_raw, stdout};
use anyhow::Result;

#[test]
fn test_convert_to_yaml_file_keeps_config() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  run_releaserc(&project.path, &["convert", "-o", "release.yaml"])?;
  assert!(project.file_exists("release.yaml"));

  let original = stdout(&run_releaserc(&project.path, &["show"])?);
  let converted = stdout(&run_releaserc(&project.path, &["--config", "release.yaml", "show"])?);
  assert_eq!(original, converted);
  Ok(())
}

#[test]
fn test_convert_to_toml_stdout() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  let output = run_releaserc(&project.path, &["convert", "--to", "toml"])?;
  let text = stdout(&output);

  assert!(text.contains("branches"), "stdout: {}", text);
  assert!(text.contains("dockerized-${nextRelease.gitTag}-win64.zip"));
  Ok(())
}

#[test]
fn test_convert_preserves_unknown_options() -> Result<()> {
  let project = TestProject::with_releaserc(
    r#"{
  "branches": ["main"],
  "plugins": [
    ["@semantic-release/commit-analyzer", {"preset": "angular", "releaseRules": [{"type": "docs", "release": "patch"}]}]
  ]
}
"#,
  )?;

  let output = run_releaserc(&project.path, &["convert", "--to", "yaml"])?;
  let text = stdout(&output);
  assert!(text.contains("releaseRules"), "stdout: {}", text);
  assert!(text.contains("angular"));
  Ok(())
}

#[test]
fn test_convert_requires_target() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  let output = run_releaserc_raw(&project.path, &["convert"])?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_convert_refuses_to_overwrite() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;
  project.write_file("release.toml", "# existing\n")?;

  let output = run_releaserc_raw(&project.path, &["convert", "-o", "release.toml"])?;
  assert_eq!(output.status.code(), Some(1));
  assert_eq!(project.read_file("release.toml")?, "# existing\n");

  run_releaserc(&project.path, &["convert", "-o", "release.toml", "--force"])?;
  assert!(project.read_file("release.toml")?.contains("branches"));
  Ok(())
}

#[test]
fn test_show_normalizes_default_options() -> Result<()> {
  // A pair with empty options is written back in bare form
  let project = TestProject::with_releaserc(
    r#"{"branches": ["main"], "plugins": [["@semantic-release/commit-analyzer", {}]]}
"#,
  )?;

  let output = run_releaserc(&project.path, &["show"])?;
  let shown: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(shown["plugins"][0], "@semantic-release/commit-analyzer");
  Ok(())
}
