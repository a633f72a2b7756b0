//! Integration tests for `releaserc assets` and `releaserc render`

use crate::helpers::{DOCKERIZED_RC, TestProject, run_releaserc, run_releaserc_raw, stdout};
use anyhow::Result;

#[test]
fn test_assets_renders_upload_name() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;
  project.write_file("release/windows64.zip", "zip")?;

  let output = run_releaserc(&project.path, &["assets", "--tag", "v2.1.0"])?;
  let text = stdout(&output);

  assert!(text.contains("dockerized-v2.1.0-win64.zip"), "stdout: {}", text);
  assert!(text.contains("Windows (64bit)"));
  Ok(())
}

#[test]
fn test_assets_json_output() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;
  project.write_file("out/release/windows64.zip", "zip")?;

  let output = run_releaserc(&project.path, &["assets", "--dir", "out", "--tag", "v1.0.0", "--json"])?;
  let assets: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  let list = assets.as_array().map(Vec::len).unwrap_or_default();
  assert_eq!(list, 1);
  assert_eq!(assets[0]["name"], "dockerized-v1.0.0-win64.zip");
  assert_eq!(assets[0]["label"], "Windows (64bit)");
  Ok(())
}

#[test]
fn test_assets_without_matches() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  let output = run_releaserc(&project.path, &["assets", "--tag", "v1.0.0"])?;
  assert!(stdout(&output).contains("No files matched"));
  Ok(())
}

#[test]
fn test_assets_duplicate_names_fail() -> Result<()> {
  let project = TestProject::with_releaserc(
    r#"{
  "branches": ["main"],
  "plugins": [
    "@semantic-release/commit-analyzer",
    "@semantic-release/release-notes-generator",
    ["@semantic-release/github", {"assets": [{"path": "dist/*.zip", "name": "app-${nextRelease.gitTag}.zip"}]}]
  ]
}
"#,
  )?;
  project.write_file("dist/a.zip", "a")?;
  project.write_file("dist/b.zip", "b")?;

  let output = run_releaserc_raw(&project.path, &["assets", "--tag", "v1.0.0"])?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_render_template() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_releaserc(
    &project.path,
    &["render", "app-${nextRelease.version}-${nextRelease.gitTag}.tar.gz", "--tag", "v3.2.1"],
  )?;
  assert_eq!(stdout(&output).trim(), "app-3.2.1-v3.2.1.tar.gz");
  Ok(())
}

#[test]
fn test_render_unknown_placeholder_fails() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_releaserc_raw(&project.path, &["render", "app-${nextRelease.notes}.zip", "--tag", "v1.0.0"])?;
  assert_eq!(output.status.code(), Some(3));
  Ok(())
}
