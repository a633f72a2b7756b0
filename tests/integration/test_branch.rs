//! Integration tests for `releaserc branch` and `releaserc plugins`

use crate::helpers::{DOCKERIZED_RC, TestProject, run_releaserc, run_releaserc_raw, stderr};
use anyhow::Result;

#[test]
fn test_branch_release_branch() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  run_releaserc(&project.path, &["branch", "master"])?;
  run_releaserc(&project.path, &["branch", "feature/semantic-release-build"])?;
  Ok(())
}

#[test]
fn test_branch_not_configured_exits_1() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  let output = run_releaserc_raw(&project.path, &["branch", "main"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("master"));
  Ok(())
}

#[test]
fn test_branch_glob_and_channel() -> Result<()> {
  let project = TestProject::with_releaserc(
    r#"{
  "branches": ["main", {"name": "beta", "channel": "beta", "prerelease": true}, "+([0-9]).x", "release/*"],
  "plugins": ["@semantic-release/commit-analyzer"]
}
"#,
  )?;

  let output = run_releaserc(&project.path, &["branch", "beta", "--json"])?;
  let result: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(result["eligible"], true);
  assert_eq!(result["matched"]["channel"], "beta");
  assert_eq!(result["prerelease"], true);

  run_releaserc(&project.path, &["branch", "release/2024"])?;

  let nested = run_releaserc_raw(&project.path, &["branch", "release/2024/hotfix"])?;
  assert_eq!(nested.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_plugins_lists_known_identifiers() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_releaserc(&project.path, &["plugins", "--json"])?;
  let plugins: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  let ids: Vec<&str> = plugins
    .as_array()
    .map(|list| list.iter().filter_map(|p| p["id"].as_str()).collect())
    .unwrap_or_default();

  assert_eq!(
    ids,
    vec![
      "@semantic-release/commit-analyzer",
      "@semantic-release/release-notes-generator",
      "@semantic-release/github",
      "@semantic-release/changelog",
      "@semantic-release/git",
    ]
  );
  Ok(())
}
