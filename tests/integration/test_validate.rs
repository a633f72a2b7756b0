//! Integration tests for `releaserc validate`

use crate::helpers::{DOCKERIZED_RC, TestProject, run_releaserc, run_releaserc_raw, stderr, stdout};
use anyhow::Result;

#[test]
fn test_validate_dockerized_config() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  let output = run_releaserc(&project.path, &["validate", "--strict"])?;
  let text = stdout(&output);

  assert!(text.contains("Release configuration is valid"), "stdout: {}", text);
  Ok(())
}

#[test]
fn test_validate_json_reports_success() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;

  let output = run_releaserc(&project.path, &["validate", "--json"])?;
  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(report["success"], true);
  assert_eq!(report["errors"], 0);
  assert!(report["results"].as_array().is_some_and(|r| !r.is_empty()));
  Ok(())
}

#[test]
fn test_validate_plugin_order_violation_exits_3() -> Result<()> {
  let project = TestProject::with_releaserc(
    r#"{
  "branches": ["master"],
  "plugins": [
    "@semantic-release/commit-analyzer",
    "@semantic-release/release-notes-generator",
    "@semantic-release/git",
    "@semantic-release/changelog"
  ]
}
"#,
  )?;

  let output = run_releaserc_raw(&project.path, &["validate", "--json"])?;
  assert_eq!(output.status.code(), Some(3));

  let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(report["success"], false);
  let failing: Vec<&str> = report["results"]
    .as_array()
    .map(|results| {
      results
        .iter()
        .filter(|r| r["passed"] == false)
        .filter_map(|r| r["check_name"].as_str())
        .collect()
    })
    .unwrap_or_default();
  assert!(failing.contains(&"plugin-order"), "failing checks: {:?}", failing);
  Ok(())
}

#[test]
fn test_validate_strict_fails_on_missing_dependency() -> Result<()> {
  // The changelog step without the notes generator is only a warning
  let project = TestProject::with_releaserc(
    r#"{
  "branches": ["main"],
  "plugins": ["@semantic-release/commit-analyzer", "@semantic-release/changelog"]
}
"#,
  )?;

  run_releaserc(&project.path, &["validate"])?;

  let output = run_releaserc_raw(&project.path, &["validate", "--strict"])?;
  assert_eq!(output.status.code(), Some(3));
  Ok(())
}

#[test]
fn test_validate_unknown_plugin_is_user_error() -> Result<()> {
  let project = TestProject::with_releaserc(
    r#"{"branches": ["main"], "plugins": ["@semantic-release/npm"]}
"#,
  )?;

  let output = run_releaserc_raw(&project.path, &["validate"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("@semantic-release/npm"));
  Ok(())
}

#[test]
fn test_validate_missing_config_is_user_error() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_releaserc_raw(&project.path, &["validate"])?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_validate_script_config_is_rejected() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("release.config.js", "module.exports = { branches: ['master'] };\n")?;

  let output = run_releaserc_raw(&project.path, &["validate"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("release.config.js"));
  Ok(())
}

#[test]
fn test_validate_reads_package_json_release_key() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "package.json",
    r#"{
  "name": "demo",
  "release": {
    "branches": ["main"],
    "plugins": ["@semantic-release/commit-analyzer", "@semantic-release/release-notes-generator"]
  }
}
"#,
  )?;

  run_releaserc(&project.path, &["validate", "--strict"])?;
  Ok(())
}

#[test]
fn test_validate_with_output_dir_checks_asset_files() -> Result<()> {
  let project = TestProject::with_releaserc(DOCKERIZED_RC)?;
  std::fs::create_dir_all(project.path.join("dist"))?;

  // Missing archive is a warning
  run_releaserc(&project.path, &["validate", "--dir", "dist"])?;
  let output = run_releaserc_raw(&project.path, &["validate", "--dir", "dist", "--strict"])?;
  assert_eq!(output.status.code(), Some(3));

  project.write_file("dist/release/windows64.zip", "zip")?;
  run_releaserc(&project.path, &["validate", "--dir", "dist", "--strict"])?;
  Ok(())
}

#[test]
fn test_validate_explicit_config_flag() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("config/release.yaml", "branches: [main]\nplugins:\n  - '@semantic-release/commit-analyzer'\n")?;

  run_releaserc(&project.path, &["--config", "config/release.yaml", "validate"])?;
  Ok(())
}
