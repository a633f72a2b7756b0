//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// The upstream declaration: three branches, five plugins, one Windows archive
pub const DOCKERIZED_RC: &str = r#"{
  "branches": ["master", "feature/semantic-release", "feature/semantic-release-build"],
  "plugins": [
    "@semantic-release/commit-analyzer",
    "@semantic-release/release-notes-generator",
    ["@semantic-release/github", {
      "assets": [
        {"path": "release/windows64.zip", "label": "Windows (64bit)", "name": "dockerized-${nextRelease.gitTag}-win64.zip"}
      ]
    }],
    "@semantic-release/changelog",
    "@semantic-release/git"
  ]
}
"#;

/// A scratch project directory
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create an empty project directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a project with `.releaserc.json` holding `content`
  pub fn with_releaserc(content: &str) -> Result<Self> {
    let project = Self::new()?;
    project.write_file(".releaserc.json", content)?;
    Ok(project)
  }

  /// Write a file, creating parent directories
  pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&full, content)?;
    Ok(full)
  }

  /// Check if a file exists
  pub fn file_exists(&self, path: &str) -> bool {
    self.path.join(path).exists()
  }

  /// Read a file
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// Run releaserc and return its output whatever the exit status
pub fn run_releaserc_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_releaserc");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RELEASERC_CONFIG")
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run releaserc")
}

/// Run releaserc and fail unless it exits successfully
pub fn run_releaserc(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_releaserc_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "releaserc command failed: releaserc {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}
