//! Release branch checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ReleaseResult;
use std::collections::HashSet;

/// Branch list is non-empty, names are non-empty, patterns compile, no duplicates
pub struct BranchesCheck;

impl Check for BranchesCheck {
  fn name(&self) -> &str {
    "branches"
  }

  fn description(&self) -> &str {
    "Validates the release branch list"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let branches = &ctx.config.branches;
    if branches.is_empty() {
      return Ok(vec![CheckResult::error(
        self.name(),
        "No release branches configured",
        Some("Add at least one entry to `branches`, e.g. \"main\""),
      )]);
    }

    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for (index, spec) in branches.iter().enumerate() {
      let name = spec.name();
      if name.trim().is_empty() {
        findings.push(CheckResult::error(
          self.name(),
          format!("Branch #{} has an empty name", index + 1),
          Some("Remove the entry or give it a branch name"),
        ));
        continue;
      }

      if spec.is_pattern()
        && let Err(err) = glob::Pattern::new(name)
      {
        findings.push(CheckResult::error(
          self.name(),
          format!("Branch pattern '{}' is invalid: {}", name, err),
          Some("Fix the glob syntax (supported: *, ?, [...])"),
        ));
      }

      if !seen.insert(name) {
        findings.push(CheckResult::warning(
          self.name(),
          format!("Branch '{}' is listed more than once", name),
          Some("Remove the duplicate entry"),
        ));
      }
    }

    if findings.is_empty() {
      let names: Vec<&str> = branches.iter().map(|b| b.name()).collect();
      findings.push(
        CheckResult::pass(self.name(), format!("{} release branch(es) configured", branches.len()))
          .with_details(serde_json::json!({ "branches": names })),
      );
    }

    Ok(findings)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::config::ReleaseConfig;

  fn run(branches: &[&str]) -> Vec<CheckResult> {
    let config = ReleaseConfig::new(branches.iter().map(|b| (*b).into()).collect(), vec![]);
    BranchesCheck.run(&CheckContext::new(config)).unwrap()
  }

  #[test]
  fn test_empty_branches_is_error() {
    let results = run(&[]);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_error());
  }

  #[test]
  fn test_valid_branches_pass() {
    let results = run(&["master", "feature/*"]);
    assert_eq!(results.len(), 1);
    assert!(results[0].passed);
  }

  #[test]
  fn test_blank_name_is_error() {
    let results = run(&["master", "  "]);
    assert!(results.iter().any(|r| r.is_error()));
  }

  #[test]
  fn test_invalid_pattern_is_error() {
    let results = run(&["release/[abc"]);
    assert!(results[0].is_error());
    assert!(results[0].message.contains("release/[abc"));
  }

  #[test]
  fn test_duplicate_is_warning() {
    let results = run(&["master", "master"]);
    assert_eq!(results.len(), 1);
    assert!(results[0].is_warning());
  }
}
