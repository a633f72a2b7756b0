//! Check runner for executing validation checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::ReleaseResult;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Check runner that executes multiple checks
pub struct CheckRunner {
  checks: Vec<Arc<dyn Check>>,
}

impl CheckRunner {
  /// Create a new check runner
  pub fn new() -> Self {
    Self { checks: Vec::new() }
  }

  /// Add a check to the runner
  pub fn add_check(&mut self, check: Arc<dyn Check>) {
    self.checks.push(check);
  }

  /// Run all checks and collect results
  pub fn run_all(&self, ctx: &CheckContext) -> ReleaseResult<CheckReport> {
    let mut results = Vec::new();

    for check in &self.checks {
      if check.requires_output_dir() && ctx.output_dir.is_none() {
        debug!(check = check.name(), "skipped: no output directory");
        continue;
      }

      debug!(check = check.name(), description = check.description(), "running check");
      match check.run(ctx) {
        Ok(findings) => {
          debug!(check = check.name(), findings = findings.len(), "check finished");
          results.extend(findings);
        }
        Err(err) => {
          // If a check itself fails to run, create an error result
          results.push(CheckResult::error(
            check.name(),
            format!("Check failed to run: {}", err),
            Some("Re-run with --verbose for more details"),
          ));
        }
      }
    }

    Ok(CheckReport::new(results))
  }
}

impl Default for CheckRunner {
  fn default() -> Self {
    Self::new()
  }
}

/// Outcome of a validation run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
  pub results: Vec<CheckResult>,
  pub errors: usize,
  pub warnings: usize,
}

impl CheckReport {
  pub fn new(results: Vec<CheckResult>) -> Self {
    let errors = results.iter().filter(|r| r.is_error()).count();
    let warnings = results.iter().filter(|r| r.is_warning()).count();
    Self {
      results,
      errors,
      warnings,
    }
  }

  /// No errors, and no warnings either when `strict`
  pub fn is_success(&self, strict: bool) -> bool {
    self.errors == 0 && (!strict || self.warnings == 0)
  }
}

/// Create a runner with all built-in checks
pub fn create_default_runner() -> CheckRunner {
  let mut runner = CheckRunner::new();

  runner.add_check(Arc::new(super::branches::BranchesCheck));
  runner.add_check(Arc::new(super::plugins::PluginOrderCheck));
  runner.add_check(Arc::new(super::plugins::PluginDependencyCheck));
  runner.add_check(Arc::new(super::plugins::DuplicatePluginCheck));
  runner.add_check(Arc::new(super::assets::AssetSchemaCheck));
  runner.add_check(Arc::new(super::assets::GitAssetsCheck));
  runner.add_check(Arc::new(super::assets::AssetFilesCheck));

  runner
}
