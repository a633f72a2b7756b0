//! Check trait abstraction for release config validation
//!
//! Each rule of the schema is a `Check`. A check inspects the loaded record
//! (and optionally the release output directory) and reports one or more
//! findings.

use crate::core::config::ReleaseConfig;
use crate::core::error::ReleaseResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity level for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
  /// Informational message (not an issue)
  Info,
  /// Warning (non-blocking, but should be addressed)
  Warning,
  /// Error (blocking, must be fixed)
  Error,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::Info => write!(f, "INFO"),
      Severity::Warning => write!(f, "WARN"),
      Severity::Error => write!(f, "ERROR"),
    }
  }
}

/// Result of running a check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
  /// Name of the check that ran
  pub check_name: String,
  /// Whether the check passed
  pub passed: bool,
  /// Severity level (if failed)
  pub severity: Severity,
  /// Human-readable message
  pub message: String,
  /// Optional suggested fix
  pub suggestion: Option<String>,
  /// Additional metadata (for JSON output)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

impl CheckResult {
  /// Create a passing check result
  pub fn pass(check_name: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      passed: true,
      severity: Severity::Info,
      message: message.into(),
      suggestion: None,
      details: None,
    }
  }

  /// Create a failing check result with error severity
  pub fn error(
    check_name: impl Into<String>,
    message: impl Into<String>,
    suggestion: Option<impl Into<String>>,
  ) -> Self {
    Self {
      check_name: check_name.into(),
      passed: false,
      severity: Severity::Error,
      message: message.into(),
      suggestion: suggestion.map(|s| s.into()),
      details: None,
    }
  }

  /// Create a failing check result with warning severity
  pub fn warning(
    check_name: impl Into<String>,
    message: impl Into<String>,
    suggestion: Option<impl Into<String>>,
  ) -> Self {
    Self {
      check_name: check_name.into(),
      passed: false,
      severity: Severity::Warning,
      message: message.into(),
      suggestion: suggestion.map(|s| s.into()),
      details: None,
    }
  }

  /// Add details to the check result
  pub fn with_details(mut self, details: serde_json::Value) -> Self {
    self.details = Some(details);
    self
  }

  pub fn is_error(&self) -> bool {
    !self.passed && self.severity == Severity::Error
  }

  pub fn is_warning(&self) -> bool {
    !self.passed && self.severity == Severity::Warning
  }
}

/// Context passed to checks
#[derive(Debug, Clone)]
pub struct CheckContext {
  /// The record under validation
  pub config: ReleaseConfig,
  /// Release output directory asset paths are resolved against (None = skip file checks)
  pub output_dir: Option<PathBuf>,
}

impl CheckContext {
  pub fn new(config: ReleaseConfig) -> Self {
    Self {
      config,
      output_dir: None,
    }
  }

  pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
    self.output_dir = dir;
    self
  }
}

/// Validation check trait
///
/// A check returns every finding it has. When nothing is wrong it returns a
/// single passing result, so each registered check shows up in the report.
///
/// # Example
///
/// ```rust,ignore
/// struct HasBranches;
///
/// impl Check for HasBranches {
///   fn name(&self) -> &str {
///     "has-branches"
///   }
///
///   fn description(&self) -> &str {
///     "At least one release branch is configured"
///   }
///
///   fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
///     if ctx.config.branches.is_empty() {
///       Ok(vec![CheckResult::error(self.name(), "No branches", Some("Add a branch"))])
///     } else {
///       Ok(vec![CheckResult::pass(self.name(), "Branches configured")])
///     }
///   }
/// }
/// ```
pub trait Check: Send + Sync {
  /// Unique name for this check (kebab-case)
  fn name(&self) -> &str;

  /// Human-readable description of what this check validates
  fn description(&self) -> &str;

  /// Run the check and return its findings
  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>>;

  /// Whether this check needs the release output directory
  /// Default: false (validates the record alone)
  fn requires_output_dir(&self) -> bool {
    false
  }
}
