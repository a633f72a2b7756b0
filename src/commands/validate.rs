//! Validate the release config
//!
//! Runs every registered check and reports the findings. Exits with the
//! validation code when an error (or, with `--strict`, a warning) was found.

use std::path::{Path, PathBuf};

use crate::checks::{CheckContext, Severity, create_default_runner};
use crate::commands::load_config;
use crate::core::error::{ReleaseError, ReleaseResult, ValidationError};

pub fn run_validate(config: Option<&Path>, output_dir: Option<PathBuf>, strict: bool, json: bool) -> ReleaseResult<()> {
  let (release_config, config_path) = load_config(config)?;

  let ctx = CheckContext::new(release_config).with_output_dir(output_dir);
  let runner = create_default_runner();
  let report = runner.run_all(&ctx)?;

  if json {
    let json_output = serde_json::to_string_pretty(&serde_json::json!({
      "config": config_path,
      "strict": strict,
      "success": report.is_success(strict),
      "errors": report.errors,
      "warnings": report.warnings,
      "results": report.results,
    }))?;
    println!("{}", json_output);
  } else {
    println!("🔍 Validating {}\n", config_path.display());

    for result in &report.results {
      let icon = match (result.passed, result.severity) {
        (true, _) => "✅",
        (false, Severity::Warning) => "⚠️ ",
        (false, _) => "❌",
      };
      println!("{} {}: {}", icon, result.check_name, result.message);

      if !result.passed
        && let Some(ref suggestion) = result.suggestion
      {
        println!("   💡 Fix: {}", suggestion);
      }
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
      "Summary: {} error(s), {} warning(s) across {} finding(s)",
      report.errors,
      report.warnings,
      report.results.len()
    );

    if report.is_success(strict) {
      if report.warnings > 0 {
        println!("\n⚠️  Some warnings found. Consider addressing them.");
      } else {
        println!("\n✨ Release configuration is valid.");
      }
    }
  }

  if !report.is_success(strict) {
    return Err(ReleaseError::Validation(ValidationError::ChecksFailed {
      errors: report.errors,
      warnings: report.warnings,
    }));
  }

  Ok(())
}
