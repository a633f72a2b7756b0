//! Release asset checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::PluginEntry;
use crate::core::error::ReleaseResult;
use crate::core::template::{NameTemplate, Variable};
use crate::release::assets::expand;

/// Every GitHub asset has a path and label, and a well-formed name template
pub struct AssetSchemaCheck;

impl Check for AssetSchemaCheck {
  fn name(&self) -> &str {
    "assets"
  }

  fn description(&self) -> &str {
    "Validates GitHub release asset entries"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let assets = ctx.config.assets();
    let mut findings = Vec::new();

    for (index, asset) in assets.iter().enumerate() {
      let which = format!("Asset #{}", index + 1);

      if asset.path.trim().is_empty() {
        findings.push(CheckResult::error(
          self.name(),
          format!("{} has an empty path", which),
          Some("Set `path` to a file or glob relative to the output directory"),
        ));
      } else if asset.is_glob()
        && let Err(err) = glob::Pattern::new(&asset.path)
      {
        findings.push(CheckResult::error(
          self.name(),
          format!("{} path '{}' is not a valid glob: {}", which, asset.path, err),
          None::<String>,
        ));
      }

      if asset.label.trim().is_empty() {
        findings.push(CheckResult::error(
          self.name(),
          format!("{} ({}) has an empty label", which, asset.path),
          Some("Set `label` to the text shown on the release page"),
        ));
      }

      let Some(name) = &asset.name else {
        continue;
      };
      match NameTemplate::parse(name) {
        Ok(template) => {
          for unknown in template.unknown_placeholders() {
            let known: Vec<String> = Variable::ALL.iter().map(|v| v.to_string()).collect();
            findings.push(CheckResult::error(
              self.name(),
              format!("{} name '{}' uses unknown placeholder ${{{}}}", which, name, unknown),
              Some(format!("Known placeholders: {}", known.join(", "))),
            ));
          }
        }
        Err(err) => findings.push(CheckResult::error(self.name(), format!("{}: {}", which, err), None::<String>)),
      }
    }

    if findings.is_empty() {
      findings.push(CheckResult::pass(
        self.name(),
        format!("{} release asset(s) well-formed", assets.len()),
      ));
    }
    Ok(findings)
  }
}

/// Patterns handed to `@semantic-release/git` are non-empty globs
pub struct GitAssetsCheck;

impl Check for GitAssetsCheck {
  fn name(&self) -> &str {
    "git-assets"
  }

  fn description(&self) -> &str {
    "Validates files committed back by the git step"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let mut findings = Vec::new();

    let patterns = ctx.config.plugins.iter().filter_map(|p| match p {
      PluginEntry::Git(opts) => opts.assets.as_deref(),
      _ => None,
    });
    for pattern in patterns.flatten() {
      if pattern.trim().is_empty() {
        findings.push(CheckResult::error(
          self.name(),
          "Git step has an empty asset pattern",
          Some("Remove the empty entry from the git step's `assets`"),
        ));
      } else if let Err(err) = glob::Pattern::new(pattern) {
        findings.push(CheckResult::error(
          self.name(),
          format!("Git asset pattern '{}' is invalid: {}", pattern, err),
          None::<String>,
        ));
      }
    }

    if findings.is_empty() {
      findings.push(CheckResult::pass(self.name(), "Git step assets valid"));
    }
    Ok(findings)
  }
}

/// Each asset path matches at least one file in the output directory
pub struct AssetFilesCheck;

impl Check for AssetFilesCheck {
  fn name(&self) -> &str {
    "asset-files"
  }

  fn description(&self) -> &str {
    "Release assets exist in the output directory"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let Some(output_dir) = &ctx.output_dir else {
      return Ok(Vec::new());
    };

    let mut findings = Vec::new();
    let mut matched = 0;

    for asset in ctx.config.assets() {
      if asset.path.trim().is_empty() {
        continue;
      }
      match expand(output_dir, &asset.path) {
        Ok(files) if files.is_empty() => findings.push(CheckResult::warning(
          self.name(),
          format!("'{}' matches no file in {}", asset.path, output_dir.display()),
          Some("Build the release artifacts first, or fix the asset path"),
        )),
        Ok(files) => matched += files.len(),
        Err(err) => findings.push(CheckResult::error(self.name(), err.to_string(), None::<String>)),
      }
    }

    if findings.is_empty() {
      findings.push(CheckResult::pass(
        self.name(),
        format!("{} file(s) matched in {}", matched, output_dir.display()),
      ));
    }
    Ok(findings)
  }

  fn requires_output_dir(&self) -> bool {
    true
  }
}
