//! Plugin chain checks: ordering, dependencies and duplicates
//!
//! semantic-release runs plugins in listed order within each lifecycle step,
//! so a step that consumes another step's output has to come after it.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::config::PluginId;
use crate::core::error::ReleaseResult;
use std::collections::BTreeMap;

/// `(before, after)`: `before` must be listed ahead of `after` when both are present
const ORDER_CONSTRAINTS: &[(PluginId, PluginId)] = &[
  (PluginId::CommitAnalyzer, PluginId::ReleaseNotesGenerator),
  (PluginId::CommitAnalyzer, PluginId::Changelog),
  (PluginId::ReleaseNotesGenerator, PluginId::Github),
  (PluginId::ReleaseNotesGenerator, PluginId::Changelog),
  (PluginId::Changelog, PluginId::Git),
];

/// `(plugin, requires)`: `plugin` produces nothing useful without `requires`
const DEPENDENCIES: &[(PluginId, PluginId)] = &[
  (PluginId::ReleaseNotesGenerator, PluginId::CommitAnalyzer),
  (PluginId::Changelog, PluginId::CommitAnalyzer),
  (PluginId::Github, PluginId::CommitAnalyzer),
  (PluginId::Changelog, PluginId::ReleaseNotesGenerator),
];

pub struct PluginOrderCheck;

impl Check for PluginOrderCheck {
  fn name(&self) -> &str {
    "plugin-order"
  }

  fn description(&self) -> &str {
    "Commit analysis runs before notes/changelog, which run before publishing"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let config = &ctx.config;
    let mut findings = Vec::new();

    // Every occurrence counts: the last `before` has to precede the first `after`
    for (before, after) in ORDER_CONSTRAINTS {
      let (Some(&b), Some(a)) = (config.positions(*before).last(), config.position(*after)) else {
        continue;
      };
      if b > a {
        findings.push(
          CheckResult::error(
            self.name(),
            format!("{} (#{}) must come before {} (#{})", before, b + 1, after, a + 1),
            Some(format!("Move {} above {} in `plugins`", before.short_name(), after.short_name())),
          )
          .with_details(serde_json::json!({ "before": before.as_str(), "after": after.as_str() })),
        );
      }
    }

    if findings.is_empty() {
      findings.push(CheckResult::pass(
        self.name(),
        format!("{} plugin(s) in a valid order", config.plugins.len()),
      ));
    }
    Ok(findings)
  }
}

pub struct PluginDependencyCheck;

impl Check for PluginDependencyCheck {
  fn name(&self) -> &str {
    "plugin-dependencies"
  }

  fn description(&self) -> &str {
    "Plugins that consume another step's output have that step configured"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let config = &ctx.config;
    let mut findings = Vec::new();

    for (plugin, requires) in DEPENDENCIES {
      if config.position(*plugin).is_some() && config.position(*requires).is_none() {
        findings.push(CheckResult::warning(
          self.name(),
          format!("{} is configured without {}", plugin, requires),
          Some(format!("Add \"{}\" to `plugins`", requires)),
        ));
      }
    }

    if findings.is_empty() {
      findings.push(CheckResult::pass(self.name(), "All plugin dependencies present"));
    }
    Ok(findings)
  }
}

/// The same plugin listed twice runs twice; this is reported, not rejected
pub struct DuplicatePluginCheck;

impl Check for DuplicatePluginCheck {
  fn name(&self) -> &str {
    "duplicate-plugins"
  }

  fn description(&self) -> &str {
    "Each plugin is listed at most once"
  }

  fn run(&self, ctx: &CheckContext) -> ReleaseResult<Vec<CheckResult>> {
    let mut positions: BTreeMap<PluginId, Vec<usize>> = BTreeMap::new();
    for (index, id) in ctx.config.plugin_ids().into_iter().enumerate() {
      positions.entry(id).or_default().push(index + 1);
    }

    let findings: Vec<CheckResult> = positions
      .into_iter()
      .filter(|(_, at)| at.len() > 1)
      .map(|(id, at)| {
        let at: Vec<String> = at.iter().map(|i| format!("#{}", i)).collect();
        CheckResult::warning(
          self.name(),
          format!("{} is listed {} times ({})", id, at.len(), at.join(", ")),
          Some("Remove the extra entries unless the step is meant to run repeatedly"),
        )
      })
      .collect();

    if findings.is_empty() {
      return Ok(vec![CheckResult::pass(self.name(), "No duplicate plugins")]);
    }
    Ok(findings)
  }
}
