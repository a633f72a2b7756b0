//! Check whether a branch is eligible to release

use std::path::Path;

use crate::commands::load_config;
use crate::core::error::{ReleaseError, ReleaseResult};

pub fn run_branch(config: Option<&Path>, name: &str, json: bool) -> ReleaseResult<()> {
  let (release_config, _) = load_config(config)?;
  let matched = release_config.matching_branch(name);

  if json {
    println!(
      "{}",
      serde_json::to_string_pretty(&serde_json::json!({
        "branch": name,
        "eligible": matched.is_some(),
        "matched": matched,
        "prerelease": matched.is_some_and(|spec| spec.is_prerelease()),
      }))?
    );
  }

  match matched {
    Some(spec) => {
      if !json {
        match spec.channel() {
          Some(channel) => println!("✅ '{}' releases on channel '{}' (matches '{}')", name, channel, spec.name()),
          None => println!("✅ '{}' is a release branch (matches '{}')", name, spec.name()),
        }
        if spec.is_prerelease() {
          println!("   • publishes pre-releases");
        }
      }
      Ok(())
    }
    None => {
      let configured: Vec<&str> = release_config.branches.iter().map(|b| b.name()).collect();
      Err(ReleaseError::with_help(
        format!("Branch '{}' is not a release branch", name),
        format!("Configured branches: {}", configured.join(", ")),
      ))
    }
  }
}
