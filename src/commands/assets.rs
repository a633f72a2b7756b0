//! List the files the GitHub step would upload

use std::path::{Path, PathBuf};

use crate::commands::load_config;
use crate::core::config::PluginId;
use crate::core::error::ReleaseResult;
use crate::core::template::TemplateContext;
use crate::release::assets::resolve;
use tracing::warn;

pub fn run_assets(
  config: Option<&Path>,
  output_dir: PathBuf,
  tag: String,
  channel: Option<String>,
  branch: Option<String>,
  json: bool,
) -> ReleaseResult<()> {
  let (release_config, _) = load_config(config)?;
  if let Some(branch) = branch.as_deref()
    && !release_config.matches_branch(branch)
  {
    warn!(branch, "branch is not configured to release");
  }
  let ctx = TemplateContext::from_tag(tag).with_channel(channel).with_branch(branch);
  let resolved = resolve(&release_config, &output_dir, &ctx)?;

  if json {
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    return Ok(());
  }

  if release_config.find_plugin(PluginId::Github).is_none() {
    println!("📦 No {} step configured; nothing is uploaded", PluginId::Github);
    return Ok(());
  }

  let declared = release_config.assets().len();
  if resolved.is_empty() {
    println!(
      "📦 No files matched {} declared asset(s) in {}",
      declared,
      output_dir.display()
    );
    return Ok(());
  }

  println!("📦 {} file(s) to upload from {}:\n", resolved.len(), output_dir.display());
  for asset in &resolved {
    println!("   • {} → {}", asset.relative_source(&output_dir).display(), asset.name);
    println!("     label: {}", asset.label);
  }

  Ok(())
}
