//! Resolve release assets against a build output directory
//!
//! This mirrors what the GitHub step does at publish time: each asset path is
//! expanded as a glob under the output directory, and every matched file is
//! uploaded under its rendered `name` (or its own file name).

use crate::core::config::ReleaseConfig;
use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::core::template::{NameTemplate, TemplateContext};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file that would be uploaded to the release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAsset {
  /// Matched file on disk
  pub source: PathBuf,
  /// Label shown on the release page
  pub label: String,
  /// Upload file name
  pub name: String,
  /// The asset path (glob) that produced this match
  pub pattern: String,
}

impl ResolvedAsset {
  /// Source path relative to the output directory, for display
  pub fn relative_source(&self, output_dir: &Path) -> PathBuf {
    pathdiff::diff_paths(&self.source, output_dir).unwrap_or_else(|| self.source.clone())
  }
}

/// Expand an asset path under `output_dir` into the matching files, sorted
///
/// The output directory itself is escaped, so only `asset_path` is treated as a glob.
pub fn expand(output_dir: &Path, asset_path: &str) -> ReleaseResult<Vec<PathBuf>> {
  let base = glob::Pattern::escape(&output_dir.to_string_lossy());
  let pattern = format!("{}/{}", base.trim_end_matches('/'), asset_path.trim_start_matches("./"));

  let mut files = Vec::new();
  for entry in glob::glob(&pattern).with_context(|| format!("Invalid asset path '{}'", asset_path))? {
    let path = entry?;
    if path.is_file() {
      files.push(path);
    }
  }
  files.sort();
  debug!(%pattern, matches = files.len(), "expanded asset path");
  Ok(files)
}

/// Resolve every GitHub asset of the config
///
/// Fails when a name template cannot be rendered, or when two files would be
/// uploaded under the same name.
pub fn resolve(config: &ReleaseConfig, output_dir: &Path, ctx: &TemplateContext) -> ReleaseResult<Vec<ResolvedAsset>> {
  let mut resolved = Vec::new();

  for asset in config.assets() {
    let template = asset.name.as_deref().map(NameTemplate::parse).transpose()?;
    let rendered = template.as_ref().map(|t| t.render(ctx)).transpose()?;

    for source in expand(output_dir, &asset.path)? {
      let name = match &rendered {
        Some(name) => name.clone(),
        None => source
          .file_name()
          .map(|n| n.to_string_lossy().into_owned())
          .unwrap_or_default(),
      };
      resolved.push(ResolvedAsset {
        source,
        label: asset.label.clone(),
        name,
        pattern: asset.path.clone(),
      });
    }
  }

  check_unique_names(&resolved)?;
  Ok(resolved)
}

fn check_unique_names(assets: &[ResolvedAsset]) -> ReleaseResult<()> {
  let mut by_name: HashMap<&str, &ResolvedAsset> = HashMap::new();
  for asset in assets {
    if let Some(first) = by_name.insert(&asset.name, asset) {
      return Err(ReleaseError::with_help(
        format!(
          "Upload name '{}' is used by both {} and {}",
          asset.name,
          first.source.display(),
          asset.source.display()
        ),
        "Give each matched file a unique name: narrow the glob or drop the `name` template",
      ));
    }
  }
  Ok(())
}
