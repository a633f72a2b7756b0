//! Re-serialize the release config in another format

use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::load_config;
use crate::core::error::{ConfigError, ReleaseError, ReleaseResult, ResultExt};
use crate::core::loader::{self, ConfigFormat};

/// Convert the config; writes to `output` when given, stdout otherwise
///
/// Without `--to`, the format is taken from the output file name.
pub fn run_convert(config: Option<&Path>, to: Option<String>, output: Option<PathBuf>, force: bool) -> ReleaseResult<()> {
  let format = match (&to, &output) {
    (Some(to), _) => to.parse::<ConfigFormat>()?,
    (None, Some(output)) => ConfigFormat::from_path(output)?,
    (None, None) => {
      return Err(ReleaseError::with_help(
        "Nothing to convert to",
        "Pass --to <json|yaml|toml> or --output <file>",
      ));
    }
  };

  let (release_config, source) = load_config(config)?;
  let content = loader::to_string(&release_config, format)?;

  // The converted text must parse back to the same record
  let reparsed = loader::load_str(&content, format).context("Converted config does not parse back")?;
  if reparsed != release_config {
    return Err(ReleaseError::message(format!(
      "Converting {} to {} would change the configuration",
      source.display(),
      format
    )));
  }

  match output {
    Some(path) => {
      if path.exists() && !force {
        return Err(ReleaseError::Config(ConfigError::AlreadyExists { path }));
      }
      fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
      println!("✅ Wrote {} ({})", path.display(), format);
    }
    None => print!("{}", content),
  }

  Ok(())
}
