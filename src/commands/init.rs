//! Write a preset release config into the current directory

use std::env;

use crate::checks::{CheckContext, create_default_runner};
use crate::core::error::{ConfigError, ReleaseError, ReleaseResult};
use crate::core::loader::{self, ConfigFormat};
use crate::core::preset::Preset;
use tracing::warn;

pub fn run_init(preset: &str, format: &str, force: bool) -> ReleaseResult<()> {
  let preset: Preset = preset.parse()?;
  let format: ConfigFormat = format.parse()?;
  let cwd = env::current_dir()?;
  let path = cwd.join(format.default_file_name());

  if path.exists() && !force {
    return Err(ReleaseError::Config(ConfigError::AlreadyExists { path }));
  }
  if let Ok(existing) = loader::find_config_path(&cwd)
    && existing != path
  {
    warn!(existing = %existing.display(), "another release config takes precedence in this directory");
  }

  let config = preset.build();
  let report = create_default_runner().run_all(&CheckContext::new(config.clone()))?;
  if !report.is_success(false) {
    return Err(ReleaseError::message(format!("Preset '{}' does not validate", preset)));
  }

  loader::save(&config, &path)?;

  println!("✅ Wrote {} (preset: {}, format: {})", path.display(), preset, format);
  println!("\nNext steps:");
  println!("   • Review branches and assets in {}", format.default_file_name());
  println!("   • Run `releaserc validate --dir <build output>` after building the release archives");
  Ok(())
}
