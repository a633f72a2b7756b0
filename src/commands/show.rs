//! Print the normalized release config

use std::path::Path;

use crate::commands::load_config;
use crate::core::error::ReleaseResult;
use crate::core::loader::{self, ConfigFormat};

pub fn run_show(config: Option<&Path>, format: &str) -> ReleaseResult<()> {
  let format: ConfigFormat = format.parse()?;
  let (release_config, _) = load_config(config)?;
  print!("{}", loader::to_string(&release_config, format)?);
  Ok(())
}
