//! CLI commands for releaserc
//!
//! ## Authoring
//! - **init**: Write a preset config into the current directory
//! - **convert**: Re-serialize the config in another format
//!
//! ## Inspection
//! - **show**: Print the normalized config
//! - **plugins**: List recognized plugin identifiers
//! - **branch**: Check whether a branch is eligible to release
//! - **render**: Render a name template for a tag
//! - **assets**: List the files the GitHub step would upload
//!
//! ## Validation
//! - **validate**: Run all schema checks

pub mod assets;
pub mod branch;
pub mod convert;
pub mod init;
pub mod plugins;
pub mod render;
pub mod show;
pub mod validate;

pub use assets::run_assets;
pub use branch::run_branch;
pub use convert::run_convert;
pub use init::run_init;
pub use plugins::run_plugins;
pub use render::run_render;
pub use show::run_show;
pub use validate::run_validate;

use crate::core::config::ReleaseConfig;
use crate::core::error::ReleaseResult;
use crate::core::loader;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load the config from `--config`, or discover it in the current directory
pub(crate) fn load_config(config: Option<&Path>) -> ReleaseResult<(ReleaseConfig, PathBuf)> {
  match config {
    Some(path) => {
      debug!(path = %path.display(), "loading release config from --config");
      Ok((loader::load(path)?, path.to_path_buf()))
    }
    None => {
      let cwd = env::current_dir()?;
      loader::load_from_dir(&cwd)
    }
  }
}
