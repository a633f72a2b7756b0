//! Diagnostics on stderr via tracing
//!
//! User-facing output stays on stdout. `RUST_LOG` overrides the level chosen here.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
  let default_level = if verbose { "releaserc=debug" } else { "releaserc=warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init()
    .ok();
}
