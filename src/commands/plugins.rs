//! List recognized plugin identifiers

use crate::core::config::PluginId;
use crate::core::error::ReleaseResult;

pub fn run_plugins(json: bool) -> ReleaseResult<()> {
  if json {
    let plugins: Vec<_> = PluginId::ALL
      .iter()
      .map(|id| {
        serde_json::json!({
          "id": id.as_str(),
          "short_name": id.short_name(),
          "description": id.description(),
        })
      })
      .collect();
    println!("{}", serde_json::to_string_pretty(&plugins)?);
    return Ok(());
  }

  println!("📋 Recognized plugins:");
  for id in PluginId::ALL {
    println!("   • {:<44} {}", id.as_str(), id.description());
  }
  Ok(())
}
