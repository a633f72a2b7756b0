//! Config discovery, format detection, parsing and writing
//!
//! semantic-release reads its configuration from several places. The static
//! ones are supported here; JavaScript configs are detected and rejected since
//! they can only be evaluated by Node.

use crate::core::config::ReleaseConfig;
use crate::core::error::{ConfigError, ReleaseError, ReleaseResult, ResultExt};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Static config files, in search order
const CANDIDATES: &[&str] = &[
  ".releaserc",
  ".releaserc.json",
  ".releaserc.yaml",
  ".releaserc.yml",
  ".releaserc.toml",
  "release.toml",
];

/// Script configs that cannot be read statically
const SCRIPT_CANDIDATES: &[&str] = &[
  "release.config.js",
  "release.config.cjs",
  "release.config.mjs",
  ".releaserc.js",
  ".releaserc.cjs",
  ".releaserc.mjs",
];

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_JSON_KEY: &str = "release";

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
  Json,
  Yaml,
  Toml,
}

impl ConfigFormat {
  pub const ALL: [ConfigFormat; 3] = [ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml];

  /// Format implied by a file name
  ///
  /// The extensionless `.releaserc` is read as YAML, which also accepts JSON.
  pub fn from_path(path: &Path) -> ReleaseResult<Self> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if file_name == ".releaserc" {
      return Ok(ConfigFormat::Yaml);
    }
    match path.extension().and_then(|e| e.to_str()) {
      Some("json") => Ok(ConfigFormat::Json),
      Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
      Some("toml") => Ok(ConfigFormat::Toml),
      Some("js") | Some("cjs") | Some("mjs") => Err(ReleaseError::Config(ConfigError::Script {
        path: path.to_path_buf(),
      })),
      _ => Err(ReleaseError::Config(ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
      })),
    }
  }

  /// Default file name written by `init` for this format
  pub fn default_file_name(&self) -> &'static str {
    match self {
      ConfigFormat::Json => ".releaserc.json",
      ConfigFormat::Yaml => ".releaserc.yml",
      ConfigFormat::Toml => ".releaserc.toml",
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ConfigFormat::Json => "json",
      ConfigFormat::Yaml => "yaml",
      ConfigFormat::Toml => "toml",
    }
  }
}

impl fmt::Display for ConfigFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ConfigFormat {
  type Err = ReleaseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "json" => Ok(ConfigFormat::Json),
      "yaml" | "yml" => Ok(ConfigFormat::Yaml),
      "toml" => Ok(ConfigFormat::Toml),
      other => Err(ReleaseError::with_help(
        format!("Unknown format '{}'", other),
        format!("Supported formats: {}.", ConfigFormat::ALL.map(|f| f.as_str()).join(", ")),
      )),
    }
  }
}

/// Locate the release config in a directory
pub fn find_config_path(dir: &Path) -> ReleaseResult<PathBuf> {
  for name in CANDIDATES {
    let candidate = dir.join(name);
    if candidate.is_file() {
      debug!(path = %candidate.display(), "found release config");
      return Ok(candidate);
    }
  }

  let package_json = dir.join(PACKAGE_JSON);
  if package_json.is_file() && package_has_release_key(&package_json)? {
    debug!(path = %package_json.display(), "found release config in package.json");
    return Ok(package_json);
  }

  if let Some(script) = SCRIPT_CANDIDATES.iter().map(|n| dir.join(n)).find(|p| p.is_file()) {
    return Err(ReleaseError::Config(ConfigError::Script { path: script }));
  }

  Err(ReleaseError::Config(ConfigError::NotFound { dir: dir.to_path_buf() }))
}

fn package_has_release_key(path: &Path) -> ReleaseResult<bool> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let value: serde_json::Value =
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
  Ok(value.get(PACKAGE_JSON_KEY).is_some())
}

/// Discover and load the release config in a directory
pub fn load_from_dir(dir: &Path) -> ReleaseResult<(ReleaseConfig, PathBuf)> {
  let path = find_config_path(dir)?;
  let config = load(&path)?;
  Ok((config, path))
}

/// Load a release config from a file, choosing the parser by file name
pub fn load(path: &Path) -> ReleaseResult<ReleaseConfig> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

  if path.file_name().and_then(|n| n.to_str()) == Some(PACKAGE_JSON) {
    let mut package: serde_json::Value =
      serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    let release = package
      .get_mut(PACKAGE_JSON_KEY)
      .map(serde_json::Value::take)
      .ok_or_else(|| {
        ReleaseError::with_help(
          format!("No \"{}\" key in {}", PACKAGE_JSON_KEY, path.display()),
          "Add a \"release\" object to package.json or create a .releaserc file.",
        )
      })?;
    return serde_json::from_value(release).with_context(|| format!("Failed to parse config from {}", path.display()));
  }

  let format = ConfigFormat::from_path(path)?;
  load_str(&content, format).with_context(|| format!("Failed to parse config from {}", path.display()))
}

/// Parse a release config from a string
pub fn load_str(content: &str, format: ConfigFormat) -> ReleaseResult<ReleaseConfig> {
  let config = match format {
    ConfigFormat::Json => serde_json::from_str(content)?,
    ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    ConfigFormat::Toml => toml_edit::de::from_str(content)?,
  };
  Ok(config)
}

/// Serialize a release config
pub fn to_string(config: &ReleaseConfig, format: ConfigFormat) -> ReleaseResult<String> {
  let content = match format {
    ConfigFormat::Json => {
      let mut json = serde_json::to_string_pretty(config)?;
      json.push('\n');
      json
    }
    ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    ConfigFormat::Toml => toml_edit::ser::to_string_pretty(config)?,
  };
  Ok(content)
}

/// Write a release config, choosing the serializer by file name
pub fn save(config: &ReleaseConfig, path: &Path) -> ReleaseResult<()> {
  let format = ConfigFormat::from_path(path)?;
  let content = to_string(config, format)?;
  fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;
  debug!(path = %path.display(), %format, "wrote release config");
  Ok(())
}
