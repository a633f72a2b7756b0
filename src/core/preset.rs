//! Built-in release configurations

use crate::core::config::{Asset, GithubOptions, PluginEntry, PluginId, ReleaseConfig};
use crate::core::error::{ConfigError, ReleaseError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  /// The dockerized project declaration: Windows ZIP uploaded with a tagged name
  Dockerized,
  /// Analyzer, notes and a GitHub release with every ZIP under `release/`
  Minimal,
}

impl Preset {
  pub const ALL: [Preset; 2] = [Preset::Dockerized, Preset::Minimal];

  pub fn as_str(&self) -> &'static str {
    match self {
      Preset::Dockerized => "dockerized",
      Preset::Minimal => "minimal",
    }
  }

  pub fn build(&self) -> ReleaseConfig {
    match self {
      Preset::Dockerized => dockerized(),
      Preset::Minimal => minimal(),
    }
  }
}

impl fmt::Display for Preset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Preset {
  type Err = ReleaseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Preset::ALL
      .into_iter()
      .find(|p| p.as_str() == s)
      .ok_or_else(|| ReleaseError::Config(ConfigError::UnknownPreset { name: s.to_string() }))
  }
}

pub fn dockerized() -> ReleaseConfig {
  ReleaseConfig::new(
    vec![
      "master".into(),
      "feature/semantic-release".into(),
      "feature/semantic-release-build".into(),
    ],
    vec![
      PluginEntry::bare(PluginId::CommitAnalyzer),
      PluginEntry::bare(PluginId::ReleaseNotesGenerator),
      PluginEntry::Github(GithubOptions {
        assets: vec![
          Asset::new("release/windows64.zip", "Windows (64bit)").with_name("dockerized-${nextRelease.gitTag}-win64.zip"),
        ],
        ..Default::default()
      }),
      PluginEntry::bare(PluginId::Changelog),
      PluginEntry::bare(PluginId::Git),
    ],
  )
}

pub fn minimal() -> ReleaseConfig {
  ReleaseConfig::new(
    vec!["main".into()],
    vec![
      PluginEntry::bare(PluginId::CommitAnalyzer),
      PluginEntry::bare(PluginId::ReleaseNotesGenerator),
      PluginEntry::Github(GithubOptions {
        assets: vec![Asset::new("release/*.zip", "Binary distribution")],
        ..Default::default()
      }),
    ],
  )
}
