//! The release configuration record
//!
//! A `ReleaseConfig` is the whole declaration handed to semantic-release:
//! branches that may publish, and the ordered plugin chain. Assets are an
//! option of the GitHub step and are surfaced through [`ReleaseConfig::assets`].
//!
//! Plugins are a closed set. Each entry carries a typed options struct, and
//! options this crate does not model are kept in an ordered `extra` map so a
//! parse/serialize round-trip never drops anything.

use crate::core::error::{ConfigError, ReleaseError};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Release configuration, as read from `.releaserc` and friends
///
/// # Example
///
/// ```json
/// {
///   "branches": ["master"],
///   "plugins": [
///     "@semantic-release/commit-analyzer",
///     "@semantic-release/release-notes-generator",
///     ["@semantic-release/github", {
///       "assets": [{ "path": "release/*.zip", "label": "Binary distribution" }]
///     }]
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Branches eligible to produce a release, in priority order
  #[serde(default)]
  pub branches: Vec<BranchSpec>,

  /// Plugin chain, executed in listed order
  #[serde(default)]
  pub plugins: Vec<PluginEntry>,

  /// Top-level options not modelled here (tagFormat, repositoryUrl, ...)
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ReleaseConfig {
  pub fn new(branches: Vec<BranchSpec>, plugins: Vec<PluginEntry>) -> Self {
    Self {
      branches,
      plugins,
      extra: Map::new(),
    }
  }

  /// All assets attached by GitHub steps, in plugin order
  pub fn assets(&self) -> Vec<&Asset> {
    self
      .plugins
      .iter()
      .filter_map(|p| match p {
        PluginEntry::Github(opts) => Some(opts.assets.iter()),
        _ => None,
      })
      .flatten()
      .collect()
  }

  /// Plugin identifiers in execution order
  pub fn plugin_ids(&self) -> Vec<PluginId> {
    self.plugins.iter().map(PluginEntry::id).collect()
  }

  /// First plugin entry with the given identifier
  pub fn find_plugin(&self, id: PluginId) -> Option<&PluginEntry> {
    self.plugins.iter().find(|p| p.id() == id)
  }

  /// Indices of every entry with the given identifier
  pub fn positions(&self, id: PluginId) -> Vec<usize> {
    self
      .plugins
      .iter()
      .enumerate()
      .filter(|(_, p)| p.id() == id)
      .map(|(i, _)| i)
      .collect()
  }

  /// Index of the first entry with the given identifier
  pub fn position(&self, id: PluginId) -> Option<usize> {
    self.plugins.iter().position(|p| p.id() == id)
  }

  /// Check whether a branch name is eligible to release
  pub fn matches_branch(&self, branch: &str) -> bool {
    self.matching_branch(branch).is_some()
  }

  /// Branch spec that makes `branch` eligible, if any
  pub fn matching_branch(&self, branch: &str) -> Option<&BranchSpec> {
    self.branches.iter().find(|spec| spec.matches(branch))
  }
}

// ============================================================================
// Branches
// ============================================================================

/// A branch entry: a bare name/pattern or an object with release channel info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BranchSpec {
  Name(String),
  Detailed(BranchObject),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchObject {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub channel: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub prerelease: Option<Prerelease>,
  /// Keys such as a maintenance branch's `range`
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// `prerelease: true` uses the branch name as identifier, a string overrides it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prerelease {
  Flag(bool),
  Id(String),
}

impl BranchSpec {
  /// The name or pattern of this branch entry
  pub fn name(&self) -> &str {
    match self {
      BranchSpec::Name(name) => name,
      BranchSpec::Detailed(obj) => &obj.name,
    }
  }

  pub fn channel(&self) -> Option<&str> {
    match self {
      BranchSpec::Name(_) => None,
      BranchSpec::Detailed(obj) => obj.channel.as_deref(),
    }
  }

  pub fn is_prerelease(&self) -> bool {
    match self {
      BranchSpec::Detailed(BranchObject {
        prerelease: Some(Prerelease::Flag(flag)),
        ..
      }) => *flag,
      BranchSpec::Detailed(BranchObject {
        prerelease: Some(Prerelease::Id(_)),
        ..
      }) => true,
      _ => false,
    }
  }

  /// Whether the name contains glob metacharacters
  pub fn is_pattern(&self) -> bool {
    self.name().contains(['*', '?', '['])
  }

  /// Match a concrete branch name against this entry
  ///
  /// Wildcards stay within one path segment, so `feature/*` does not match
  /// `feature/a/b`. Patterns that fail to compile fall back to exact comparison.
  pub fn matches(&self, branch: &str) -> bool {
    let name = self.name();
    if !self.is_pattern() {
      return name == branch;
    }
    let options = glob::MatchOptions {
      require_literal_separator: true,
      ..glob::MatchOptions::new()
    };
    glob::Pattern::new(name)
      .map(|p| p.matches_with(branch, options))
      .unwrap_or(name == branch)
  }
}

impl From<&str> for BranchSpec {
  fn from(name: &str) -> Self {
    BranchSpec::Name(name.to_string())
  }
}

// ============================================================================
// Plugins
// ============================================================================

/// Recognized plugin identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginId {
  CommitAnalyzer,
  ReleaseNotesGenerator,
  Github,
  Changelog,
  Git,
}

const SCOPE: &str = "@semantic-release/";

impl PluginId {
  pub const ALL: [PluginId; 5] = [
    PluginId::CommitAnalyzer,
    PluginId::ReleaseNotesGenerator,
    PluginId::Github,
    PluginId::Changelog,
    PluginId::Git,
  ];

  /// Fully scoped package identifier
  pub fn as_str(&self) -> &'static str {
    match self {
      PluginId::CommitAnalyzer => "@semantic-release/commit-analyzer",
      PluginId::ReleaseNotesGenerator => "@semantic-release/release-notes-generator",
      PluginId::Github => "@semantic-release/github",
      PluginId::Changelog => "@semantic-release/changelog",
      PluginId::Git => "@semantic-release/git",
    }
  }

  /// Identifier without the `@semantic-release/` scope
  pub fn short_name(&self) -> &'static str {
    &self.as_str()[SCOPE.len()..]
  }

  pub fn description(&self) -> &'static str {
    match self {
      PluginId::CommitAnalyzer => "Determine the release type from commit messages",
      PluginId::ReleaseNotesGenerator => "Generate release notes from commits",
      PluginId::Github => "Publish a GitHub release and upload assets",
      PluginId::Changelog => "Write release notes to a changelog file",
      PluginId::Git => "Commit release artifacts back to the repository",
    }
  }
}

impl fmt::Display for PluginId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PluginId {
  type Err = ReleaseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let short = s.strip_prefix(SCOPE).unwrap_or(s);
    PluginId::ALL
      .into_iter()
      .find(|id| id.short_name() == short)
      .ok_or_else(|| ReleaseError::Config(ConfigError::UnknownPlugin { id: s.to_string() }))
  }
}

/// A plugin in the chain with its typed options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginEntry {
  CommitAnalyzer(CommitAnalyzerOptions),
  ReleaseNotesGenerator(ReleaseNotesOptions),
  Github(GithubOptions),
  Changelog(ChangelogOptions),
  Git(GitOptions),
}

impl PluginEntry {
  /// Entry with default options (serialized as a bare identifier)
  pub fn bare(id: PluginId) -> Self {
    match id {
      PluginId::CommitAnalyzer => PluginEntry::CommitAnalyzer(Default::default()),
      PluginId::ReleaseNotesGenerator => PluginEntry::ReleaseNotesGenerator(Default::default()),
      PluginId::Github => PluginEntry::Github(Default::default()),
      PluginId::Changelog => PluginEntry::Changelog(Default::default()),
      PluginId::Git => PluginEntry::Git(Default::default()),
    }
  }

  pub fn id(&self) -> PluginId {
    match self {
      PluginEntry::CommitAnalyzer(_) => PluginId::CommitAnalyzer,
      PluginEntry::ReleaseNotesGenerator(_) => PluginId::ReleaseNotesGenerator,
      PluginEntry::Github(_) => PluginId::Github,
      PluginEntry::Changelog(_) => PluginId::Changelog,
      PluginEntry::Git(_) => PluginId::Git,
    }
  }

  /// True when no option differs from the plugin's defaults
  pub fn has_default_options(&self) -> bool {
    match self {
      PluginEntry::CommitAnalyzer(o) => o.preset.is_none() && o.extra.is_empty(),
      PluginEntry::ReleaseNotesGenerator(o) => o.preset.is_none() && o.extra.is_empty(),
      PluginEntry::Github(o) => o.assets.is_empty() && o.extra.is_empty(),
      PluginEntry::Changelog(o) => o.changelog_file.is_none() && o.changelog_title.is_none() && o.extra.is_empty(),
      PluginEntry::Git(o) => o.assets.is_none() && o.message.is_none() && o.extra.is_empty(),
    }
  }

  fn from_parts<E: de::Error>(id: PluginId, options: Value) -> Result<Self, E> {
    let entry = match id {
      PluginId::CommitAnalyzer => PluginEntry::CommitAnalyzer(serde_json::from_value(options).map_err(E::custom)?),
      PluginId::ReleaseNotesGenerator => {
        PluginEntry::ReleaseNotesGenerator(serde_json::from_value(options).map_err(E::custom)?)
      }
      PluginId::Github => PluginEntry::Github(serde_json::from_value(options).map_err(E::custom)?),
      PluginId::Changelog => PluginEntry::Changelog(serde_json::from_value(options).map_err(E::custom)?),
      PluginId::Git => PluginEntry::Git(serde_json::from_value(options).map_err(E::custom)?),
    };
    Ok(entry)
  }
}

impl Serialize for PluginEntry {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let id = self.id().as_str();
    if self.has_default_options() {
      return serializer.serialize_str(id);
    }

    let mut pair = serializer.serialize_tuple(2)?;
    pair.serialize_element(id)?;
    match self {
      PluginEntry::CommitAnalyzer(o) => pair.serialize_element(o)?,
      PluginEntry::ReleaseNotesGenerator(o) => pair.serialize_element(o)?,
      PluginEntry::Github(o) => pair.serialize_element(o)?,
      PluginEntry::Changelog(o) => pair.serialize_element(o)?,
      PluginEntry::Git(o) => pair.serialize_element(o)?,
    }
    pair.end()
  }
}

/// Wire shape of a plugin entry: `"id"` or `["id", { options }]`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPluginEntry {
  Bare(String),
  Pair(String, Value),
}

impl<'de> Deserialize<'de> for PluginEntry {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = RawPluginEntry::deserialize(deserializer).map_err(|_| {
      <D::Error as de::Error>::custom("plugin entry must be an identifier or an [identifier, options] pair")
    })?;
    let (id, options) = match raw {
      RawPluginEntry::Bare(id) => (id, Value::Object(Map::new())),
      RawPluginEntry::Pair(id, options) => (id, options),
    };
    let id = PluginId::from_str(&id).map_err(<D::Error as de::Error>::custom)?;
    if !options.is_object() {
      return Err(de::Error::custom(format!("options for {} must be an object", id)));
    }
    PluginEntry::from_parts(id, options)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAnalyzerOptions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub preset: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotesOptions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub preset: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubOptions {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub assets: Vec<Asset>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogOptions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub changelog_file: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub changelog_title: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitOptions {
  /// Files to commit back (globs relative to the repository root)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assets: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

// ============================================================================
// Assets
// ============================================================================

/// A build artifact uploaded to the GitHub release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
  /// Literal path or glob, relative to the release output directory
  pub path: String,
  /// Label shown on the release page
  #[serde(default)]
  pub label: String,
  /// Upload file name template; defaults to the matched file name
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

impl Asset {
  pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      label: label.into(),
      name: None,
    }
  }

  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn is_glob(&self) -> bool {
    self.path.contains(['*', '?', '['])
  }
}
