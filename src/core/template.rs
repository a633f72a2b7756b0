//! `${...}` placeholders in asset name templates
//!
//! semantic-release evaluates asset names as lodash templates against the
//! release context. Only plain variable lookups are supported here, and only
//! for the variables listed in [`Variable`].

use crate::core::error::{ReleaseError, ReleaseResult, ValidationError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\$\{\s*([^${}]*?)\s*\}").expect("placeholder regex is valid"));

/// Substitution variables known to the release context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
  /// `nextRelease.gitTag`, e.g. `v2.1.0`
  GitTag,
  /// `nextRelease.version`, e.g. `2.1.0`
  Version,
  /// `nextRelease.channel`
  Channel,
  /// `branch.name`
  BranchName,
}

impl Variable {
  pub const ALL: [Variable; 4] = [
    Variable::GitTag,
    Variable::Version,
    Variable::Channel,
    Variable::BranchName,
  ];

  pub fn path(&self) -> &'static str {
    match self {
      Variable::GitTag => "nextRelease.gitTag",
      Variable::Version => "nextRelease.version",
      Variable::Channel => "nextRelease.channel",
      Variable::BranchName => "branch.name",
    }
  }

  pub fn from_path(path: &str) -> Option<Self> {
    Variable::ALL.into_iter().find(|v| v.path() == path)
  }
}

impl fmt::Display for Variable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "${{{}}}", self.path())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Literal(String),
  Placeholder(String),
}

/// A parsed name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
  source: String,
  segments: Vec<Segment>,
}

impl NameTemplate {
  /// Split a template into literal text and placeholders
  ///
  /// Fails on an unterminated `${` or an empty `${}`.
  pub fn parse(source: &str) -> ReleaseResult<Self> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(source) {
      let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
        continue;
      };
      push_literal(&mut segments, source, &source[last..whole.start()])?;
      if expr.as_str().is_empty() {
        return Err(template_error(source, "empty placeholder"));
      }
      segments.push(Segment::Placeholder(expr.as_str().to_string()));
      last = whole.end();
    }
    push_literal(&mut segments, source, &source[last..])?;

    Ok(Self {
      source: source.to_string(),
      segments,
    })
  }

  /// Placeholder expressions in order of appearance
  pub fn placeholders(&self) -> Vec<&str> {
    self
      .segments
      .iter()
      .filter_map(|s| match s {
        Segment::Placeholder(expr) => Some(expr.as_str()),
        Segment::Literal(_) => None,
      })
      .collect()
  }

  /// Placeholders that do not name a known variable
  pub fn unknown_placeholders(&self) -> Vec<&str> {
    self
      .placeholders()
      .into_iter()
      .filter(|expr| Variable::from_path(expr).is_none())
      .collect()
  }

  /// Substitute every placeholder from the context
  pub fn render(&self, ctx: &TemplateContext) -> ReleaseResult<String> {
    let mut out = String::with_capacity(self.source.len());
    for segment in &self.segments {
      match segment {
        Segment::Literal(text) => out.push_str(text),
        Segment::Placeholder(expr) => {
          let var = Variable::from_path(expr)
            .ok_or_else(|| template_error(&self.source, format!("unknown placeholder ${{{}}}", expr)))?;
          let value = ctx
            .value(var)
            .ok_or_else(|| template_error(&self.source, format!("no value for {}", var)))?;
          out.push_str(&value);
        }
      }
    }
    Ok(out)
  }
}

fn push_literal(segments: &mut Vec<Segment>, source: &str, text: &str) -> ReleaseResult<()> {
  if text.contains("${") {
    return Err(template_error(source, "unterminated placeholder"));
  }
  if !text.is_empty() {
    segments.push(Segment::Literal(text.to_string()));
  }
  Ok(())
}

fn template_error(template: &str, reason: impl Into<String>) -> ReleaseError {
  ReleaseError::Validation(ValidationError::Template {
    template: template.to_string(),
    reason: reason.into(),
  })
}

/// Values available to templates at release time
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
  pub git_tag: Option<String>,
  pub version: Option<semver::Version>,
  pub channel: Option<String>,
  pub branch: Option<String>,
}

impl TemplateContext {
  /// Context for a tag; the version is the tag minus a leading `v`, when that is semver
  pub fn from_tag(tag: impl Into<String>) -> Self {
    let tag = tag.into();
    let version = semver::Version::parse(tag.strip_prefix('v').unwrap_or(&tag)).ok();
    Self {
      git_tag: Some(tag),
      version,
      ..Default::default()
    }
  }

  pub fn with_channel(mut self, channel: Option<String>) -> Self {
    self.channel = channel;
    self
  }

  pub fn with_branch(mut self, branch: Option<String>) -> Self {
    self.branch = branch;
    self
  }

  pub fn value(&self, var: Variable) -> Option<String> {
    match var {
      Variable::GitTag => self.git_tag.clone(),
      Variable::Version => self.version.as_ref().map(|v| v.to_string()),
      Variable::Channel => self.channel.clone(),
      Variable::BranchName => self.branch.clone(),
    }
  }
}
