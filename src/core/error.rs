//! Error types for releaserc with contextual messages and exit codes
//!
//! Every error maps to an exit code and may carry a help line that is printed
//! below the error message.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for releaserc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (checks failed)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for releaserc
#[derive(Debug)]
pub enum ReleaseError {
  /// Configuration errors
  Config(ConfigError),

  /// Validation errors
  Validation(ValidationError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context, help } => ReleaseError::Message {
        message: ctx_str,
        context: Some(context.map(|c| format!("{}\n{}", message, c)).unwrap_or(message)),
        help,
      },
      ReleaseError::Io(err) => ReleaseError::Message {
        message: ctx_str,
        context: Some(format!("I/O error: {}", err)),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Validation(_) => ExitCode::Validation,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Validation(e) => e.help_message(),
      ReleaseError::Message { help, .. } => help.clone(),
      ReleaseError::Io(_) => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Validation(e) => write!(f, "{}", e),
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n  {}", ctx.replace('\n', "\n  "))?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<String> for ReleaseError {
  fn from(msg: String) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<&str> for ReleaseError {
  fn from(msg: &str) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("JSON error: {}", err))
  }
}

impl From<serde_yaml::Error> for ReleaseError {
  fn from(err: serde_yaml::Error) -> Self {
    ReleaseError::message(format!("YAML error: {}", err))
  }
}

impl From<toml_edit::de::Error> for ReleaseError {
  fn from(err: toml_edit::de::Error) -> Self {
    ReleaseError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<toml_edit::ser::Error> for ReleaseError {
  fn from(err: toml_edit::ser::Error) -> Self {
    ReleaseError::message(format!("TOML serialization error: {}", err))
  }
}

impl From<glob::PatternError> for ReleaseError {
  fn from(err: glob::PatternError) -> Self {
    ReleaseError::message(format!("Invalid glob pattern: {}", err))
  }
}

impl From<glob::GlobError> for ReleaseError {
  fn from(err: glob::GlobError) -> Self {
    ReleaseError::message(format!("Glob traversal error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// No configuration file in the search locations
  NotFound { dir: PathBuf },

  /// Configuration is written in JavaScript, which cannot be read statically
  Script { path: PathBuf },

  /// File extension does not map to a supported format
  UnsupportedFormat { path: PathBuf },

  /// Plugin identifier outside the recognized set
  UnknownPlugin { id: String },

  /// Preset name not known
  UnknownPreset { name: String },

  /// Refusing to overwrite an existing file
  AlreadyExists { path: PathBuf },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Run `releaserc init` to create a configuration file, or pass --config <file>.".to_string())
      }
      ConfigError::Script { .. } => Some(
        "Convert the declaration to .releaserc.json (or run `releaserc init --preset dockerized`).".to_string(),
      ),
      ConfigError::UnsupportedFormat { .. } => Some("Supported formats: json, yaml, toml.".to_string()),
      ConfigError::UnknownPlugin { .. } => Some("Run `releaserc plugins` to list recognized identifiers.".to_string()),
      ConfigError::UnknownPreset { .. } => Some("Available presets: dockerized, minimal.".to_string()),
      ConfigError::AlreadyExists { .. } => Some("Pass --force to overwrite it.".to_string()),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { dir } => {
        write!(f, "No release configuration found in {}", dir.display())
      }
      ConfigError::Script { path } => {
        write!(f, "JavaScript release configuration is not supported: {}", path.display())
      }
      ConfigError::UnsupportedFormat { path } => {
        write!(f, "Unsupported configuration format: {}", path.display())
      }
      ConfigError::UnknownPlugin { id } => {
        write!(f, "Unknown plugin identifier '{}'", id)
      }
      ConfigError::UnknownPreset { name } => {
        write!(f, "Unknown preset '{}'", name)
      }
      ConfigError::AlreadyExists { path } => {
        write!(f, "File already exists: {}", path.display())
      }
    }
  }
}

/// Validation errors
#[derive(Debug)]
pub enum ValidationError {
  /// One or more checks reported failures
  ChecksFailed { errors: usize, warnings: usize },

  /// Template could not be parsed or rendered
  Template { template: String, reason: String },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::ChecksFailed { .. } => Some("Run `releaserc validate` for the full report.".to_string()),
      ValidationError::Template { .. } => Some(
        "Known placeholders: ${nextRelease.gitTag}, ${nextRelease.version}, ${nextRelease.channel}, ${branch.name}"
          .to_string(),
      ),
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::ChecksFailed { errors, warnings } => {
        write!(f, "Validation failed: {} error(s), {} warning(s)", errors, warnings)
      }
      ValidationError::Template { template, reason } => {
        write!(f, "Invalid template '{}': {}", template, reason)
      }
    }
  }
}

/// Result type alias for releaserc
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Print an error to stderr with help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
