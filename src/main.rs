mod checks;
mod commands;
mod core;
mod logging;
mod release;

use clap::{Parser, Subcommand};
use crate::core::error::{ReleaseError, print_error};
use std::path::PathBuf;

/// Validate, convert and inspect semantic-release configuration
#[derive(Parser)]
#[command(name = "releaserc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Release config file (default: discovered in the current directory)
  #[arg(long, global = true, env = "RELEASERC_CONFIG")]
  config: Option<PathBuf>,

  /// Log diagnostics to stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  // ============================================================================
  // Validation
  // ============================================================================
  /// Check the release config against the schema rules
  Validate {
    /// Release output directory; also checks that every asset matches a file
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Treat warnings as errors (exit code 3)
    #[arg(long)]
    strict: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  // ============================================================================
  // Inspection
  // ============================================================================
  /// Print the normalized release config
  Show {
    /// Output format: json (default), yaml, toml
    #[arg(long, default_value = "json")]
    format: String,
  },

  /// List the files the GitHub step would upload
  Assets {
    /// Release output directory asset paths are resolved against
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// Git tag of the release, e.g. v1.2.0
    #[arg(long)]
    tag: String,
    /// Release channel
    #[arg(long)]
    channel: Option<String>,
    /// Branch being released
    #[arg(long)]
    branch: Option<String>,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Render an asset name template
  Render {
    /// Template, e.g. 'app-${nextRelease.gitTag}.zip'
    template: String,
    /// Git tag of the release, e.g. v1.2.0
    #[arg(long)]
    tag: String,
    /// Release channel
    #[arg(long)]
    channel: Option<String>,
    /// Branch being released
    #[arg(long)]
    branch: Option<String>,
  },

  /// Check whether a branch is eligible to release (exit 1 if not)
  Branch {
    /// Branch name
    name: String,
    /// Output result in JSON format
    #[arg(long)]
    json: bool,
  },

  /// List recognized plugin identifiers
  Plugins {
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  // ============================================================================
  // Authoring
  // ============================================================================
  /// Write a preset release config into the current directory
  Init {
    /// Preset: dockerized (default), minimal
    #[arg(long, default_value = "dockerized")]
    preset: String,
    /// File format: json (default), yaml, toml
    #[arg(long, default_value = "json")]
    format: String,
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
  },

  /// Re-serialize the release config in another format
  Convert {
    /// Target format: json, yaml, toml (default: from --output)
    #[arg(long)]
    to: Option<String>,
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Overwrite an existing output file
    #[arg(long)]
    force: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  let config = cli.config.as_deref();

  let result = match cli.command {
    // Validation
    Commands::Validate { dir, strict, json } => commands::run_validate(config, dir, strict, json),

    // Inspection
    Commands::Show { format } => commands::run_show(config, &format),
    Commands::Assets {
      dir,
      tag,
      channel,
      branch,
      json,
    } => commands::run_assets(config, dir, tag, channel, branch, json),
    Commands::Render {
      template,
      tag,
      channel,
      branch,
    } => commands::run_render(&template, tag, channel, branch),
    Commands::Branch { name, json } => commands::run_branch(config, &name, json),
    Commands::Plugins { json } => commands::run_plugins(json),

    // Authoring
    Commands::Init { preset, format, force } => commands::run_init(&preset, &format, force),
    Commands::Convert { to, output, force } => commands::run_convert(config, to, output, force),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
