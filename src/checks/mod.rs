//! Validation infrastructure for release configs
//!
//! Every schema rule implements the `Check` trait and is registered in
//! `create_default_runner()`.
//!
//! # Built-in Checks
//!
//! - **branches**: at least one branch, valid names and patterns
//! - **plugin-order**: analysis before notes/changelog before publishing
//! - **plugin-dependencies**: consuming steps have their producer configured
//! - **duplicate-plugins**: a plugin listed more than once
//! - **assets**: GitHub assets have path, label and a valid name template
//! - **git-assets**: git step patterns are valid globs
//! - **asset-files**: assets exist in the output directory (needs `--dir`)

mod assets;
mod branches;
mod plugins;
mod runner;
mod trait_def;

pub use runner::create_default_runner;
pub use trait_def::{CheckContext, Severity};
