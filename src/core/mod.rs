//! Core building blocks for releaserc
//!
//! - **config**: the release configuration record and its plugin/asset types
//! - **error**: error types with exit codes and contextual help messages
//! - **loader**: config discovery, format detection, parse and write
//! - **preset**: built-in release configurations
//! - **template**: `${...}` placeholder parsing and rendering

pub mod config;
pub mod error;
pub mod loader;
pub mod preset;
pub mod template;
