//! Release-time views of the config
//!
//! The orchestrator does the actual publishing. This module only computes
//! what it would upload, so the record can be checked against a real build.

pub mod assets;
