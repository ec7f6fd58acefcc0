//! # Scopr Common
//!
//! Shared data model for the scope pipeline.
//!
//! * **[`network`]**: prefixes, scope lists, address ranges and resolution results.
//! * **[`error`]**: the error taxonomy returned by parsing and loading.
//! * **[`config`]**: runtime options assembled by the CLI.
//! * **[`log`]**: status macros on top of `tracing`.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
