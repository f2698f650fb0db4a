//! jsonpb-logging - Diagnostic logging for the plugin
//!
//! This crate provides:
//! - [`init_logging`] to install a `tracing` subscriber that writes to stderr
//! - [`ReloadHandle`] to change the level once the plugin parameters are known
//!
//! Stdout carries the encoded response, so nothing here ever writes to it.

mod layer;
mod reload;

pub use jsonpb_core::LogLevel;
pub use layer::{LOG_ENV_VAR, init_logging, level_from_env, set_level};
pub use reload::{ReloadError, ReloadHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging, set_level};
}
