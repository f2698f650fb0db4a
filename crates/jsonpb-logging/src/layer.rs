//! Subscriber setup

use crate::reload::{ReloadHandle, level_filter};
use jsonpb_core::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

/// Environment variable consulted for the initial log level
pub const LOG_ENV_VAR: &str = "PROTOC_GEN_JSONPB_LOG";

/// Read the initial log level from [`LOG_ENV_VAR`]
///
/// Returns `None` when the variable is unset or holds an unknown level.
pub fn level_from_env() -> Option<LogLevel> {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| LogLevel::parse(&value))
}

/// Initialize logging to stderr at the given level
///
/// The level filter is installed behind a reload layer whose handle is kept
/// in [`ReloadHandle::global`], so [`set_level`] can change it later. Call
/// this once at startup; later calls leave the first subscriber in place.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let (filter, handle) =
        reload::Layer::<LevelFilter, Registry>::new(level_filter(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // Ignore the error if a subscriber is already installed
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().install(handle);
    }
}

/// Change the level of the global subscriber
///
/// A no-op before [`init_logging`] has run.
pub fn set_level(level: LogLevel) {
    if let Err(err) = ReloadHandle::global().set_level(level) {
        tracing::debug!(%level, error = %err, "log level not changed");
    }
}
