//! Runtime level changes for the installed subscriber
//!
//! The initial level is only a guess: protoc passes the plugin parameters
//! inside the request, so a `log_level` option can only be honored after the
//! subscriber is already running.

use jsonpb_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use thiserror::Error;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, Registry>;

const LEVELS: [LogLevel; 6] = [
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Off,
];

/// Why a level change did not take effect
#[derive(Debug, Error)]
pub enum ReloadError {
    #[error("logging has not been initialized")]
    NotInitialized,

    #[error("subscriber rejected the new filter: {0}")]
    Rejected(#[from] reload::Error),
}

/// Holds the reload handle of the level filter layer
pub struct ReloadHandle {
    filter: Mutex<Option<FilterHandle>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            filter: Mutex::new(None),
        }
    }

    /// Process-wide handle used by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        static GLOBAL: OnceCell<ReloadHandle> = OnceCell::new();
        GLOBAL.get_or_init(ReloadHandle::new)
    }

    /// Register the filter handle of an installed subscriber
    pub fn install(&self, handle: FilterHandle) {
        *self.filter.lock() = Some(handle);
    }

    pub fn is_installed(&self) -> bool {
        self.filter.lock().is_some()
    }

    /// Swap the level filter for `level`
    pub fn set_level(&self, level: LogLevel) -> Result<(), ReloadError> {
        let guard = self.filter.lock();
        let handle = guard.as_ref().ok_or(ReloadError::NotInitialized)?;
        handle.reload(level_filter(level))?;
        Ok(())
    }

    /// Level currently in effect, if a subscriber is installed
    pub fn level(&self) -> Option<LogLevel> {
        let guard = self.filter.lock();
        guard
            .as_ref()
            .and_then(FilterHandle::clone_current)
            .map(level_from_filter)
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

fn level_from_filter(filter: LevelFilter) -> LogLevel {
    LEVELS
        .into_iter()
        .find(|level| level_filter(*level) == filter)
        .unwrap_or(LogLevel::Off)
}
