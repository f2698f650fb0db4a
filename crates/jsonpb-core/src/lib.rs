//! jsonpb-core - Domain model, configuration and errors
//!
//! This crate provides the foundational types shared by the generator crates:
//! - [`CodeGenerationRequest`] / [`CodeGenerationResponse`] for the plugin exchange
//! - [`FileDescriptor`] and [`MessageTypeDescriptor`] for the schema view
//! - [`GenerateError`] for error handling
//! - [`GeneratorConfig`] for plugin parameters

mod config;
mod error;
mod model;

pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use model::{
    CodeGenerationRequest, CodeGenerationResponse, FileDescriptor, GeneratedFile,
    MessageTypeDescriptor,
};

/// Diagnostic log levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" | "none" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s).ok_or_else(|| GenerateError::Config(format!("unknown log level: {s}")))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodeGenerationRequest, CodeGenerationResponse, FileDescriptor, GenerateError,
        GenerateResult, GeneratedFile, GeneratorConfig, LogLevel, MessageTypeDescriptor,
    };
}
