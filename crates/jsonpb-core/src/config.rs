//! Plugin parameter parsing
//!
//! protoc forwards everything after `--jsonpb_opt=` (or the `:` in
//! `--jsonpb_out=<opts>:<dir>`) as a single comma-separated string. Entries
//! are either bare flags or `key=value` pairs.

use crate::error::{GenerateError, GenerateResult};
use crate::LogLevel;
use std::collections::BTreeMap;

/// Generator configuration derived from the request's parameter string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Skip the check that every requested file resolves to one package
    pub allow_multiple_packages: bool,

    /// Per-file package-path overrides (`M<file>=<path>` entries)
    ///
    /// Takes precedence over the package-path option recorded in the
    /// descriptor itself.
    pub package_paths: BTreeMap<String, String>,

    /// Log level requested by the caller, if any
    pub log_level: Option<LogLevel>,
}

impl GeneratorConfig {
    /// Create a configuration with every option at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the plugin parameter string
    ///
    /// A missing or empty parameter yields the default configuration.
    pub fn from_parameter(parameter: Option<&str>) -> GenerateResult<Self> {
        let mut config = Self::default();
        let Some(parameter) = parameter else {
            return Ok(config);
        };

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (entry, None),
            };
            config.apply(key, value)?;
        }

        Ok(config)
    }

    /// Package-path override registered for a descriptor name
    pub fn package_path_for(&self, file_name: &str) -> Option<&str> {
        self.package_paths.get(file_name).map(String::as_str)
    }

    fn apply(&mut self, key: &str, value: Option<&str>) -> GenerateResult<()> {
        match key {
            "allow_multiple_packages" => {
                self.allow_multiple_packages = parse_flag(key, value)?;
            }
            "log_level" => {
                let value = require_value(key, value)?;
                self.log_level = Some(value.parse()?);
            }
            _ if key.len() > 1 && key.starts_with('M') => {
                let value = require_value(key, value)?;
                self.package_paths
                    .insert(key[1..].to_string(), value.to_string());
            }
            _ => {
                return Err(GenerateError::Config(format!("unknown option: {key}")));
            }
        }
        Ok(())
    }
}

fn require_value<'a>(key: &str, value: Option<&'a str>) -> GenerateResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GenerateError::Config(format!("option {key} requires a value"))),
    }
}

fn parse_flag(key: &str, value: Option<&str>) -> GenerateResult<bool> {
    match value {
        None => Ok(true),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(GenerateError::Config(format!(
            "option {key} expects true or false, got {other:?}"
        ))),
    }
}
