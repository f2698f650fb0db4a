//! Error types for code generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Every variant ends up in the response's error field; none of them
/// terminates the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Plugin parameter could not be understood
    #[error("invalid plugin parameter: {0}")]
    Config(String),

    /// Template application failed
    #[error("failed to synthesize {file}: {reason}")]
    Synthesis { file: String, reason: String },

    /// Synthesized text is not well-formed source
    #[error("generated source for {file} is not valid Rust: {reason}")]
    Format { file: String, reason: String },

    /// Requested files resolve to different package identifiers
    #[error(
        "files in one request must share a package: {first_package} ({first_file}) vs {second_package} ({second_file})"
    )]
    MultiplePackages {
        first_package: String,
        first_file: String,
        second_package: String,
        second_file: String,
    },
}

impl GenerateError {
    /// Short machine-friendly category, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateError::Config(_) => "config",
            GenerateError::Synthesis { .. } => "synthesis",
            GenerateError::Format { .. } => "format",
            GenerateError::MultiplePackages { .. } => "multiple_packages",
        }
    }

    /// Name of the descriptor the failure is attributed to, if any
    pub fn file(&self) -> Option<&str> {
        match self {
            GenerateError::Synthesis { file, .. } | GenerateError::Format { file, .. } => {
                Some(file)
            }
            GenerateError::MultiplePackages { second_file, .. } => Some(second_file),
            GenerateError::Config(_) => None,
        }
    }
}
