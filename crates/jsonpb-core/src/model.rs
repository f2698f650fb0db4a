//! Domain model for one plugin invocation
//!
//! These types are a narrowed view of the protoc plugin envelope: only the
//! pieces needed to name a package and enumerate message types survive the
//! conversion from the wire types.

use std::collections::HashSet;

/// Structured description of one schema file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path-like name, e.g. `pkg/msg.proto`
    pub name: String,

    /// Declared schema package, e.g. `foo.bar`
    pub package: Option<String>,

    /// Package-path option, e.g. `example.com/foo/bar;alias`
    pub package_path: Option<String>,

    /// Top-level message types, in declaration order
    pub message_types: Vec<MessageTypeDescriptor>,
}

impl FileDescriptor {
    /// Create a descriptor with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the declared package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set the package-path option
    pub fn with_package_path(mut self, package_path: impl Into<String>) -> Self {
        self.package_path = Some(package_path.into());
        self
    }

    /// Append a message type
    pub fn with_message(mut self, name: impl Into<String>) -> Self {
        self.message_types.push(MessageTypeDescriptor::new(name));
        self
    }
}

/// Structured description of one schema-defined record type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTypeDescriptor {
    /// Name as written in the schema
    pub name: String,
}

impl MessageTypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Decoded generation request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeGenerationRequest {
    /// Names of the descriptors that should produce output
    pub file_to_generate: Vec<String>,

    /// Raw plugin parameter string
    pub parameter: Option<String>,

    /// Every descriptor known to the compilation unit, dependencies first
    pub proto_file: Vec<FileDescriptor>,
}

impl CodeGenerationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor and mark it for generation
    pub fn with_requested_file(mut self, file: FileDescriptor) -> Self {
        self.file_to_generate.push(file.name.clone());
        self.proto_file.push(file);
        self
    }

    /// Add a descriptor that is known but not requested (a dependency)
    pub fn with_dependency(mut self, file: FileDescriptor) -> Self {
        self.proto_file.push(file);
        self
    }

    /// Set the plugin parameter string
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Descriptors named in `file_to_generate`, in descriptor order
    ///
    /// Requested names without a matching descriptor are skipped.
    pub fn requested_files(&self) -> impl Iterator<Item = &FileDescriptor> {
        let requested: HashSet<&str> = self.file_to_generate.iter().map(String::as_str).collect();
        self.proto_file
            .iter()
            .filter(move |file| requested.contains(file.name.as_str()))
    }
}

/// One generated output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to the plugin's output directory
    pub name: String,

    /// Formatted source text
    pub content: String,
}

impl GeneratedFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Outcome of one invocation
///
/// Either every requested file was generated, or nothing was and a single
/// error explains why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeGenerationResponse {
    Success(Vec<GeneratedFile>),
    Failed(String),
}

impl CodeGenerationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, CodeGenerationResponse::Success(_))
    }

    /// Generated files; empty for a failed invocation
    pub fn files(&self) -> &[GeneratedFile] {
        match self {
            CodeGenerationResponse::Success(files) => files,
            CodeGenerationResponse::Failed(_) => &[],
        }
    }

    /// Error message of a failed invocation
    pub fn error(&self) -> Option<&str> {
        match self {
            CodeGenerationResponse::Success(_) => None,
            CodeGenerationResponse::Failed(message) => Some(message),
        }
    }
}

impl<E: std::fmt::Display> From<Result<Vec<GeneratedFile>, E>> for CodeGenerationResponse {
    fn from(result: Result<Vec<GeneratedFile>, E>) -> Self {
        match result {
            Ok(files) => CodeGenerationResponse::Success(files),
            Err(err) => CodeGenerationResponse::Failed(err.to_string()),
        }
    }
}
