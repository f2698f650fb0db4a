//! Generation orchestrator
//!
//! Walks the requested descriptors in order and runs each one through
//! resolve → synthesize → format. The first failure aborts the invocation
//! and discards everything produced so far, so a response never mixes files
//! with an error.

use crate::codegen::{
    PackageNameResolver, RustFormatter, SourceFormatter, Synthesizer, output_file_name,
};
use jsonpb_core::{
    CodeGenerationRequest, CodeGenerationResponse, FileDescriptor, GenerateError, GenerateResult,
    GeneratedFile, GeneratorConfig,
};
use tracing::{debug, error};

/// Produces JSON-hook sources for a generation request
#[derive(Debug, Clone)]
pub struct Generator<F = RustFormatter> {
    config: GeneratorConfig,
    synthesizer: Synthesizer,
    formatter: F,
}

impl Generator<RustFormatter> {
    /// Create a generator that validates output with [`RustFormatter`]
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_formatter(config, RustFormatter)
    }
}

impl<F: SourceFormatter> Generator<F> {
    /// Create a generator with a custom output validator
    pub fn with_formatter(config: GeneratorConfig, formatter: F) -> Self {
        Self {
            config,
            synthesizer: Synthesizer::new(),
            formatter,
        }
    }

    /// Generate every requested file, folding any failure into the response
    pub fn generate(&self, request: &CodeGenerationRequest) -> CodeGenerationResponse {
        let result = self.try_generate(request);
        if let Err(err) = &result {
            error!(kind = err.kind(), file = err.file(), "{err}");
        }
        result.into()
    }

    /// Generate every requested file, stopping at the first failure
    pub fn try_generate(
        &self,
        request: &CodeGenerationRequest,
    ) -> GenerateResult<Vec<GeneratedFile>> {
        debug!(
            requested = request.file_to_generate.len(),
            known = request.proto_file.len(),
            "generation request"
        );

        let resolver = PackageNameResolver::new(&self.config);
        let mut first_package: Option<(String, &str)> = None;
        let mut files = Vec::new();

        for file in request.requested_files() {
            let package = resolver.resolve(file);

            if !self.config.allow_multiple_packages {
                let (expected, first_file) = first_package
                    .get_or_insert_with(|| (package.clone(), file.name.as_str()));
                if *expected != package {
                    return Err(GenerateError::MultiplePackages {
                        first_package: expected.clone(),
                        first_file: (*first_file).to_string(),
                        second_package: package,
                        second_file: file.name.clone(),
                    });
                }
            }

            let generated = self.generate_file(&package, file)?;
            debug!(
                source = %file.name,
                output = %generated.name,
                package = %package,
                messages = file.message_types.len(),
                "generated"
            );
            files.push(generated);
        }

        Ok(files)
    }

    fn generate_file(&self, package: &str, file: &FileDescriptor) -> GenerateResult<GeneratedFile> {
        let source = self.synthesizer.synthesize(package, file)?;

        let content = self.formatter.format(&source).map_err(|err| {
            error!(
                file = %file.name,
                line = err.line,
                column = err.column,
                source_text = %source,
                "synthesized source failed validation: {}",
                err.message
            );
            GenerateError::Format {
                file: file.name.clone(),
                reason: err.to_string(),
            }
        })?;

        Ok(GeneratedFile::new(output_file_name(&file.name), content))
    }
}

/// Handle one decoded request end to end
///
/// Plugin parameters are parsed from the request itself; a malformed
/// parameter fails the invocation like any other generation error.
pub fn run(request: &CodeGenerationRequest) -> CodeGenerationResponse {
    let config = match GeneratorConfig::from_parameter(request.parameter.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!(kind = err.kind(), "{err}");
            return CodeGenerationResponse::Failed(err.to_string());
        }
    };

    if let Some(level) = config.log_level {
        jsonpb_logging::set_level(level);
    }

    Generator::new(config).generate(request)
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
