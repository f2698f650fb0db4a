#![allow(non_snake_case)]

use super::*;
use crate::codegen::FormatError;
use std::cell::Cell;
use test_case::test_case;

/// Formatter that rejects any source generated from `reject` and counts calls
struct RejectingFormatter {
    reject: &'static str,
    calls: Cell<usize>,
}

impl RejectingFormatter {
    fn new(reject: &'static str) -> Self {
        Self {
            reject,
            calls: Cell::new(0),
        }
    }
}

impl SourceFormatter for RejectingFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        self.calls.set(self.calls.get() + 1);
        if source.contains(&format!("// source: {}\n", self.reject)) {
            return Err(FormatError {
                message: "rejected".into(),
                line: 1,
                column: 0,
            });
        }
        Ok(source.to_string())
    }
}

fn file(name: &str, package: &str) -> FileDescriptor {
    FileDescriptor::new(name)
        .with_package(package)
        .with_message("Thing")
}

// Generator::generate tests

#[test]
fn Generator___empty_request___succeeds_with_no_files() {
    let response = Generator::new(GeneratorConfig::default()).generate(&CodeGenerationRequest::new());

    assert_eq!(response, CodeGenerationResponse::Success(vec![]));
}

#[test]
fn Generator___only_dependencies___succeeds_with_no_files() {
    let request = CodeGenerationRequest::new().with_dependency(file("dep.proto", "dep"));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.is_success());
    assert!(response.files().is_empty());
}

#[test]
fn Generator___requested_file___emits_derived_output_name() {
    let request = CodeGenerationRequest::new()
        .with_dependency(file("dep/dep.proto", "pkg"))
        .with_requested_file(file("pkg/msg.proto", "pkg"));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    let names: Vec<_> = response.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["pkg/msg.pb.jsonpb.rs"]);
}

#[test]
fn Generator___multiple_files___preserve_descriptor_order() {
    let mut request = CodeGenerationRequest::new()
        .with_requested_file(file("b.proto", "pkg"))
        .with_requested_file(file("a.proto", "pkg"));
    request.file_to_generate.reverse();

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    let names: Vec<_> = response.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["b.pb.jsonpb.rs", "a.pb.jsonpb.rs"]);
}

#[test]
fn Generator___zero_messages___emits_formatted_header_only() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(FileDescriptor::new("empty.proto").with_package("empty"));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    let expected = RustFormatter
        .format(&Synthesizer::new().synthesize("empty", &request.proto_file[0]).unwrap())
        .unwrap();
    assert_eq!(response.files()[0].content, expected);
    assert!(!expected.contains("impl "));
}

#[test]
fn Generator___same_request___is_byte_identical() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "pkg").with_message("Other"));
    let generator = Generator::new(GeneratorConfig::default());

    assert_eq!(generator.generate(&request), generator.generate(&request));
}

#[test]
fn Generator___keyword_package___fails_validation() {
    let request = CodeGenerationRequest::new().with_requested_file(file("m.proto", "match"));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.files().is_empty());
    let message = response.error().unwrap();
    assert!(message.starts_with("generated source for m.proto is not valid Rust: "));
}

#[test_case("self" ; "self keyword")]
#[test_case("super" ; "super keyword")]
#[test_case("crate" ; "crate keyword")]
#[test_case("Self" ; "self type keyword")]
fn Generator___reserved_segment_package___fails(package: &str) {
    let request = CodeGenerationRequest::new().with_requested_file(file("m.proto", package));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.files().is_empty());
    let expected =
        format!("failed to synthesize m.proto: package name {package:?} is a reserved path segment");
    assert_eq!(response.error(), Some(expected.as_str()));
}

#[test]
fn Generator___reserved_segment_alias___fails() {
    let request = CodeGenerationRequest::new().with_requested_file(
        FileDescriptor::new("m.proto")
            .with_package_path("example.com/x;self")
            .with_message("Thing"),
    );

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.files().is_empty());
    assert!(response.error().unwrap().starts_with("failed to synthesize m.proto: "));
}

// Fail-fast tests

#[test]
fn Generator___failing_file___discards_earlier_output() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "pkg"))
        .with_requested_file(file("b.proto", "pkg"));
    let generator =
        Generator::with_formatter(GeneratorConfig::default(), RejectingFormatter::new("b.proto"));

    let response = generator.generate(&request);

    assert_eq!(
        response,
        CodeGenerationResponse::Failed(
            "generated source for b.proto is not valid Rust: rejected (line 1, column 0)".into()
        )
    );
}

#[test]
fn Generator___failing_file___stops_processing_later_files() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "pkg"))
        .with_requested_file(file("b.proto", "pkg"))
        .with_requested_file(file("c.proto", "pkg"));
    let formatter = RejectingFormatter::new("a.proto");
    let generator = Generator::with_formatter(GeneratorConfig::default(), formatter);

    let result = generator.try_generate(&request);

    assert!(matches!(result, Err(GenerateError::Format { ref file, .. }) if file == "a.proto"));
    assert_eq!(generator.formatter.calls.get(), 1);
}

#[test]
fn Generator___synthesis_failure___fails_invocation() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "pkg"))
        .with_requested_file(FileDescriptor::new("b.proto").with_package("pkg").with_message(""));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.files().is_empty());
    assert_eq!(
        response.error(),
        Some("failed to synthesize b.proto: message type #0 has no name")
    );
}

// Multi-package tests

#[test]
fn Generator___different_packages___fail() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "foo"))
        .with_requested_file(file("b.proto", "bar"));

    let result = Generator::new(GeneratorConfig::default()).try_generate(&request);

    assert_eq!(
        result.unwrap_err().to_string(),
        "files in one request must share a package: foo (a.proto) vs bar (b.proto)"
    );
}

#[test]
fn Generator___different_packages_allowed___succeeds() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "foo"))
        .with_requested_file(file("b.proto", "bar"));
    let config = GeneratorConfig::from_parameter(Some("allow_multiple_packages")).unwrap();

    let response = Generator::new(config).generate(&request);

    assert_eq!(response.files().len(), 2);
}

#[test]
fn Generator___packages_equal_after_sanitizing___succeeds() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "foo.bar"))
        .with_requested_file(file("b.proto", "foo_bar"));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.is_success());
}

#[test]
fn Generator___dependency_in_other_package___is_not_checked() {
    let request = CodeGenerationRequest::new()
        .with_dependency(file("dep.proto", "other"))
        .with_requested_file(file("a.proto", "pkg"));

    let response = Generator::new(GeneratorConfig::default()).generate(&request);

    assert!(response.is_success());
}

// run tests

#[test]
fn run___no_parameter___generates() {
    let request = CodeGenerationRequest::new().with_requested_file(file("a.proto", "pkg"));

    let response = run(&request);

    assert!(response.is_success());
    assert_eq!(response.files().len(), 1);
}

#[test]
fn run___unknown_parameter___fails_without_files() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "pkg"))
        .with_parameter("bogus=1");

    let response = run(&request);

    assert!(response.files().is_empty());
    assert!(response.error().unwrap().starts_with("invalid plugin parameter: "));
}

#[test]
fn run___package_override___changes_package_declaration() {
    let request = CodeGenerationRequest::new()
        .with_requested_file(file("a.proto", "pkg"))
        .with_parameter("Ma.proto=example.com/x;renamed");

    let response = run(&request);

    assert!(response.files()[0].content.contains("use self::renamed as pkg;"));
}
