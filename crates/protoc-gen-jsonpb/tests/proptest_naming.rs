//! Property-based tests for package resolution and output naming

use jsonpb_core::{CodeGenerationRequest, FileDescriptor, GeneratorConfig};
use proptest::prelude::*;
use protoc_gen_jsonpb::Generator;
use protoc_gen_jsonpb::codegen::{output_file_name, resolve_package_name};

// Strategy: proto-ish file paths, dots and dashes included
fn arb_file_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,8}(/[a-z][a-z0-9_.-]{0,8}){0,3}\\.proto"
}

// Strategy: descriptors with any combination of package and package path
fn arb_descriptor() -> impl Strategy<Value = FileDescriptor> {
    (
        arb_file_name(),
        proptest::option::of("[a-z][a-z0-9_.-]{0,15}"),
        proptest::option::of("[a-z.]{1,10}(/[a-z0-9.-]{1,10}){0,3}(;[a-z][a-z0-9_.-]{0,8})?"),
    )
        .prop_map(|(name, package, package_path)| FileDescriptor {
            name,
            package,
            package_path,
            message_types: Vec::new(),
        })
}

proptest! {
    /// Property: resolved names never contain `.` or `-`
    #[test]
    fn proptest_resolved_name_is_sanitized(file in arb_descriptor()) {
        let resolved = resolve_package_name(&file);

        prop_assert!(!resolved.contains('.'));
        prop_assert!(!resolved.contains('-'));
    }

    /// Property: resolution depends only on the descriptor
    #[test]
    fn proptest_resolution_is_deterministic(file in arb_descriptor()) {
        let copy = file.clone();

        prop_assert_eq!(resolve_package_name(&file), resolve_package_name(&copy));
    }

    /// Property: an alias in the package path always wins
    #[test]
    fn proptest_alias_wins(
        file in arb_descriptor(),
        alias in "[a-z][a-z0-9_]{0,8}",
    ) {
        let path = format!("example.com/any/path;{alias}");
        let file = FileDescriptor { package_path: Some(path), ..file };

        prop_assert_eq!(resolve_package_name(&file), alias);
    }

    /// Property: output names keep the directory and swap the extension
    #[test]
    fn proptest_output_name_replaces_extension(name in arb_file_name()) {
        let output = output_file_name(&name);
        let stem = name.strip_suffix(".proto").unwrap_or(&name);

        prop_assert_eq!(output, format!("{stem}.pb.jsonpb.rs"));
    }

    /// Property: a request that names no files yields no files
    #[test]
    fn proptest_dependencies_only_yield_no_files(
        files in proptest::collection::vec(arb_descriptor(), 0..4),
    ) {
        let mut request = CodeGenerationRequest::new();
        for file in files {
            request = request.with_dependency(file);
        }

        let response = Generator::new(GeneratorConfig::default()).generate(&request);

        prop_assert!(response.is_success());
        prop_assert!(response.files().is_empty());
    }
}
