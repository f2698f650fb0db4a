//! Naming convention utilities for code generation.
//!
//! This module converts schema-side names into the names the generated Rust
//! source and the output file set use.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `foo.bar-baz` | [`sanitize_package_name`] | `foo_bar_baz` |
//! | `http_request` | [`to_type_ident`] | `HttpRequest` |
//! | `a/b/name.proto` | [`output_file_name`] | `a/b/name.pb.jsonpb.rs` |
//! | `a/b/name.proto` | [`file_stem`] | `name` |

use heck::ToUpperCamelCase;

/// Suffix appended to the extension-less descriptor name of every output file.
pub const OUTPUT_SUFFIX: &str = ".pb.jsonpb.rs";

/// Replace the characters a package identifier may not contain.
///
/// Every `.` and every `-` becomes `_`.
///
/// # Examples
///
/// ```
/// use protoc_gen_jsonpb::codegen::naming::sanitize_package_name;
///
/// assert_eq!(sanitize_package_name("foo.bar"), "foo_bar");
/// assert_eq!(sanitize_package_name("my-pkg"), "my_pkg");
/// ```
pub fn sanitize_package_name(name: &str) -> String {
    name.replace(['.', '-'], "_")
}

/// Convert a message type name into the identifier prost gives the struct.
///
/// Applies the same UpperCamelCase conversion prost uses and escapes `Self`.
///
/// # Examples
///
/// ```
/// use protoc_gen_jsonpb::codegen::naming::to_type_ident;
///
/// assert_eq!(to_type_ident("HelloRequest"), "HelloRequest");
/// assert_eq!(to_type_ident("hello_request"), "HelloRequest");
/// assert_eq!(to_type_ident("Self"), "Self_");
/// ```
pub fn to_type_ident(message_name: &str) -> String {
    let mut ident = message_name.to_upper_camel_case();
    if ident == "Self" {
        ident.push('_');
    }
    ident
}

/// Split a slash-separated path into everything before its extension and
/// the extension itself (dot included).
///
/// Only the last path segment is searched, so dots in directory names are
/// never mistaken for an extension.
pub fn split_extension(path: &str) -> (&str, &str) {
    let segment_start = path.rfind('/').map_or(0, |idx| idx + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) => path.split_at(segment_start + dot),
        None => (path, ""),
    }
}

/// Last segment of a slash-separated path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Base name of a path with its extension stripped.
///
/// # Examples
///
/// ```
/// use protoc_gen_jsonpb::codegen::naming::file_stem;
///
/// assert_eq!(file_stem("a/b/name.proto"), "name");
/// assert_eq!(file_stem("name"), "name");
/// ```
pub fn file_stem(path: &str) -> &str {
    split_extension(base_name(path)).0
}

/// Derive the output path for a descriptor name.
///
/// # Examples
///
/// ```
/// use protoc_gen_jsonpb::codegen::naming::output_file_name;
///
/// assert_eq!(output_file_name("pkg/msg.proto"), "pkg/msg.pb.jsonpb.rs");
/// ```
pub fn output_file_name(descriptor_name: &str) -> String {
    let (stem, _) = split_extension(descriptor_name);
    format!("{stem}{OUTPUT_SUFFIX}")
}
