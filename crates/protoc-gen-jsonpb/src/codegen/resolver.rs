//! Package name resolution.
//!
//! Every generated file names the module that holds the prost types it
//! attaches hooks to. That module name is derived from the descriptor, in
//! priority order:
//!
//! 1. the package-path option (`example.com/foo/bar;alias`): the alias after
//!    the last `;` if present, otherwise the last `/` segment;
//! 2. the declared `package`, verbatim;
//! 3. the file's base name without extension.
//!
//! The result is then sanitized with
//! [`sanitize_package_name`](super::naming::sanitize_package_name).

use super::naming::{file_stem, sanitize_package_name};
use jsonpb_core::{FileDescriptor, GeneratorConfig};

/// Resolves package identifiers, honoring per-file overrides from the
/// plugin parameters.
#[derive(Debug, Clone, Copy)]
pub struct PackageNameResolver<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> PackageNameResolver<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Resolve the sanitized package identifier for `file`.
    pub fn resolve(&self, file: &FileDescriptor) -> String {
        let package_path = self
            .config
            .package_path_for(&file.name)
            .or(file.package_path.as_deref());
        sanitize_package_name(package_identity(file, package_path))
    }
}

/// Resolve the sanitized package identifier for `file` using only what the
/// descriptor itself records.
pub fn resolve_package_name(file: &FileDescriptor) -> String {
    sanitize_package_name(package_identity(file, file.package_path.as_deref()))
}

/// Unsanitized package identity. Empty option values count as absent.
fn package_identity<'f>(file: &'f FileDescriptor, package_path: Option<&'f str>) -> &'f str {
    if let Some(path) = package_path.filter(|p| !p.is_empty()) {
        return package_from_path(path);
    }

    match file.package.as_deref() {
        Some(package) if !package.is_empty() => package,
        _ => file_stem(&file.name),
    }
}

/// Package name encoded in a package-path option value.
fn package_from_path(path: &str) -> &str {
    if let Some((_, alias)) = path.rsplit_once(';') {
        return alias;
    }
    path.rsplit_once('/').map_or(path, |(_, last)| last)
}
