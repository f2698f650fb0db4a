//! Rust source synthesis for JSON hooks.
//!
//! For every message type of a file the synthesized source implements
//! `serde::Serialize` and `serde::Deserialize`, delegating to
//! `prost_reflect::DynamicMessage` for the canonical proto3 JSON mapping.
//! Generic serde consumers (`serde_json::to_string`, `serde_json::from_str`,
//! containers of messages) therefore pick the hooks up automatically.
//!
//! The output is wrapped in an anonymous `const _: () = { ... };` scope. The
//! package module is aliased to `pkg` inside it, so any number of generated
//! files can be `include!`d next to `pub mod <package> { ... }` without their
//! imports colliding.

use super::naming::to_type_ident;
use jsonpb_core::{FileDescriptor, GenerateError, GenerateResult, MessageTypeDescriptor};

const HEADER_TEMPLATE: &str = r#"// Code generated by protoc-gen-jsonpb. DO NOT EDIT.
// source: {{source}}

const _: () = {
    #[allow(unused_imports)]
    use self::{{package}} as pkg;
    #[allow(unused_imports)]
    use ::prost_reflect::{DynamicMessage, ReflectMessage};
    #[allow(unused_imports)]
    use ::serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
"#;

const HOOKS_TEMPLATE: &str = r#"
    impl Serialize for pkg::{{message}} {
        fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.transcode_to_dynamic().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for pkg::{{message}} {
        fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let descriptor = Self::default().descriptor();
            DynamicMessage::deserialize(descriptor, deserializer)?
                .transcode_to::<Self>()
                .map_err(D::Error::custom)
        }
    }
"#;

const TRAILER_TEMPLATE: &str = "};\n";

/// The three text templates one file is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Templates {
    pub header: &'static str,
    pub hooks: &'static str,
    pub trailer: &'static str,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            header: HEADER_TEMPLATE,
            hooks: HOOKS_TEMPLATE,
            trailer: TRAILER_TEMPLATE,
        }
    }
}

/// Renders JSON-hook source for one file descriptor.
///
/// Built once per invocation and never mutated afterwards; rendering is pure
/// templating, so the same inputs always produce byte-identical text.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    templates: Templates,
}

impl Synthesizer {
    /// Create a synthesizer with the built-in templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a synthesizer with custom templates
    pub fn with_templates(templates: Templates) -> Self {
        Self { templates }
    }

    /// Render the source for `file` in package `package`.
    pub fn synthesize(&self, package: &str, file: &FileDescriptor) -> GenerateResult<String> {
        let synthesis_error = |reason: String| GenerateError::Synthesis {
            file: file.name.clone(),
            reason,
        };

        check_package(package).map_err(synthesis_error)?;

        let mut code = render(
            self.templates.header,
            &[("source", file.name.as_str()), ("package", package)],
        )
        .map_err(synthesis_error)?;

        for (index, message) in file.message_types.iter().enumerate() {
            code.push_str(&self.render_hooks(index, message).map_err(synthesis_error)?);
        }

        code.push_str(&render(self.templates.trailer, &[]).map_err(synthesis_error)?);

        Ok(code)
    }

    fn render_hooks(&self, index: usize, message: &MessageTypeDescriptor) -> Result<String, String> {
        if message.name.is_empty() {
            return Err(format!("message type #{index} has no name"));
        }
        let ident = to_type_ident(&message.name);
        render(self.templates.hooks, &[("message", ident.as_str())])
    }
}

/// Path-segment keywords parse after `self::` but never name a module.
const RESERVED_SEGMENTS: [&str; 4] = ["self", "super", "crate", "Self"];

fn check_package(package: &str) -> Result<(), String> {
    if RESERVED_SEGMENTS.contains(&package) {
        return Err(format!("package name {package:?} is a reserved path segment"));
    }
    Ok(())
}

/// Substitute `{{name}}` placeholders.
///
/// Fails on a placeholder with no value or an unterminated `{{`.
fn render(template: &str, values: &[(&str, &str)]) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| "unterminated placeholder in template".to_string())?;
        let name = after[..end].trim();
        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| format!("no value for template placeholder {name:?}"))?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    Ok(out)
}
