//! Validation and canonical formatting of synthesized source.
//!
//! Generated text is parsed as a complete Rust file before it is emitted.
//! Text that does not parse is rejected with the parser's position; text
//! that parses is re-printed in canonical layout so output is stable no
//! matter how the templates were indented.

use std::fmt;
use thiserror::Error;

/// Source text that is not a well-formed Rust file.
///
/// `line` is 1-based, `column` is 0-based, both measured in the text that was
/// handed to the formatter. A `line` of 0 means the parser had no position,
/// as for an error at end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct FormatError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            return f.write_str(&self.message);
        }
        write!(f, "{} (line {}, column {})", self.message, self.line, self.column)
    }
}

impl From<syn::Error> for FormatError {
    fn from(err: syn::Error) -> Self {
        let start = err.span().start();
        Self {
            message: err.to_string(),
            line: start.line,
            column: start.column,
        }
    }
}

/// Validates and reformats one generated file.
pub trait SourceFormatter {
    /// Return the canonical form of `source`, or why it is not valid.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Parses with `syn` and prints with `prettyplease`.
///
/// Plain `//` comments do not survive a syntax tree, so the leading comment
/// block (the generated-code marker and source line) is carried over as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFormatter;

impl SourceFormatter for RustFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let file = syn::parse_file(source)?;
        let body = prettyplease::unparse(&file);

        let preamble = leading_comments(source);
        if preamble.is_empty() {
            return Ok(body);
        }

        let mut out = String::with_capacity(source.len());
        for line in preamble {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&body);
        Ok(out)
    }
}

/// Plain `//` comment lines at the very top of `source`.
///
/// Doc comments (`///`, `//!`) are attributes and are kept by the printer.
fn leading_comments(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim_end)
        .take_while(|line| line.starts_with("//") && !is_doc_comment(line))
        .collect()
}

fn is_doc_comment(line: &str) -> bool {
    line.starts_with("///") || line.starts_with("//!")
}
