//! protoc-gen-jsonpb - serde JSON hooks for prost messages
//!
//! The plugin reads a `CodeGeneratorRequest` from protoc and emits, for every
//! requested `.proto` file, a Rust source file that implements
//! `serde::Serialize` / `serde::Deserialize` for each top-level message using
//! the canonical proto3 JSON mapping.
//!
//! - [`codegen`]: package resolution, source synthesis and validation
//! - [`generate`]: the per-request orchestrator

pub mod codegen;
pub mod generate;

pub use generate::{Generator, run};
