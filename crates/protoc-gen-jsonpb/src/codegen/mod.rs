//! JSON hook generation for prost message types.
//!
//! Each requested `.proto` file becomes one Rust source file that implements
//! `serde::Serialize` and `serde::Deserialize` for every top-level message,
//! following the canonical proto3 JSON mapping.
//!
//! # Architecture
//!
//! ```text
//! FileDescriptor
//!     ↓
//!  [PackageNameResolver]  → package identifier
//!     ↓
//!  [Synthesizer]          → raw source text
//!     ↓
//!  [SourceFormatter]      → validated, canonically formatted text
//!     ↓
//! GeneratedFile (<stem>.pb.jsonpb.rs)
//! ```
//!
//! # Usage
//!
//! The generated file sits next to the prost output and is included after it:
//!
//! ```rust,ignore
//! pub mod greeting {
//!     include!(concat!(env!("OUT_DIR"), "/greeting.rs"));
//! }
//! include!(concat!(env!("OUT_DIR"), "/greeting.pb.jsonpb.rs"));
//!
//! let json = serde_json::to_string(&greeting::Greeting::default())?;
//! ```
//!
//! The prost types must implement `prost_reflect::ReflectMessage`, which
//! `prost-reflect-build` provides.

pub mod format;
pub mod naming;
pub mod resolver;
pub mod rust;

pub use format::{FormatError, RustFormatter, SourceFormatter};
pub use naming::output_file_name;
pub use resolver::{PackageNameResolver, resolve_package_name};
pub use rust::{Synthesizer, Templates};
