//! jsonpb-transport - protoc plugin protocol layer
//!
//! This crate provides:
//! - [`PluginCodec`] trait for decoding requests and encoding responses
//! - [`ProtobufCodec`] implementation for the protobuf wire format protoc speaks
//! - [`read_request`] and [`write_response`] for the stdin/stdout exchange
//!
//! Everything protoc sends is narrowed to the [`jsonpb_core`] model on the
//! way in, and widened back to `CodeGeneratorResponse` on the way out.

mod codec;
mod envelope;

pub use codec::{PluginCodec, ProtobufCodec, TransportError, read_request, write_response};
pub use envelope::{file_from_proto, request_from_proto, response_to_proto};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{PluginCodec, ProtobufCodec, TransportError, read_request, write_response};
}
