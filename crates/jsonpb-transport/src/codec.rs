//! Codec trait and protobuf implementation

use crate::envelope::{request_from_proto, response_to_proto};
use jsonpb_core::{CodeGenerationRequest, CodeGenerationResponse};
use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors that can occur while talking to protoc
///
/// None of these can be reported through a response: either no request was
/// understood yet, or the response channel itself is broken.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to read request: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to write response: {0}")]
    Write(#[source] std::io::Error),
}

/// Trait for request decoding and response encoding
pub trait PluginCodec {
    /// Decode request bytes into the domain model
    fn decode_request(&self, data: &[u8]) -> Result<CodeGenerationRequest, TransportError>;

    /// Encode a response into bytes
    fn encode_response(&self, response: &CodeGenerationResponse) -> Vec<u8>;
}

/// Protobuf codec for the `plugin.proto` envelope messages
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

impl ProtobufCodec {
    /// Create a new protobuf codec
    pub fn new() -> Self {
        Self
    }
}

impl PluginCodec for ProtobufCodec {
    fn decode_request(&self, data: &[u8]) -> Result<CodeGenerationRequest, TransportError> {
        let request = CodeGeneratorRequest::decode(data)?;
        Ok(request_from_proto(request))
    }

    fn encode_response(&self, response: &CodeGenerationResponse) -> Vec<u8> {
        response_to_proto(response).encode_to_vec()
    }
}

/// Read the whole request from `reader` and decode it
pub fn read_request<C, R>(codec: &C, mut reader: R) -> Result<CodeGenerationRequest, TransportError>
where
    C: PluginCodec + ?Sized,
    R: Read,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(TransportError::Read)?;
    tracing::trace!(bytes = buf.len(), "read request");

    codec.decode_request(&buf)
}

/// Encode `response` and write it to `writer`, flushing afterwards
pub fn write_response<C, W>(
    codec: &C,
    mut writer: W,
    response: &CodeGenerationResponse,
) -> Result<(), TransportError>
where
    C: PluginCodec + ?Sized,
    W: Write,
{
    let bytes = codec.encode_response(response);
    writer.write_all(&bytes).map_err(TransportError::Write)?;
    writer.flush().map_err(TransportError::Write)?;
    tracing::trace!(bytes = bytes.len(), "wrote response");

    Ok(())
}
