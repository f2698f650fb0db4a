//! Conversions between the wire envelope and the domain model

use jsonpb_core::{
    CodeGenerationRequest, CodeGenerationResponse, FileDescriptor, MessageTypeDescriptor,
};
use prost_types::FileDescriptorProto;
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

/// Features advertised back to protoc
///
/// The generated hooks delegate to reflection and never inspect field
/// presence, so proto3 `optional` needs no special handling.
const SUPPORTED_FEATURES: u64 = Feature::Proto3Optional as u64;

/// Narrow a decoded `CodeGeneratorRequest` to the domain model
pub fn request_from_proto(request: CodeGeneratorRequest) -> CodeGenerationRequest {
    CodeGenerationRequest {
        parameter: request.parameter.clone(),
        proto_file: request.proto_file.iter().map(file_from_proto).collect(),
        file_to_generate: request.file_to_generate,
    }
}

/// Narrow one `FileDescriptorProto` to the domain model
///
/// The package-path option is read from `go_package`, the one option in
/// `descriptor.proto` that carries an `import/path;alias` value.
pub fn file_from_proto(file: &FileDescriptorProto) -> FileDescriptor {
    FileDescriptor {
        name: file.name().to_string(),
        package: file.package.clone(),
        package_path: file.options.as_ref().and_then(|o| o.go_package.clone()),
        message_types: file
            .message_type
            .iter()
            .map(|message| MessageTypeDescriptor::new(message.name()))
            .collect(),
    }
}

/// Widen a domain response to `CodeGeneratorResponse`
///
/// Exactly one of `file` and `error` is populated.
pub fn response_to_proto(response: &CodeGenerationResponse) -> CodeGeneratorResponse {
    match response {
        CodeGenerationResponse::Success(files) => CodeGeneratorResponse {
            supported_features: Some(SUPPORTED_FEATURES),
            file: files
                .iter()
                .map(|file| File {
                    name: Some(file.name.clone()),
                    content: Some(file.content.clone()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
        CodeGenerationResponse::Failed(message) => CodeGeneratorResponse {
            supported_features: Some(SUPPORTED_FEATURES),
            error: Some(message.clone()),
            ..Default::default()
        },
    }
}
