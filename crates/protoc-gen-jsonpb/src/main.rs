//! protoc-gen-jsonpb - protoc plugin entry point
//!
//! protoc writes a `CodeGeneratorRequest` to stdin and reads the
//! `CodeGeneratorResponse` from stdout. Diagnostics go to stderr.
//!
//! ```bash
//! protoc --jsonpb_out=out --jsonpb_opt=allow_multiple_packages foo.proto
//! ```

use anyhow::Context;
use clap::Parser;
use jsonpb_logging::{LogLevel, init_logging, level_from_env};
use jsonpb_transport::{ProtobufCodec, read_request, write_response};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "protoc-gen-jsonpb")]
#[command(author, version, about = "protoc plugin generating serde JSON hooks for prost messages", long_about = None)]
struct Cli {
    /// Read the encoded request from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    request: Option<PathBuf>,

    /// Initial log level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.or_else(level_from_env).unwrap_or(LogLevel::Warn));

    let codec = ProtobufCodec::new();
    let request = match &cli.request {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open request file: {}", path.display()))?;
            read_request(&codec, BufReader::new(file))
                .with_context(|| format!("Failed to decode request from {}", path.display()))?
        }
        None => read_request(&codec, io::stdin().lock())
            .context("Failed to decode request from stdin")?,
    };

    let response = protoc_gen_jsonpb::run(&request);

    write_response(&codec, BufWriter::new(io::stdout().lock()), &response)
        .context("Failed to write response to stdout")?;

    Ok(())
}
