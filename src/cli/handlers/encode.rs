use crate::cli::{
    args::EncodeArgs,
    config::{open_input, open_output, read_input},
    global::GlobalArgs,
};
use base32k::{Alphabet, CodecConfig, Encoder, StreamingEncoder, wrap};
use std::io::Write;
use tracing::info;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = args.requested_mode().unwrap_or_else(|| config.default_mode());
    let width = args.wrap.unwrap_or_else(|| config.wrap());
    info!(mode = mode.as_str(), wrap = width, "encoding");

    // Streaming skips the size limit; memory use stays flat
    if args.stream {
        let alphabet = Alphabet::new();
        let mut reader = open_input(args.file.as_ref())?;
        let writer = open_output(args.output.as_ref())?;
        let mut encoder = StreamingEncoder::new(&alphabet, writer)
            .with_mode(mode)
            .with_wrap(width);
        encoder.encode(&mut reader)?;
        let mut writer = encoder.into_inner();
        writer.write_all(b"\n")?;
        writer.flush()?;
        return Ok(());
    }

    let data = read_input(args.file.as_ref(), global, config)?;
    let encoded = wrap(&Encoder::new().encode(&data, mode), width);

    let mut writer = open_output(args.output.as_ref())?;
    writer.write_all(encoded.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
